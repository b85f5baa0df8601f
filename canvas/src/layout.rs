//! Screen-space geometry for the default genome track painter.
//!
//! [`layout_genome`] is pure: it turns a genome, a view state and a viewport
//! into rectangles and positions in CSS pixels. [`crate::render`] only walks
//! the result and issues 2D calls, so every number drawn is testable here.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{FEATURE_CORNER_RADIUS_PX, MIN_FEATURE_WIDTH_PX};
use crate::coords::BpScale;
use crate::genome::GenomeData;
use crate::surface::Viewport;
use crate::view::ViewState;

/// Gap between a feature box and its label pill, on both axes.
pub const LABEL_OFFSET_PX: f64 = 6.0;
/// Horizontal text padding inside a label pill.
pub const LABEL_PADDING_X: f64 = 6.0;
/// Vertical padding added to the label line height.
pub const LABEL_PADDING_Y: f64 = 3.0;
/// Label line height before padding.
pub const LABEL_LINE_HEIGHT: f64 = 16.0;
/// Text baseline offset from the top of a label pill.
pub const LABEL_TEXT_OFFSET_Y: f64 = 12.0;

/// Fixed page geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayoutOptions {
    pub padding_x: f64,
    pub header_y: f64,
    pub track_start_y: f64,
    pub track_gap: f64,
    pub grid_divisions: u32,
    pub min_feature_width: f64,
}

impl Default for TrackLayoutOptions {
    fn default() -> Self {
        Self {
            padding_x: 20.0,
            header_y: 28.0,
            track_start_y: 64.0,
            track_gap: 28.0,
            grid_divisions: 10,
            min_feature_width: MIN_FEATURE_WIDTH_PX,
        }
    }
}

/// One feature box in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub color: String,
    pub label: Option<String>,
}

impl FeatureRect {
    /// Whether any part of the box falls inside `[0, viewport_width]`.
    #[must_use]
    pub fn is_visible(&self, viewport_width: f64) -> bool {
        self.x + self.width >= 0.0 && self.x <= viewport_width
    }

    /// Top-left corner of the label pill.
    #[must_use]
    pub fn label_origin(&self) -> (f64, f64) {
        (self.x + LABEL_OFFSET_PX, self.y + self.height + LABEL_OFFSET_PX)
    }
}

/// One track lane in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackBand {
    pub title: String,
    /// Top of the feature boxes.
    pub y: f64,
    pub height: f64,
    /// y of the horizontal guide line through the middle of the lane.
    pub baseline_y: f64,
    /// Visible features only.
    pub features: Vec<FeatureRect>,
}

impl TrackBand {
    /// y of the track title text.
    #[must_use]
    pub fn title_y(&self) -> f64 {
        self.y - 10.0
    }
}

/// Everything the default painter draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GenomeLayout {
    pub length: i64,
    pub padding_x: f64,
    pub header_y: f64,
    pub viewport: Viewport,
    pub grid_xs: Vec<f64>,
    pub grid_top: f64,
    pub grid_bottom: f64,
    pub tracks: Vec<TrackBand>,
}

impl GenomeLayout {
    /// Right end of the track guide lines.
    #[must_use]
    pub fn guide_end_x(&self) -> f64 {
        self.viewport.width - self.padding_x
    }
}

/// Lay out the header grid, track lanes and feature boxes.
///
/// Feature x positions follow the view: `padding + offset_x + bp_to_x(start) * scale`.
/// Track y positions follow `offset_y`. Grid lines and the header are fixed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_genome(data: &GenomeData, view: ViewState, viewport: Viewport, opts: &TrackLayoutOptions) -> GenomeLayout {
    let bp = BpScale::new(data.length, viewport.width, opts.padding_x);

    let divisions = opts.grid_divisions.max(1);
    let step = bp.drawable_width() / f64::from(divisions);
    let grid_xs = (0..=divisions).map(|i| opts.padding_x + f64::from(i) * step).collect();

    let mut tracks = Vec::with_capacity(data.tracks.len());
    let mut y = opts.track_start_y + view.offset_y;
    for track in &data.tracks {
        let height = track.effective_height();
        let radius = FEATURE_CORNER_RADIUS_PX.min(height / 2.0);
        let features = track
            .features
            .iter()
            .map(|f| {
                let (start, end) = (f.start as f64, f.end as f64);
                FeatureRect {
                    x: opts.padding_x + view.world_to_screen_x(bp.bp_to_x(start)),
                    y,
                    width: (bp.span_to_width(start, end, 0.0) * view.scale).max(opts.min_feature_width),
                    height,
                    radius,
                    color: f.fill().to_owned(),
                    label: f.label.clone(),
                }
            })
            .filter(|rect| rect.is_visible(viewport.width))
            .collect();

        tracks.push(TrackBand { title: track.title().to_owned(), y, height, baseline_y: y + height / 2.0, features });
        y += height + opts.track_gap;
    }

    GenomeLayout {
        length: data.length,
        padding_x: opts.padding_x,
        header_y: opts.header_y,
        viewport,
        grid_xs,
        grid_top: opts.track_start_y - 16.0,
        grid_bottom: viewport.height - 20.0,
        tracks,
    }
}

/// Format a base-pair count with comma thousands separators.
#[must_use]
pub fn format_bp(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
