//! Rendering: the default genome track painter.
//!
//! This module and [`crate::engine::Engine::render`] are the only places that
//! touch [`web_sys::CanvasRenderingContext2d`]. Geometry comes from
//! [`crate::layout`]; this file only turns it into 2D calls. It never mutates
//! engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::{DrawCallback, RenderState, set_transform};
use crate::layout::{
    FeatureRect, GenomeLayout, LABEL_LINE_HEIGHT, LABEL_PADDING_X, LABEL_PADDING_Y, LABEL_TEXT_OFFSET_Y,
    TrackBand, TrackLayoutOptions, format_bp, layout_genome,
};
use crate::surface::Affine;

const BACKGROUND: &str = "#f8fafc";
const TITLE_COLOR: &str = "#0f172a";
const SUBTITLE_COLOR: &str = "#475569";
const GRID_COLOR: &str = "#e2e8f0";
const TRACK_TITLE_COLOR: &str = "#64748b";
const TRACK_GUIDE_COLOR: &str = "#e5e7eb";
const LABEL_FILL: &str = "#ffffff";

const TITLE_FONT: &str = "600 14px ui-sans-serif, system-ui";
const BODY_FONT: &str = "12px ui-sans-serif, system-ui";
const LABEL_FONT: &str = "600 11px ui-sans-serif, system-ui";

/// The default painter as a [`DrawCallback`].
#[must_use]
pub fn genome_track_painter() -> DrawCallback {
    Rc::new(draw_genome_tracks)
}

/// Draw the genome header, grid, and tracks in screen space.
///
/// Resets to the density-only transform first so text and rounded corners
/// are not stretched by the horizontal zoom; pan and zoom are applied through
/// the layout instead. Does nothing when no genome is loaded.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_genome_tracks(
    ctx: &CanvasRenderingContext2d,
    _canvas: &HtmlCanvasElement,
    state: &RenderState<'_>,
) -> Result<(), JsValue> {
    let Some(data) = state.data else {
        return Ok(());
    };
    let viewport = state.viewport;

    set_transform(ctx, Affine::density(viewport.device_pixel_ratio))?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    let layout = layout_genome(data, state.view_state, viewport, &TrackLayoutOptions::default());
    draw_header(ctx, &layout)?;
    draw_grid(ctx, &layout);
    for track in &layout.tracks {
        draw_track(ctx, &layout, track)?;
    }
    Ok(())
}

fn draw_header(ctx: &CanvasRenderingContext2d, layout: &GenomeLayout) -> Result<(), JsValue> {
    ctx.set_fill_style_str(TITLE_COLOR);
    ctx.set_font(TITLE_FONT);
    ctx.fill_text("Genome length", layout.padding_x, layout.header_y - 6.0)?;

    ctx.set_fill_style_str(SUBTITLE_COLOR);
    ctx.set_font(BODY_FONT);
    ctx.fill_text(&format!("{} bp", format_bp(layout.length)), layout.padding_x, layout.header_y + 10.0)
}

fn draw_grid(ctx: &CanvasRenderingContext2d, layout: &GenomeLayout) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for &x in &layout.grid_xs {
        ctx.begin_path();
        ctx.move_to(x, layout.grid_top);
        ctx.line_to(x, layout.grid_bottom);
        ctx.stroke();
    }
}

fn draw_track(ctx: &CanvasRenderingContext2d, layout: &GenomeLayout, track: &TrackBand) -> Result<(), JsValue> {
    ctx.set_fill_style_str(TRACK_TITLE_COLOR);
    ctx.set_font(BODY_FONT);
    ctx.fill_text(&track.title, layout.padding_x, track.title_y())?;

    ctx.set_stroke_style_str(TRACK_GUIDE_COLOR);
    ctx.begin_path();
    ctx.move_to(layout.padding_x, track.baseline_y);
    ctx.line_to(layout.guide_end_x(), track.baseline_y);
    ctx.stroke();

    for rect in &track.features {
        ctx.set_fill_style_str(&rect.color);
        rounded_rect(ctx, rect.x, rect.y, rect.width, rect.height, rect.radius)?;
        ctx.fill();
        if let Some(label) = &rect.label {
            draw_label(ctx, rect, label)?;
        }
    }
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, rect: &FeatureRect, label: &str) -> Result<(), JsValue> {
    ctx.set_font(LABEL_FONT);
    let text_width = ctx.measure_text(label)?.width();
    let (x, y) = rect.label_origin();
    let width = text_width + LABEL_PADDING_X * 2.0;
    let height = LABEL_LINE_HEIGHT + LABEL_PADDING_Y;

    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_stroke_style_str(GRID_COLOR);
    rounded_rect(ctx, x, y, width, height, 6.0)?;
    ctx.fill();
    ctx.stroke();

    ctx.set_fill_style_str(TITLE_COLOR);
    ctx.fill_text(label, x + LABEL_PADDING_X, y + LABEL_TEXT_OFFSET_Y)
}

/// Trace a rounded rectangle path. The radius is capped at half the shorter side.
fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
