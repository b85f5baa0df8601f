#![allow(clippy::float_cmp)]

use super::*;
use crate::genome::{GenomeFeature, GenomeTrack};

const EPSILON: f64 = 1e-9;

fn feature(start: i64, end: i64, label: &str, color: &str) -> GenomeFeature {
    GenomeFeature {
        id: None,
        start,
        end,
        label: Some(label.to_owned()),
        color: Some(color.to_owned()),
    }
}

fn sample() -> GenomeData {
    let mut primers = GenomeTrack::new("track-1");
    primers.name = Some("Primer candidates".to_owned());
    primers.height = Some(28.0);
    primers.features = vec![
        feature(400, 1200, "P-01", "#2563eb"),
        feature(1800, 2600, "P-02", "#0ea5e9"),
        feature(3200, 4300, "P-03", "#22c55e"),
    ];

    let mut target = GenomeTrack::new("track-2");
    target.features = vec![feature(1500, 5200, "Amplicon", "#f97316")];

    GenomeData::new(12000, vec![primers, target])
}

fn viewport() -> Viewport {
    Viewport::new(900.0, 240.0, 1.0)
}

// =============================================================
// Features
// =============================================================

#[test]
fn zero_padding_places_feature_at_thirty() {
    let data = GenomeData::new(12000, vec![{
        let mut t = GenomeTrack::new("t");
        t.features = vec![GenomeFeature::new(400, 1200)];
        t
    }]);
    let opts = TrackLayoutOptions { padding_x: 0.0, ..TrackLayoutOptions::default() };
    let layout = layout_genome(&data, ViewState::default(), viewport(), &opts);
    let rect = &layout.tracks[0].features[0];
    assert!((rect.x - 30.0).abs() < EPSILON);
    assert!((rect.width - 60.0).abs() < EPSILON);
}

#[test]
fn default_padding_offsets_features() {
    let layout = layout_genome(&sample(), ViewState::default(), viewport(), &TrackLayoutOptions::default());
    let rect = &layout.tracks[0].features[0];
    assert!((rect.x - (20.0 + 400.0 / 12000.0 * 860.0)).abs() < EPSILON);
    assert_eq!(rect.color, "#2563eb");
    assert_eq!(rect.label.as_deref(), Some("P-01"));
}

#[test]
fn features_follow_pan_and_zoom() {
    let view = ViewState::new(2.0, -15.0, 0.0);
    let layout = layout_genome(&sample(), view, viewport(), &TrackLayoutOptions::default());
    let rect = &layout.tracks[0].features[0];
    let base = 400.0 / 12000.0 * 860.0;
    assert!((rect.x - (20.0 - 15.0 + base * 2.0)).abs() < EPSILON);
    assert!((rect.width - 800.0 / 12000.0 * 860.0 * 2.0).abs() < EPSILON);
}

#[test]
fn tiny_feature_gets_minimum_width() {
    let data = GenomeData::new(12000, vec![{
        let mut t = GenomeTrack::new("t");
        t.features = vec![GenomeFeature::new(500, 500)];
        t
    }]);
    let layout = layout_genome(&data, ViewState::default(), viewport(), &TrackLayoutOptions::default());
    assert_eq!(layout.tracks[0].features[0].width, 2.0);
}

#[test]
fn offscreen_features_are_skipped() {
    let view = ViewState::new(1.0, -5000.0, 0.0);
    let layout = layout_genome(&sample(), view, viewport(), &TrackLayoutOptions::default());
    assert!(layout.tracks.iter().all(|t| t.features.is_empty()));
    assert_eq!(layout.tracks.len(), 2);
}

#[test]
fn feature_past_right_edge_is_skipped() {
    let view = ViewState::new(50.0, 0.0, 0.0);
    let layout = layout_genome(&sample(), view, viewport(), &TrackLayoutOptions::default());
    // At 50x only features near the genome start stay on screen.
    assert!(layout.tracks[0].features.is_empty());
}

#[test]
fn label_origin_sits_below_and_right() {
    let rect = FeatureRect {
        x: 100.0,
        y: 64.0,
        width: 40.0,
        height: 28.0,
        radius: 6.0,
        color: "#000".to_owned(),
        label: None,
    };
    assert_eq!(rect.label_origin(), (106.0, 98.0));
}

#[test]
fn visibility_is_inclusive_at_edges() {
    let mut rect = FeatureRect {
        x: -10.0,
        y: 0.0,
        width: 10.0,
        height: 1.0,
        radius: 0.0,
        color: String::new(),
        label: None,
    };
    assert!(rect.is_visible(100.0));
    rect.x = 100.0;
    assert!(rect.is_visible(100.0));
    rect.x = 100.5;
    assert!(!rect.is_visible(100.0));
}

// =============================================================
// Tracks
// =============================================================

#[test]
fn tracks_stack_with_gap() {
    let layout = layout_genome(&sample(), ViewState::default(), viewport(), &TrackLayoutOptions::default());
    let first = &layout.tracks[0];
    let second = &layout.tracks[1];
    assert_eq!(first.y, 64.0);
    assert_eq!(first.height, 28.0);
    assert_eq!(first.baseline_y, 78.0);
    assert_eq!(first.title_y(), 54.0);
    assert_eq!(first.title, "Primer candidates");
    assert_eq!(second.y, 120.0);
    assert_eq!(second.height, 18.0);
    assert_eq!(second.baseline_y, 129.0);
    assert_eq!(second.title, "track-2");
}

#[test]
fn corner_radius_is_capped_by_half_height() {
    let mut data = sample();
    data.tracks[1].height = Some(8.0);
    let layout = layout_genome(&data, ViewState::default(), viewport(), &TrackLayoutOptions::default());
    assert_eq!(layout.tracks[0].features[0].radius, 6.0);
    assert_eq!(layout.tracks[1].features[0].radius, 4.0);
}

#[test]
fn vertical_offset_moves_tracks_only() {
    let view = ViewState::new(1.0, 0.0, 10.0);
    let layout = layout_genome(&sample(), view, viewport(), &TrackLayoutOptions::default());
    assert_eq!(layout.tracks[0].y, 74.0);
    assert_eq!(layout.grid_top, 48.0);
    assert_eq!(layout.header_y, 28.0);
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_spans_padded_width() {
    let layout = layout_genome(&sample(), ViewState::default(), viewport(), &TrackLayoutOptions::default());
    assert_eq!(layout.grid_xs.len(), 11);
    assert_eq!(layout.grid_xs[0], 20.0);
    assert!((layout.grid_xs[10] - 880.0).abs() < EPSILON);
    assert_eq!(layout.grid_top, 48.0);
    assert_eq!(layout.grid_bottom, 220.0);
    assert_eq!(layout.guide_end_x(), 880.0);
}

#[test]
fn degenerate_length_still_lays_out() {
    let mut data = sample();
    data.length = 0;
    let layout = layout_genome(&data, ViewState::default(), viewport(), &TrackLayoutOptions::default());
    for track in &layout.tracks {
        for rect in &track.features {
            assert!(rect.x.is_finite());
            assert!(rect.width >= 2.0);
        }
    }
}

// =============================================================
// format_bp
// =============================================================

#[test]
fn format_bp_groups_thousands() {
    assert_eq!(format_bp(0), "0");
    assert_eq!(format_bp(999), "999");
    assert_eq!(format_bp(12000), "12,000");
    assert_eq!(format_bp(1_234_567), "1,234,567");
    assert_eq!(format_bp(-1500), "-1,500");
}
