#![allow(clippy::float_cmp)]

use super::*;

fn feature(start: i64, end: i64) -> GenomeFeature {
    GenomeFeature::new(start, end)
}

fn track_with(id: &str, features: Vec<GenomeFeature>) -> GenomeTrack {
    GenomeTrack { features, ..GenomeTrack::new(id) }
}

fn parse(raw: &str) -> Result<GenomeData, GenomeError> {
    Ok(serde_json::from_str(raw)?)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn track_height_defaults_to_eighteen() {
    let track = GenomeTrack::new("t");
    assert_eq!(track.effective_height(), 18.0);
}

#[test]
fn track_height_uses_explicit_value() {
    let track = GenomeTrack { height: Some(28.0), ..GenomeTrack::new("t") };
    assert_eq!(track.effective_height(), 28.0);
}

#[test]
fn track_height_rejects_non_positive_and_nan() {
    for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        let track = GenomeTrack { height: Some(bad), ..GenomeTrack::new("t") };
        assert_eq!(track.effective_height(), 18.0, "height {bad} should fall back");
    }
}

#[test]
fn track_title_prefers_name() {
    let named = GenomeTrack { name: Some("Primer candidates".into()), ..GenomeTrack::new("track-1") };
    assert_eq!(named.title(), "Primer candidates");
    assert_eq!(GenomeTrack::new("track-2").title(), "track-2");
}

#[test]
fn feature_fill_defaults() {
    let mut f = feature(1, 10);
    assert_eq!(f.fill(), "#38bdf8");
    f.color = Some("#2563eb".into());
    assert_eq!(f.fill(), "#2563eb");
}

// =============================================================
// JSON
// =============================================================

#[test]
fn deserialize_minimal() {
    let data = parse(r#"{"length": 12000, "tracks": []}"#).unwrap();
    assert_eq!(data.length, 12000);
    assert!(data.tracks.is_empty());
}

#[test]
fn deserialize_accepts_length_bp_and_ignores_extra_fields() {
    let raw = r##"{
        "id": "gene_mock",
        "name": "Mock Gene",
        "sequence": "ATGC",
        "length_bp": 480,
        "tracks": [{
            "id": "regions",
            "name": "Relative Windows",
            "features": [
                {"id": "window_A", "start": 48, "end": 96, "color": "#38bdf8"},
                {"id": "window_B", "start": 168, "end": 216, "color": "#c084fc"}
            ]
        }]
    }"##;
    let data = parse(raw).unwrap();
    assert_eq!(data.length, 480);
    assert_eq!(data.feature_count(), 2);
    let regions = &data.tracks[0];
    assert_eq!(regions.title(), "Relative Windows");
    assert_eq!(regions.height, None);
    assert_eq!(regions.features[1].id.as_deref(), Some("window_B"));
    assert_eq!(regions.features[1].label, None);
}

#[test]
fn deserialize_missing_features_defaults_to_empty() {
    let data = parse(r#"{"length": 10, "tracks": [{"id": "a"}]}"#).unwrap();
    assert!(data.tracks[0].features.is_empty());
}

#[test]
fn deserialize_rejects_missing_length() {
    let err = parse(r#"{"tracks": []}"#).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse genome JSON"));
}

#[test]
fn serialize_skips_absent_optionals() {
    let value = serde_json::to_value(feature(3, 9)).unwrap();
    assert_eq!(value, serde_json::json!({"start": 3, "end": 9}));
}

// =============================================================
// Issues
// =============================================================

#[test]
fn clean_data_has_no_issues() {
    let data = GenomeData::new(12000, vec![track_with("t", vec![feature(400, 1200), feature(1, 12000)])]);
    assert!(data.issues().is_empty());
}

#[test]
fn issues_flags_non_positive_length() {
    let data = GenomeData::new(0, vec![]);
    assert_eq!(data.issues(), vec![DataIssue::NonPositiveLength(0)]);
}

#[test]
fn issues_flags_duplicate_track_ids_once_per_repeat() {
    let data = GenomeData::new(10, vec![track_with("a", vec![]), track_with("a", vec![]), track_with("b", vec![])]);
    assert_eq!(data.issues(), vec![DataIssue::DuplicateTrackId("a".into())]);
}

#[test]
fn issues_flags_bad_feature_coordinates() {
    let data = GenomeData::new(100, vec![track_with("t", vec![feature(0, 5), feature(50, 40), feature(90, 150)])]);
    let issues = data.issues();
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[0], DataIssue::StartBeforeFirstBase { index: 0, start: 0, .. }));
    assert!(matches!(issues[1], DataIssue::EndBeforeStart { index: 1, start: 50, end: 40, .. }));
    assert!(matches!(issues[2], DataIssue::EndPastLength { index: 2, end: 150, length: 100, .. }));
}

#[test]
fn issue_messages_are_readable() {
    let issue = DataIssue::EndPastLength { track: "t".into(), index: 2, end: 150, length: 100 };
    assert_eq!(issue.to_string(), "feature 2 in track \"t\" ends at 150, past genome length 100");
}
