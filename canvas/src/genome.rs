//! Genome data model: the tracks and features drawn on the canvas.
//!
//! `GenomeData` is an immutable snapshot supplied by the caller (usually
//! deserialized from the primer-design response). The core never rejects
//! data: out-of-range coordinates are drawn off-canvas or skipped, and
//! [`GenomeData::issues`] reports them so the host can log data-quality
//! problems without failing the render.

#[cfg(test)]
#[path = "genome_test.rs"]
mod genome_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FEATURE_COLOR, DEFAULT_TRACK_HEIGHT};

/// Errors from decoding genome data out of a host payload.
#[derive(Debug, thiserror::Error)]
pub enum GenomeError {
    /// The input was not a valid `GenomeData` JSON document.
    #[error("failed to parse genome JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A labeled interval on the genome, 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First base of the feature (expected `>= 1`).
    pub start: i64,
    /// Last base of the feature (expected `>= start`).
    pub end: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// CSS color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl GenomeFeature {
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self { id: None, start, end, label: None, color: None }
    }

    /// Fill color, falling back to the default feature color.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_FEATURE_COLOR)
    }
}

/// A horizontal lane of features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeTrack {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub features: Vec<GenomeFeature>,
}

impl GenomeTrack {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None, height: None, features: Vec::new() }
    }

    /// Effective lane height. Missing, non-finite, or non-positive heights use the default.
    #[must_use]
    pub fn effective_height(&self) -> f64 {
        match self.height {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => DEFAULT_TRACK_HEIGHT,
        }
    }

    /// Display title: the name when present, otherwise the id.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The full genome snapshot handed to the canvas for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeData {
    /// Genome length in base pairs. The primer-design response names this `length_bp`.
    #[serde(alias = "length_bp")]
    pub length: i64,
    #[serde(default)]
    pub tracks: Vec<GenomeTrack>,
}

/// A data-quality problem found by [`GenomeData::issues`]. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataIssue {
    #[error("genome length {0} is not positive")]
    NonPositiveLength(i64),
    #[error("track id {0:?} appears more than once")]
    DuplicateTrackId(String),
    #[error("feature {index} in track {track:?} starts at {start}, before base 1")]
    StartBeforeFirstBase { track: String, index: usize, start: i64 },
    #[error("feature {index} in track {track:?} ends at {end}, before its start {start}")]
    EndBeforeStart { track: String, index: usize, start: i64, end: i64 },
    #[error("feature {index} in track {track:?} ends at {end}, past genome length {length}")]
    EndPastLength { track: String, index: usize, end: i64, length: i64 },
}

impl GenomeData {
    #[must_use]
    pub fn new(length: i64, tracks: Vec<GenomeTrack>) -> Self {
        Self { length, tracks }
    }

    /// Total number of features across all tracks.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.tracks.iter().map(|t| t.features.len()).sum()
    }

    /// Report every data-quality problem without rejecting the data.
    #[must_use]
    pub fn issues(&self) -> Vec<DataIssue> {
        let mut issues = Vec::new();
        if self.length <= 0 {
            issues.push(DataIssue::NonPositiveLength(self.length));
        }

        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(track.id.as_str()) {
                issues.push(DataIssue::DuplicateTrackId(track.id.clone()));
            }
            for (index, feature) in track.features.iter().enumerate() {
                if feature.start < 1 {
                    issues.push(DataIssue::StartBeforeFirstBase {
                        track: track.id.clone(),
                        index,
                        start: feature.start,
                    });
                }
                if feature.end < feature.start {
                    issues.push(DataIssue::EndBeforeStart {
                        track: track.id.clone(),
                        index,
                        start: feature.start,
                        end: feature.end,
                    });
                } else if self.length > 0 && feature.end > self.length {
                    issues.push(DataIssue::EndPastLength {
                        track: track.id.clone(),
                        index,
                        end: feature.end,
                        length: self.length,
                    });
                }
            }
        }
        issues
    }
}
