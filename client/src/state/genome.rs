//! Genome sources for the preview page.
//!
//! The primer-design service answers with `{"genome": {...}}` where the
//! genome carries `length_bp` plus extra metadata. [`parse_design_response`]
//! keeps only what the canvas draws. The bundled sample is stored in that
//! same response shape.

#[cfg(test)]
#[path = "genome_test.rs"]
mod genome_test;

use genome_canvas::genome::{GenomeData, GenomeError};
use serde::Deserialize;

const SAMPLE_DESIGN_RESPONSE: &str = include_str!("sample_design.json");

#[derive(Debug, Deserialize)]
struct DesignResponse {
    genome: GenomeData,
}

/// Extract the genome from a primer-design response body.
///
/// # Errors
///
/// Returns [`GenomeError::Json`] when the body is not a design response.
pub fn parse_design_response(raw: &str) -> Result<GenomeData, GenomeError> {
    let response: DesignResponse = serde_json::from_str(raw)?;
    Ok(response.genome)
}

/// Demo genome shown before any design has run.
///
/// # Errors
///
/// Returns [`GenomeError::Json`] if the bundled response is malformed.
pub fn sample_genome() -> Result<GenomeData, GenomeError> {
    parse_design_response(SAMPLE_DESIGN_RESPONSE)
}
