//! Reusable UI component modules.

pub mod genome_canvas;
