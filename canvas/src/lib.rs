//! Genome canvas: base-pair mapping, view state and the interactive canvas surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It maps
//! genomic coordinates to screen pixels under pan and zoom, owns the single
//! commit path for view-state changes (controlled or uncontrolled), turns
//! pointer and wheel input into view updates, and paints frames at the
//! device pixel ratio. The host (the Leptos client) only forwards DOM events
//! and hands in genome data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas engine and testable [`engine::EngineCore`] |
//! | [`genome`] | Genome, track and feature data plus diagnostics |
//! | [`coords`] | Base-pair to pixel mapping |
//! | [`view`] | View state, scale bounds, pan and fixed-point zoom |
//! | [`owner`] | Controlled / uncontrolled view-state ownership |
//! | [`input`] | Input event types and the gesture reducer |
//! | [`surface`] | Viewport, backing-buffer sizing and frame transforms |
//! | [`layout`] | Screen-space geometry of the default track painter |
//! | [`render`] | Default track painter |
//! | [`config`] | Canvas configuration |
//! | [`consts`] | Shared numeric constants (zoom limits, default sizes, etc.) |

pub mod config;
pub mod consts;
pub mod coords;
pub mod engine;
pub mod genome;
pub mod input;
pub mod layout;
pub mod owner;
pub mod render;
pub mod surface;
pub mod view;
