//! Leptos front-end for the genome canvas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and document metadata |
//! | [`components`] | `GenomeCanvas`, the bridge to the imperative engine |
//! | [`pages`] | The genome preview screen |
//! | [`state`] | View store and genome sources |
//! | [`util`] | DOM event to engine input mapping |

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
