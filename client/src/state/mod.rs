//! Client-side state shared through signals.

pub mod genome;
pub mod view_store;
