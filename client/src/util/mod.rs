//! Small helpers shared by components.

pub mod canvas_input;
