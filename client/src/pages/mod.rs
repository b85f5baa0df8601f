//! Page modules for top-level screens.

pub mod preview;
