//! Shared numeric constants for the genome canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default logical canvas width in CSS pixels.
pub const DEFAULT_WIDTH_PX: f64 = 800.0;

/// Default logical canvas height in CSS pixels.
pub const DEFAULT_HEIGHT_PX: f64 = 200.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower bound applied to every committed scale unless configured otherwise.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Upper bound applied to every committed scale unless configured otherwise.
pub const DEFAULT_MAX_SCALE: f64 = 50.0;

/// Exponential wheel zoom factor per pixel of `deltaY`.
pub const WHEEL_ZOOM_INTENSITY: f64 = 0.0015;

/// Multiplier used by the zoom-in / zoom-out buttons.
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

// ── Tracks ──────────────────────────────────────────────────────

/// Height of a track that does not specify one.
pub const DEFAULT_TRACK_HEIGHT: f64 = 18.0;

/// Fill used for features without an explicit color.
pub const DEFAULT_FEATURE_COLOR: &str = "#38bdf8";

/// Narrowest on-screen feature width, so single-base features stay visible.
pub const MIN_FEATURE_WIDTH_PX: f64 = 2.0;

/// Corner radius cap for feature boxes and label pills.
pub const FEATURE_CORNER_RADIUS_PX: f64 = 6.0;
