#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BUTTON_ZOOM_STEP, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, WHEEL_ZOOM_INTENSITY};

/// A point in screen space (CSS pixels, relative to the canvas top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom transform applied to the genome.
///
/// `offset_x` / `offset_y` are in CSS pixels. `scale` zooms the horizontal
/// (base-pair) axis only; tracks stack vertically at a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self { scale, offset_x, offset_y }
    }

    /// Convert a screen x (CSS pixels) to the unzoomed world x under it.
    #[must_use]
    pub fn screen_to_world_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.offset_x) / self.scale
    }

    /// Convert an unzoomed world x to screen x (CSS pixels).
    #[must_use]
    pub fn world_to_screen_x(&self, world_x: f64) -> f64 {
        world_x * self.scale + self.offset_x
    }

    /// Shift the view by a screen-space delta.
    #[must_use]
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        Self { offset_x: self.offset_x + dx, offset_y: self.offset_y + dy, ..self }
    }

    /// Change scale while keeping the world x under `anchor_x` on screen.
    #[must_use]
    pub fn zoomed_about(self, anchor_x: f64, next_scale: f64) -> Self {
        let world_x = self.screen_to_world_x(anchor_x);
        Self { scale: next_scale, offset_x: anchor_x - world_x * next_scale, ..self }
    }

    /// Replace the scale, leaving offsets untouched.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

/// Inclusive `[min, max]` range every committed scale is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_SCALE, max: DEFAULT_MAX_SCALE }
    }
}

impl ScaleBounds {
    /// Build bounds, replacing non-finite or non-positive limits with the
    /// defaults and reordering swapped limits.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() && min > 0.0 { min } else { DEFAULT_MIN_SCALE };
        let max = if max.is_finite() && max > 0.0 { max } else { DEFAULT_MAX_SCALE };
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp a scale into range. NaN maps to 1.0 clamped into range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        let scale = if scale.is_nan() { 1.0 } else { scale };
        scale.clamp(self.min, self.max)
    }
}

/// Direction of a toolbar zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

/// One toolbar zoom step: multiply or divide the scale by the button step,
/// clamped. Offsets are left alone.
#[must_use]
pub fn step_zoom(view: ViewState, step: ZoomStep, bounds: ScaleBounds) -> ViewState {
    let scale = match step {
        ZoomStep::In => view.scale * BUTTON_ZOOM_STEP,
        ZoomStep::Out => view.scale / BUTTON_ZOOM_STEP,
    };
    view.with_scale(bounds.clamp(scale))
}

/// Scale after one wheel step of `delta_y` pixels (positive scrolls down / zooms out).
#[must_use]
pub fn wheel_scale(current: f64, delta_y: f64, bounds: ScaleBounds) -> f64 {
    bounds.clamp(current * (-delta_y * WHEEL_ZOOM_INTENSITY).exp())
}

/// Fixed-point wheel zoom about `pointer_x`.
///
/// Returns `None` when the wheel step cannot change anything (`delta_y` is
/// zero or not finite). At a clamp limit the returned view keeps the clamped
/// scale and the offset that holds the pointer's world x in place.
#[must_use]
pub fn wheel_zoom(view: ViewState, pointer_x: f64, delta_y: f64, bounds: ScaleBounds) -> Option<ViewState> {
    if delta_y == 0.0 || !delta_y.is_finite() || !pointer_x.is_finite() {
        return None;
    }
    let current = if view.scale.is_finite() && view.scale > 0.0 { view.scale } else { bounds.clamp(view.scale) };
    let anchored = ViewState { scale: current, ..view };
    Some(anchored.zoomed_about(pointer_x, wheel_scale(current, delta_y, bounds)))
}
