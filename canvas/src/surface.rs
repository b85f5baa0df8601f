//! Render-target sizing and transforms.
//!
//! Nothing here touches the DOM. [`crate::engine::Engine::render`] asks
//! [`TargetConfig`] how big the backing buffer should be and applies the
//! [`Affine`] matrices to the 2D context.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::view::ViewState;

/// Logical surface size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, device_pixel_ratio: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport. Negative or non-finite sizes become 0; a non-finite
    /// or non-positive ratio becomes 1.
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: sanitize_len(width),
            height: sanitize_len(height),
            device_pixel_ratio: if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
                device_pixel_ratio
            } else {
                1.0
            },
        }
    }
}

fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Backing-buffer and CSS sizes for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetConfig {
    pub backing_width: u32,
    pub backing_height: u32,
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl TargetConfig {
    /// Backing buffer is `max(1, floor(logical * dpr))` per axis.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let viewport = Viewport::new(viewport.width, viewport.height, viewport.device_pixel_ratio);
        let dpr = viewport.device_pixel_ratio;
        Self {
            backing_width: backing_len(viewport.width, dpr),
            backing_height: backing_len(viewport.height, dpr),
            css_width: viewport.width,
            css_height: viewport.height,
            device_pixel_ratio: dpr,
        }
    }

    /// CSS `width` property value, e.g. `"800px"`.
    #[must_use]
    pub fn css_width_style(&self) -> String {
        format!("{}px", self.css_width)
    }

    /// CSS `height` property value.
    #[must_use]
    pub fn css_height_style(&self) -> String {
        format!("{}px", self.css_height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_len(logical: f64, dpr: f64) -> u32 {
    let px = (logical * dpr).floor();
    if px.is_finite() && px >= 1.0 { px.min(f64::from(u32::MAX)) as u32 } else { 1 }
}

/// 2D affine matrix in `CanvasRenderingContext2d::set_transform` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    /// Density-only transform `(dpr, 0, 0, dpr, 0, 0)`.
    #[must_use]
    pub fn density(dpr: f64) -> Self {
        Self { a: dpr, b: 0.0, c: 0.0, d: dpr, e: 0.0, f: 0.0 }
    }

    /// Density composed with the view: translate by the offsets, then scale x.
    #[must_use]
    pub fn frame(dpr: f64, view: ViewState) -> Self {
        Self {
            a: dpr * view.scale,
            b: 0.0,
            c: 0.0,
            d: dpr,
            e: dpr * view.offset_x,
            f: dpr * view.offset_y,
        }
    }
}
