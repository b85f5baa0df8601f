//! Canvas configuration.
//!
//! Hosts build a [`CanvasConfig`] from component props. It also deserializes
//! from a partial camelCase object where every key is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT_PX, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_WIDTH_PX};
use crate::surface::Viewport;
use crate::view::{ScaleBounds, ViewState};

/// Surface size, zoom limits and the uncontrolled starting view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_view_state: ViewState,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_PX,
            height: DEFAULT_HEIGHT_PX,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            initial_view_state: ViewState::default(),
        }
    }
}

impl CanvasConfig {
    /// Normalized scale limits.
    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds::new(self.min_scale, self.max_scale)
    }

    /// Logical viewport at the given device pixel ratio.
    #[must_use]
    pub fn viewport(&self, device_pixel_ratio: f64) -> Viewport {
        Viewport::new(self.width, self.height, device_pixel_ratio)
    }
}
