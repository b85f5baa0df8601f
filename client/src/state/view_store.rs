//! Page-level view state for the controlled canvas.
//!
//! The preview page owns the canvas view state and hands it to
//! `GenomeCanvas` as a controlled signal. Toolbar buttons and canvas gestures
//! both land here. Button steps use the same `step_zoom` as the engine, and
//! the page passes `bounds` to the canvas so both clamp alike.

#[cfg(test)]
#[path = "view_store_test.rs"]
mod view_store_test;

use genome_canvas::view::{ScaleBounds, ViewState, ZoomStep, step_zoom};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewStore {
    pub view: ViewState,
    pub bounds: ScaleBounds,
    initial: ViewState,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(ViewState::default(), ScaleBounds::default())
    }
}

impl ViewStore {
    pub fn new(initial: ViewState, bounds: ScaleBounds) -> Self {
        Self { view: initial, bounds, initial }
    }

    /// Accept a view state proposed by the canvas.
    pub fn set(&mut self, next: ViewState) {
        self.view = next;
    }

    pub fn zoom_in(&mut self) {
        self.view = step_zoom(self.view, ZoomStep::In, self.bounds);
    }

    pub fn zoom_out(&mut self) {
        self.view = step_zoom(self.view, ZoomStep::Out, self.bounds);
    }

    pub fn reset(&mut self) {
        self.view = self.initial;
    }

    /// Zoom readout such as `"1.20x"`.
    pub fn zoom_label(&self) -> String {
        format!("{:.2}x", self.view.scale)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.view.scale < self.bounds.max()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.view.scale > self.bounds.min()
    }
}
