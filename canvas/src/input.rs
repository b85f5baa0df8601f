//! Input model: pointer buttons, input events, and the gesture reducer.
//!
//! Host events are translated into [`InputEvent`] values and fed to
//! [`reduce`], a pure function of the current gesture state and view state.
//! It never mutates anything: it returns the next gesture state, an optional
//! candidate view state for the commit path, and any pointer-capture change
//! the surface must apply. Keeping it pure lets the pan/zoom logic be tested
//! without a browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::view::{Point, ScaleBounds, ViewState, wheel_zoom};

/// Host pointer identifier (`PointerEvent.pointerId`).
pub type PointerId = i32;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
    /// Back/forward and any other extra button.
    Auxiliary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Auxiliary,
        }
    }
}

/// An input event in surface coordinates (CSS pixels from the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pointer_id: PointerId, point: Point, button: Button },
    PointerMove { pointer_id: PointerId, point: Point },
    PointerUp { pointer_id: PointerId },
    PointerCancel { pointer_id: PointerId },
    /// Wheel or trackpad scroll; positive `delta_y` scrolls down (zooms out).
    Wheel { point: Point, delta_y: f64 },
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for a primary pointer-down.
    #[default]
    Idle,
    /// Dragging the view with a captured pointer.
    Panning {
        /// The pointer that owns the capture.
        pointer_id: PointerId,
        /// Screen position of the previous event from that pointer.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

/// Pointer-capture change the surface must apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureChange {
    Acquire(PointerId),
    Release(PointerId),
}

/// Result of reducing one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: InputState,
    /// Candidate view state to commit, if the event changes the view.
    pub view: Option<ViewState>,
    pub capture: Option<CaptureChange>,
}

impl Transition {
    fn stay(state: InputState) -> Self {
        Self { state, view: None, capture: None }
    }
}

/// Reduce one input event against the current gesture and view state.
#[must_use]
pub fn reduce(state: InputState, view: ViewState, event: InputEvent, bounds: ScaleBounds) -> Transition {
    match (state, event) {
        (InputState::Idle, InputEvent::PointerDown { pointer_id, point, button: Button::Primary }) => Transition {
            state: InputState::Panning { pointer_id, last_screen: point },
            view: None,
            capture: Some(CaptureChange::Acquire(pointer_id)),
        },
        (InputState::Panning { pointer_id, last_screen }, InputEvent::PointerMove { pointer_id: id, point })
            if id == pointer_id =>
        {
            let dx = point.x - last_screen.x;
            let dy = point.y - last_screen.y;
            Transition {
                state: InputState::Panning { pointer_id, last_screen: point },
                view: Some(view.panned(dx, dy)),
                capture: None,
            }
        }
        (
            InputState::Panning { pointer_id, .. },
            InputEvent::PointerUp { pointer_id: id } | InputEvent::PointerCancel { pointer_id: id },
        ) if id == pointer_id => Transition {
            state: InputState::Idle,
            view: None,
            capture: Some(CaptureChange::Release(pointer_id)),
        },
        (state, InputEvent::Wheel { point, delta_y }) => Transition {
            state,
            view: wheel_zoom(view, point.x, delta_y, bounds),
            capture: None,
        },
        (state, _) => Transition::stay(state),
    }
}
