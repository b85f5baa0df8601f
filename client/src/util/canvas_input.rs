//! DOM event to engine input mapping.
//!
//! Positions are measured from the canvas's top-left corner as
//! `clientX - rect.left`, which stays correct while the pointer is captured
//! and outside the element.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use genome_canvas::input::{Button, InputEvent};
use genome_canvas::view::Point;

/// Client coordinates relative to an element's bounding box origin.
pub fn surface_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Pointer event phases forwarded to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Bit of `MouseEvent.buttons` set while the primary button or contact is down.
const PRIMARY_BUTTONS_BIT: u16 = 1;

/// Phase to forward for a DOM pointer event given its `buttons` mask.
///
/// A move with the primary button up is forwarded as a cancel, so a pan ends
/// even when the release happened outside the canvas without capture.
pub fn effective_phase(phase: PointerPhase, buttons: u16) -> PointerPhase {
    if phase == PointerPhase::Move && buttons & PRIMARY_BUTTONS_BIT == 0 { PointerPhase::Cancel } else { phase }
}

/// Build an engine event from already-extracted DOM fields.
pub fn pointer_input(phase: PointerPhase, pointer_id: i32, point: Point, button: i16) -> InputEvent {
    match phase {
        PointerPhase::Down => InputEvent::PointerDown { pointer_id, point, button: Button::from_dom(button) },
        PointerPhase::Move => InputEvent::PointerMove { pointer_id, point },
        PointerPhase::Up => InputEvent::PointerUp { pointer_id },
        PointerPhase::Cancel => InputEvent::PointerCancel { pointer_id },
    }
}

#[cfg(feature = "csr")]
fn element_point(element: &web_sys::Element, client_x: i32, client_y: i32) -> Point {
    let rect = element.get_bounding_client_rect();
    surface_point(f64::from(client_x), f64::from(client_y), rect.left(), rect.top())
}

#[cfg(feature = "csr")]
pub fn pointer_event_input(
    phase: PointerPhase,
    ev: &leptos::ev::PointerEvent,
    canvas: &web_sys::HtmlCanvasElement,
) -> InputEvent {
    let point = element_point(canvas, ev.client_x(), ev.client_y());
    pointer_input(effective_phase(phase, ev.buttons()), ev.pointer_id(), point, ev.button())
}

#[cfg(feature = "csr")]
pub fn wheel_event_input(ev: &leptos::ev::WheelEvent, canvas: &web_sys::HtmlCanvasElement) -> InputEvent {
    InputEvent::Wheel { point: element_point(canvas, ev.client_x(), ev.client_y()), delta_y: ev.delta_y() }
}
