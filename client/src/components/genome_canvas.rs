//! Bridge component between Leptos state and the imperative `genome_canvas::Engine`.
//!
//! The engine owns gesture handling, the commit path and painting. This host
//! forwards DOM pointer and wheel events, pushes genome, size, scale-bound
//! and painter changes into the engine, and re-renders. The engine's frame
//! key keeps redundant renders free.
//!
//! Passing `view_state` makes the canvas controlled: gestures only report
//! through `on_view_state_change` and the caller decides what is shown.

use std::sync::Arc;

use leptos::prelude::*;

use genome_canvas::consts::{DEFAULT_HEIGHT_PX, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_WIDTH_PX};
use genome_canvas::engine::DrawCallback;
use genome_canvas::genome::GenomeData;
use genome_canvas::view::ViewState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use genome_canvas::config::CanvasConfig;
#[cfg(feature = "csr")]
use genome_canvas::engine::{Engine, EngineCore};
#[cfg(feature = "csr")]
use genome_canvas::owner::{ChangeListener, ViewStateSource, owner_for};
#[cfg(feature = "csr")]
use genome_canvas::render::genome_track_painter;
#[cfg(feature = "csr")]
use genome_canvas::view::ScaleBounds;

#[cfg(feature = "csr")]
use crate::util::canvas_input::{PointerPhase, pointer_event_input, wheel_event_input};

#[cfg(feature = "csr")]
fn render_now(engine: &mut Engine) {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    engine.core.set_device_pixel_ratio(dpr);
    if let Err(err) = engine.render() {
        log::error!("genome canvas render failed: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn with_engine(engine: &Rc<RefCell<Option<Engine>>>, f: impl FnOnce(&mut Engine)) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        f(engine);
        render_now(engine);
    }
}

#[component]
pub fn GenomeCanvas(
    /// Genome to draw; `None` leaves the canvas blank.
    #[prop(into)]
    genome: Signal<Option<Arc<GenomeData>>>,
    #[prop(into, default = Signal::stored(DEFAULT_WIDTH_PX))] width: Signal<f64>,
    #[prop(into, default = Signal::stored(DEFAULT_HEIGHT_PX))] height: Signal<f64>,
    #[prop(into, default = Signal::stored(DEFAULT_MIN_SCALE))] min_scale: Signal<f64>,
    #[prop(into, default = Signal::stored(DEFAULT_MAX_SCALE))] max_scale: Signal<f64>,
    /// Starting view for the uncontrolled mode.
    #[prop(optional)]
    initial_view_state: Option<ViewState>,
    /// Caller-owned view state. Supplying it selects controlled mode.
    #[prop(optional, into)]
    view_state: Option<Signal<ViewState>>,
    #[prop(optional, into)] on_view_state_change: Option<Callback<ViewState>>,
    /// Custom painter. Defaults to the genome track painter. A new `Rc`
    /// repaints once; handing back the same one does not.
    #[prop(optional, into)]
    on_draw: Option<Signal<DrawCallback, LocalStorage>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let class = class.map_or_else(|| "genome-canvas".to_owned(), |c| format!("genome-canvas {c}"));

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let config = CanvasConfig {
                width: width.get_untracked(),
                height: height.get_untracked(),
                min_scale: min_scale.get_untracked(),
                max_scale: max_scale.get_untracked(),
                initial_view_state: initial_view_state.unwrap_or_default(),
            };
            let source = view_state.map(|signal| -> ViewStateSource { Box::new(move || signal.get_untracked()) });
            let listener =
                on_view_state_change.map(|cb| -> ChangeListener { Box::new(move |next: ViewState| cb.run(next)) });
            let owner = owner_for(source, config.initial_view_state, listener);

            let mut core = EngineCore::with_owner(&config, owner);
            core.set_genome(genome.get_untracked());
            core.set_draw(Some(on_draw.map_or_else(genome_track_painter, |draw| draw.get_untracked())));
            let mut instance = Engine::new(canvas, core);
            render_now(&mut instance);
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let data = genome.get();
            with_engine(&engine, |engine| engine.core.set_genome(data));
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let (w, h) = (width.get(), height.get());
            with_engine(&engine, |engine| engine.core.set_logical_size(w, h));
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let bounds = ScaleBounds::new(min_scale.get(), max_scale.get());
            with_engine(&engine, |engine| engine.core.set_scale_bounds(bounds));
        });
    }

    #[cfg(feature = "csr")]
    if let Some(draw) = on_draw {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let draw = draw.get();
            with_engine(&engine, |engine| engine.core.set_draw(Some(draw)));
        });
    }

    #[cfg(feature = "csr")]
    if let Some(signal) = view_state {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            signal.track();
            with_engine(&engine, |_| {});
        });
    }

    #[cfg(feature = "csr")]
    let pointer_handler = |phase: PointerPhase| {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            if phase == PointerPhase::Down {
                ev.prevent_default();
            }
            let input = pointer_event_input(phase, &ev, &canvas);
            with_engine(&engine, |engine| {
                engine.handle_input(input);
            });
        }
    };
    #[cfg(not(feature = "csr"))]
    let pointer_handler = |_phase: ()| move |_ev: leptos::ev::PointerEvent| {};

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let input = wheel_event_input(&ev, &canvas);
                with_engine(&engine, |engine| {
                    engine.handle_input(input);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    #[cfg(feature = "csr")]
    let (on_down, on_move, on_up, on_cancel, on_lost_capture) = (
        pointer_handler(PointerPhase::Down),
        pointer_handler(PointerPhase::Move),
        pointer_handler(PointerPhase::Up),
        pointer_handler(PointerPhase::Cancel),
        pointer_handler(PointerPhase::Cancel),
    );
    #[cfg(not(feature = "csr"))]
    let (on_down, on_move, on_up, on_cancel, on_lost_capture) =
        (pointer_handler(()), pointer_handler(()), pointer_handler(()), pointer_handler(()), pointer_handler(()));

    let style = move || format!("width: {}px; height: {}px;", width.get(), height.get());

    view! {
        <canvas
            class=class
            node_ref=canvas_ref
            style=style
            on:pointerdown=on_down
            on:pointermove=on_move
            on:pointerup=on_up
            on:pointercancel=on_cancel
            on:lostpointercapture=on_lost_capture
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
