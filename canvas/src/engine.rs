//! Canvas engine: the commit path, gesture dispatch and the render pass.
//!
//! [`EngineCore`] holds everything that does not need a browser and is what
//! the tests drive. [`Engine`] wraps it together with the
//! `HtmlCanvasElement`, applies pointer capture and cursor changes, and runs
//! the frame described in [`Engine::render`].

use std::rc::Rc;
use std::sync::Arc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::CanvasConfig;
use crate::genome::GenomeData;
use crate::input::{CaptureChange, InputEvent, InputState, PointerId, reduce};
use crate::owner::{InternalViewState, ViewStateOwner};
use crate::surface::{Affine, TargetConfig, Viewport};
use crate::view::{ScaleBounds, ViewState, ZoomStep, step_zoom};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A view state went through the commit path (already clamped).
    ViewChanged(ViewState),
    CapturePointer(PointerId),
    ReleasePointer(PointerId),
    SetCursor(&'static str),
    RenderNeeded,
}

/// What the draw callback sees for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState<'a> {
    pub data: Option<&'a GenomeData>,
    pub view_state: ViewState,
    pub viewport: Viewport,
}

/// Caller-supplied painter, invoked once per frame with the view transform applied.
pub type DrawCallback =
    Rc<dyn Fn(&CanvasRenderingContext2d, &HtmlCanvasElement, &RenderState<'_>) -> Result<(), JsValue>>;

/// Identity of a painted frame. A redraw is due whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameKey {
    view: ViewState,
    viewport: Viewport,
    data_rev: u64,
    draw_rev: u64,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
pub struct EngineCore {
    owner: Box<dyn ViewStateOwner>,
    pub input: InputState,
    bounds: ScaleBounds,
    initial: ViewState,
    genome: Option<Arc<GenomeData>>,
    viewport: Viewport,
    draw: Option<DrawCallback>,
    data_rev: u64,
    draw_rev: u64,
    last_frame: Option<FrameKey>,
}

impl EngineCore {
    /// Uncontrolled engine seeded with `config.initial_view_state`.
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self::with_owner(config, Box::new(InternalViewState::new(config.initial_view_state)))
    }

    /// Engine whose view state lives in `owner` (see [`crate::owner::owner_for`]).
    #[must_use]
    pub fn with_owner(config: &CanvasConfig, owner: Box<dyn ViewStateOwner>) -> Self {
        Self {
            owner,
            input: InputState::default(),
            bounds: config.scale_bounds(),
            initial: config.initial_view_state,
            genome: None,
            viewport: config.viewport(1.0),
            draw: None,
            data_rev: 0,
            draw_rev: 0,
            last_frame: None,
        }
    }

    // --- View state ---

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.owner.current()
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.owner.is_controlled()
    }

    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        self.bounds
    }

    pub fn set_scale_bounds(&mut self, bounds: ScaleBounds) {
        self.bounds = bounds;
    }

    /// The single mutation entry point. Clamps the scale, hands the value to
    /// the owner and returns what was committed.
    pub fn commit(&mut self, next: ViewState) -> ViewState {
        let clamped = next.with_scale(self.bounds.clamp(next.scale));
        self.owner.commit(clamped);
        clamped
    }

    pub fn zoom_in(&mut self) -> ViewState {
        self.commit(step_zoom(self.view_state(), ZoomStep::In, self.bounds))
    }

    pub fn zoom_out(&mut self) -> ViewState {
        self.commit(step_zoom(self.view_state(), ZoomStep::Out, self.bounds))
    }

    /// Commit the configured initial view state.
    pub fn reset_view(&mut self) -> ViewState {
        self.commit(self.initial)
    }

    // --- Input ---

    /// Run one event through the gesture reducer and commit any resulting view.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        let transition = reduce(self.input, self.view_state(), event, self.bounds);
        let mut actions = Vec::new();

        if transition.state.is_panning() != self.input.is_panning() {
            log::debug!("gesture {:?} -> {:?}", self.input, transition.state);
        }
        self.input = transition.state;

        match transition.capture {
            Some(CaptureChange::Acquire(id)) => {
                actions.push(Action::CapturePointer(id));
                actions.push(Action::SetCursor("grabbing"));
            }
            Some(CaptureChange::Release(id)) => {
                actions.push(Action::ReleasePointer(id));
                actions.push(Action::SetCursor("grab"));
            }
            None => {}
        }

        if let Some(next) = transition.view {
            let committed = self.commit(next);
            actions.push(Action::ViewChanged(committed));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Data inputs ---

    /// Install a genome snapshot. Logs data-quality issues; never rejects data.
    pub fn set_genome(&mut self, genome: Option<Arc<GenomeData>>) {
        let same = match (&self.genome, &genome) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        if let Some(data) = genome.as_deref() {
            log::debug!(
                "genome installed: {} bp, {} tracks, {} features",
                data.length,
                data.tracks.len(),
                data.feature_count()
            );
            for issue in data.issues() {
                log::warn!("genome data: {issue}");
            }
        }
        self.genome = genome;
        self.data_rev += 1;
    }

    #[must_use]
    pub fn genome(&self) -> Option<&GenomeData> {
        self.genome.as_deref()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Viewport::new(viewport.width, viewport.height, viewport.device_pixel_ratio);
    }

    /// Change the logical size, keeping the current device pixel ratio.
    pub fn set_logical_size(&mut self, width: f64, height: f64) {
        self.set_viewport(Viewport::new(width, height, self.viewport.device_pixel_ratio));
    }

    /// Change the device pixel ratio, keeping the logical size.
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.set_viewport(Viewport::new(self.viewport.width, self.viewport.height, dpr));
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the draw callback. A callback with a new identity schedules
    /// one redraw; handing back the same `Rc` does not.
    pub fn set_draw(&mut self, draw: Option<DrawCallback>) {
        let same = match (&self.draw, &draw) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        self.draw = draw;
        self.draw_rev += 1;
    }

    #[must_use]
    pub fn draw(&self) -> Option<&DrawCallback> {
        self.draw.as_ref()
    }

    // --- Frame bookkeeping ---

    /// Snapshot for the draw callback. Reads the owner once.
    #[must_use]
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState { data: self.genome(), view_state: self.view_state(), viewport: self.viewport }
    }

    #[must_use]
    pub fn frame_key(&self, view: ViewState) -> FrameKey {
        FrameKey { view, viewport: self.viewport, data_rev: self.data_rev, draw_rev: self.draw_rev }
    }

    /// Whether `key` differs from the last painted frame.
    #[must_use]
    pub fn needs_render(&self, key: FrameKey) -> bool {
        self.last_frame != Some(key)
    }

    pub fn mark_rendered(&mut self, key: FrameKey) {
        self.last_frame = Some(key);
    }
}

/// The genome canvas engine bound to a canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, core: EngineCore) -> Self {
        Self { canvas, core }
    }

    /// Handle one input event and apply capture and cursor changes to the element.
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Action> {
        let actions = self.core.handle(event);
        for action in &actions {
            let applied = match action {
                Action::CapturePointer(id) => self.canvas.set_pointer_capture(*id),
                Action::ReleasePointer(id) => self.canvas.release_pointer_capture(*id),
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor),
                Action::ViewChanged(_) | Action::RenderNeeded => Ok(()),
            };
            if let Err(err) = applied {
                log::warn!("failed to apply {action:?}: {err:?}");
            }
        }
        actions
    }

    /// Paint one frame if anything in the frame key changed.
    ///
    /// Sizes the backing buffer for the device pixel ratio, clears under the
    /// density transform, then calls the draw callback once with the view
    /// transform applied. Without a 2D context nothing is drawn and the frame
    /// stays pending.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` or style call fails, including any error
    /// raised by the draw callback.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let state = self.core.render_state();
        let key = self.core.frame_key(state.view_state);
        if !self.core.needs_render(key) {
            return Ok(());
        }

        let Some(ctx) = self.context() else {
            log::debug!("no 2d context; frame skipped");
            return Ok(());
        };

        let target = TargetConfig::for_viewport(state.viewport);
        if self.canvas.width() != target.backing_width {
            self.canvas.set_width(target.backing_width);
        }
        if self.canvas.height() != target.backing_height {
            self.canvas.set_height(target.backing_height);
        }
        let style = self.canvas.style();
        style.set_property("width", &target.css_width_style())?;
        style.set_property("height", &target.css_height_style())?;

        set_transform(&ctx, Affine::density(target.device_pixel_ratio))?;
        ctx.clear_rect(0.0, 0.0, target.css_width, target.css_height);

        ctx.save();
        let drawn = set_transform(&ctx, Affine::frame(target.device_pixel_ratio, state.view_state)).and_then(|()| {
            match self.core.draw() {
                Some(draw) => draw(&ctx, &self.canvas, &state),
                None => Ok(()),
            }
        });
        ctx.restore();
        drawn?;

        self.core.mark_rendered(key);
        Ok(())
    }

    /// The 2D context, if the element can provide one. Spelled out as matches
    /// because the crate's hygiene budget forbids `Result::ok` in production code.
    fn context(&self) -> Option<CanvasRenderingContext2d> {
        match self.canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => Some(ctx),
                Err(_) => None,
            },
            Ok(None) | Err(_) => None,
        }
    }
}

/// Apply an [`Affine`] with `set_transform`.
///
/// # Errors
///
/// Propagates the `Canvas2D` error.
pub fn set_transform(ctx: &CanvasRenderingContext2d, m: Affine) -> Result<(), JsValue> {
    ctx.set_transform(m.a, m.b, m.c, m.d, m.e, m.f)
}
