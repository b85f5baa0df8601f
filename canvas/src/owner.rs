//! View-state ownership: one commit path for controlled and uncontrolled use.
//!
//! The surface is written once against [`ViewStateOwner`]. Either the surface
//! keeps the state itself ([`InternalViewState`]) or the caller does and the
//! surface only reads it and reports proposed changes
//! ([`ControlledViewState`]). Exactly one owner exists per surface, chosen at
//! construction by [`owner_for`].

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

use std::fmt;

use crate::view::ViewState;

/// Listener notified with every committed view state.
pub type ChangeListener = Box<dyn FnMut(ViewState)>;

/// Accessor returning the caller's current view state.
pub type ViewStateSource = Box<dyn Fn() -> ViewState>;

/// Holder of the authoritative view state.
pub trait ViewStateOwner {
    /// The most recently committed (or caller-supplied) view state.
    fn current(&self) -> ViewState;

    /// Accept a new view state. Uncontrolled owners store it; every owner
    /// forwards it to its change listener, if any.
    fn commit(&mut self, next: ViewState);

    /// Whether the caller owns the state.
    fn is_controlled(&self) -> bool;
}

/// Uncontrolled mode: the surface owns the state.
pub struct InternalViewState {
    state: ViewState,
    on_change: Option<ChangeListener>,
}

impl InternalViewState {
    #[must_use]
    pub fn new(initial: ViewState) -> Self {
        Self { state: initial, on_change: None }
    }

    #[must_use]
    pub fn with_listener(initial: ViewState, on_change: ChangeListener) -> Self {
        Self { state: initial, on_change: Some(on_change) }
    }
}

impl ViewStateOwner for InternalViewState {
    fn current(&self) -> ViewState {
        self.state
    }

    fn commit(&mut self, next: ViewState) {
        self.state = next;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
    }

    fn is_controlled(&self) -> bool {
        false
    }
}

impl fmt::Debug for InternalViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalViewState")
            .field("state", &self.state)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

/// Controlled mode: the caller owns the state and decides whether to accept commits.
pub struct ControlledViewState {
    source: ViewStateSource,
    on_change: Option<ChangeListener>,
}

impl ControlledViewState {
    #[must_use]
    pub fn new(source: ViewStateSource, on_change: Option<ChangeListener>) -> Self {
        Self { source, on_change }
    }
}

impl ViewStateOwner for ControlledViewState {
    fn current(&self) -> ViewState {
        (self.source)()
    }

    fn commit(&mut self, next: ViewState) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
    }

    fn is_controlled(&self) -> bool {
        true
    }
}

impl fmt::Debug for ControlledViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledViewState")
            .field("current", &self.current())
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

/// Pick the owner: controlled when `controlled` is supplied, otherwise internal
/// state seeded with `initial`.
#[must_use]
pub fn owner_for(
    controlled: Option<ViewStateSource>,
    initial: ViewState,
    on_change: Option<ChangeListener>,
) -> Box<dyn ViewStateOwner> {
    match (controlled, on_change) {
        (Some(source), on_change) => Box::new(ControlledViewState::new(source, on_change)),
        (None, Some(on_change)) => Box::new(InternalViewState::with_listener(initial, on_change)),
        (None, None) => Box::new(InternalViewState::new(initial)),
    }
}
