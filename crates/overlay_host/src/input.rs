//! Global input event bus contracts, subscription objects, and in-memory adapters.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::SurfaceId;

/// `KeyboardEvent.key` value that requests dismissal.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a pointer press landed relative to one subscribed surface.
pub enum HitRegion {
    /// Inside the surface's content subtree.
    Content,
    /// On the surface's dimmer (backdrop) but outside its content.
    Dimmer,
    /// Anywhere else in the document, including the body.
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Document-level input delivered to a subscription, already classified for its surface.
pub enum InputEvent {
    /// Pointer press.
    Pointer(HitRegion),
    /// Key press carrying the `KeyboardEvent.key` value.
    Key(String),
}

impl InputEvent {
    /// Returns whether this event is an Escape key press.
    pub fn is_escape(&self) -> bool {
        matches!(self, Self::Key(key) if key == ESCAPE_KEY)
    }
}

/// Shared handler invoked once per delivered event.
pub type InputHandler = Rc<dyn Fn(InputEvent)>;

/// Host service delivering document-level pointer and key input to overlay surfaces.
pub trait InputEventBus {
    /// Attaches `handler` for input relative to `scope`.
    ///
    /// The returned [`Subscription`] detaches the handler when cancelled or dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot register a listener.
    fn subscribe(&self, scope: SurfaceId, handler: InputHandler) -> Result<Subscription, String>;
}

/// Live attachment of one handler to an [`InputEventBus`].
#[must_use = "dropping a subscription detaches its handler"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the host-specific detach action.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Subscription with nothing to detach.
    pub fn detached() -> Self {
        Self { detach: None }
    }

    /// Detaches the handler now.
    pub fn cancel(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Input bus for targets without document input.
pub struct NoopInputBus;

impl InputEventBus for NoopInputBus {
    fn subscribe(&self, _scope: SurfaceId, _handler: InputHandler) -> Result<Subscription, String> {
        Ok(Subscription::detached())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element a simulated pointer press lands on in [`MemoryInputBus`].
pub enum MemoryPressTarget {
    /// The document body, outside every surface.
    Body,
    /// The dimmer element of a surface.
    Dimmer(SurfaceId),
    /// The content element of a surface.
    Content(SurfaceId),
}

impl MemoryPressTarget {
    fn region_for(self, scope: SurfaceId) -> HitRegion {
        match self {
            Self::Content(surface) if surface == scope => HitRegion::Content,
            Self::Dimmer(surface) if surface == scope => HitRegion::Dimmer,
            _ => HitRegion::Outside,
        }
    }
}

struct Listener {
    key: u64,
    scope: SurfaceId,
    handler: InputHandler,
}

#[derive(Default)]
struct MemoryBusState {
    next_key: u64,
    listeners: Vec<Listener>,
}

#[derive(Clone, Default)]
/// In-memory input bus for tests; events are dispatched synchronously to a listener snapshot.
pub struct MemoryInputBus {
    inner: Rc<RefCell<MemoryBusState>>,
}

impl fmt::Debug for MemoryInputBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryInputBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl MemoryInputBus {
    /// Number of currently attached handlers.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Simulates a pointer press on `target`.
    pub fn press(&self, target: MemoryPressTarget) {
        for (scope, handler) in self.snapshot() {
            handler(InputEvent::Pointer(target.region_for(scope)));
        }
    }

    /// Simulates a document-level key press.
    pub fn key_down(&self, key: &str) {
        for (_, handler) in self.snapshot() {
            handler(InputEvent::Key(key.to_string()));
        }
    }

    // Handlers may subscribe or detach while running, so dispatch never holds the borrow.
    fn snapshot(&self) -> Vec<(SurfaceId, InputHandler)> {
        self.inner
            .borrow()
            .listeners
            .iter()
            .map(|listener| (listener.scope, listener.handler.clone()))
            .collect()
    }
}

impl InputEventBus for MemoryInputBus {
    fn subscribe(&self, scope: SurfaceId, handler: InputHandler) -> Result<Subscription, String> {
        let key = {
            let mut state = self.inner.borrow_mut();
            state.next_key += 1;
            let key = state.next_key;
            state.listeners.push(Listener {
                key,
                scope,
                handler,
            });
            key
        };

        let state: Weak<RefCell<MemoryBusState>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state
                    .borrow_mut()
                    .listeners
                    .retain(|listener| listener.key != key);
            }
        }))
    }
}
