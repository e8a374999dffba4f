//! Shared overlay runtime: host services, presentation flags, and the mounted-surface stack.

use std::{cell::RefCell, fmt, rc::Rc};

use overlay_host::{InputEventBus, OverlayHostServices, SurfaceId};

use crate::flags::PresentationFlags;

#[derive(Clone)]
/// Runtime shared by every modal rendered against the same document.
pub struct OverlayRuntime {
    host: OverlayHostServices,
    flags: PresentationFlags,
    stack: Rc<RefCell<Vec<SurfaceId>>>,
}

impl fmt::Debug for OverlayRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayRuntime")
            .field("flags", &self.flags)
            .field("stack", &self.stack.borrow())
            .finish()
    }
}

impl OverlayRuntime {
    /// Builds a runtime on top of injected host services.
    pub fn new(host: OverlayHostServices) -> Self {
        let flags = PresentationFlags::new(host.document.clone());
        Self {
            host,
            flags,
            stack: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Document-root flag registry.
    pub fn flags(&self) -> &PresentationFlags {
        &self.flags
    }

    /// Document-level input bus.
    pub fn input(&self) -> &Rc<dyn InputEventBus> {
        &self.host.input
    }

    /// Mounted surfaces in mount order; the last one is topmost.
    pub fn mounted_surfaces(&self) -> Vec<SurfaceId> {
        self.stack.borrow().clone()
    }

    /// Whether `surface` is the most recently mounted surface still mounted.
    pub fn is_topmost(&self, surface: SurfaceId) -> bool {
        self.stack.borrow().last() == Some(&surface)
    }

    pub(crate) fn push_surface(&self, surface: SurfaceId) {
        let mut stack = self.stack.borrow_mut();
        if !stack.contains(&surface) {
            stack.push(surface);
        }
    }

    pub(crate) fn remove_surface(&self, surface: SurfaceId) {
        self.stack.borrow_mut().retain(|mounted| *mounted != surface);
    }
}
