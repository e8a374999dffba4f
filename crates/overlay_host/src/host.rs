//! Host service bundle consumed by the overlay runtime.

use std::{fmt, rc::Rc};

use crate::{
    DocumentRoot, InputEventBus, MemoryDocumentRoot, MemoryInputBus, NoopDocumentRoot,
    NoopInputBus,
};

#[derive(Clone)]
/// Concrete host services injected into the overlay runtime by the entry layer.
pub struct OverlayHostServices {
    /// Global presentation class list.
    pub document: Rc<dyn DocumentRoot>,
    /// Document-level pointer and key input.
    pub input: Rc<dyn InputEventBus>,
}

impl OverlayHostServices {
    /// Bundle whose services do nothing; used where no document exists.
    pub fn noop() -> Self {
        Self {
            document: Rc::new(NoopDocumentRoot),
            input: Rc::new(NoopInputBus),
        }
    }
}

impl fmt::Debug for OverlayHostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHostServices").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory host whose adapters stay inspectable after being handed to a runtime.
pub struct MemoryOverlayHost {
    /// Inspectable document root.
    pub document: MemoryDocumentRoot,
    /// Inspectable input bus.
    pub input: MemoryInputBus,
}

impl MemoryOverlayHost {
    /// Returns a service bundle sharing state with this host.
    pub fn services(&self) -> OverlayHostServices {
        OverlayHostServices {
            document: Rc::new(self.document.clone()),
            input: Rc::new(self.input.clone()),
        }
    }
}
