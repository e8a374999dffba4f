//! Concrete host bundle for browser runtime wiring.

use std::rc::Rc;

use overlay_host::OverlayHostServices;

use crate::{WebDocumentRoot, WebInputEventBus};

/// Builds the browser host bundle.
///
/// Non-browser targets get the no-op bundle so server-side or native test builds never touch
/// `web-sys` bindings.
pub fn build_overlay_host() -> OverlayHostServices {
    if cfg!(target_arch = "wasm32") {
        OverlayHostServices {
            document: Rc::new(WebDocumentRoot),
            input: Rc::new(WebInputEventBus),
        }
    } else {
        OverlayHostServices::noop()
    }
}
