//! Typed host-domain contracts for overlay widgets.
//!
//! This crate is the boundary between the headless overlay runtime and the page it runs in. It
//! exposes the document-root presentation flag contract, the global input event bus with explicit
//! subscription objects, and process-unique surface ids. Concrete browser adapters live in
//! `overlay_host_web`; the in-memory adapters here back tests and non-browser targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod host;
pub mod input;
pub mod surface;

pub use document::{DocumentRoot, MemoryDocumentRoot, NoopDocumentRoot};
pub use host::{MemoryOverlayHost, OverlayHostServices};
pub use input::{
    HitRegion, InputEvent, InputEventBus, InputHandler, MemoryInputBus, MemoryPressTarget,
    NoopInputBus, Subscription, ESCAPE_KEY,
};
pub use surface::{next_surface_id, SurfaceId};
