//! Browser (`wasm32`) implementations of [`overlay_host`] service contracts.
//!
//! The document root maps onto `document.body.classList`; the input bus registers one pair of
//! document-level listeners per subscription and classifies pointer presses through the shared
//! `data-ui-*` DOM contract exported from [`dom`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod document;
pub mod dom;
pub mod input;

pub use adapters::build_overlay_host;
pub use document::WebDocumentRoot;
pub use input::WebInputEventBus;
