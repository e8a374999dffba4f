//! Headless modal overlay runtime.
//!
//! The runtime owns the modal visibility and dismissal state machine: configuration parsing and
//! validation ([`config`]), the reducer that turns prop changes and input into side-effect intents
//! ([`reducer`]), the reference-counted body presentation flags shared by every mounted overlay
//! ([`flags`]), and the controller that executes reducer effects against injected host services
//! ([`controller`]). Rendering lives in `widget_ui`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod flags;
pub mod model;
pub mod reducer;
pub mod runtime;

pub use config::{ConfigError, DimmerMode, ModalConfig, ModalSize};
pub use controller::ModalController;
pub use flags::PresentationFlags;
pub use model::{dimmer_class_name, modal_class_name, ModalState, SurfaceLayers};
pub use reducer::{reduce_modal, ModalAction, ModalEffect};
pub use runtime::OverlayRuntime;
