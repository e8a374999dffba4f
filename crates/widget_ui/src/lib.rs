//! Presentational overlay and content widgets built on Leptos.
//!
//! The crate renders the `Modal` family (with its headless controller from `overlay_runtime`),
//! the `Confirm` dialog, the `Comment` view, and the small `Button`/`Icon`/`Image` primitives they
//! compose. Overlay markup follows the shared `data-ui-*` DOM contract from `overlay_host_web` so
//! the browser input bus can tell content presses from dimmer and outside presses.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod factories;
mod primitives;
mod runtime_context;

pub use factories::{create_icon, create_image, normalize_shorthand, Normalized, Shorthand, ShorthandProps};
pub use overlay_runtime::{DimmerMode, ModalSize};
pub use primitives::{
    Button, ButtonVariant, Comment, CommentActions, CommentAuthor, CommentAvatar, CommentContent,
    CommentMetadata, CommentSection, CommentText, Confirm, ConfirmLabels, Icon, IconProps,
    IconSize, Image, ImageProps, ImageSize, Modal, ModalActions, ModalContent, ModalDescription,
    ModalHeader, ModalSection,
};
pub use runtime_context::{provide_overlay_runtime, use_overlay_runtime, OverlayProvider};

/// Convenience imports for crates composing the widget set.
pub mod prelude {
    pub use crate::{
        create_icon, create_image, Button, ButtonVariant, Comment, CommentActions, CommentAuthor,
        CommentAvatar, CommentContent, CommentMetadata, CommentText, Confirm, DimmerMode, Icon,
        IconSize, Image, ImageSize, Modal, ModalActions, ModalContent, ModalDescription,
        ModalHeader, ModalSize, OverlayProvider, Shorthand,
    };
}
