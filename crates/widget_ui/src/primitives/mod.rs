//! Shared overlay, content, control, and media primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod comment;
mod confirm;
mod controls;
mod media;
mod modal;

pub use comment::{
    Comment, CommentActions, CommentAuthor, CommentAvatar, CommentContent, CommentMetadata,
    CommentSection, CommentText,
};
pub use confirm::{Confirm, ConfirmLabels};
pub use controls::{Button, ButtonVariant};
pub use media::{Icon, IconProps, IconSize, Image, ImageProps, ImageSize};
pub use modal::{Modal, ModalActions, ModalContent, ModalDescription, ModalHeader, ModalSection};

pub(crate) fn merge_layout_class(base: impl Into<String>, layout_class: Option<&'static str>) -> String {
    let base = base.into();
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base,
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui comment", None), "ui comment");
        assert_eq!(merge_layout_class("ui comment", Some("")), "ui comment");
        assert_eq!(
            merge_layout_class("ui comment", Some("thread-reply")),
            "ui comment thread-reply"
        );
    }
}
