use super::*;
use crate::{DimmerMode, ModalSize};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved text of a [`Confirm`] dialog.
pub struct ConfirmLabels {
    /// Optional header line.
    pub header: Option<String>,
    /// Body text; `None` omits the content section.
    pub content: Option<String>,
    /// Cancel button label.
    pub cancel: String,
    /// Confirm button label.
    pub confirm: String,
}

impl Default for ConfirmLabels {
    fn default() -> Self {
        Self {
            header: None,
            content: Some("Are you sure?".to_string()),
            cancel: "Cancel".to_string(),
            confirm: "OK".to_string(),
        }
    }
}

impl ConfirmLabels {
    /// Applies caller overrides on top of the defaults. Defaults fill only missing values; an empty
    /// header or content drops that section and an empty button label stays empty.
    pub fn resolve(
        header: Option<String>,
        content: Option<String>,
        cancel: Option<String>,
        confirm: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            header: header.filter(|header| !header.is_empty()),
            content: match content {
                Some(content) if content.is_empty() => None,
                Some(content) => Some(content),
                None => defaults.content,
            },
            cancel: cancel.unwrap_or(defaults.cancel),
            confirm: confirm.unwrap_or(defaults.confirm),
        }
    }
}

#[component]
/// Small modal asking the user to confirm or cancel an action.
///
/// Dismissing through the dimmer or Escape counts as cancel.
pub fn Confirm(
    #[prop(into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] header: Option<String>,
    #[prop(optional, into)] content: Option<String>,
    #[prop(optional, into)] cancel_button: Option<String>,
    #[prop(optional, into)] confirm_button: Option<String>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    #[prop(default = MaybeSignal::Static(DimmerMode::Default), into)] dimmer: MaybeSignal<
        DimmerMode,
    >,
) -> impl IntoView {
    let labels = ConfirmLabels::resolve(header, content, cancel_button, confirm_button);
    let cancel = Callback::new(move |_: MouseEvent| {
        if let Some(on_cancel) = on_cancel {
            on_cancel.call(());
        }
    });
    let confirm = Callback::new(move |_: MouseEvent| {
        if let Some(on_confirm) = on_confirm {
            on_confirm.call(());
        }
    });
    let on_hide = Callback::new(move |()| {
        if let Some(on_cancel) = on_cancel {
            on_cancel.call(());
        }
    });

    view! {
        <Modal
            active=active
            dimmer=dimmer
            size=MaybeSignal::Static(Some(ModalSize::Small))
            on_hide=on_hide
            aria_label=labels.header.clone().unwrap_or_else(|| labels.confirm.clone())
        >
            {
                let ConfirmLabels { header, content, cancel: cancel_label, confirm: confirm_label } =
                    labels.clone();
                view! {
                    {header.map(|header| view! { <ModalHeader>{header}</ModalHeader> })}
                    {content.map(|content| view! { <ModalContent>{content}</ModalContent> })}
                    <ModalActions>
                        <Button ui_slot="cancel" on_click=cancel>
                            {cancel_label}
                        </Button>
                        <Button variant=ButtonVariant::Primary ui_slot="confirm" on_click=confirm>
                            {confirm_label}
                        </Button>
                    </ModalActions>
                }
            }
        </Modal>
    }
}
