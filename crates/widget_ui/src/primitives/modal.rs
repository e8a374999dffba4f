use overlay_host_web::dom::{DIMMER_KIND, MODAL_KIND};
use overlay_runtime::{
    dimmer_class_name, modal_class_name, DimmerMode, ModalConfig, ModalController, ModalSize,
};

use super::*;
use crate::runtime_context::use_overlay_runtime;

/// Kind value of the portal root when no dimmer is rendered.
const OVERLAY_ROOT_KIND: &str = "overlay-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tagged modal sub-sections recognized by the modal layout.
pub enum ModalSection {
    /// Title row.
    Header,
    /// Main body.
    Content,
    /// Button row.
    Actions,
    /// Descriptive text block inside content.
    Description,
}

impl ModalSection {
    /// Class token and slot name of the section.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Content => "content",
            Self::Actions => "actions",
            Self::Description => "description",
        }
    }
}

#[component]
/// Modal dialog rendered into a body-level portal while `active`.
///
/// Presses on the dimmer or outside the dialog and the Escape key call `on_hide`; the owner is
/// expected to set `active` to false in response. Body dimmer classes are applied while mounted
/// and removed on unmount.
pub fn Modal(
    /// Whether the modal is mounted and visible.
    #[prop(into)]
    active: MaybeSignal<bool>,
    /// Dimmer presentation; plain dimmer by default.
    #[prop(default = MaybeSignal::Static(DimmerMode::Default), into)]
    dimmer: MaybeSignal<DimmerMode>,
    /// Optional width variant.
    #[prop(optional, into)]
    size: MaybeSignal<Option<ModalSize>>,
    /// Borderless presentation.
    #[prop(optional, into)]
    basic: MaybeSignal<bool>,
    /// Close request callback.
    #[prop(optional)]
    on_hide: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let controller = ModalController::new(
        use_overlay_runtime(),
        ModalConfig {
            active: false,
            dimmer: dimmer.get_untracked(),
            size: size.get_untracked(),
            basic: basic.get_untracked(),
        },
    );
    if let Some(on_hide) = on_hide {
        controller.set_on_hide(move || on_hide.call(()));
    }
    let layers = create_rw_signal(controller.layers());

    create_effect({
        let controller = controller.clone();
        move |_| {
            controller.set_size(size.get());
            controller.set_basic(basic.get());
        }
    });
    create_effect({
        let controller = controller.clone();
        move |_| {
            controller.set_dimmer(dimmer.get());
            controller.set_active(active.get());
            layers.set(controller.layers());
        }
    });
    on_cleanup(move || controller.teardown());

    let surface_attr = move || {
        layers
            .get()
            .surface
            .map(|surface| surface.to_string())
            .unwrap_or_default()
    };
    let root_class = move || {
        layers
            .get()
            .dimmer
            .and_then(dimmer_class_name)
            .unwrap_or_default()
    };
    let root_kind = move || {
        if layers.get().dimmer.is_some() {
            DIMMER_KIND
        } else {
            OVERLAY_ROOT_KIND
        }
    };
    let modal_class =
        move || merge_layout_class(modal_class_name(size.get(), basic.get()), layout_class);
    // Dimmer changes restyle the root in place; only mount changes rebuild the portal.
    let mounted = create_memo(move |_| layers.with(|layers| layers.surface.is_some()));

    let dialog = move || {
        let children = children.clone();
        let aria_label = aria_label.clone();
        view! {
            <Portal>
                <div
                    class=root_class
                    data-ui-primitive="true"
                    data-ui-kind=root_kind
                    data-ui-surface=surface_attr
                >
                    <div
                        class=modal_class
                        role="dialog"
                        aria-modal="true"
                        aria-label=aria_label.clone()
                        data-ui-primitive="true"
                        data-ui-kind=MODAL_KIND
                        data-ui-surface=surface_attr
                    >
                        {children()}
                    </div>
                </div>
            </Portal>
        }
        .into_view()
    };

    move || mounted.get().then(|| dialog())
}

#[component]
fn ModalSectionView(
    section: ModalSection,
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(section.token(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="modal-section"
            data-ui-slot=section.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Modal title row.
pub fn ModalHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalSectionView section=ModalSection::Header layout_class=layout_class>
            {children()}
        </ModalSectionView>
    }
}

#[component]
/// Modal body.
pub fn ModalContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalSectionView section=ModalSection::Content layout_class=layout_class>
            {children()}
        </ModalSectionView>
    }
}

#[component]
/// Modal button row.
pub fn ModalActions(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalSectionView section=ModalSection::Actions layout_class=layout_class>
            {children()}
        </ModalSectionView>
    }
}

#[component]
/// Descriptive text block placed inside [`ModalContent`].
pub fn ModalDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalSectionView section=ModalSection::Description layout_class=layout_class>
            {children()}
        </ModalSectionView>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tokens_are_distinct() {
        let tokens = [
            ModalSection::Header,
            ModalSection::Content,
            ModalSection::Actions,
            ModalSection::Description,
        ]
        .map(ModalSection::token);
        assert_eq!(tokens, ["header", "content", "actions", "description"]);
    }
}
