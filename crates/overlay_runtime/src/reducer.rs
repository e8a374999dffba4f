//! Modal actions, side-effect intents, and transition logic.

use overlay_host::{next_surface_id, HitRegion, InputEvent, SurfaceId};

use crate::{
    config::{DimmerMode, ModalSize},
    model::ModalState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inputs accepted by [`reduce_modal`].
pub enum ModalAction {
    /// Owner changed the `active` prop.
    SetActive(bool),
    /// Owner changed the `dimmer` prop.
    SetDimmer(DimmerMode),
    /// Owner changed the `size` prop.
    SetSize(Option<ModalSize>),
    /// Owner changed the `basic` prop.
    SetBasic(bool),
    /// Document input delivered by the dismissal subscription.
    Input(InputEvent),
    /// The modal left the component tree.
    Teardown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_modal`], executed in order by the controller.
pub enum ModalEffect {
    /// Register a new top-level surface.
    MountSurface(SurfaceId),
    /// Remove a surface.
    UnmountSurface(SurfaceId),
    /// Replace the surface's desired document-root tokens.
    ApplyFlags {
        /// Owning surface.
        surface: SurfaceId,
        /// Desired tokens.
        tokens: &'static [&'static str],
    },
    /// Release every document-root token held by the surface.
    ReleaseFlags(SurfaceId),
    /// Subscribe to document input for the surface.
    AttachListener(SurfaceId),
    /// Drop the surface's input subscription.
    DetachListener(SurfaceId),
    /// Invoke the owner's close callback. `active` is left to the owner.
    RequestClose,
}

/// Applies a [`ModalAction`] and returns the side effects the host must perform.
///
/// Mounting emits surface, flags, then listener; unmounting reverses that order so no input can
/// reach a half-torn-down modal. Input never changes `active`.
pub fn reduce_modal(state: &mut ModalState, action: ModalAction) -> Vec<ModalEffect> {
    let mut effects = Vec::new();
    match action {
        ModalAction::SetActive(active) => {
            state.active = active;
            if active {
                mount(state, &mut effects);
            } else {
                unmount(state, &mut effects);
            }
        }
        ModalAction::SetDimmer(dimmer) => {
            let changed = state.dimmer != dimmer;
            state.dimmer = dimmer;
            if let (true, Some(surface)) = (changed, state.surface) {
                effects.push(ModalEffect::ApplyFlags {
                    surface,
                    tokens: dimmer.body_classes(),
                });
            }
        }
        ModalAction::SetSize(size) => state.size = size,
        ModalAction::SetBasic(basic) => state.basic = basic,
        ModalAction::Input(event) => {
            if state.is_mounted() && requests_close(&event) {
                effects.push(ModalEffect::RequestClose);
            }
        }
        ModalAction::Teardown => {
            state.active = false;
            unmount(state, &mut effects);
        }
    }
    effects
}

fn mount(state: &mut ModalState, effects: &mut Vec<ModalEffect>) {
    if state.surface.is_some() {
        return;
    }
    let surface = next_surface_id();
    state.surface = Some(surface);
    effects.push(ModalEffect::MountSurface(surface));
    effects.push(ModalEffect::ApplyFlags {
        surface,
        tokens: state.dimmer.body_classes(),
    });
    effects.push(ModalEffect::AttachListener(surface));
}

fn unmount(state: &mut ModalState, effects: &mut Vec<ModalEffect>) {
    let Some(surface) = state.surface.take() else {
        return;
    };
    effects.push(ModalEffect::DetachListener(surface));
    effects.push(ModalEffect::ReleaseFlags(surface));
    effects.push(ModalEffect::UnmountSurface(surface));
}

fn requests_close(event: &InputEvent) -> bool {
    match event {
        InputEvent::Pointer(HitRegion::Content) => false,
        InputEvent::Pointer(HitRegion::Dimmer | HitRegion::Outside) => true,
        InputEvent::Key(_) => event.is_escape(),
    }
}
