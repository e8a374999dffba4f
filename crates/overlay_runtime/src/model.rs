//! Modal state and the render plan derived from it.

use overlay_host::SurfaceId;

use crate::config::{DimmerMode, ModalConfig, ModalSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Reducer-owned state of one modal instance.
pub struct ModalState {
    /// Owner-requested visibility.
    pub active: bool,
    /// Dimmer presentation.
    pub dimmer: DimmerMode,
    /// Width variant.
    pub size: Option<ModalSize>,
    /// Borderless presentation.
    pub basic: bool,
    /// Mounted surface, present exactly while the overlay is mounted.
    pub surface: Option<SurfaceId>,
}

impl ModalState {
    /// Unmounted state carrying the presentation options of `config`.
    ///
    /// `config.active` is applied through the reducer so mounting emits its effects.
    pub fn from_config(config: ModalConfig) -> Self {
        Self {
            active: false,
            dimmer: config.dimmer,
            size: config.size,
            basic: config.basic,
            surface: None,
        }
    }

    /// Whether the overlay surface currently exists.
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Nodes the renderer must produce for this state.
    pub fn layers(&self) -> SurfaceLayers {
        SurfaceLayers {
            surface: self.surface,
            dimmer: self
                .surface
                .and_then(|_| self.dimmer.shows_dimmer().then_some(self.dimmer)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Render plan for one modal: which overlay nodes exist.
pub struct SurfaceLayers {
    /// Surface hosting the content node, if mounted.
    pub surface: Option<SurfaceId>,
    /// Dimmer node presentation, if a dimmer node exists.
    pub dimmer: Option<DimmerMode>,
}

impl SurfaceLayers {
    /// Number of modal content nodes (0 or 1).
    pub fn content_nodes(&self) -> usize {
        usize::from(self.surface.is_some())
    }

    /// Number of dimmer nodes (0 or 1).
    pub fn dimmer_nodes(&self) -> usize {
        usize::from(self.dimmer.is_some())
    }
}

/// Class list of the modal content node.
pub fn modal_class_name(size: Option<ModalSize>, basic: bool) -> String {
    let mut classes = vec!["ui"];
    if let Some(size) = size {
        classes.push(size.token());
    }
    if basic {
        classes.push("basic");
    }
    classes.extend(["modal", "transition", "visible", "active"]);
    classes.join(" ")
}

/// Class list of the dimmer node, or `None` when the mode renders no dimmer.
pub fn dimmer_class_name(mode: DimmerMode) -> Option<String> {
    match mode {
        DimmerMode::None => None,
        DimmerMode::Inverted => {
            Some("ui inverted page modals dimmer transition visible active".to_string())
        }
        DimmerMode::Default | DimmerMode::Blurring => {
            Some("ui page modals dimmer transition visible active".to_string())
        }
    }
}
