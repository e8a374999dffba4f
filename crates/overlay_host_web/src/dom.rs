//! Stable `data-ui-*` attribute contract shared by the widget markup and the input bus.

use overlay_host::SurfaceId;

/// Attribute naming the primitive kind of an element.
pub const KIND_ATTRIBUTE: &str = "data-ui-kind";
/// Attribute tying overlay elements to their surface.
pub const SURFACE_ATTRIBUTE: &str = "data-ui-surface";
/// Kind value of the modal content element.
pub const MODAL_KIND: &str = "modal";
/// Kind value of the dimmer element.
pub const DIMMER_KIND: &str = "dimmer";

/// CSS selector matching the element of `kind` that belongs to `scope`.
pub fn surface_selector(kind: &str, scope: SurfaceId) -> String {
    format!(r#"[{KIND_ATTRIBUTE}="{kind}"][{SURFACE_ATTRIBUTE}="{scope}"]"#)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selector_scopes_kind_to_surface() {
        assert_eq!(
            surface_selector(MODAL_KIND, SurfaceId(4)),
            r#"[data-ui-kind="modal"][data-ui-surface="overlay-4"]"#
        );
    }
}
