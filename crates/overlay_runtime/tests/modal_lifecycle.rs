use std::{cell::Cell, cell::RefCell, rc::Rc};

use overlay_host::{DocumentRoot, MemoryOverlayHost, MemoryPressTarget, SurfaceId};
use overlay_runtime::{DimmerMode, ModalConfig, ModalController, OverlayRuntime};
use pretty_assertions::assert_eq;

struct Harness {
    host: MemoryOverlayHost,
    runtime: OverlayRuntime,
}

impl Harness {
    fn new() -> Self {
        let host = MemoryOverlayHost::default();
        let runtime = OverlayRuntime::new(host.services());
        Self { host, runtime }
    }

    fn modal(&self, config: ModalConfig) -> (ModalController, Rc<Cell<usize>>) {
        let controller = ModalController::new(self.runtime.clone(), config);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        controller.set_on_hide(move || counter.set(counter.get() + 1));
        (controller, calls)
    }

    fn body(&self) -> String {
        self.host.document.class_name()
    }

    fn assert_clean(&self) {
        assert_eq!(self.body(), "");
        assert_eq!(self.host.input.listener_count(), 0);
        assert!(self.runtime.mounted_surfaces().is_empty());
        assert!(self.runtime.flags().active_tokens().is_empty());
    }
}

fn active(dimmer: DimmerMode) -> ModalConfig {
    ModalConfig {
        active: true,
        dimmer,
        ..ModalConfig::default()
    }
}

fn surface_of(controller: &ModalController) -> SurfaceId {
    controller.state().surface.expect("mounted surface")
}

#[test]
fn inactive_modal_has_no_nodes_flags_or_listeners() {
    let harness = Harness::new();
    let (controller, _) = harness.modal(ModalConfig::default());

    let layers = controller.layers();
    assert_eq!(layers.content_nodes(), 0);
    assert_eq!(layers.dimmer_nodes(), 0);
    assert!(!controller.is_listening());
    harness.assert_clean();
}

#[test]
fn active_modal_renders_one_content_node_and_one_dimmer() {
    let harness = Harness::new();
    let (controller, _) = harness.modal(active(DimmerMode::Default));

    let layers = controller.layers();
    assert_eq!(layers.content_nodes(), 1);
    assert_eq!(layers.dimmer_nodes(), 1);
    assert_eq!(harness.body(), "dimmable dimmed");
    assert!(!harness.host.document.has_class("blurring"));
    assert!(!harness.host.document.has_class("inverted"));
    assert_eq!(harness.host.input.listener_count(), 1);
}

#[test]
fn dimmer_modes_map_to_body_classes() {
    let cases = [
        (DimmerMode::None, "", 0),
        (DimmerMode::Default, "dimmable dimmed", 1),
        (DimmerMode::Blurring, "dimmable dimmed blurring", 1),
        (DimmerMode::Inverted, "dimmable dimmed", 1),
    ];
    for (mode, expected_body, dimmer_nodes) in cases {
        let harness = Harness::new();
        let (controller, _) = harness.modal(active(mode));
        assert_eq!(harness.body(), expected_body, "dimmer {mode}");
        assert_eq!(controller.layers().dimmer_nodes(), dimmer_nodes, "dimmer {mode}");
        controller.teardown();
        harness.assert_clean();
    }
}

#[test]
fn each_dismissal_trigger_fires_exactly_once() {
    let harness = Harness::new();
    let (controller, calls) = harness.modal(active(DimmerMode::Default));
    let surface = surface_of(&controller);

    harness.host.input.press(MemoryPressTarget::Dimmer(surface));
    assert_eq!(calls.get(), 1);

    harness.host.input.press(MemoryPressTarget::Body);
    assert_eq!(calls.get(), 2);

    harness.host.input.key_down("Escape");
    assert_eq!(calls.get(), 3);

    harness.host.input.press(MemoryPressTarget::Content(surface));
    harness.host.input.key_down("Enter");
    assert_eq!(calls.get(), 3);

    assert!(controller.state().active);
    assert_eq!(controller.layers().content_nodes(), 1);
}

#[test]
fn outside_press_without_dimmer_still_dismisses() {
    let harness = Harness::new();
    let (_controller, calls) = harness.modal(active(DimmerMode::None));

    harness.host.input.press(MemoryPressTarget::Body);
    assert_eq!(calls.get(), 1);
}

#[test]
fn programmatic_close_does_not_call_on_hide() {
    let harness = Harness::new();
    let (controller, calls) = harness.modal(active(DimmerMode::Blurring));

    controller.set_active(false);

    assert_eq!(calls.get(), 0);
    assert_eq!(controller.layers().content_nodes(), 0);
    harness.assert_clean();

    harness.host.input.key_down("Escape");
    assert_eq!(calls.get(), 0);
}

#[test]
fn escape_then_owner_close_cleans_everything_up() {
    let harness = Harness::new();
    let controller = ModalController::new(harness.runtime.clone(), active(DimmerMode::Default));
    let calls = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<ModalController>>> = Rc::new(RefCell::new(None));
    {
        let calls = calls.clone();
        let slot = slot.clone();
        controller.set_on_hide(move || {
            calls.set(calls.get() + 1);
            let owner_view = slot.borrow().clone();
            if let Some(modal) = owner_view {
                modal.set_active(false);
            }
        });
    }
    *slot.borrow_mut() = Some(controller.clone());

    assert_eq!(harness.body(), "dimmable dimmed");
    assert_eq!(controller.layers().dimmer_nodes(), 1);

    harness.host.input.key_down("Escape");

    assert_eq!(calls.get(), 1);
    assert!(!controller.state().active);
    harness.assert_clean();

    slot.borrow_mut().take();
}

#[test]
fn dimmer_change_while_mounted_reconciles_without_remount() {
    let harness = Harness::new();
    let (controller, _) = harness.modal(active(DimmerMode::Blurring));
    let surface = surface_of(&controller);
    assert_eq!(harness.body(), "dimmable dimmed blurring");

    controller.set_dimmer(DimmerMode::Inverted);
    assert_eq!(harness.body(), "dimmable dimmed");
    assert_eq!(controller.layers().dimmer, Some(DimmerMode::Inverted));
    assert_eq!(surface_of(&controller), surface);

    controller.set_dimmer(DimmerMode::None);
    assert_eq!(harness.body(), "");
    assert_eq!(controller.layers().dimmer_nodes(), 0);
    assert_eq!(surface_of(&controller), surface);
}

#[test]
fn repeated_mount_cycles_do_not_leak_listeners_or_flags() {
    let harness = Harness::new();
    let (controller, calls) = harness.modal(ModalConfig::default());

    for _ in 0..4 {
        controller.set_active(true);
        assert_eq!(harness.host.input.listener_count(), 1);
        controller.set_active(false);
    }

    harness.assert_clean();
    assert_eq!(calls.get(), 0);
}

#[test]
fn stacked_modals_share_flags_and_only_topmost_dismisses() {
    let harness = Harness::new();
    let (lower, lower_calls) = harness.modal(active(DimmerMode::Default));
    let (upper, upper_calls) = harness.modal(active(DimmerMode::Blurring));
    assert_eq!(harness.body(), "dimmable dimmed blurring");
    assert_eq!(harness.runtime.flags().count("dimmed"), 2);

    harness.host.input.key_down("Escape");
    assert_eq!(upper_calls.get(), 1);
    assert_eq!(lower_calls.get(), 0);

    upper.set_active(false);
    assert_eq!(harness.body(), "dimmable dimmed");

    harness.host.input.press(MemoryPressTarget::Dimmer(surface_of(&lower)));
    assert_eq!(lower_calls.get(), 1);

    lower.set_active(false);
    harness.assert_clean();
}

#[test]
fn dropping_a_mounted_controller_reverses_side_effects() {
    let harness = Harness::new();
    let (controller, _) = harness.modal(active(DimmerMode::Inverted));
    assert_eq!(harness.host.input.listener_count(), 1);

    drop(controller);

    harness.assert_clean();
}

#[test]
fn json_configuration_drives_the_controller() {
    let harness = Harness::new();
    let config = ModalConfig::from_json(r#"{"active": true, "dimmer": "blurring", "size": "small"}"#)
        .expect("valid configuration");
    let (controller, _) = harness.modal(config);

    assert_eq!(harness.body(), "dimmable dimmed blurring");
    assert_eq!(controller.state().size.map(|size| size.token()), Some("small"));
}
