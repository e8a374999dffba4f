//! Executes reducer effects for one modal against the shared [`OverlayRuntime`].

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use leptos::logging;
use overlay_host::{InputEvent, InputHandler, Subscription};

use crate::{
    config::{DimmerMode, ModalConfig, ModalSize},
    model::{ModalState, SurfaceLayers},
    reducer::{reduce_modal, ModalAction, ModalEffect},
    runtime::OverlayRuntime,
};

type CloseCallback = Rc<dyn Fn()>;

struct ControllerInner {
    runtime: OverlayRuntime,
    state: ModalState,
    subscription: Option<Subscription>,
    on_hide: Option<CloseCallback>,
}

impl ControllerInner {
    /// Runs effects in order and reports whether a close was requested.
    fn run_effects(
        &mut self,
        this: &Weak<RefCell<ControllerInner>>,
        effects: Vec<ModalEffect>,
    ) -> bool {
        let mut close_requested = false;
        for effect in effects {
            match effect {
                ModalEffect::MountSurface(surface) => self.runtime.push_surface(surface),
                ModalEffect::UnmountSurface(surface) => self.runtime.remove_surface(surface),
                ModalEffect::ApplyFlags { surface, tokens } => {
                    self.runtime.flags().register(surface, tokens);
                }
                ModalEffect::ReleaseFlags(surface) => self.runtime.flags().release(surface),
                ModalEffect::AttachListener(surface) => {
                    let handler = input_handler(this.clone());
                    match self.runtime.input().subscribe(surface, handler) {
                        Ok(subscription) => self.subscription = Some(subscription),
                        Err(err) => {
                            logging::warn!("overlay {surface} dismissal listener failed: {err}");
                        }
                    }
                }
                ModalEffect::DetachListener(_) => {
                    if let Some(subscription) = self.subscription.take() {
                        subscription.cancel();
                    }
                }
                ModalEffect::RequestClose => close_requested = true,
            }
        }
        close_requested
    }
}

impl Drop for ControllerInner {
    // A controller dropped without teardown still reverses its side effects.
    fn drop(&mut self) {
        let effects = reduce_modal(&mut self.state, ModalAction::Teardown);
        let _ = self.run_effects(&Weak::new(), effects);
    }
}

fn input_handler(this: Weak<RefCell<ControllerInner>>) -> InputHandler {
    Rc::new(move |event: InputEvent| match this.upgrade() {
        Some(inner) => ModalController { inner }.handle_input(event),
        None => {
            logging::debug_warn!("overlay input delivered after controller drop: {event:?}");
        }
    })
}

#[derive(Clone)]
/// Handle driving one modal instance: prop changes in, side effects and close requests out.
pub struct ModalController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl fmt::Debug for ModalController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalController")
            .field("state", &self.state())
            .finish()
    }
}

impl ModalController {
    /// Creates a controller and applies `config.active`, mounting immediately when true.
    pub fn new(runtime: OverlayRuntime, config: ModalConfig) -> Self {
        let controller = Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                runtime,
                state: ModalState::from_config(config),
                subscription: None,
                on_hide: None,
            })),
        };
        controller.dispatch(ModalAction::SetActive(config.active));
        controller
    }

    /// Installs the owner's close callback, replacing any previous one.
    pub fn set_on_hide(&self, on_hide: impl Fn() + 'static) {
        self.inner.borrow_mut().on_hide = Some(Rc::new(on_hide));
    }

    /// Applies an action, runs its effects, then calls the close callback if requested.
    ///
    /// The callback runs after every internal borrow is released so it may feed props straight
    /// back into this controller.
    pub fn dispatch(&self, action: ModalAction) {
        let this = Rc::downgrade(&self.inner);
        let on_hide = {
            let mut inner = self.inner.borrow_mut();
            let effects = reduce_modal(&mut inner.state, action);
            let close_requested = inner.run_effects(&this, effects);
            close_requested.then(|| inner.on_hide.clone()).flatten()
        };
        if let Some(on_hide) = on_hide {
            on_hide();
        }
    }

    /// Owner changed `active`.
    pub fn set_active(&self, active: bool) {
        self.dispatch(ModalAction::SetActive(active));
    }

    /// Owner changed `dimmer`.
    pub fn set_dimmer(&self, dimmer: DimmerMode) {
        self.dispatch(ModalAction::SetDimmer(dimmer));
    }

    /// Owner changed `size`.
    pub fn set_size(&self, size: Option<ModalSize>) {
        self.dispatch(ModalAction::SetSize(size));
    }

    /// Owner changed `basic`.
    pub fn set_basic(&self, basic: bool) {
        self.dispatch(ModalAction::SetBasic(basic));
    }

    /// Unmounts and reverses every side effect; used when the modal leaves the tree.
    pub fn teardown(&self) {
        self.dispatch(ModalAction::Teardown);
    }

    /// Current reducer state.
    pub fn state(&self) -> ModalState {
        self.inner.borrow().state
    }

    /// Current render plan.
    pub fn layers(&self) -> SurfaceLayers {
        self.inner.borrow().state.layers()
    }

    /// Whether a dismissal subscription is attached.
    pub fn is_listening(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    // Stacked modals: only the topmost surface reacts to dismissal input.
    fn handle_input(&self, event: InputEvent) {
        let (surface, topmost) = {
            let inner = self.inner.borrow();
            let surface = inner.state.surface;
            let topmost = surface.is_some_and(|surface| inner.runtime.is_topmost(surface));
            (surface, topmost)
        };
        match surface {
            Some(_) if topmost => self.dispatch(ModalAction::Input(event)),
            Some(_) => {}
            None => {
                logging::debug_warn!("overlay input delivered while unmounted: {event:?}");
            }
        }
    }
}
