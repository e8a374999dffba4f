//! Document-level pointer and key listeners for overlay dismissal.

use overlay_host::{InputEventBus, InputHandler, Subscription, SurfaceId};

/// DOM event used for pointer dismissal.
pub const POINTER_EVENT: &str = "click";
/// DOM event used for key dismissal.
pub const KEY_EVENT: &str = "keydown";

#[derive(Debug, Clone, Copy, Default)]
/// Browser input bus registering listeners on `document`.
pub struct WebInputEventBus;

/// Whether an event was dispatched before the listener was attached.
///
/// The click that opens an overlay is still bubbling when the overlay subscribes, so it reaches
/// the new document listener; its `timeStamp` predates the attach time.
pub fn predates_attach(event_stamp: f64, attached_at: f64) -> bool {
    event_stamp < attached_at
}

#[cfg(target_arch = "wasm32")]
fn classify_target(
    target: Option<web_sys::EventTarget>,
    scope: SurfaceId,
) -> overlay_host::HitRegion {
    use overlay_host::HitRegion;
    use wasm_bindgen::JsCast;

    use crate::dom::{surface_selector, DIMMER_KIND, MODAL_KIND};

    let Some(node) = target.and_then(|target| target.dyn_into::<web_sys::Node>().ok()) else {
        return HitRegion::Outside;
    };
    let element = match node.dyn_into::<web_sys::Element>() {
        Ok(element) => element,
        Err(node) => match node.parent_element() {
            Some(parent) => parent,
            None => return HitRegion::Outside,
        },
    };

    let within = |kind: &str| matches!(element.closest(&surface_selector(kind, scope)), Ok(Some(_)));
    if within(MODAL_KIND) {
        HitRegion::Content
    } else if within(DIMMER_KIND) {
        HitRegion::Dimmer
    } else {
        HitRegion::Outside
    }
}

impl InputEventBus for WebInputEventBus {
    fn subscribe(&self, scope: SurfaceId, handler: InputHandler) -> Result<Subscription, String> {
        #[cfg(target_arch = "wasm32")]
        {
            use overlay_host::InputEvent;
            use wasm_bindgen::{closure::Closure, JsCast};

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;

            let attached_at = web_sys::window()
                .and_then(|window| window.performance())
                .map_or(0.0, |performance| performance.now());
            let pointer_handler = handler.clone();
            let on_pointer = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |ev: web_sys::Event| {
                    if predates_attach(ev.time_stamp(), attached_at) {
                        return;
                    }
                    pointer_handler(InputEvent::Pointer(classify_target(ev.target(), scope)));
                },
            ));
            let on_key = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
                move |ev: web_sys::KeyboardEvent| handler(InputEvent::Key(ev.key())),
            ));

            document
                .add_event_listener_with_callback(POINTER_EVENT, on_pointer.as_ref().unchecked_ref())
                .map_err(|err| format!("failed to attach {POINTER_EVENT} listener: {err:?}"))?;
            if let Err(err) = document
                .add_event_listener_with_callback(KEY_EVENT, on_key.as_ref().unchecked_ref())
            {
                let _ = document.remove_event_listener_with_callback(
                    POINTER_EVENT,
                    on_pointer.as_ref().unchecked_ref(),
                );
                return Err(format!("failed to attach {KEY_EVENT} listener: {err:?}"));
            }

            return Ok(Subscription::new(move || {
                let _ = document.remove_event_listener_with_callback(
                    POINTER_EVENT,
                    on_pointer.as_ref().unchecked_ref(),
                );
                let _ = document
                    .remove_event_listener_with_callback(KEY_EVENT, on_key.as_ref().unchecked_ref());
                // Detach usually runs from inside one of these closures; free them after the
                // current dispatch returns.
                wasm_bindgen_futures::spawn_local(async move {
                    drop((on_pointer, on_key));
                });
            }));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (scope, handler);
            Err("document unavailable".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissal_listens_for_clicks() {
        assert_eq!(POINTER_EVENT, "click");
        assert_eq!(KEY_EVENT, "keydown");
    }

    #[test]
    fn opening_click_is_skipped_but_later_clicks_are_not() {
        let attached_at = 1_250.0;
        assert!(predates_attach(1_249.5, attached_at));
        assert!(!predates_attach(attached_at, attached_at));
        assert!(!predates_attach(1_900.0, attached_at));
    }
}
