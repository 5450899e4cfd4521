//! Browser glue: document attributes and DOM event listeners.
//!
//! Native builds have no document; the functions here become no-ops there.

use crate::core::locale::{DocumentAttrs, Locale};

/// Mirror `locale` onto `<html lang dir>`.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_locale(locale: Locale) {
    let attrs = DocumentAttrs::for_locale(locale);
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", attrs.lang);
    let _ = root.set_attribute("dir", attrs.dir);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_locale(locale: Locale) {
    let _ = DocumentAttrs::for_locale(locale);
}

pub fn platform_string() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else {
        "native"
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, EventTarget, KeyboardEvent};

    use crate::core::scroll::FrameGate;

    /// Removes its listener when dropped.
    pub struct ListenerGuard {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    }

    impl Drop for ListenerGuard {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }

    pub fn listen(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<ListenerGuard> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ListenerGuard {
            target,
            event,
            callback,
        })
    }

    pub fn listen_document(
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<ListenerGuard> {
        let document = web_sys::window()?.document()?;
        listen(document.into(), event, handler)
    }

    /// Whether the event target sits inside any element matching `selector`.
    pub fn event_within(event: &Event, selector: &str) -> bool {
        event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(selector).ok().flatten())
            .is_some()
    }

    pub fn is_escape(event: &Event) -> bool {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false)
    }

    #[derive(Default)]
    struct ScrollState {
        gate: FrameGate,
        frame: Option<i32>,
        last: Option<bool>,
    }

    /// Window scroll listener throttled to one update per animation frame.
    /// Dropping it removes the listener and cancels any pending frame.
    pub struct ScrollWatcher {
        state: Rc<RefCell<ScrollState>>,
        _listener: ListenerGuard,
    }

    impl Drop for ScrollWatcher {
        fn drop(&mut self) {
            if let (Some(window), Some(id)) = (web_sys::window(), self.state.borrow_mut().frame.take()) {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn watch_scroll(on_change: impl Fn(bool) + 'static) -> Option<ScrollWatcher> {
        let window = web_sys::window()?;
        let state = Rc::new(RefCell::new(ScrollState::default()));
        let on_change: Rc<dyn Fn(bool)> = Rc::new(on_change);

        let schedule = {
            let state = state.clone();
            move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let offset = window.scroll_y().unwrap_or(0.0);
                if !state.borrow_mut().gate.on_scroll(offset) {
                    return;
                }
                let frame_state = state.clone();
                let on_change = on_change.clone();
                let frame = Closure::once_into_js(move || {
                    let changed = {
                        let mut s = frame_state.borrow_mut();
                        s.frame = None;
                        match s.gate.on_frame() {
                            Some(scrolled) if s.last != Some(scrolled) => {
                                s.last = Some(scrolled);
                                Some(scrolled)
                            }
                            _ => None,
                        }
                    };
                    if let Some(scrolled) = changed {
                        on_change(scrolled);
                    }
                });
                if let Ok(id) = window.request_animation_frame(frame.unchecked_ref()) {
                    state.borrow_mut().frame = Some(id);
                }
            }
        };

        schedule();
        let listener = listen(window.into(), "scroll", move |_| schedule())?;
        Some(ScrollWatcher {
            state,
            _listener: listener,
        })
    }
}
