//! Hooks shared by the page sections.
//!
//! Everything that touches `window`/`document` goes through
//! `core::platform`; off the web these hooks keep their initial state.

use dioxus::prelude::*;

use crate::core::capability::{BrowserCapabilities, CapabilityProvider, MotionPolicy};
use crate::core::menu::LanguageMenu;

/// Detect device capabilities once and provide the resulting policy.
/// Call once, in the page shell.
pub fn use_motion_policy_provider() -> MotionPolicy {
    let policy = use_hook(|| BrowserCapabilities.motion_policy());
    use_context_provider(|| policy)
}

/// Policy provided by the page shell; static rendering when none was provided.
pub fn use_motion_policy() -> MotionPolicy {
    try_use_context::<MotionPolicy>().unwrap_or_default()
}

/// Whether the window is scrolled past the shadow threshold. Updates at most
/// once per animation frame and only when the value flips.
pub fn use_scrolled() -> bool {
    let scrolled = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        use_hook(move || {
            let watcher = crate::core::platform::watch_scroll(move |value| {
                let mut scrolled = scrolled;
                scrolled.set(value);
            });
            std::rc::Rc::new(watcher)
        });
    }

    scrolled()
}

/// Close `menu` on pointer-down outside any element matching `within`, or on
/// Escape. Listeners live as long as the calling component and do nothing
/// while the menu is closed.
pub fn use_menu_dismissal(menu: Signal<LanguageMenu>, within: &'static str) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::core::menu::MenuEvent;
        use crate::core::platform;

        let mut menu = menu;
        use_hook(move || {
            let pointer = platform::listen_document("pointerdown", move |event| {
                if menu.peek().is_open() {
                    let inside = platform::event_within(&event, within);
                    menu.write().handle(MenuEvent::PointerDown { inside });
                }
            });
            let keys = platform::listen_document("keydown", move |event| {
                if menu.peek().is_open() && platform::is_escape(&event) {
                    menu.write().handle(MenuEvent::Escape);
                }
            });
            std::rc::Rc::new((pointer, keys))
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (menu, within);
}

/// Run `on_escape` whenever Escape is pressed anywhere in the document while
/// `active` holds. Only the handlers from the first render are installed.
pub fn use_escape_key(active: impl Fn() -> bool + 'static, on_escape: impl FnMut() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::core::platform;

        use_hook(move || {
            let mut on_escape = on_escape;
            let guard = platform::listen_document("keydown", move |event| {
                if active() && platform::is_escape(&event) {
                    on_escape();
                }
            });
            std::rc::Rc::new(guard)
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (active, on_escape);
}
