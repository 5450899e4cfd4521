//! Language-switch menu state machine.
//!
//! Opening moves focus to the first item; selecting, pressing Escape or
//! pressing the pointer outside the menu and its trigger closes it.

use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Trigger button activated.
    Toggle,
    /// A language item was chosen.
    Select(Locale),
    /// Pointer pressed somewhere in the document.
    PointerDown { inside: bool },
    Escape,
}

/// Side effects the view must carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    FocusFirstItem,
    Switch(Locale),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageMenu {
    open: bool,
}

impl LanguageMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuEffect> {
        match event {
            MenuEvent::Toggle => {
                self.open = !self.open;
                self.open.then_some(MenuEffect::FocusFirstItem)
            }
            MenuEvent::Select(locale) => {
                self.open = false;
                Some(MenuEffect::Switch(locale))
            }
            MenuEvent::PointerDown { inside: false } | MenuEvent::Escape => {
                self.open = false;
                None
            }
            MenuEvent::PointerDown { inside: true } => None,
        }
    }
}
