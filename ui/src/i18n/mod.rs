//! Internationalization (i18n) support for `ranky-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the JSON dictionaries)
//! - `serde_json` (parsing them into the typed [`Message`] tree)
//! - `unic-langid` + `i18n-embed` (matching browser / OS languages)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en.json   (reference: consulted when a key is missing elsewhere)
//!   es.json
//! ```
//!
//! Lookups go active locale → reference locale → the raw key, so a missing
//! entry shows up as its key instead of breaking the page.
//!
//! There is no global "current language". The page shell creates one
//! [`I18n`] context with [`use_i18n_provider`]; sections read it through
//! [`use_translator`]. The locale changes only through
//! [`I18n::resolve_route`] (URL driven) and [`I18n::change_locale`] (user
//! driven).
//!
//! Usage in a component:
//! ```ignore
//! let tr = use_translator();
//! rsx! { h2 { {tr.t("howItWorks.faq.title")} } }
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to `core::locale::Locale`.
//! 2. Copy `i18n/en.json` to `i18n/<code>.json` and translate every value
//!    (keep keys and `{placeholders}` identical).
//! 3. Run the tests to ensure completeness.

mod messages;
mod template;

pub use messages::Message;
pub use template::{interpolate, parse_rich, Segment};

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::locale::{self, Locale, DEFAULT_LOCALE, REFERENCE_LOCALE};
use crate::core::platform;
use crate::core::storage::{LocaleStore, PlatformStore};
use crate::routing;

/// Embed all dictionaries under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Dictionaries;

/// Parsed dictionaries for every supported locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: BTreeMap<Locale, Message>,
}

impl Catalog {
    /// Load the embedded `<code>.json` files. A missing or malformed file
    /// leaves that locale empty; lookups then fall through to the reference.
    pub fn embedded() -> Self {
        let mut catalog = Catalog::default();
        for locale in Locale::ALL {
            let file_name = format!("{}.json", locale.code());
            match Dictionaries::get(&file_name) {
                Some(file) => match serde_json::from_slice::<Message>(&file.data) {
                    Ok(dict) => {
                        catalog.dictionaries.insert(locale, dict);
                    }
                    Err(err) => warn!("[i18n] {file_name} is not a valid dictionary: {err}"),
                },
                None => warn!("[i18n] no embedded dictionary for {locale}"),
            }
        }
        catalog
    }

    /// Build a catalog from raw JSON sources.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, serde_json::Error> {
        let mut dictionaries = BTreeMap::new();
        for (locale, src) in sources {
            dictionaries.insert(locale, serde_json::from_str(src)?);
        }
        Ok(Self { dictionaries })
    }

    pub fn dictionary(&self, locale: Locale) -> Option<&Message> {
        self.dictionaries.get(&locale)
    }

    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            locale,
            catalog: self,
        }
    }
}

/// Catalog shared by every translator in the process.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::embedded);

/// Read-only view of the catalog for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    locale: Locale,
    catalog: &'a Catalog,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// First node at `key` satisfying `accept`, searching the active locale
    /// and then the reference locale.
    fn find<T>(&self, key: &str, accept: impl Fn(&'a Message) -> Option<T>) -> Option<T> {
        [self.locale, REFERENCE_LOCALE]
            .into_iter()
            .filter_map(|l| self.catalog.dictionary(l))
            .find_map(|dict| dict.lookup(key).and_then(&accept))
    }

    /// Raw template at `key`, if any locale in the chain has one.
    fn template(&self, key: &str) -> Option<&'a str> {
        let found = self.find(key, Message::as_text);
        if found.is_none() {
            debug!("[i18n] missing key {key} ({})", self.locale);
        }
        found
    }

    pub fn t(&self, key: &str) -> String {
        self.template(key).unwrap_or(key).to_string()
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.template(key).unwrap_or(key), params)
    }

    /// Rich template split into text and slot segments.
    pub fn rich(&self, key: &str) -> Vec<Segment> {
        parse_rich(self.template(key).unwrap_or(key))
    }

    /// Length of the list at `key`, 0 when there is none.
    pub fn count(&self, key: &str) -> usize {
        self.find(key, Message::as_list).map_or(0, <[_]>::len)
    }

    /// String items of the list at `key`.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.find(key, Message::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Message::as_text)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Translation context provided by the page shell.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    locale: Signal<Locale>,
    path: Signal<String>,
    store: CopyValue<Rc<dyn LocaleStore>>,
}

impl I18n {
    /// Current locale; reading it subscribes the calling component.
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    pub fn translator(&self) -> Translator<'static> {
        CATALOG.translator(self.locale())
    }

    /// Path the context last resolved or navigated to.
    pub fn path(&self) -> String {
        self.path.peek().clone()
    }

    /// Adopt the locale carried by `path` (first segment, default otherwise)
    /// and mirror it onto the document.
    pub fn resolve_route(&mut self, path: &str) -> Locale {
        let resolved = locale::resolve_from_path(path);
        if *self.path.peek() != path {
            self.path.set(path.to_string());
        }
        if *self.locale.peek() != resolved {
            debug!("[i18n] route {path} -> {resolved}");
            self.locale.set(resolved);
        }
        platform::apply_document_locale(resolved);
        resolved
    }

    /// User-initiated switch: rewrite the path's locale segment, persist the
    /// choice and mirror it onto the document.
    pub fn change_locale(&mut self, next: Locale) {
        let target = locale::switch_locale_path(&self.path.peek(), next);
        self.locale.set(next);
        self.path.set(target.clone());
        platform::apply_document_locale(next);

        if let Err(err) = self.store.read().save(next) {
            warn!("[i18n] {err}; {next} kept for this session only");
        }
        routing::replace_path(&target);
    }
}

/// Create and provide the [`I18n`] context for the page at `path`. Call
/// once, in the page shell; later path changes go through
/// [`I18n::resolve_route`].
pub fn use_i18n_provider(path: &str) -> I18n {
    use_i18n_provider_with(path, Rc::new(PlatformStore))
}

/// [`use_i18n_provider`] persisting through `store`. Only the first call's
/// store is kept.
pub fn use_i18n_provider_with(path: &str, store: Rc<dyn LocaleStore>) -> I18n {
    let locale = use_signal(|| locale::resolve_from_path(path));
    let path = use_signal(|| path.to_string());
    let store = use_hook(|| CopyValue::new(store));
    use_context_provider(|| I18n {
        locale,
        path,
        store,
    })
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}

/// Translator for the current locale, subscribed to locale changes.
pub fn use_translator() -> Translator<'static> {
    use_i18n().translator()
}

/// Locale to use when the URL carries none: the persisted choice, then the
/// browser / OS languages, then the default.
pub fn initial_locale() -> Locale {
    initial_locale_from(&PlatformStore, &requested_languages())
}

/// [`initial_locale`] over an explicit store and language list. A failing
/// store counts as nothing stored.
pub fn initial_locale_from(store: &dyn LocaleStore, requested: &[LanguageIdentifier]) -> Locale {
    match store.load() {
        Ok(Some(saved)) => return saved,
        Ok(None) => {}
        Err(err) => warn!("[i18n] {err}"),
    }
    Locale::negotiate(requested).unwrap_or(DEFAULT_LOCALE)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Mutex;

    use dioxus::dioxus_core::VirtualDom;

    use crate::core::storage::{MemoryStore, StorageError};
    use crate::routing::{register_nav, NavHooks};

    static REPLACED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn record_replace(path: &str) {
        REPLACED.lock().unwrap().push(path.to_string());
    }

    thread_local! {
        static STORE: Rc<MemoryStore> = Rc::new(MemoryStore::default());
        static PROVIDED: RefCell<Option<I18n>> = const { RefCell::new(None) };
    }

    #[allow(non_snake_case)]
    fn Shell() -> Element {
        let store: Rc<dyn LocaleStore> = STORE.with(|s| s.clone());
        let i18n = use_i18n_provider_with("/es/x/y", store);
        PROVIDED.with(|p| *p.borrow_mut() = Some(i18n));
        rsx! { "{i18n.locale()}" }
    }

    struct BrokenStore;

    impl LocaleStore for BrokenStore {
        fn load(&self) -> Result<Option<Locale>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _: Locale) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn langs(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn change_locale_rewrites_persists_and_navigates() {
        register_nav(NavHooks {
            replace: record_replace,
        });

        let mut dom = VirtualDom::new(Shell);
        dom.rebuild_in_place();

        let mut i18n = PROVIDED.with(|p| *p.borrow()).expect("context provided");
        dom.in_runtime(|| {
            assert_eq!(*i18n.locale.peek(), Locale::Es);
            i18n.change_locale(Locale::En);
            assert_eq!(*i18n.locale.peek(), Locale::En);
            assert_eq!(i18n.path(), "/en/x/y");
        });

        assert_eq!(STORE.with(|s| s.saved()), Some(Locale::En));
        assert!(REPLACED.lock().unwrap().iter().any(|p| p == "/en/x/y"));
    }

    #[test]
    fn stored_locale_beats_requested_languages() {
        let store = MemoryStore::new(Some(Locale::En));
        assert_eq!(initial_locale_from(&store, &langs(&["es-ES"])), Locale::En);
    }

    #[test]
    fn requested_languages_beat_the_default() {
        let store = MemoryStore::default();
        assert_eq!(initial_locale_from(&store, &langs(&["de-DE", "en-GB"])), Locale::En);
        assert_eq!(initial_locale_from(&BrokenStore, &langs(&["en"])), Locale::En);
    }

    #[test]
    fn nothing_usable_falls_back_to_default() {
        assert_eq!(initial_locale_from(&MemoryStore::default(), &[]), DEFAULT_LOCALE);
        assert_eq!(initial_locale_from(&BrokenStore, &langs(&["de"])), DEFAULT_LOCALE);
    }

    #[test]
    fn every_locale_has_an_embedded_dictionary() {
        for locale in Locale::ALL {
            assert!(CATALOG.dictionary(locale).is_some(), "missing {locale}");
        }
    }

    #[test]
    fn basic_lookup_works() {
        let en = CATALOG.translator(Locale::En);
        let es = CATALOG.translator(Locale::Es);
        assert_eq!(en.t("navbar.toggleLabel"), "Change language");
        assert_eq!(es.t("navbar.toggleLabel"), "Cambiar idioma");
    }

    #[test]
    fn missing_key_returns_the_key() {
        let key = "nonexistent.key";
        for locale in Locale::ALL {
            assert_eq!(CATALOG.translator(locale).t(key), key);
            assert_eq!(CATALOG.translator(locale).count(key), 0);
        }
    }

    #[test]
    fn falls_back_to_reference_locale() {
        let catalog = Catalog::from_sources([
            (Locale::En, r#"{ "a": { "b": "english {n}" }, "only": ["x", "y"] }"#),
            (Locale::Es, r#"{ "a": {} }"#),
        ])
        .unwrap();
        let es = catalog.translator(Locale::Es);
        let key = "a.b";
        assert_eq!(es.t(key), "english {n}");
        assert_eq!(es.t_with(key, &[("n", "3")]), "english 3");
        assert_eq!(es.strings("only"), vec!["x", "y"]);
    }

    #[test]
    fn group_nodes_are_not_text() {
        let catalog = Catalog::from_sources([(Locale::En, r#"{ "a": { "b": "x" } }"#)]).unwrap();
        let en = catalog.translator(Locale::En);
        let key = "a";
        assert_eq!(en.t(key), "a");
    }

    #[test]
    fn faq_items_are_indexable() {
        for locale in Locale::ALL {
            let tr = CATALOG.translator(locale);
            let n = tr.count("howItWorks.faq.items");
            assert!(n > 0);
            for i in 0..n {
                let q = format!("howItWorks.faq.items.{i}.q");
                assert_ne!(tr.t(&q), q);
            }
        }
    }

    #[test]
    fn rich_title_has_a_line_break_slot() {
        let segments = CATALOG.translator(Locale::En).rich("hero.title");
        assert!(segments
            .iter()
            .any(|s| matches!(s, Segment::Slot { name, .. } if name == "br")));
    }
}
