//! Locale resolution from URL paths and language tags.
//!
//! The first path segment carries the locale (`/es`, `/en/...`). Anything that
//! is not a supported code resolves to [`DEFAULT_LOCALE`]; nothing here fails.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// Display languages supported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Es,
    En,
}

/// Locale used when the URL, storage and browser offer nothing usable.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

/// Dictionary consulted when a key is missing in the active locale.
pub const REFERENCE_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Native name shown in the language menu.
    pub fn label(self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
        }
    }

    /// Text direction; every supported language is left-to-right.
    pub fn dir(self) -> &'static str {
        "ltr"
    }

    /// Exact code match (`es`, `en`), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// Matches a BCP 47 tag on its language subtag, so `en-US` and `es-MX`
    /// are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let id: LanguageIdentifier = tag.parse().ok()?;
        Self::from_language_id(&id)
    }

    pub fn from_language_id(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(id.language.as_str())
    }

    /// Resolve a (possibly absent) path segment.
    pub fn resolve(segment: Option<&str>) -> Self {
        segment.and_then(Self::from_tag).unwrap_or(DEFAULT_LOCALE)
    }

    /// First requested language that maps onto a supported locale.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Option<Self> {
        requested.iter().find_map(Self::from_language_id)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Resolve the locale carried by the first segment of `path`.
pub fn resolve_from_path(path: &str) -> Locale {
    Locale::resolve(segments(path).next())
}

/// Rewrite `path` so it starts with `next`, keeping everything after the
/// current locale segment. The locale segment is recognised the same way
/// [`resolve_from_path`] does (first segment, region subtags allowed); paths
/// without one are kept whole behind the new prefix.
pub fn switch_locale_path(path: &str, next: Locale) -> String {
    let parts: Vec<&str> = segments(path).collect();
    let rest = match parts.first() {
        Some(first) if Locale::from_tag(first).is_some() => &parts[1..],
        _ => &parts[..],
    };

    let mut out = format!("/{}", next.code());
    for part in rest {
        out.push('/');
        out.push_str(part);
    }
    out
}

/// Attributes mirrored onto the document root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttrs {
    pub lang: &'static str,
    pub dir: &'static str,
}

impl DocumentAttrs {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            lang: locale.code(),
            dir: locale.dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_segments_resolve_to_themselves() {
        for locale in Locale::ALL {
            let path = format!("/{}/anything", locale.code());
            assert_eq!(resolve_from_path(&path), locale);
            assert_eq!(DocumentAttrs::for_locale(locale).lang, locale.code());
            assert_eq!(DocumentAttrs::for_locale(locale).dir, "ltr");
        }
    }

    #[test]
    fn unsupported_or_missing_segments_use_default() {
        assert_eq!(resolve_from_path("/"), DEFAULT_LOCALE);
        assert_eq!(resolve_from_path(""), DEFAULT_LOCALE);
        assert_eq!(resolve_from_path("/fr/x"), DEFAULT_LOCALE);
        assert_eq!(resolve_from_path("/%%%"), DEFAULT_LOCALE);
        assert_eq!(Locale::resolve(None), DEFAULT_LOCALE);
    }

    #[test]
    fn region_subtags_are_ignored() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de-DE"), None);
    }

    #[test]
    fn negotiate_picks_first_supported() {
        let requested: Vec<LanguageIdentifier> = ["de-DE", "en-GB", "es-ES"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(Locale::negotiate(&requested), Some(Locale::En));
        assert_eq!(Locale::negotiate(&[]), None);
    }

    #[test]
    fn switching_preserves_the_rest_of_the_path() {
        assert_eq!(switch_locale_path("/es/x/y", Locale::En), "/en/x/y");
        assert_eq!(switch_locale_path("/en", Locale::Es), "/es");
        assert_eq!(switch_locale_path("/", Locale::En), "/en");
        assert_eq!(switch_locale_path("/about/team", Locale::Es), "/es/about/team");
        assert_eq!(switch_locale_path("/es/x/", Locale::Es), "/es/x");
    }

    #[test]
    fn switching_replaces_a_region_tagged_segment() {
        assert_eq!(resolve_from_path("/en-US/x"), Locale::En);
        assert_eq!(switch_locale_path("/en-US/x", Locale::Es), "/es/x");
        assert_eq!(switch_locale_path("/es-MX/x/y", Locale::En), "/en/x/y");
        assert_eq!(switch_locale_path("/fr-FR/x", Locale::Es), "/es/fr-FR/x");
    }

    #[test]
    fn switching_only_looks_at_the_first_segment() {
        assert_eq!(resolve_from_path("/x/en"), DEFAULT_LOCALE);
        assert_eq!(switch_locale_path("/x/en", Locale::Es), "/es/x/en");
    }
}
