use std::collections::BTreeSet;

use ui::i18n::Message;

/// Translation completeness test.
/// Ensures every non-reference locale provides exactly the leaf paths of the
/// reference dictionary (`en.json`), and that each translation keeps the
/// same `{placeholders}` and `<slots>`.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<code>.json` from a copy of `en.json`
/// 2. Register it in `LOCALES` below
/// 3. Run `cargo test -p ranky-ui` to confirm completeness.
const EN: &str = include_str!("../i18n/en.json");

const LOCALES: &[(&str, &str)] = &[
    ("es", include_str!("../i18n/es.json")),
    // Add new locales here.
];

fn parse(code: &str, src: &str) -> Message {
    serde_json::from_str(src).unwrap_or_else(|err| panic!("{code}.json is not valid: {err}"))
}

/// `{name}` placeholders and `<name` slot openings in a template.
fn markers(text: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for (open, close) in [('{', '}'), ('<', '>')] {
        let mut rest = text;
        while let Some(start) = rest.find(open) {
            let after = &rest[start + 1..];
            let Some(end) = after.find(close) else {
                break;
            };
            let inner = after[..end].trim_end_matches('/').trim();
            if !inner.starts_with('/') {
                found.insert(format!("{open}{inner}{close}"));
            }
            rest = &after[end + 1..];
        }
    }
    found
}

#[test]
fn all_locales_have_all_reference_keys() {
    let reference = parse("en", EN);
    let reference_paths: BTreeSet<String> = reference.leaf_paths().into_iter().collect();
    assert!(!reference_paths.is_empty(), "Reference (en) contains no keys.");

    let mut failures = Vec::new();

    for (code, src) in LOCALES {
        let dict = parse(code, src);
        let paths: BTreeSet<String> = dict.leaf_paths().into_iter().collect();

        let missing: Vec<_> = reference_paths.difference(&paths).cloned().collect();
        let extra: Vec<_> = paths.difference(&reference_paths).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {code} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {code} has {} key(s) unknown to en:\n  {}",
                extra.len(),
                extra.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en.json, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn translations_keep_placeholders_and_slots() {
    let reference = parse("en", EN);
    let mut failures = Vec::new();

    for (code, src) in LOCALES {
        let dict = parse(code, src);
        for path in reference.leaf_paths() {
            let (Some(en), Some(other)) = (
                reference.lookup(&path).and_then(Message::as_text),
                dict.lookup(&path).and_then(Message::as_text),
            ) else {
                continue;
            };
            let (expected, actual) = (markers(en), markers(other));
            if expected != actual {
                failures.push(format!("{code}:{path}: expected {expected:?}, found {actual:?}"));
            }
        }
    }

    assert!(failures.is_empty(), "Placeholder mismatch:\n{}", failures.join("\n"));
}

#[test]
fn marker_scan_sees_both_kinds() {
    let found = markers("Made with <heart/> by <a>x</a> in {year}");
    let expected: BTreeSet<String> = ["<heart>", "<a>", "{year}"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(found, expected);
}
