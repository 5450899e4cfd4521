#![cfg(test)]
/*!
Keyboard and focus lint.

The language menu and the credits dialog close on Escape through a single
document-level `keydown` listener (`use_menu_dismissal` / `use_escape_key`).
A second element-level handler would fire the same close twice, so the
component sources must not match on `Key::Escape` themselves.

Focus moves on mount are best effort; a failure is logged, never dropped.
*/

const NAVBAR_SRC: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/components/app_navbar.rs"
));
const FOOTER_SRC: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/components/footer.rs"
));

#[test]
fn components_do_not_handle_escape_themselves() {
    for (name, src) in [("app_navbar.rs", NAVBAR_SRC), ("footer.rs", FOOTER_SRC)] {
        assert!(!src.contains("Key::Escape"), "{name} handles Escape on an element");
    }
}

#[test]
fn escape_goes_through_the_document_listeners() {
    assert!(NAVBAR_SRC.contains("use_menu_dismissal("));
    assert!(FOOTER_SRC.contains("use_escape_key("));
}

#[test]
fn focus_failures_are_logged() {
    for (name, src) in [("app_navbar.rs", NAVBAR_SRC), ("footer.rs", FOOTER_SRC)] {
        assert!(src.contains("set_focus(true)"), "{name} no longer moves focus");
        assert!(!src.contains("let _ = evt.set_focus"), "{name} drops a focus error");
        assert!(src.contains("could not focus"), "{name} does not log focus failures");
    }
}
