use dioxus::prelude::*;

use crate::i18n::Segment;

/// Render parsed rich-text segments. Plain text is emitted as-is; each slot
/// is handed to `slot` with its name and inner text.
pub fn render_rich(
    segments: Vec<Segment>,
    slot: impl Fn(&str, Option<&str>) -> Element,
) -> Element {
    let nodes = segments.into_iter().map(|segment| match segment {
        Segment::Text(text) => rsx! { "{text}" },
        Segment::Slot { name, inner } => slot(&name, inner.as_deref()),
    });
    rsx! { {nodes} }
}

/// Slot renderer for templates that only use line breaks.
pub fn line_breaks(name: &str, inner: Option<&str>) -> Element {
    match name {
        "br" => rsx! { br {} },
        _ => rsx! { {inner.unwrap_or_default()} },
    }
}
