//! Placeholder interpolation and rich-text slots.
//!
//! Templates use `{name}` placeholders. Rich templates may also carry
//! markup slots: `<br/>` (void) or `<a>label</a>` (wrapping). The caller
//! decides what element each slot name renders as.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Slot { name: String, inner: Option<String> },
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replace `{name}` with its value from `params`. Unknown names stay verbatim.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_ident(&after[..close]) => {
                let name = &after[..close];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Split a rich template into text and slot segments. Anything that does not
/// parse as a slot is kept as text.
pub fn parse_rich(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match parse_slot(after) {
            Some((slot, consumed)) => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(slot);
                rest = &after[consumed..];
            }
            None => {
                text.push('<');
                rest = after;
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// `src` starts right after a `<`. Returns the slot and the bytes consumed.
fn parse_slot(src: &str) -> Option<(Segment, usize)> {
    let name_len = src
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(src.len());
    let name = &src[..name_len];
    if name.is_empty() {
        return None;
    }
    let tail = &src[name_len..];
    let trimmed = tail.trim_start();
    let ws = tail.len() - trimmed.len();

    if trimmed.starts_with("/>") {
        let slot = Segment::Slot {
            name: name.to_string(),
            inner: None,
        };
        return Some((slot, name_len + ws + 2));
    }

    if ws == 0 && tail.starts_with('>') {
        let body = &tail[1..];
        let closing = format!("</{name}>");
        let end = body.find(&closing)?;
        let slot = Segment::Slot {
            name: name.to_string(),
            inner: Some(body[..end].to_string()),
        };
        return Some((slot, name_len + 1 + end + closing.len()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(name: &str, inner: Option<&str>) -> Segment {
        Segment::Slot {
            name: name.into(),
            inner: inner.map(Into::into),
        }
    }

    #[test]
    fn placeholders_are_replaced() {
        assert_eq!(interpolate("Hola, {name}", &[("name", "Ana")]), "Hola, Ana");
        assert_eq!(interpolate("{a}{b}", &[("a", "1"), ("b", "2")]), "12");
    }

    #[test]
    fn unknown_or_malformed_placeholders_stay() {
        assert_eq!(interpolate("Hi {who}", &[("name", "x")]), "Hi {who}");
        assert_eq!(interpolate("{ spaced }", &[("spaced", "x")]), "{ spaced }");
        assert_eq!(interpolate("open { only", &[("only", "x")]), "open { only");
        assert_eq!(interpolate("no params {x}", &[]), "no params {x}");
    }

    #[test]
    fn rich_void_and_wrapping_slots() {
        assert_eq!(
            parse_rich("Climb<br/>together"),
            vec![
                Segment::Text("Climb".into()),
                slot("br", None),
                Segment::Text("together".into()),
            ]
        );
        assert_eq!(
            parse_rich("Made with <heart /> by <a>Zennith</a>"),
            vec![
                Segment::Text("Made with ".into()),
                slot("heart", None),
                Segment::Text(" by ".into()),
                slot("a", Some("Zennith")),
            ]
        );
    }

    #[test]
    fn broken_markup_is_text() {
        assert_eq!(
            parse_rich("a < b and <a>unclosed"),
            vec![Segment::Text("a < b and <a>unclosed".into())]
        );
        assert_eq!(parse_rich(""), vec![]);
    }
}
