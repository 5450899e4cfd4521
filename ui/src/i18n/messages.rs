//! Typed dictionary tree.
//!
//! A dictionary is a recursive structure of strings, lists and groups,
//! addressed by dot-separated paths. Numeric segments index into lists, so
//! `howItWorks.faq.items.0.q` reaches the first FAQ question.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    List(Vec<Message>),
    Group(BTreeMap<String, Message>),
}

impl Default for Message {
    fn default() -> Self {
        Message::Group(BTreeMap::new())
    }
}

impl Message {
    /// Walk `path` from this node. Any segment that does not fit the node
    /// shape yields `None`.
    pub fn lookup(&self, path: &str) -> Option<&Message> {
        path.split('.').try_fold(self, |node, segment| match node {
            Message::Group(children) => children.get(segment),
            Message::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Message::Text(_) => None,
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Message]> {
        match self {
            Message::List(items) => Some(items),
            _ => None,
        }
    }

    /// Every path that ends in a string, in sorted order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaves(self, String::new(), &mut out);
        out
    }
}

fn collect_leaves(node: &Message, prefix: String, out: &mut Vec<String>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };
    match node {
        Message::Text(_) => out.push(prefix.clone()),
        Message::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect_leaves(item, join(&idx.to_string()), out);
            }
        }
        Message::Group(children) => {
            for (key, child) in children {
                collect_leaves(child, join(key), out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Message {
        serde_json::from_str(
            r#"{
                "hero": { "title": "Hi", "badges": ["a", "b"] },
                "faq": { "items": [ { "q": "Q1", "a": "A1" } ] }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn dot_paths_reach_nested_values() {
        let dict = sample();
        assert_eq!(dict.lookup("hero.title").and_then(Message::as_text), Some("Hi"));
        assert_eq!(dict.lookup("hero.badges.1").and_then(Message::as_text), Some("b"));
        assert_eq!(dict.lookup("faq.items.0.a").and_then(Message::as_text), Some("A1"));
        assert_eq!(dict.lookup("faq.items").and_then(Message::as_list).map(<[_]>::len), Some(1));
    }

    #[test]
    fn mismatched_paths_are_none() {
        let dict = sample();
        assert!(dict.lookup("hero.title.deeper").is_none());
        assert!(dict.lookup("hero.badges.x").is_none());
        assert!(dict.lookup("hero.badges.9").is_none());
        assert!(dict.lookup("").is_none());
        assert!(dict.lookup("nope").is_none());
    }

    #[test]
    fn leaf_paths_are_flattened() {
        assert_eq!(
            sample().leaf_paths(),
            vec!["faq.items.0.a", "faq.items.0.q", "hero.badges.0", "hero.badges.1", "hero.title"]
        );
    }
}
