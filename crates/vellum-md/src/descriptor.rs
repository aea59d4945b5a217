//! Page descriptors for the docs index.

use serde::Deserialize;
use serde_yaml::Value;

/// Raw frontmatter fields as authored in a markdown page.
///
/// Nothing here is validated. Any field may be absent or carry the wrong
/// type, and `tags` in particular shows up as a real YAML list, a bracketed
/// string, or a bare word depending on the author. Fields outside this set
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFrontMatter {
    pub title: Value,
    pub route: Value,
    pub description: Value,
    pub section: Value,
    pub group: Value,
    pub order: Value,
    #[serde(rename = "navLabel")]
    pub nav_label: Value,
    pub tags: Value,
}

/// A normalized page descriptor with every field defined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocDescriptor {
    /// Page title
    pub title: String,

    /// URL route the page is served under
    pub route: String,

    /// Short description for search results
    pub description: String,

    /// Top-level navigation section
    pub section: String,

    /// Group within the section
    pub group: String,

    /// Order within the group (lower = first)
    pub order: i64,

    /// Navigation label override
    pub nav_label: String,

    /// Search tags
    pub tags: Vec<String>,
}

impl DocDescriptor {
    /// Normalize raw frontmatter into a descriptor.
    ///
    /// Never fails: missing or malformed fields degrade to defaults.
    pub fn from_raw(raw: &RawFrontMatter) -> Self {
        Self {
            title: text_value(&raw.title),
            route: text_value(&raw.route),
            description: text_value(&raw.description),
            section: text_value(&raw.section),
            group: text_value(&raw.group),
            order: order_value(&raw.order),
            nav_label: text_value(&raw.nav_label),
            tags: parse_tags(&raw.tags),
        }
    }

    /// Whether this page belongs in the index.
    ///
    /// Pages without both a title and a route are left out.
    pub fn is_indexable(&self) -> bool {
        !self.title.is_empty() && !self.route.is_empty()
    }
}

/// Coerce a scalar field to text, defaulting to empty.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce the `order` field to an integer, defaulting to 0.
fn order_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Normalize the `tags` field into a list of tag strings.
///
/// Accepts a real YAML list, a bracketed list rendered as text
/// (`"[a, b, 'c']"`), or a bare word. The bracketed form is split on every
/// comma; commas inside quoted tags are not protected.
pub fn parse_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => {
            if s.is_empty() {
                return Vec::new();
            }
            let trimmed = s.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() >= 2 {
                trimmed[1..trimmed.len() - 1]
                    .split(',')
                    .map(|token| strip_quotes(token.trim()))
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            } else {
                vec![s.clone()]
            }
        }
        _ => Vec::new(),
    }
}

/// Strip one layer of matching single or double quotes.
fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 {
        let bytes = token.as_bytes();
        let (first, last) = (bytes[0], bytes[token.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn parses_bracketed_tag_list() {
        let tags = parse_tags(&text("[a, b, 'c']"));
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn parses_double_quoted_tokens() {
        let tags = parse_tags(&text(r#"["layout", "grid"]"#));
        assert_eq!(tags, vec!["layout", "grid"]);
    }

    #[test]
    fn bare_word_is_single_tag() {
        let tags = parse_tags(&text("solo"));
        assert_eq!(tags, vec!["solo"]);
    }

    #[test]
    fn real_list_passes_through() {
        let tags = parse_tags(&Value::Sequence(vec![text("x"), text("y")]));
        assert_eq!(tags, vec!["x", "y"]);

        let empty = parse_tags(&Value::Sequence(vec![]));
        assert!(empty.is_empty());
    }

    #[test]
    fn absent_tags_are_empty() {
        assert!(parse_tags(&Value::Null).is_empty());
        assert!(parse_tags(&text("")).is_empty());
        assert!(parse_tags(&Value::Bool(true)).is_empty());
    }

    #[test]
    fn bracketed_list_drops_empty_tokens() {
        let tags = parse_tags(&text("[a, , b,]"));
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn normalizes_missing_fields_to_defaults() {
        let descriptor = DocDescriptor::from_raw(&RawFrontMatter::default());

        assert_eq!(descriptor, DocDescriptor::default());
        assert!(!descriptor.is_indexable());
    }

    #[test]
    fn normalizes_full_record() {
        let raw: RawFrontMatter = serde_yaml::from_str(
            r#"
title: Carousel
route: /components/carousel
description: Rotating content panels
section: Components
group: Display
order: 3
navLabel: Carousel
tags: [carousel, display]
"#,
        )
        .unwrap();

        let descriptor = DocDescriptor::from_raw(&raw);

        assert_eq!(descriptor.title, "Carousel");
        assert_eq!(descriptor.route, "/components/carousel");
        assert_eq!(descriptor.section, "Components");
        assert_eq!(descriptor.group, "Display");
        assert_eq!(descriptor.order, 3);
        assert_eq!(descriptor.nav_label, "Carousel");
        assert_eq!(descriptor.tags, vec!["carousel", "display"]);
        assert!(descriptor.is_indexable());
    }

    #[test]
    fn coerces_scalar_types_to_text() {
        let raw = RawFrontMatter {
            title: Value::Number(5.into()),
            route: text("/x"),
            ..Default::default()
        };

        let descriptor = DocDescriptor::from_raw(&raw);

        assert_eq!(descriptor.title, "5");
        assert!(descriptor.is_indexable());
    }

    #[test]
    fn coerces_order_values() {
        assert_eq!(order_value(&Value::Number(7.into())), 7);
        assert_eq!(order_value(&text("12")), 12);
        assert_eq!(order_value(&text(" 3 ")), 3);
        assert_eq!(order_value(&text("not a number")), 0);
        assert_eq!(order_value(&Value::Null), 0);
    }

    #[test]
    fn title_only_is_not_indexable() {
        let raw = RawFrontMatter {
            title: text("Draft page"),
            ..Default::default()
        };

        assert!(!DocDescriptor::from_raw(&raw).is_indexable());
    }
}
