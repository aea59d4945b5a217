//! Frontmatter extraction and parsing.

use crate::descriptor::RawFrontMatter;

/// Extract frontmatter from markdown content.
///
/// The block is delimited by a first line containing only `---` and a later
/// line starting with `---`. Returns the raw fields and the remaining
/// content after the block.
pub fn extract_front_matter(
    source: &str,
) -> Result<(Option<RawFrontMatter>, &str), FrontMatterError> {
    let after_open = if let Some(rest) = source.strip_prefix("---\n") {
        rest
    } else if let Some(rest) = source.strip_prefix("---\r\n") {
        rest
    } else {
        return Ok((None, source));
    };

    // Find the closing line
    let Some((yaml_end, body_start)) = closing_delimiter(after_open) else {
        return Err(FrontMatterError::Unclosed);
    };

    let yaml_content = after_open[..yaml_end].trim();
    let remaining = &after_open[body_start..];

    // An empty block is a valid header with every field absent
    let raw: RawFrontMatter = if yaml_content.is_empty() {
        RawFrontMatter::default()
    } else {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?
    };

    Ok((Some(raw), remaining))
}

/// Locate the first line starting with `---`.
///
/// Returns the byte offset where that line begins and the offset just past
/// it (past its newline when present).
fn closing_delimiter(block: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']).starts_with("---") {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: Button
route: /components/button
order: 1
---

# Button Component
"#;

        let (raw, content) = extract_front_matter(source).unwrap();
        let raw = raw.unwrap();

        assert_eq!(raw.title.as_str(), Some("Button"));
        assert_eq!(raw.route.as_str(), Some("/components/button"));
        assert_eq!(raw.order.as_i64(), Some(1));
        assert!(content.contains("# Button Component"));
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (raw, content) = extract_front_matter(source).unwrap();

        assert!(raw.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_front_matter(source);

        assert!(matches!(result, Err(FrontMatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_front_matter(source);

        assert!(matches!(result, Err(FrontMatterError::InvalidYaml(_))));
    }

    #[test]
    fn empty_block_is_all_defaults() {
        let source = "---\n---\nBody";

        let (raw, content) = extract_front_matter(source).unwrap();

        assert!(raw.unwrap().title.is_null());
        assert_eq!(content, "Body");
    }

    #[test]
    fn ignores_unknown_fields() {
        let source = "---\ntitle: Card\nlayout: wide\n---\nBody";

        let (raw, _) = extract_front_matter(source).unwrap();

        assert_eq!(raw.unwrap().title.as_str(), Some("Card"));
    }

    #[test]
    fn body_keeps_leading_indentation() {
        let source = "---\ntitle: X\n---\n    indented code\n";

        let (_, content) = extract_front_matter(source).unwrap();

        assert_eq!(content, "    indented code\n");
    }
}
