//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Opening `---` line, lazily matched block, closing `---` line, then the body
    static ref FRONT_MATTER: Regex =
        Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$").unwrap();
}

/// A document split into its front-matter and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// `key: value` pairs from the front-matter block
    pub metadata: HashMap<String, String>,
    /// Everything after the closing delimiter
    pub body: String,
}

impl ParsedDocument {
    /// Split raw document text into metadata and body.
    ///
    /// A document without a leading front-matter block is not an error:
    /// the metadata is empty and the body is the whole input.
    pub fn parse(raw: &str) -> Self {
        let Some(caps) = FRONT_MATTER.captures(raw) else {
            return Self {
                metadata: HashMap::new(),
                body: raw.to_string(),
            };
        };

        let block = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let metadata = block
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                Some((key.trim().to_string(), value.trim().to_string()))
            })
            .collect();

        Self {
            metadata,
            body: body.to_string(),
        }
    }

    /// Look up a metadata value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-05\n---\nBody text";

        let doc = ParsedDocument::parse(content);
        assert_eq!(doc.metadata.len(), 2);
        assert_eq!(doc.get("title"), Some("Hello"));
        assert_eq!(doc.get("date"), Some("2024-01-05"));
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let content = "---\n  title  :   Spaced Out  \ntags:rust, web\n---\n\n# Heading\n";

        let doc = ParsedDocument::parse(content);
        assert_eq!(doc.get("title"), Some("Spaced Out"));
        assert_eq!(doc.get("tags"), Some("rust, web"));
        // Blank lines right after the closing delimiter belong to it
        assert_eq!(doc.body, "# Heading\n");
    }

    #[test]
    fn test_splits_on_first_colon() {
        let content = "---\nsource: https://example.com:8080/a\n---\nbody";

        let doc = ParsedDocument::parse(content);
        assert_eq!(doc.get("source"), Some("https://example.com:8080/a"));
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let content = "---\ntitle: Kept\njust a stray line\n\n---\nbody";

        let doc = ParsedDocument::parse(content);
        assert_eq!(doc.metadata.len(), 1);
        assert_eq!(doc.get("title"), Some("Kept"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\ntitle: not metadata\n";

        let doc = ParsedDocument::parse(content);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\ntitle: Never closed\nbody";

        let doc = ParsedDocument::parse(content);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_closing_delimiter_needs_newline() {
        let content = "---\ntitle: Dangling\n---";

        let doc = ParsedDocument::parse(content);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_later_separator_stays_in_body() {
        let content = "---\ntitle: Rules\n---\nabove\n\n---\nbelow\n";

        let doc = ParsedDocument::parse(content);
        assert_eq!(doc.get("title"), Some("Rules"));
        assert_eq!(doc.body, "above\n\n---\nbelow\n");
    }
}
