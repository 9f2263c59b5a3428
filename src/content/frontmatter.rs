//! Front-matter parsing
//!
//! A post may start with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "Налоговый вычет: кому положен"
//! date: 2024-01-10
//! author: Иван Петров
//! ---
//! Body in markdown...
//! ```
//!
//! Each line between the fences is a flat `key: value` pair. Anything that
//! does not fit this layout is not an error: the whole document becomes the
//! body and only the fallback title is set.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::helpers::parse_date;

/// Title used when a document does not name one
pub const FALLBACK_TITLE: &str = "Untitled article";

const DELIMITER: &str = "---";

/// Metadata from a post's header block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    metadata: IndexMap<String, String>,
}

impl FrontMatter {
    /// Split `content` into metadata and body, using [`FALLBACK_TITLE`]
    /// when no title is given
    pub fn parse(content: &str) -> (Self, String) {
        Self::parse_with_fallback(content, FALLBACK_TITLE)
    }

    /// Split `content` into metadata and body
    ///
    /// Never fails. Fences and header lines may end in `\r\n`; the body is
    /// returned with its line endings untouched.
    pub fn parse_with_fallback(content: &str, fallback_title: &str) -> (Self, String) {
        let Some((header, body)) = split_document(strip_bom(content)) else {
            tracing::debug!(
                "No front-matter found in {} bytes, treating everything as body",
                content.len()
            );
            let mut fm = FrontMatter::default();
            fm.ensure_title(fallback_title);
            return (fm, content.to_string());
        };

        let mut fm = FrontMatter::default();
        for line in header.lines() {
            match parse_line(line) {
                Some((key, value)) => {
                    tracing::trace!("front-matter {} = {:?}", key, value);
                    fm.metadata.insert(key.to_string(), value.to_string());
                }
                None if !line.trim().is_empty() => {
                    tracing::trace!("Skipping front-matter line {:?}", line);
                }
                None => {}
            }
        }
        fm.ensure_title(fallback_title);

        tracing::debug!("Parsed {} front-matter keys", fm.metadata.len());
        (fm, body.to_string())
    }

    fn ensure_title(&mut self, fallback: &str) {
        if !self.metadata.contains_key("title") {
            self.metadata
                .insert("title".to_string(), fallback.to_string());
        }
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.get("title").unwrap_or(FALLBACK_TITLE)
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn category(&self) -> Option<&str> {
        self.get("category")
    }

    /// Parse the `date` value, if it looks like a date
    pub fn date(&self) -> Option<NaiveDate> {
        self.get("date").and_then(parse_date)
    }

    /// Tags written as `a, b` or `[a, b]`
    pub fn tags(&self) -> Vec<String> {
        let Some(raw) = self.get("tags") else {
            return Vec::new();
        };
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .unwrap_or(raw);

        raw.split(',')
            .map(|t| strip_quotes(t.trim()).trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r', ' ', '\t']) == DELIMITER
}

/// Find the header between the opening and closing fences, and the body after
fn split_document(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

/// `key: value`, split on the first colon
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once(':')?;
    let key = key.trim();
    let value = strip_quotes(value.trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Remove one layer of matching surrounding quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untitled_only(fm: &FrontMatter) -> bool {
        fm.len() == 1 && fm.title() == FALLBACK_TITLE
    }

    #[test]
    fn test_parse_basic_frontmatter() {
        let content = "---\ntitle: Tax Law\ndate: 2024-01-10\nauthor: Anna\n---\n# Heading\n\nText.\n";
        let (fm, body) = FrontMatter::parse(content);

        assert_eq!(fm.title(), "Tax Law");
        assert_eq!(fm.author(), Some("Anna"));
        assert_eq!(fm.date(), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(body, "# Heading\n\nText.\n");
    }

    #[test]
    fn test_body_preserved_exactly() {
        let cases = [
            ("title: A", "body"),
            ("a: 1\nb: 2", ""),
            ("", "line one\n\nline two\n"),
            ("key: value", "\n  indented\n---\nnot a header\n"),
        ];

        for (meta, body) in cases {
            let content = format!("---\n{}\n---\n{}", meta, body);
            let (fm, parsed_body) = FrontMatter::parse(&content);
            assert_eq!(parsed_body, body, "body for {:?}", content);

            for line in meta.lines() {
                let (key, value) = line.split_once(':').unwrap();
                assert_eq!(fm.get(key.trim()), Some(value.trim()));
            }
        }
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\nNo header here.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(body, content);
        assert!(untitled_only(&fm));
    }

    #[test]
    fn test_malformed_inputs_never_fail() {
        let cases = [
            "",
            "---",
            "---\n",
            "---\ntitle: never closed\n",
            "--- \ntitle: x",
            "text\n---\ntitle: late\n---\n",
            "----\ntitle: x\n----\n",
        ];

        for content in cases {
            let (fm, body) = FrontMatter::parse(content);
            assert_eq!(body, content, "body for {:?}", content);
            assert!(untitled_only(&fm), "metadata for {:?}", content);
        }
    }

    #[test]
    fn test_empty_header_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody after.");
        assert!(untitled_only(&fm));
        assert_eq!(body, "Body after.");

        let (fm, body) = FrontMatter::parse("---\n---");
        assert!(untitled_only(&fm));
        assert_eq!(body, "");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let (fm, _) = FrontMatter::parse("---\na: 1\na: 2\n---\n");
        assert_eq!(fm.get("a"), Some("2"));
        assert_eq!(fm.len(), 2); // a + fallback title
    }

    #[test]
    fn test_quoted_value_keeps_colon() {
        let (fm, _) = FrontMatter::parse("---\ntitle: \"Hello: World\"\n---\nbody");
        assert_eq!(fm.title(), "Hello: World");

        let (fm, _) = FrontMatter::parse("---\ntitle: 'single'\nnote: \"mismatched'\n---\n");
        assert_eq!(fm.title(), "single");
        assert_eq!(fm.get("note"), Some("\"mismatched'"));
    }

    #[test]
    fn test_value_with_colons() {
        let (fm, _) = FrontMatter::parse("---\nlink: https://example.com:8080/a\n---\n");
        assert_eq!(fm.get("link"), Some("https://example.com:8080/a"));
    }

    #[test]
    fn test_ignored_lines() {
        let content = "---\n  no colon here\n: no key\nempty:\nquoted: \"\"\n  spaced  :  value  \n---\n";
        let (fm, _) = FrontMatter::parse(content);
        let keys: Vec<&str> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["spaced", "title"]);
        assert_eq!(fm.get("spaced"), Some("value"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\nauthor: Bob\r\n---\r\nLine one\r\nLine two";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), "Windows");
        assert_eq!(fm.author(), Some("Bob"));
        assert_eq!(body, "Line one\r\nLine two");

        let (fm, body) = FrontMatter::parse("---\r\ntitle: x\r\n---\r\na\r\nb\r\n");
        assert_eq!(fm.title(), "x");
        assert_eq!(body, "a\r\nb\r\n");
    }

    #[test]
    fn test_byte_order_mark() {
        let (fm, body) = FrontMatter::parse("\u{feff}---\ntitle: BOM\n---\nText");
        assert_eq!(fm.title(), "BOM");
        assert_eq!(body, "Text");
    }

    #[test]
    fn test_custom_fallback_title() {
        let (fm, _) = FrontMatter::parse_with_fallback("no header", "Статья без названия");
        assert_eq!(fm.title(), "Статья без названия");

        let (fm, _) = FrontMatter::parse_with_fallback("---\nauthor: A\n---\n", "Без названия");
        assert_eq!(fm.title(), "Без названия");
        assert_eq!(fm.author(), Some("A"));
    }

    #[test]
    fn test_tags() {
        let (fm, _) = FrontMatter::parse("---\ntags: [налоги, 'НДФЛ', вычет]\n---\n");
        assert_eq!(fm.tags(), vec!["налоги", "НДФЛ", "вычет"]);

        let (fm, _) = FrontMatter::parse("---\ntags: a, , b\n---\n");
        assert_eq!(fm.tags(), vec!["a", "b"]);

        let (fm, _) = FrontMatter::parse("---\ntitle: x\n---\n");
        assert!(fm.tags().is_empty());
    }

    #[test]
    fn test_unparseable_date() {
        let (fm, _) = FrontMatter::parse("---\ndate: someday\n---\n");
        assert_eq!(fm.get("date"), Some("someday"));
        assert_eq!(fm.date(), None);
    }
}
