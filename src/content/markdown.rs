//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::{HighlightConfig, MarkdownConfig};
use crate::helpers::html_escape;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
    line_numbers: bool,
    breaks: bool,
    smart_punctuation: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with default settings
    pub fn new() -> Self {
        Self::from_config(&MarkdownConfig::default(), &HighlightConfig::default())
    }

    /// Create with site settings
    pub fn from_config(markdown: &MarkdownConfig, highlight: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: highlight.theme.clone(),
            highlight: highlight.enable,
            line_numbers: highlight.line_number,
            breaks: markdown.breaks,
            smart_punctuation: markdown.smart_punctuation,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is stripped before we get here, so no metadata blocks
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block we are going to highlight
        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) if self.highlight => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) if code_block.is_some() => {
                    let lang = code_block.take().flatten();
                    let highlighted = self.highlight_code(&code_block_content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                Event::SoftBreak if self.breaks => events.push(Event::HardBreak),
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        html_output
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = self
            .theme()
            .and_then(|theme| highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok());

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            None => {
                tracing::debug!("Highlighting failed for {}, emitting plain block", lang);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    html_escape(lang),
                    html_escape(code)
                )
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            html_escape(lang),
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> MarkdownRenderer {
        MarkdownRenderer::from_config(
            &MarkdownConfig::default(),
            &HighlightConfig {
                enable: false,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_single_newline_is_break() {
        let html = plain().render("line one\nline two");
        assert!(html.contains("line one<br />"), "{}", html);

        let no_breaks = MarkdownRenderer::from_config(
            &MarkdownConfig {
                breaks: false,
                ..Default::default()
            },
            &HighlightConfig::default(),
        );
        let html = no_breaks.render("line one\nline two");
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_render_empty_body() {
        assert_eq!(plain().render(""), "");
        assert_eq!(plain().render("\n\n"), "");
    }

    #[test]
    fn test_render_table() {
        let html = plain().render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_code_block_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("highlight rust"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_render_code_block_plain() {
        let html = plain().render("```\n<b>\n```");
        assert!(html.contains("<pre><code>&lt;b&gt;"));
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::from_config(
            &MarkdownConfig::default(),
            &HighlightConfig {
                line_number: true,
                ..Default::default()
            },
        );
        let html = renderer.render("```\na\nb\n```");
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }
}
