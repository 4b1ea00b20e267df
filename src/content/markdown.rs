//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::MarkdownConfig;
use crate::helpers::html_escape;

/// Converts a document body into page markup
pub trait MarkupConverter {
    fn convert(&self, body: &str) -> Result<String>;
}

/// Markdown renderer with optional syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_config(&MarkdownConfig::default())
    }

    /// Create from the site's markdown settings
    pub fn with_config(config: &MarkdownConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.theme.clone(),
            highlight: config.highlight,
            line_numbers: config.line_numbers,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped beforehand, so no metadata block options
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();

        if !self.highlight {
            html::push_html(&mut html_output, parser);
            return Ok(html_output);
        }

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_block_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted =
            theme.and_then(|t| highlighted_html_for_string(code, &self.syntax_set, syntax, t).ok());

        // The fence info string is user text going into an attribute
        let class = html_escape(lang);

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, &class),
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                class, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                class,
                html_escape(code)
            ),
        }
    }

    /// Add line numbers to highlighted code; `class` must already be escaped
    fn add_line_numbers(&self, code: &str, class: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            class,
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

impl MarkupConverter for MarkdownRenderer {
    fn convert(&self, body: &str) -> Result<String> {
        self.render(body)
    }
}
