//! Syntax highlighting for fenced code in rendered HTML.

use anyhow::{Context, Result};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Highlights `<code class="language-X">` blocks with CSS classes.
///
/// Classes use the `hljs-` prefix so the bundled markdown stylesheet can
/// color them. Blocks in unknown languages are left as comrak escaped them.
pub(crate) struct CodeHighlighter {
    syntax_set: SyntaxSet,
}

impl CodeHighlighter {
    pub(crate) fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Replaces the content of every language-tagged code block.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails on a line of a known language.
    pub(crate) fn highlight_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(block) = CodeBlock::find(rest) {
            result.push_str(&rest[..block.start]);

            let escaped = &rest[block.content_start..block.content_end];
            match self.highlight(&unescape_html(escaped), block.language)? {
                Some(highlighted) => {
                    result.push_str(&rest[block.start..block.content_start]);
                    result.push_str(&highlighted);
                    result.push_str(CODE_CLOSE);
                }
                None => result.push_str(&rest[block.start..block.end]),
            }

            rest = &rest[block.end..];
        }

        result.push_str(rest);
        Ok(result)
    }

    /// Highlights code, or returns None for an unknown language.
    fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(None);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .with_context(|| format!("Failed to highlight {} code", language))?;
        }

        Ok(Some(generator.finalize()))
    }
}

/// Byte offsets of one language-tagged code element.
struct CodeBlock<'a> {
    start: usize,
    language: &'a str,
    content_start: usize,
    content_end: usize,
    end: usize,
}

impl<'a> CodeBlock<'a> {
    fn find(html: &'a str) -> Option<Self> {
        let start = html.find(CODE_OPEN)?;
        let language_start = start + CODE_OPEN.len();
        let language_end = language_start + html[language_start..].find('"')?;
        let content_start = language_end + html[language_end..].find('>')? + 1;
        let content_end = content_start + html[content_start..].find(CODE_CLOSE)?;

        Some(Self {
            start,
            language: &html[language_start..language_end],
            content_start,
            content_end,
            end: content_end + CODE_CLOSE.len(),
        })
    }
}

/// Reverses the entity escaping comrak applies to code content.
fn unescape_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_language() {
        // Arrange
        let highlighter = CodeHighlighter::new();
        let html = "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>";

        // Act
        let result = highlighter.highlight_blocks(html).expect("Should highlight");

        // Assert
        assert!(result.starts_with("<pre><code class=\"language-rust\">"));
        assert!(result.contains("<span class=\"hljs-"), "Got: {}", result);
        assert!(result.ends_with("</code></pre>"));
    }

    #[test]
    fn test_unknown_language_untouched() {
        let highlighter = CodeHighlighter::new();
        let html = "<pre><code class=\"language-nosuchlang\">a &lt; b\n</code></pre>";
        let result = highlighter.highlight_blocks(html).expect("Should pass through");
        assert_eq!(result, html);
    }

    #[test]
    fn test_untagged_code_untouched() {
        let highlighter = CodeHighlighter::new();
        let html = "<p>Use <code>cargo</code></p>";
        assert_eq!(highlighter.highlight_blocks(html).expect("Should pass"), html);
    }

    #[test]
    fn test_unescape_order() {
        assert_eq!(unescape_html("&amp;lt; &lt;b&gt;"), "&lt; <b>");
    }
}
