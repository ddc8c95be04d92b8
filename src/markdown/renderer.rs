//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::{Arena, Options, Plugins};
use std::path::Path;

use super::LinkResolver;
use super::headings::HeadingAnchors;
use super::highlight::CodeHighlighter;
use crate::repo::RepoCoordinates;

/// Renders README markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Every heading gets an `id` attribute equal to the outline id of the same
/// heading, so sidebar links land on it. Fenced code with a known language is
/// highlighted with syntect. Relative links and images are rewritten to
/// GitHub URLs when the renderer carries a [`LinkResolver`].
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: CodeHighlighter,
    link_resolver: Option<LinkResolver>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Emoji shortcodes such as `:rocket:`
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML passes through (README content is trusted)
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
        options.extension.shortcodes = true;

        options.parse.smart = true;

        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: CodeHighlighter::new(),
            link_resolver: None,
        }
    }

    /// Creates renderer that rewrites relative links to GitHub URLs.
    ///
    /// # Arguments
    ///
    /// * `coords`: Repository and branch the README belongs to
    /// * `current_path`: Path of the README within the repository
    pub fn with_link_resolver(coords: RepoCoordinates, current_path: impl AsRef<Path>) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(LinkResolver::new(coords, current_path));
        renderer
    }

    /// Renders markdown content to HTML.
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting or syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        let anchors = HeadingAnchors::for_document(root, content);
        let mut plugins = Plugins::default();
        plugins.render.heading_adapter = Some(&anchors);

        let mut buffer = Vec::with_capacity(content.len() * 2);
        comrak::format_html_with_plugins(root, &self.options, &mut buffer, &plugins)
            .context("Failed to format markdown as HTML")?;
        let mut html = String::from_utf8(buffer).context("Rendered HTML is not valid UTF8")?;

        if let Some(resolver) = &self.link_resolver {
            html = resolver.rewrite_html(&html);
        }

        self.highlighter.highlight_blocks(&html)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
