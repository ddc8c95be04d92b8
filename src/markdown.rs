//! README rendering with GitHub Flavored Markdown support.
//!
//! comrak parses and renders the document. Headings receive the same ids the
//! outline produces, relative links are rewritten to GitHub URLs, and fenced
//! code is highlighted with syntect.

mod headings;
mod highlight;
mod links;
mod renderer;

pub use links::LinkResolver;
pub use renderer::MarkdownRenderer;
