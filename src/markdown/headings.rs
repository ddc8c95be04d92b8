//! Anchor ids on rendered headings.
//!
//! Ids are computed from the heading's source line with the same slug
//! function the outline uses, so every outline link finds its heading.

use comrak::adapters::{HeadingAdapter, HeadingMeta};
use comrak::nodes::{AstNode, NodeValue, Sourcepos};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::outline::{lines, split_heading};
use crate::slug::slug;

/// Heading renderer shared by all six levels.
///
/// Holds the ids of the document's headings in render order and hands
/// one out per heading tag it opens.
pub(crate) struct HeadingAnchors {
    ids: Mutex<VecDeque<String>>,
}

impl HeadingAnchors {
    /// Collects heading ids for a parsed document.
    ///
    /// ATX headings are slugged from their source line text, exactly as
    /// the outline parser slugs them. Setext headings, which the outline
    /// never reports, fall back to their rendered text.
    pub(crate) fn for_document<'a>(root: &'a AstNode<'a>, source: &str) -> Self {
        let source_lines: Vec<&str> = lines(source).collect();

        let ids = root
            .descendants()
            .filter_map(|node| {
                let ast = node.data.borrow();
                let NodeValue::Heading(heading) = &ast.value else {
                    return None;
                };

                let from_source = (!heading.setext)
                    .then(|| ast.sourcepos.start.line.checked_sub(1))
                    .flatten()
                    .and_then(|index| source_lines.get(index))
                    .and_then(|line| split_heading(line.trim_start()))
                    .map(|(_, text)| slug(text));

                Some(from_source.unwrap_or_else(|| slug(&collect_text(node))))
            })
            .collect();

        Self {
            ids: Mutex::new(ids),
        }
    }
}

impl HeadingAdapter for HeadingAnchors {
    fn enter(
        &self,
        output: &mut dyn Write,
        heading: &HeadingMeta,
        _sourcepos: Option<Sourcepos>,
    ) -> io::Result<()> {
        let next = self
            .ids
            .lock()
            .map_err(|_| io::Error::other("heading id queue poisoned"))?
            .pop_front();
        let id = next.unwrap_or_else(|| slug(&heading.content));

        if id.is_empty() {
            write!(output, "<h{}>", heading.level)
        } else {
            write!(output, "<h{} id=\"{}\">", heading.level, id)
        }
    }

    fn exit(&self, output: &mut dyn Write, heading: &HeadingMeta) -> io::Result<()> {
        write!(output, "</h{}>", heading.level)
    }
}

/// Plain text of a node, with inline code included and breaks as spaces.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match &child.data.borrow().value {
            NodeValue::Text(value) => text.push_str(value),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
