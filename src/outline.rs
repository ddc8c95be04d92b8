//! Heading outline extraction.
//!
//! A single forward scan over the document lines. Fenced code blocks are
//! tracked so that `#` lines inside them never become outline entries.

use crate::slug::slug;

/// Minimum run of backticks or tildes that forms a fence.
const MIN_FENCE_RUN: usize = 3;

/// Deepest ATX heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// Heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    level: u8,
    text: String,
    id: String,
}

impl OutlineEntry {
    /// Creates an entry, deriving the id from the text.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let id = slug(&text);
        Self { level, text, id }
    }

    /// Heading level, 1 through 6.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Trimmed heading text with inline markdown left in place.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Anchor id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Character family of a fence. Backtick and tilde fences never close each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceFamily {
    Backtick,
    Tilde,
}

impl FenceFamily {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '`' => Some(Self::Backtick),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }

    fn marker(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }
}

/// Recognizes a fence line, ignoring leading indentation.
///
/// Returns the fence family and whatever follows the marker run.
fn parse_fence(line: &str) -> Option<(FenceFamily, &str)> {
    let trimmed = line.trim_start();
    let family = FenceFamily::from_char(trimmed.chars().next()?)?;
    let marker = family.marker();
    let run = trimmed.chars().take_while(|&ch| ch == marker).count();
    if run < MIN_FENCE_RUN {
        return None;
    }
    // Marker chars are ASCII, so the run length is also its byte length.
    Some((family, &trimmed[run..]))
}

/// Fence tracking for one scan.
///
/// Only the family of the open fence is kept: any run of three or more of
/// the same character closes it, whatever its length or trailing text.
#[derive(Debug, Default)]
pub(crate) struct FenceState {
    open: Option<FenceFamily>,
}

impl FenceState {
    /// Feeds one line and reports whether it is opaque to heading detection.
    ///
    /// Fence lines themselves and every line between them are opaque.
    pub(crate) fn consume(&mut self, line: &str) -> bool {
        match (self.open, parse_fence(line)) {
            (Some(open), Some((family, _))) => {
                if family == open {
                    self.open = None;
                }
                true
            }
            (Some(_), None) => true,
            (None, Some((family, info))) => {
                // A backtick in the info string makes the line inline code.
                if family == FenceFamily::Backtick && info.contains('`') {
                    return false;
                }
                self.open = Some(family);
                true
            }
            (None, None) => false,
        }
    }
}

/// Returns the ATX heading level of a line, if it is a heading line.
///
/// A heading line starts with one to six `#` characters followed by at
/// least one whitespace character.
///
/// # Examples
///
/// ```
/// use readmenav::heading_level;
///
/// assert_eq!(heading_level("## Section"), Some(2));
/// assert_eq!(heading_level("#NoSpace"), None);
/// assert_eq!(heading_level("####### Too deep"), None);
/// ```
pub fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[hashes..];
    match rest.chars().next() {
        Some(ch) if ch.is_whitespace() => u8::try_from(hashes).ok(),
        _ => None,
    }
}

/// Splits a heading line into level and trimmed text.
pub(crate) fn split_heading(line: &str) -> Option<(u8, &str)> {
    let level = heading_level(line)?;
    let text = line[usize::from(level)..].trim();
    Some((level, text))
}

/// Iterates document lines, accepting both `\n` and `\r\n` endings.
pub(crate) fn lines(markdown: &str) -> impl Iterator<Item = &str> {
    markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Extracts the heading outline of a markdown document.
///
/// Headings inside fenced code blocks are skipped. A fence left open runs to
/// the end of the document, so no heading after it is reported.
///
/// # Examples
///
/// ```
/// use readmenav::parse_outline;
///
/// let outline = parse_outline("# Title\n\nSome text\n## Sub");
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline[1].id(), "sub");
/// ```
pub fn parse_outline(markdown: &str) -> Vec<OutlineEntry> {
    let mut outline = Vec::new();
    if markdown.is_empty() {
        return outline;
    }

    let mut fences = FenceState::default();
    for line in lines(markdown) {
        if fences.consume(line) {
            continue;
        }
        if let Some((level, text)) = split_heading(line) {
            outline.push(OutlineEntry::new(level, text));
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(outline: &[OutlineEntry]) -> Vec<(u8, &str, &str)> {
        outline
            .iter()
            .map(|entry| (entry.level(), entry.text(), entry.id()))
            .collect()
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_outline("").is_empty());
    }

    #[test]
    fn test_parse_headings_in_order() {
        // Arrange
        let markdown = "# Title\n\nSome text\n## Sub";

        // Act
        let outline = parse_outline(markdown);

        // Assert
        assert_eq!(
            summary(&outline),
            vec![(1, "Title", "title"), (2, "Sub", "sub")]
        );
    }

    #[test]
    fn test_parse_skips_fenced_headings() {
        let outline = parse_outline("```\n# Not a heading\n```\n# Real");
        assert_eq!(summary(&outline), vec![(1, "Real", "real")]);
    }

    #[test]
    fn test_unbalanced_fence_suppresses_rest() {
        assert!(parse_outline("```\n# A\n## B").is_empty());
    }

    #[test]
    fn test_tilde_fence_ignores_backtick_closer() {
        // Arrange: the backtick line is content of the tilde fence
        let markdown = "~~~\n```\n# Hidden\n~~~\n# Shown";

        // Act
        let outline = parse_outline(markdown);

        // Assert
        assert_eq!(summary(&outline), vec![(1, "Shown", "shown")]);
    }

    #[test]
    fn test_backtick_fence_ignores_tilde_closer() {
        let markdown = "```rust\n~~~\n# Hidden\n```\n## Shown";
        assert_eq!(summary(&parse_outline(markdown)), vec![(2, "Shown", "shown")]);
    }

    #[test]
    fn test_fence_with_language_and_indent() {
        let markdown = "  ```python\n# comment\n  ```\n### After";
        assert_eq!(summary(&parse_outline(markdown)), vec![(3, "After", "after")]);
    }

    #[test]
    fn test_longer_closing_run_closes_fence() {
        let markdown = "````\n# Hidden\n``````\n# Shown";
        assert_eq!(summary(&parse_outline(markdown)), vec![(1, "Shown", "shown")]);
    }

    #[test]
    fn test_two_backticks_are_not_a_fence() {
        let markdown = "``\n# Shown";
        assert_eq!(summary(&parse_outline(markdown)), vec![(1, "Shown", "shown")]);
    }

    #[test]
    fn test_inline_code_line_is_not_a_fence() {
        let markdown = "```let x = 1```\n# Shown";
        assert_eq!(summary(&parse_outline(markdown)), vec![(1, "Shown", "shown")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        // Arrange
        let markdown = "# One\r\n\r\n```\r\n# Hidden\r\n```\r\n## Two\r\n";

        // Act
        let outline = parse_outline(markdown);

        // Assert
        assert_eq!(summary(&outline), vec![(1, "One", "one"), (2, "Two", "two")]);
    }

    #[test]
    fn test_heading_requires_whitespace_after_hashes() {
        let outline = parse_outline("#hashtag\n#\tTabbed\n####### Seven");
        assert_eq!(summary(&outline), vec![(1, "Tabbed", "tabbed")]);
    }

    #[test]
    fn test_heading_text_keeps_inline_markdown() {
        let outline = parse_outline("## **Bold** and `code`   ");
        assert_eq!(
            summary(&outline),
            vec![(2, "**Bold** and `code`", "bold-and-code")]
        );
    }

    #[test]
    fn test_trailing_hashes_are_literal_text() {
        let outline = parse_outline("## Title ##");
        assert_eq!(summary(&outline), vec![(2, "Title ##", "title")]);
    }

    #[test]
    fn test_blank_heading_text_is_kept_with_empty_id() {
        // Arrange
        let markdown = "#   \n## \t\n### Next";

        // Act
        let outline = parse_outline(markdown);

        // Assert
        assert_eq!(
            summary(&outline),
            vec![(1, "", ""), (2, "", ""), (3, "Next", "next")]
        );
    }

    #[test]
    fn test_tagged_fence_line_closes_open_fence() {
        // Arrange: the tagged line is a same-family run, so it closes the fence
        let markdown = "```\ncode\n```js\n# After";

        // Act
        let outline = parse_outline(markdown);

        // Assert
        assert_eq!(summary(&outline), vec![(1, "After", "after")]);
    }

    #[test]
    fn test_nested_fence_document() {
        let markdown = "````md\n```js\n```\n````\n# After";
        assert_eq!(summary(&parse_outline(markdown)), vec![(1, "After", "after")]);
    }

    #[test]
    fn test_other_family_line_inside_fence_stays_opaque() {
        let markdown = "```\n~~~ not a closer\n# Hidden\n```\n## Shown";
        assert_eq!(summary(&parse_outline(markdown)), vec![(2, "Shown", "shown")]);
    }

    #[test]
    fn test_duplicate_headings_share_ids() {
        // Arrange
        let markdown = "## Usage\ntext\n## Usage";

        // Act
        let outline = parse_outline(markdown);

        // Assert: duplicates are not disambiguated
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].id(), "usage");
        assert_eq!(outline[1].id(), "usage");
    }

    #[test]
    fn test_ids_non_empty_for_alphanumeric_text() {
        let markdown = "# 1\n## ✨ Features ✨\n### C++ & Rust\n#### -- é --";
        for entry in parse_outline(markdown) {
            assert!(!entry.id().is_empty(), "empty id for {:?}", entry.text());
        }
    }

    #[test]
    fn test_indented_hash_is_not_a_heading() {
        assert!(parse_outline("  # Indented").is_empty());
    }

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("###### Six"), Some(6));
        assert_eq!(heading_level("####### Seven"), None);
        assert_eq!(heading_level("plain"), None);
        assert_eq!(heading_level(""), None);
        assert_eq!(heading_level("#"), None);
    }
}
