//! Anchor identifiers for heading text.

use regex::Regex;
use std::sync::OnceLock;

/// Converts heading text into a lowercase, hyphenated anchor id.
///
/// Drops every character that is not a Unicode word character, whitespace,
/// or hyphen, turns whitespace runs into a single hyphen, collapses repeated
/// hyphens and trims hyphens at both ends. The result is empty when the
/// text has no word characters.
///
/// Both the outline parser and the heading renderer call this function, so
/// sidebar links and rendered anchors always agree.
///
/// # Examples
///
/// ```
/// use readmenav::slug;
///
/// assert_eq!(slug("Hello, World!"), "hello-world");
/// assert_eq!(slug("  multiple   spaces  "), "multiple-spaces");
/// ```
pub fn slug(text: &str) -> String {
    static PATTERNS: OnceLock<(Regex, Regex, Regex)> = OnceLock::new();
    let (disallowed, whitespace, hyphens) = PATTERNS.get_or_init(|| {
        (
            Regex::new(r"[^\w\s-]").expect("valid disallowed-char pattern"),
            Regex::new(r"\s+").expect("valid whitespace pattern"),
            Regex::new(r"-{2,}").expect("valid hyphen pattern"),
        )
    });

    let lowered = text.to_lowercase();
    let kept = disallowed.replace_all(&lowered, "");
    let hyphenated = whitespace.replace_all(&kept, "-");
    let collapsed = hyphens.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}
