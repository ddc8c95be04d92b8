//! Display titles derived from repository names and heading text.

use regex::Regex;
use std::sync::OnceLock;

/// Formats raw heading or repository text as a display title.
///
/// Keeps link labels, drops images, HTML tags, `:emoji:` shortcodes and
/// bare URLs, treats `-`, `_` and `.` as word separators and capitalizes
/// the first letter of every word.
///
/// # Examples
///
/// ```
/// use readmenav::format_title;
///
/// assert_eq!(format_title("awesome-hackathon"), "Awesome Hackathon");
/// assert_eq!(format_title("[docs](https://x.y) :rocket:"), "Docs");
/// ```
pub fn format_title(title: &str) -> String {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            (Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid image pattern"), ""),
            (Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link pattern"), "$1"),
            (Regex::new(r"<[^>]+>").expect("valid tag pattern"), ""),
            (Regex::new(r":[a-z_]+:").expect("valid shortcode pattern"), ""),
            (Regex::new(r"(?i)https?://\S+").expect("valid url pattern"), ""),
            (Regex::new(r"[-_.]").expect("valid separator pattern"), " "),
        ]
    });

    let mut cleaned = title.to_string();
    for (pattern, replacement) in patterns {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }

    capitalize_words(&cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Uppercases every character that starts a run of word characters.
fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !in_word {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        in_word = is_word;
    }

    result
}
