//! README splitting into heading and description pairs.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::outline::{FenceState, lines, split_heading};

/// Heading with the text that follows it up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeSection {
    heading: String,
    description: String,
}

impl ReadmeSection {
    /// Heading text, empty for the preamble before the first heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Trimmed body text of the section.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Splits a README into sections at every heading line.
///
/// Text before the first heading becomes a section with an empty heading.
/// Heading lines inside fenced code blocks stay part of the description.
/// Sections without heading and description are dropped.
///
/// # Examples
///
/// ```
/// use readmenav::parse_readme_sections;
///
/// let sections = parse_readme_sections("Intro\n# Install\nRun it.");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[1].heading(), "Install");
/// assert_eq!(sections[1].description(), "Run it.");
/// ```
pub fn parse_readme_sections(markdown: &str) -> Vec<ReadmeSection> {
    let mut sections = Vec::new();
    let mut heading = String::new();
    let mut body: Vec<&str> = Vec::new();
    let mut fences = FenceState::default();

    for line in lines(markdown) {
        let opaque = fences.consume(line);
        match split_heading(line).filter(|_| !opaque) {
            Some((_, text)) => {
                if !heading.is_empty() || !body.is_empty() {
                    sections.push(section(&heading, &body));
                }
                heading = text.to_string();
                body.clear();
            }
            None => body.push(line),
        }
    }

    if !heading.is_empty() || body.iter().any(|line| !line.trim().is_empty()) {
        sections.push(section(&heading, &body));
    }

    sections.retain(|s| !s.heading.is_empty() || !s.description.is_empty());
    sections
}

fn section(heading: &str, body: &[&str]) -> ReadmeSection {
    ReadmeSection {
        heading: heading.to_string(),
        description: body.join("\n").trim().to_string(),
    }
}

/// Decodes README content as delivered by the GitHub contents API.
///
/// Base64 payloads are wrapped across lines, so line breaks are removed
/// before decoding. Any other encoding is returned as is.
///
/// # Errors
///
/// Returns error if base64 decoding fails or the decoded bytes are not UTF8.
pub fn decode_readme_payload(content: &str, encoding: Option<&str>) -> Result<String> {
    if encoding != Some("base64") {
        return Ok(content.to_string());
    }

    let compact: String = content
        .chars()
        .filter(|ch| !matches!(ch, '\n' | '\r'))
        .collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .context("README payload is not valid base64")?;

    String::from_utf8(bytes).context("README payload contains invalid UTF8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_split_at_headings() {
        // Arrange
        let markdown = "Preamble text\n\n# Install\n\ncargo install\n\n## Usage\nRun it\n";

        // Act
        let sections = parse_readme_sections(markdown);

        // Assert
        let pairs: Vec<(&str, &str)> = sections
            .iter()
            .map(|s| (s.heading(), s.description()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("", "Preamble text"),
                ("Install", "cargo install"),
                ("Usage", "Run it"),
            ]
        );
    }

    #[test]
    fn test_sections_keep_fenced_hash_lines() {
        let markdown = "# Config\n```toml\n# comment\n```\n";
        let sections = parse_readme_sections(markdown);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].description(), "```toml\n# comment\n```");
    }

    #[test]
    fn test_sections_tagged_fence_line_closes_fence() {
        // Arrange
        let markdown = "```\ncode\n```js\n# After\nText";

        // Act
        let sections = parse_readme_sections(markdown);

        // Assert
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].description(), "```\ncode\n```js");
        assert_eq!(sections[1].heading(), "After");
        assert_eq!(sections[1].description(), "Text");
    }

    #[test]
    fn test_sections_nested_fence_document() {
        let markdown = "# Example\n````md\n```js\n```\n````\n# After\nDone";
        let sections = parse_readme_sections(markdown);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].description(), "````md\n```js\n```\n````");
        assert_eq!(sections[1].heading(), "After");
    }

    #[test]
    fn test_sections_heading_without_body() {
        let sections = parse_readme_sections("# Only\n\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Only");
        assert_eq!(sections[0].description(), "");
    }

    #[test]
    fn test_sections_empty_input() {
        assert!(parse_readme_sections("").is_empty());
        assert!(parse_readme_sections("\n\n  \n").is_empty());
    }

    #[test]
    fn test_decode_base64_payload() {
        // Arrange: "# Hi\n" wrapped the way the API wraps it
        let payload = "IyBI\naQo=\n";

        // Act
        let decoded = decode_readme_payload(payload, Some("base64")).expect("Should decode");

        // Assert
        assert_eq!(decoded, "# Hi\n");
    }

    #[test]
    fn test_decode_plain_payload_passthrough() {
        let decoded = decode_readme_payload("# Plain", None).expect("Should pass through");
        assert_eq!(decoded, "# Plain");
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode_readme_payload("not base64!!", Some("base64"));
        assert!(result.is_err(), "Invalid payload should fail");
    }
}
