//! Link resolution from README-relative paths to GitHub URLs.

use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};
use tracing::warn;

use crate::repo::RepoCoordinates;

/// Link prefixes that already point somewhere absolute.
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "//", "mailto:", "data:"];

/// Resolves relative links in a rendered README to absolute GitHub URLs.
///
/// The repository coordinates are held by the resolver itself, so every
/// README is rendered against the repository it came from.
pub struct LinkResolver {
    coords: RepoCoordinates,
    current_path: PathBuf,
}

impl LinkResolver {
    /// Creates link resolver for a markdown file in the given repository.
    ///
    /// # Arguments
    ///
    /// * `coords`: Repository and branch the file belongs to
    /// * `current_path`: Path of the markdown file within the repository
    pub fn new(coords: RepoCoordinates, current_path: impl AsRef<Path>) -> Self {
        Self {
            coords,
            current_path: current_path.as_ref().to_path_buf(),
        }
    }

    /// Repository coordinates used for resolution.
    pub fn coords(&self) -> &RepoCoordinates {
        &self.coords
    }

    /// Resolves link to an absolute URL.
    ///
    /// - Absolute URLs, protocol relative URLs, `mailto:` and `data:` links
    ///   remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Images resolve to raw.githubusercontent.com
    /// - Directory links (ending in /) resolve to the GitHub tree view
    /// - Other relative links resolve to the GitHub blob view
    ///
    /// Query strings and fragments of relative links are kept.
    ///
    /// # Errors
    ///
    /// Returns error if the path escapes the repository root or is not UTF8
    pub fn resolve(&self, link: &str, is_image: bool) -> Result<String> {
        if ABSOLUTE_PREFIXES
            .iter()
            .any(|prefix| link.starts_with(prefix))
        {
            return Ok(link.to_string());
        }

        if link.starts_with('#') || link.is_empty() {
            return Ok(link.to_string());
        }

        let split_at = link.find(['?', '#']).unwrap_or(link.len());
        let (path_part, suffix) = link.split_at(split_at);

        // Leading slash is relative to the repository root
        let target_path = match path_part.strip_prefix('/') {
            Some(rooted) => PathBuf::from(rooted),
            None => self
                .current_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(path_part),
        };

        let normalized = normalize_path(&target_path).context("Failed to normalize path")?;
        let path_str = normalized.to_str().context("Path contains invalid UTF8")?;

        let url = if is_image {
            self.coords.raw_url(path_str)
        } else if path_part.ends_with('/') {
            self.coords.tree_url(path_str)
        } else {
            self.coords.blob_url(path_str)
        };

        Ok(format!("{}{}", url, suffix))
    }

    /// Rewrites `<a href>` and `<img src>` values in rendered HTML.
    ///
    /// Links that cannot be resolved are kept as written.
    pub fn rewrite_html(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut rest = html;

        while let Some((start, is_image)) = next_link_tag(rest) {
            result.push_str(&rest[..start]);
            let end = rest[start..]
                .find('>')
                .map_or(rest.len(), |offset| start + offset + 1);
            result.push_str(&self.rewrite_tag(&rest[start..end], is_image));
            rest = &rest[end..];
        }

        result.push_str(rest);
        result
    }

    fn rewrite_tag(&self, tag: &str, is_image: bool) -> String {
        let attr = if is_image { " src=\"" } else { " href=\"" };
        let Some(value_start) = tag.find(attr).map(|pos| pos + attr.len()) else {
            return tag.to_string();
        };
        let Some(value_len) = tag[value_start..].find('"') else {
            return tag.to_string();
        };
        let value_end = value_start + value_len;
        let url = &tag[value_start..value_end];

        match self.resolve(url, is_image) {
            Ok(resolved) => format!("{}{}{}", &tag[..value_start], resolved, &tag[value_end..]),
            Err(e) => {
                warn!("Keeping unresolved link {}: {:#}", url, e);
                tag.to_string()
            }
        }
    }
}

/// Finds the next anchor or image tag, reporting whether it is an image.
fn next_link_tag(html: &str) -> Option<(usize, bool)> {
    let link = html.find("<a ").map(|pos| (pos, false));
    let image = html.find("<img ").map(|pos| (pos, true));

    match (link, image) {
        (Some(l), Some(i)) => Some(if l.0 < i.0 { l } else { i }),
        (l, i) => l.or(i),
    }
}

/// Normalizes path by resolving `..` and `.` components.
///
/// # Errors
///
/// Returns error if path attempts to escape repository root
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                if components.pop().is_none() {
                    bail!("Path escapes repository root: {}", path.display());
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    Ok(components.iter().collect())
}
