//! README retrieval.
//!
//! The renderer only ever sees text that was already fetched. Fetchers
//! resolve repository coordinates to README content and branch names.

use anyhow::{Context, Result, bail};
use gix::bstr::ByteSlice;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::repo::RepoCoordinates;

/// README file names tried in order.
pub const README_CANDIDATES: &[&str] = &["README.md", "README", "readme.md", "Readme.md"];

/// Source of README text and branch names for a repository.
pub trait ContentFetcher {
    /// Returns the raw README text at the coordinates' branch.
    ///
    /// # Errors
    ///
    /// Returns error if no README exists or the source cannot be read.
    fn fetch_readme(&self, coords: &RepoCoordinates) -> Result<String>;

    /// Returns the branch names available for the repository.
    ///
    /// # Errors
    ///
    /// Returns error if the branch list cannot be read.
    fn list_branches(&self, coords: &RepoCoordinates) -> Result<Vec<String>>;
}

/// Reads README content from a local git clone.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    repo_path: PathBuf,
}

impl GitFetcher {
    /// Creates a fetcher for the repository at `repo_path`.
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path).with_context(|| {
            format!(
                "Failed to open repository at {}",
                self.repo_path.display()
            )
        })
    }

    /// Branch HEAD points at, or `main` when HEAD is detached.
    ///
    /// # Errors
    ///
    /// Returns error if the repository cannot be opened or HEAD cannot be read.
    pub fn default_branch(&self) -> Result<String> {
        let repo = self.open()?;
        let head_ref = repo.head_ref().context("Failed to read HEAD reference")?;

        Ok(head_ref
            .and_then(|r| r.name().shorten().to_str().ok().map(String::from))
            .unwrap_or_else(|| crate::repo::DEFAULT_BRANCH.to_string()))
    }
}

impl ContentFetcher for GitFetcher {
    fn fetch_readme(&self, coords: &RepoCoordinates) -> Result<String> {
        let repo = self.open()?;
        let commit = branch_commit(&repo, coords.branch())?;

        for &candidate in README_CANDIDATES {
            let mut tree = commit.tree().context("Failed to read commit tree")?;
            let Some(entry) = tree
                .peel_to_entry_by_path(candidate)
                .with_context(|| format!("Failed to look up {}", candidate))?
            else {
                debug!(candidate, "README candidate not present");
                continue;
            };

            let object = entry.object().context("Failed to read tree entry object")?;
            let Ok(blob) = object.try_into_blob() else {
                debug!(candidate, "README candidate is not a file");
                continue;
            };

            debug!(candidate, branch = coords.branch(), "Found README");
            return String::from_utf8(blob.data.to_vec())
                .with_context(|| format!("{} contains invalid UTF8", candidate));
        }

        bail!(
            "README not found in {}/{} at branch {}",
            coords.owner(),
            coords.repo(),
            coords.branch()
        )
    }

    fn list_branches(&self, coords: &RepoCoordinates) -> Result<Vec<String>> {
        let repo = self.open()?;
        let mut branches: Vec<String> = repo
            .references()
            .context("Failed to read references")?
            .local_branches()
            .context("Failed to get local branches")?
            .filter_map(|r| {
                r.ok()?
                    .name()
                    .shorten()
                    .to_str()
                    .ok()
                    .map(|s| s.to_string())
            })
            .collect();

        if branches.is_empty() {
            branches.push(coords.branch().to_string());
        }
        branches.sort();

        Ok(branches)
    }
}

/// Resolves a branch name to its tip commit.
fn branch_commit<'a>(repo: &'a gix::Repository, branch: &str) -> Result<gix::Commit<'a>> {
    repo.find_reference(branch)
        .with_context(|| format!("Branch not found: {}", branch))?
        .into_fully_peeled_id()
        .with_context(|| format!("Failed to peel branch '{}'", branch))?
        .object()
        .context("Failed to resolve object")?
        .try_into_commit()
        .map_err(|_| anyhow::anyhow!("Branch '{}' does not point to a commit", branch))
}

/// Reads README content from a file in the working tree.
///
/// Useful for previewing local edits before they are committed.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    /// Creates a fetcher that always returns the content of `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ContentFetcher for FileFetcher {
    fn fetch_readme(&self, _coords: &RepoCoordinates) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read markdown file {}", self.path.display()))
    }

    fn list_branches(&self, coords: &RepoCoordinates) -> Result<Vec<String>> {
        Ok(vec![coords.branch().to_string()])
    }
}
