//! Repository coordinates and the GitHub URLs derived from them.

/// Branch used when none is given.
pub const DEFAULT_BRANCH: &str = "main";

/// Identifies one branch of a GitHub repository.
///
/// Passed explicitly to everything that needs to build repository URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    owner: String,
    repo: String,
    branch: String,
}

impl RepoCoordinates {
    /// Creates coordinates, falling back to `main` for an empty branch.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: if branch.is_empty() {
                DEFAULT_BRANCH.to_string()
            } else {
                branch
            },
        }
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Branch name.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Same repository on another branch.
    pub fn with_branch(&self, branch: impl Into<String>) -> Self {
        Self::new(self.owner.clone(), self.repo.clone(), branch)
    }

    /// Repository home page.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }

    /// Rendered file view.
    pub fn blob_url(&self, path: &str) -> String {
        format!("{}/blob/{}/{}", self.github_url(), self.branch, path)
    }

    /// Directory listing view.
    pub fn tree_url(&self, path: &str) -> String {
        format!("{}/tree/{}/{}", self.github_url(), self.branch, path)
    }

    /// Raw file content, used for images.
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, self.branch, path
        )
    }
}
