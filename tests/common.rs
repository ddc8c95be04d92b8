//! Shared test utilities for integration tests.
//!
//! Helpers for creating temporary git repositories with README content.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates temporary git repository on branch `main`.
///
/// # Errors
///
/// Returns error if git commands fail or directory creation fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    git(path, &["init"])?;
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(dir)
}

/// Runs git in the repository and fails on a non-zero exit.
///
/// # Errors
///
/// Returns error if git cannot be spawned or reports failure
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Writes file to repository, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes and commits a file, returning the commit hash.
///
/// # Errors
///
/// Returns error if the write, add or commit fails
pub fn commit_file(repo_path: &Path, path: &str, content: &str) -> Result<String> {
    write_file(repo_path, path, content)?;
    git(repo_path, &["add", path])?;
    git(repo_path, &["commit", "-m", &format!("Add {}", path)])?;
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Sample README with nested sections, a fenced comment and links.
pub const SAMPLE_README: &str = "# Demo Tool

A tool for demos.

## Installation

```bash
# not a heading
cargo install demo-tool
```

### From Source

See [the guide](docs/guide.md).

## Usage

![screenshot](assets/shot.png)

## FAQ
";
