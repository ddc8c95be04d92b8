//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for readmenav.
#[derive(Debug, Clone, Parser)]
#[command(name = "readmenav", version, about, long_about = None)]
pub struct Config {
    /// Repository path
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Repository name on GitHub
    #[arg(long)]
    pub name: Option<String>,

    /// Repository owner on GitHub, enables link rewriting
    #[arg(long)]
    pub owner: Option<String>,

    /// Branch to read the README from (defaults to HEAD)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Markdown file to render instead of the committed README
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the table of contents and exit
    #[arg(long)]
    pub toc: bool,

    /// Print the breadcrumb trail for a heading id and exit
    #[arg(long, value_name = "ID")]
    pub breadcrumb: Option<String>,

    /// Open the generated page in the browser
    #[arg(long)]
    pub open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the repository path or markdown file does not exist,
    /// or if the owner is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.repo.exists() {
            bail!("Repository path does not exist: {}", self.repo.display());
        }

        if let Some(file) = &self.file
            && !file.is_file()
        {
            bail!("Markdown file does not exist: {}", file.display());
        }

        if self.owner.as_deref().is_some_and(|o| o.trim().is_empty()) {
            bail!("Owner must not be empty");
        }

        Ok(())
    }

    /// Returns project name from configuration or repository directory.
    ///
    /// # Errors
    ///
    /// Returns error if repository path has no name component or contains invalid UTF8.
    pub fn project_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .repo
            .canonicalize()
            .unwrap_or_else(|_| self.repo.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract project name from path: {}", path.display()))
            .map(String::from)
    }
}
