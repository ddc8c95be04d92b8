//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes bundled CSS assets to the output directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir)
        .with_context(|| format!("Failed to create assets directory {}", assets_dir.display()))?;

    write_asset(assets_dir, "base.css", BASE)?;
    write_asset(assets_dir, "markdown.css", MARKDOWN)?;
    Ok(())
}

fn write_asset(dir: &Path, name: &str, css: &str) -> Result<()> {
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))
}
