//! README outline extraction and navigable documentation rendering.

mod assets;
pub mod components;
mod config;
mod fetch;
mod markdown;
mod navigation;
mod outline;
pub mod pages;
mod repo;
mod sections;
mod slug;
mod title;

pub use assets::write_css_assets;
pub use config::Config;
pub use fetch::{ContentFetcher, FileFetcher, GitFetcher, README_CANDIDATES};
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use navigation::{Crumb, NavigationNode, breadcrumb, build_tree, without_title};
pub use outline::{OutlineEntry, heading_level, parse_outline};
pub use repo::{DEFAULT_BRANCH, RepoCoordinates};
pub use sections::{ReadmeSection, decode_readme_payload, parse_readme_sections};
pub use slug::slug;
pub use title::format_title;
