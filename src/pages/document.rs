//! README document page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::metadata::{branch_list, repo_header};
use crate::components::sidebar::sidebar;
use crate::navigation::NavigationNode;
use crate::repo::RepoCoordinates;

/// Stylesheets written next to the page by `write_css_assets`
const STYLESHEETS: &[&str] = &["assets/base.css", "assets/markdown.css"];

/// Data container for document page generation
pub struct DocumentPageData<'a> {
    pub title: &'a str,
    pub coords: Option<&'a RepoCoordinates>,
    pub branch: &'a str,
    pub branches: &'a [String],
    pub navigation: &'a [NavigationNode],
    pub readme_html: &'a str,
}

/// Generates the documentation page for a rendered README
///
/// Lays out the navigation sidebar next to the rendered README. An empty
/// README shows a placeholder instead of an empty card.
pub fn generate(data: DocumentPageData<'_>) -> Markup {
    page_wrapper(
        data.title,
        STYLESHEETS,
        html! {
            (repo_header(data.title, data.coords))

            div class="repo-controls" {
                (branch_list(data.branches, data.branch, data.coords))
                @if let Some(coords) = data.coords {
                    a class="history-link" href=(coords.with_branch(data.branch).tree_url("")) {
                        "View on GitHub"
                    }
                }
            }

            div class="doc-layout" {
                (sidebar(data.navigation))

                main class="readme-card" {
                    @if data.readme_html.trim().is_empty() {
                        p class="empty-state" { "No content available" }
                    } @else {
                        article class="readme-content" {
                            (PreEscaped(data.readme_html))
                        }
                    }
                }
            }
        },
    )
}
