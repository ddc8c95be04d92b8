//! Repository metadata components

use maud::{Markup, html};

use crate::repo::RepoCoordinates;

/// Renders document header with title and optional repository link
///
/// # Arguments
///
/// * `title`: Document title
/// * `coords`: Repository coordinates, shown as `owner / repo` when present
pub fn repo_header(title: &str, coords: Option<&RepoCoordinates>) -> Markup {
    html! {
        header class="repo-header" {
            @if let Some(coords) = coords {
                a class="repo-owner" href=(coords.github_url()) {
                    (coords.owner()) " / " (coords.repo())
                }
            }
            h1 class="repo-name" { (title) }
        }
    }
}

/// Renders the branch list with the current branch highlighted
///
/// Other branches link to their GitHub tree view when coordinates are known.
/// A single branch is shown as a static badge.
pub fn branch_list(branches: &[String], current: &str, coords: Option<&RepoCoordinates>) -> Markup {
    if branches.len() < 2 {
        return html! {
            div class="branch-info" {
                span class="branch-name branch-active" { (current) }
            }
        };
    }

    html! {
        ul class="branch-list" {
            @for branch in branches {
                @if branch == current {
                    li class="branch-name branch-active" { (branch) }
                } @else if let Some(coords) = coords {
                    li class="branch-name" {
                        a href=(coords.with_branch(branch.as_str()).tree_url("")) { (branch) }
                    }
                } @else {
                    li class="branch-name" { (branch) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_header_with_coords() {
        // Arrange
        let coords = RepoCoordinates::new("octo", "demo", "main");

        // Act
        let html = repo_header("Demo", Some(&coords)).into_string();

        // Assert
        assert!(html.contains("href=\"https://github.com/octo/demo\""));
        assert!(html.contains("octo / demo"));
        assert!(html.contains("<h1 class=\"repo-name\">Demo</h1>"));
    }

    #[test]
    fn test_single_branch_badge() {
        let html = branch_list(&["main".to_string()], "main", None).into_string();
        assert!(html.contains("branch-info"));
        assert!(!html.contains("branch-list"));
    }

    #[test]
    fn test_branch_list_links_other_branches() {
        // Arrange
        let coords = RepoCoordinates::new("octo", "demo", "main");
        let branches = vec!["dev".to_string(), "main".to_string()];

        // Act
        let html = branch_list(&branches, "main", Some(&coords)).into_string();

        // Assert
        assert!(html.contains("href=\"https://github.com/octo/demo/tree/dev/\""), "Got: {}", html);
        assert!(html.contains("<li class=\"branch-name branch-active\">main</li>"));
    }
}
