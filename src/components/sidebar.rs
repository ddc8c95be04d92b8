//! Collapsible navigation sidebar

use maud::{Markup, html};

use crate::navigation::NavigationNode;

/// Renders the navigation forest as a sidebar
///
/// Nodes with children become `<details>` groups that start expanded, leaves
/// become plain links. Every link targets the heading anchor in the page.
pub fn sidebar(nodes: &[NavigationNode]) -> Markup {
    html! {
        nav class="sidebar" aria-label="Table of contents" {
            h2 class="sidebar-title" { "Contents" }
            @if nodes.is_empty() {
                p class="sidebar-empty" { "No sections" }
            } @else {
                ul class="nav-tree" {
                    @for node in nodes {
                        (nav_item(node))
                    }
                }
            }
        }
    }
}

fn nav_item(node: &NavigationNode) -> Markup {
    html! {
        li class="nav-item" {
            @if node.children.is_empty() {
                a class="nav-link" href=(node.href()) { (node.title) }
            } @else {
                details open {
                    summary {
                        a class="nav-link" href=(node.href()) { (node.title) }
                    }
                    ul class="nav-tree" {
                        @for child in &node.children {
                            (nav_item(child))
                        }
                    }
                }
            }
        }
    }
}
