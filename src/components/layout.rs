//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head, stylesheet links and the footer. The caller
/// provides the page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS file paths to include
/// * `body`: Page-specific body markup
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - readmenav" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                footer {
                    p { "Generated by readmenav" }
                }
            }
        }
    }
}
