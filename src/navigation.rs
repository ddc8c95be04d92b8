//! Navigation tree built from a flat heading outline.
//!
//! Deeper headings nest under the nearest shallower heading before them.
//! The forest drives the collapsible sidebar; the outline module knows
//! nothing about it.

use crate::outline::OutlineEntry;
use crate::slug::slug;
use crate::title::format_title;

/// Sidebar entry with nested subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationNode {
    pub title: String,
    pub anchor_id: String,
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Link target for this node within the rendered page.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NavigationNode::node_count)
            .sum::<usize>()
    }
}

impl From<&OutlineEntry> for NavigationNode {
    fn from(entry: &OutlineEntry) -> Self {
        Self {
            title: entry.text().to_string(),
            anchor_id: entry.id().to_string(),
            children: Vec::new(),
        }
    }
}

/// Builds the navigation forest for an outline.
///
/// Keeps a stack of open headings. Each entry first closes every open
/// heading at the same or a deeper level, then becomes a child of the
/// remaining top, or a new root when nothing is left open. Documents with
/// several level 1 headings, or none at all, produce several roots.
///
/// # Examples
///
/// ```
/// use readmenav::{build_tree, parse_outline};
///
/// let outline = parse_outline("# A\n## B\n### C\n## D\n# E");
/// let forest = build_tree(&outline);
///
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].children.len(), 2);
/// assert_eq!(forest[0].children[0].children[0].title, "C");
/// ```
pub fn build_tree(outline: &[OutlineEntry]) -> Vec<NavigationNode> {
    let mut forest = Vec::new();
    // Level and sibling index of each open node, root first.
    let mut open: Vec<(u8, usize)> = Vec::new();

    for entry in outline {
        while open
            .last()
            .is_some_and(|&(level, _)| level >= entry.level())
        {
            open.pop();
        }

        let siblings = children_at(&mut forest, &open);
        let index = siblings.len();
        siblings.push(NavigationNode::from(entry));
        open.push((entry.level(), index));
    }

    forest
}

/// Follows the open path down to the children list of its last node.
fn children_at<'a>(
    forest: &'a mut Vec<NavigationNode>,
    path: &[(u8, usize)],
) -> &'a mut Vec<NavigationNode> {
    let mut siblings = forest;
    for &(_, index) in path {
        siblings = &mut siblings[index].children;
    }
    siblings
}

/// Separates a leading heading that duplicates the page title.
///
/// Only the first root is considered. It matches when its slug equals the
/// slug of `title`, or when both format to the same display title. A
/// matching node is returned separately and its children take its place at
/// the top level, so no section drops out of the sidebar.
pub fn without_title(
    mut forest: Vec<NavigationNode>,
    title: &str,
) -> (Option<NavigationNode>, Vec<NavigationNode>) {
    let duplicates_title = forest
        .first()
        .is_some_and(|first| titles_match(&first.title, title));

    if !duplicates_title {
        return (None, forest);
    }

    let mut first = forest.remove(0);
    let promoted = std::mem::take(&mut first.children);
    forest.splice(0..0, promoted);

    (Some(first), forest)
}

fn titles_match(heading: &str, title: &str) -> bool {
    let heading_slug = slug(heading);
    if !heading_slug.is_empty() && heading_slug == slug(title) {
        return true;
    }

    let heading_display = format_title(heading);
    !heading_display.is_empty() && heading_display == format_title(title)
}

/// Breadcrumb trail item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    pub id: String,
}

impl Crumb {
    fn root() -> Self {
        Self {
            title: "README".to_string(),
            id: String::new(),
        }
    }
}

/// Builds the breadcrumb trail leading to the heading with `active_id`.
///
/// The trail lists the nearest enclosing heading of each shallower level
/// and ends at the active heading. Level 1 headings are page titles and
/// never appear. When nothing can be shown the trail is a single `README`
/// crumb with an empty id.
pub fn breadcrumb(outline: &[OutlineEntry], active_id: &str) -> Vec<Crumb> {
    if active_id.is_empty() {
        return vec![Crumb::root()];
    }

    let Some(active_index) = outline.iter().position(|entry| entry.id() == active_id) else {
        return vec![Crumb::root()];
    };

    let active = &outline[active_index];
    let mut trail: Vec<&OutlineEntry> = Vec::new();
    if active.level() > 1 {
        trail.push(active);
    }

    for entry in outline[..active_index].iter().rev() {
        let is_ancestor = entry.level() > 1 && entry.level() < active.level();
        if is_ancestor && trail.iter().all(|crumb| crumb.level() > entry.level()) {
            trail.insert(0, entry);
        }
    }

    if trail.is_empty() {
        return vec![Crumb::root()];
    }

    trail
        .into_iter()
        .map(|entry| Crumb {
            title: entry.text().to_string(),
            id: entry.id().to_string(),
        })
        .collect()
}
