//! Reconstruct section nesting from heading levels.
//!
//! Markdown headings carry no parent pointers: a level-2 heading belongs to the nearest level-1
//! heading before it, up until the next heading at level 1 or above. Lists, list items and block
//! quotes don't start a hierarchy of their own, so their headings are discovered by descending
//! into them while the enclosing scan is still looking for its first heading.

use crate::kind::{NodeKind, MAX_HEADER_LEVEL};
use crate::tree::{Siblings, TreeNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Controls which headings appear in an outline.
pub struct OutlineOptions {
    /// Deepest heading level that is shown. Deeper headings still delimit sections.
    pub max_level: u8,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_level: MAX_HEADER_LEVEL,
        }
    }
}

impl OutlineOptions {
    #[must_use]
    /// Whether a node of this kind is emitted into the outline.
    pub fn is_presentable(&self, kind: NodeKind) -> bool {
        kind.header_level().is_some_and(|level| level <= self.max_level)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading together with the headings nested beneath it.
pub struct OutlineItem<N> {
    /// The heading node.
    pub node: N,
    /// Nested headings in document order.
    pub children: Vec<OutlineItem<N>>,
}

#[must_use]
/// Immediate outline children of `node`.
///
/// For the document these are its top-level headings. For a heading they are the headings that
/// follow it inside its enclosing container, up to the next heading at the same or a broader
/// level. Any other node yields the headings of its enclosing container. Nodes outside any
/// container have no outline children.
pub fn children_of<N: TreeNode>(node: N, options: &OutlineOptions) -> Vec<N> {
    if node.kind() == NodeKind::Document {
        return scan(node.children(), None, options);
    }

    let Some(container) = node.nearest_container() else {
        return Vec::new();
    };

    if node.kind().is_header() {
        scan(node.following_siblings(), Some(node), options)
    } else {
        scan(container.children(), None, options)
    }
}

#[must_use]
/// Full outline below `root`, expanding every emitted heading in turn.
pub fn build_outline<N: TreeNode>(root: N, options: &OutlineOptions) -> Vec<OutlineItem<N>> {
    children_of(root, options)
        .into_iter()
        .map(|node| OutlineItem {
            node,
            children: build_outline(node, options),
        })
        .collect()
}

/// Walk a sibling chain collecting headings.
///
/// Containers met before the first heading are searched depth-first with a fresh scan. A heading
/// at or above `restriction` ends the walk; otherwise each heading at or above the broadest one
/// seen so far is taken.
fn scan<N: TreeNode>(
    siblings: Siblings<N>,
    restriction: Option<N>,
    options: &OutlineOptions,
) -> Vec<N> {
    let mut found = Vec::new();
    let mut max_content_level: Option<NodeKind> = None;

    for sibling in siblings {
        let kind = sibling.kind();

        if kind.is_transparent() && max_content_level.is_none() {
            found.extend(scan(sibling.children(), None, options));
        } else if kind.is_header() {
            if restriction.is_some_and(|bound| kind.same_level_or_higher(bound.kind())) {
                break;
            }

            if max_content_level.is_none_or(|max| kind.same_level_or_higher(max)) {
                max_content_level = Some(kind);
                if options.is_presentable(kind) {
                    found.push(sibling);
                }
            }
        }
    }

    found
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
