//! Section representation for tree-sitter parsed documents.
//!
//! A section is one heading of the outline flattened into a list. Sections track their position
//! in the outline through parent/child indices and keep the heading's coordinates in the source
//! file so a consumer can jump to it.

use crate::outline::{build_outline, OutlineItem, OutlineOptions};
use crate::tree::{NodeRef, Tree};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Heading in a flattened outline, with coordinates for navigation.
pub struct Section {
    /// Section heading text without markup symbols.
    pub title: String,
    /// Heading level (1 for `#`).
    pub level: usize,
    /// Line of the heading (1-indexed).
    pub line: usize,
    /// Starting column of the section heading.
    pub column: usize,
    /// Byte offset where the heading begins.
    pub byte_start: usize,
    /// Byte offset where the heading ends.
    pub byte_end: usize,
    /// Source file containing this section.
    pub file_path: String,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

impl Section {
    #[must_use]
    /// Flatten the outline of `tree` into sections in outline pre-order.
    pub fn collect(tree: &Tree, file_path: &str, options: &OutlineOptions) -> Vec<Self> {
        let outline = build_outline(tree.root(), options);
        let mut sections = Vec::new();
        flatten(&outline, None, file_path, &mut sections);
        sections
    }
}

fn flatten(
    items: &[OutlineItem<NodeRef<'_>>],
    parent_index: Option<usize>,
    file_path: &str,
    sections: &mut Vec<Section>,
) -> Vec<usize> {
    let mut indices = Vec::with_capacity(items.len());

    for item in items {
        let index = sections.len();
        let block = item.node.block();
        let level = block.kind.header_level().map_or(0, usize::from);

        sections.push(Section {
            title: block.title.clone(),
            level,
            line: block.line,
            column: block.column,
            byte_start: block.byte_range.start,
            byte_end: block.byte_range.end,
            file_path: file_path.to_string(),
            parent_index,
            children_indices: Vec::new(),
        });

        let children = flatten(&item.children, Some(index), file_path, sections);
        sections[index].children_indices = children;
        indices.push(index);
    }

    indices
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
