//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar wraps every heading and its content in a `section` node, which would bake
//! the nesting in before the outline builder sees it. Sections are flattened so that headings
//! appear as plain siblings in document order, the way a markdown reader encounters them.

use crate::formats::{Format, Shape};
use crate::kind::NodeKind;

/// Classification of tree-sitter-md block nodes.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn shape(&self, node: &tree_sitter::Node<'_>) -> Shape {
        match node.kind() {
            "document" => Shape::Node(NodeKind::Document),
            "section" => Shape::Flatten,
            "list" => {
                if is_ordered(node) {
                    Shape::Node(NodeKind::OrderedList)
                } else {
                    Shape::Node(NodeKind::UnorderedList)
                }
            }
            "list_item" => Shape::Node(NodeKind::ListItem),
            "block_quote" => Shape::Node(NodeKind::BlockQuote),
            "atx_heading" | "setext_heading" => {
                heading_level(node).map_or(Shape::Node(NodeKind::Other), |level| {
                    Shape::Node(NodeKind::Header(level))
                })
            }
            kind if kind.contains("marker") || kind == "block_continuation" => Shape::Ignore,
            _ => Shape::Node(NodeKind::Other),
        }
    }

    fn title(&self, node: &tree_sitter::Node<'_>, source: &str) -> String {
        let content = node.child_by_field_name("heading_content").or_else(|| {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| matches!(child.kind(), "inline" | "paragraph"));
            found
        });

        let Some(content) = content else {
            return String::new();
        };

        let text = content.utf8_text(source.as_bytes()).unwrap_or_default();
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if node.kind() == "atx_heading" {
            strip_closing_sequence(&collapsed).to_string()
        } else {
            collapsed
        }
    }
}

fn heading_level(node: &tree_sitter::Node<'_>) -> Option<u8> {
    let mut cursor = node.walk();
    let level = node
        .children(&mut cursor)
        .find_map(|child| match child.kind() {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        });
    level
}

/// A list is ordered when its first item opens with `1.` or `1)`.
fn is_ordered(list: &tree_sitter::Node<'_>) -> bool {
    let mut cursor = list.walk();
    let Some(item) = list.named_children(&mut cursor).next() else {
        return false;
    };

    let mut cursor = item.walk();
    let ordered = item
        .children(&mut cursor)
        .any(|child| matches!(child.kind(), "list_marker_dot" | "list_marker_parenthesis"));
    ordered
}

/// Remove an optional ATX closing sequence (`## Title ##`).
///
/// The run of `#` only counts as closing when it stands alone or follows whitespace, so titles
/// like `C#` survive.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        text
    } else if without.is_empty() || without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
