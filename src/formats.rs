//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats by describing how a tree-sitter grammar's nodes map onto
//! the block kinds the outline builder understands.

use crate::kind::NodeKind;

pub mod markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What happens to a grammar node when converting a syntax tree into a document tree.
pub enum Shape {
    /// Keep the node with the given kind.
    Node(NodeKind),
    /// Drop the node but splice its children into the parent's sibling chain.
    Flatten,
    /// Drop the node and everything beneath it.
    Ignore,
}

/// Grammar-specific knowledge needed to turn a syntax tree into a document tree.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Default file suffix, without the dot.
    fn file_extension(&self) -> &'static str;
    /// How a grammar node is represented in the document tree.
    fn shape(&self, node: &tree_sitter::Node<'_>) -> Shape;
    /// Heading text without markup, for nodes classified as headers.
    fn title(&self, node: &tree_sitter::Node<'_>, source: &str) -> String;
}
