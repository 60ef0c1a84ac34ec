//! Read-only, sibling-linked document trees.
//!
//! The outline builder only ever walks a tree through first-child, next-sibling and parent links,
//! so it is written against the [`TreeNode`] trait. [`Tree`] is the owned arena the markdown
//! adapter produces, and [`TreeBuilder`] assembles one block at a time.

use crate::kind::NodeKind;
use std::ops::Range;

/// Navigation over an immutable, sibling-linked tree of typed nodes.
///
/// Handles are cheap copies; walking never mutates the underlying tree.
pub trait TreeNode: Copy {
    /// Structural kind of this node.
    fn kind(&self) -> NodeKind;
    /// First child in document order, if any.
    fn first_child(&self) -> Option<Self>;
    /// Following sibling in document order, if any.
    fn next_sibling(&self) -> Option<Self>;
    /// Enclosing node, absent for the root.
    fn parent(&self) -> Option<Self>;

    /// Iterates over direct children in document order.
    fn children(&self) -> Siblings<Self> {
        Siblings {
            next: self.first_child(),
        }
    }

    /// Iterates over the siblings after this node in document order.
    fn following_siblings(&self) -> Siblings<Self> {
        Siblings {
            next: self.next_sibling(),
        }
    }

    /// Closest strict ancestor whose kind is a transparent container.
    fn nearest_container(&self) -> Option<Self> {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.kind().is_transparent() {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }
}

/// Iterator following next-sibling links.
pub struct Siblings<N> {
    next: Option<N>,
}

impl<N: TreeNode> Iterator for Siblings<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a node within its [`Tree`].
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    /// Position of the node in the arena, which is also its pre-order position.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Payload of a single node: its kind plus what is needed to present and locate it.
pub struct Block {
    /// Structural kind.
    pub kind: NodeKind,
    /// Heading text without markup; empty for everything but headers.
    pub title: String,
    /// Line the block starts on (1-indexed).
    pub line: usize,
    /// Column the block starts at (0-indexed).
    pub column: usize,
    /// Bytes the block spans in the source.
    pub byte_range: Range<usize>,
}

impl Block {
    #[must_use]
    /// Untitled block of the given kind with no position.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            title: String::new(),
            line: 0,
            column: 0,
            byte_range: 0..0,
        }
    }

    #[must_use]
    /// Heading block of the given level.
    pub fn header(level: u8, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::new(NodeKind::Header(level))
        }
    }

    #[must_use]
    /// Attach source coordinates to the block.
    pub fn at(mut self, line: usize, column: usize, byte_range: Range<usize>) -> Self {
        self.line = line;
        self.column = column;
        self.byte_range = byte_range;
        self
    }
}

#[derive(Clone, Debug)]
struct Slot {
    block: Block,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

#[derive(Clone, Debug)]
/// Owned document tree stored as an arena in pre-order.
///
/// The root is always a [`NodeKind::Document`] node, so an empty document is a root with no
/// children.
pub struct Tree {
    slots: Vec<Slot>,
}

impl Tree {
    #[must_use]
    /// The document node.
    pub fn root(&self) -> NodeRef<'_> {
        self.node(NodeId(0))
    }

    #[must_use]
    /// Handle for the node with the given id.
    ///
    /// Ids are only ever handed out by the tree that owns them.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    #[must_use]
    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    /// True when the document has no content beneath the root.
    pub fn is_empty(&self) -> bool {
        self.slots.len() <= 1
    }

    /// All nodes in pre-order, the root first.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.slots.len()).map(|index| self.node(NodeId(index)))
    }
}

#[derive(Clone, Copy, Debug)]
/// Borrowed handle to a node in a [`Tree`].
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[must_use]
    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    /// Payload stored for this node.
    pub fn block(&self) -> &'a Block {
        &self.slot().block
    }

    #[must_use]
    /// Heading text, empty for non-headers.
    pub fn title(&self) -> &'a str {
        &self.block().title
    }

    fn slot(&self) -> &'a Slot {
        &self.tree.slots[self.id.0]
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for NodeRef<'_> {}

impl TreeNode for NodeRef<'_> {
    fn kind(&self) -> NodeKind {
        self.block().kind
    }

    fn first_child(&self) -> Option<Self> {
        self.slot().first_child.map(|id| self.tree.node(id))
    }

    fn next_sibling(&self) -> Option<Self> {
        self.slot().next_sibling.map(|id| self.tree.node(id))
    }

    fn parent(&self) -> Option<Self> {
        self.slot().parent.map(|id| self.tree.node(id))
    }
}

/// Incremental construction of a [`Tree`] in document order.
///
/// Blocks are appended as children of the innermost open container. Closing more containers
/// than were opened leaves the root open.
pub struct TreeBuilder {
    slots: Vec<Slot>,
    open: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    #[must_use]
    /// Builder holding only the document root.
    pub fn new() -> Self {
        Self::with_root(Block::new(NodeKind::Document))
    }

    #[must_use]
    /// Builder whose root carries the given payload, e.g. the document's byte span.
    pub fn with_root(root: Block) -> Self {
        let slot = Slot {
            block: root,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        };
        Self {
            slots: vec![slot],
            open: vec![NodeId(0)],
        }
    }

    /// Append a block with no children.
    pub fn push(&mut self, block: Block) -> NodeId {
        let parent = self.open.last().copied().unwrap_or(NodeId(0));
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            block,
            parent: Some(parent),
            first_child: None,
            last_child: None,
            next_sibling: None,
        });

        match self.slots[parent.0].last_child {
            Some(previous) => self.slots[previous.0].next_sibling = Some(id),
            None => self.slots[parent.0].first_child = Some(id),
        }
        self.slots[parent.0].last_child = Some(id);
        id
    }

    /// Append a block and make it the container for subsequent blocks until [`Self::close`].
    pub fn open(&mut self, block: Block) -> NodeId {
        let id = self.push(block);
        self.open.push(id);
        id
    }

    /// Return to the enclosing container.
    pub fn close(&mut self) {
        if self.open.len() > 1 {
            self.open.pop();
        }
    }

    #[must_use]
    /// Finish building, implicitly closing any open containers.
    pub fn finish(self) -> Tree {
        Tree { slots: self.slots }
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
