//! Node kinds recognised by the outline builder.
//!
//! Every block in a parsed document is classified into one of a small, closed set of kinds.
//! Containers are transparent to heading rank, headers carry a level, and everything else is
//! inert content that the outline skips over.

/// Deepest heading level markdown supports.
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Rank given to nodes that are neither the document nor a header.
pub const WEAKEST_RANK: u8 = u8::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Structural classification of a block node.
pub enum NodeKind {
    /// Root of the document tree.
    Document,
    /// Bulleted list (`-`, `+` or `*` markers).
    UnorderedList,
    /// Numbered list (`1.` or `1)` markers).
    OrderedList,
    /// Single item within either kind of list.
    ListItem,
    /// Quoted block introduced by `>`.
    BlockQuote,
    /// Heading with its level (1 for `#`, 6 for `######`).
    Header(u8),
    /// Paragraphs, code blocks, rules and any other leaf content.
    Other,
}

impl NodeKind {
    #[must_use]
    /// Whether this kind lets its content take part in the enclosing heading hierarchy.
    pub fn is_transparent(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::UnorderedList
                | Self::OrderedList
                | Self::ListItem
                | Self::BlockQuote
        )
    }

    #[must_use]
    /// Whether this kind is a heading.
    pub fn is_header(self) -> bool {
        matches!(self, Self::Header(_))
    }

    #[must_use]
    /// Heading level, if this is a heading.
    pub fn header_level(self) -> Option<u8> {
        match self {
            Self::Header(level) => Some(level),
            _ => None,
        }
    }

    #[must_use]
    /// Position in the heading order: the document is broadest, then levels 1 through 6.
    ///
    /// Anything else ranks weakest, so it can never bound or open a heading scope.
    pub fn rank(self) -> u8 {
        match self {
            Self::Document => 0,
            Self::Header(level) => level,
            Self::UnorderedList
            | Self::OrderedList
            | Self::ListItem
            | Self::BlockQuote
            | Self::Other => WEAKEST_RANK,
        }
    }

    #[must_use]
    /// True when `self` is at the same heading rank as `other` or a broader one.
    pub fn same_level_or_higher(self, other: Self) -> bool {
        self.rank() <= other.rank()
    }
}
