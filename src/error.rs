//! Failures while reading and parsing documents.
//!
//! Building an outline never fails; only getting a tree to build it from can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Everything that can go wrong between a path on disk and a parsed tree.
pub enum Error {
    /// Reading a file or walking a directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Directory traversal failed partway through.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    /// The grammar is incompatible with the linked tree-sitter runtime.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser gave up without producing a tree.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// Document that could not be parsed.
        path: PathBuf,
    },
}

/// Result alias for document loading.
pub type Result<T> = std::result::Result<T, Error>;
