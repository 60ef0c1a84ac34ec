//! mdoutline: section outlines for markdown documents, reconstructed from header nesting.
//!
//! Headings in a markdown file form a hierarchy by position alone. This crate parses documents
//! with tree-sitter, reduces them to a tree of typed blocks, and derives the outline from heading
//! levels while treating lists and block quotes as transparent.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod kind;
pub mod outline;
pub mod render;
pub mod section;
pub mod tree;
