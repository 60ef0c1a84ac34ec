//! Locate documents on disk and turn them into document trees.
//!
//! Parsing is delegated to tree-sitter; the [`Format`] decides which grammar nodes survive the
//! conversion and as what kind, so the outline builder only ever sees blocks it understands.

use crate::error::{Error, Result};
use crate::formats::{Format, Shape};
use crate::kind::NodeKind;
use crate::outline::OutlineOptions;
use crate::section::Section;
use crate::tree::{Block, Tree, TreeBuilder};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Expand the given paths into a sorted list of documents.
///
/// Files are taken as given. Directories are searched recursively for files whose suffix is one
/// of `extensions`, skipping hidden entries. With no paths the current directory is searched.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for root in roots {
        if fs::metadata(&root)?.is_file() {
            documents.push(root);
            continue;
        }

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                documents.push(entry.into_path());
            }
        }
    }

    documents.sort();
    documents.dedup();
    debug!(count = documents.len(), "found documents");
    Ok(documents)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension().and_then(OsStr::to_str).is_some_and(|ext| {
        extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    })
}

/// Parse in-memory source text into a document tree.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or the parser produces no tree.
pub fn parse_source(source: &str, format: &impl Format) -> Result<Tree> {
    parse_named(source, Path::new("<input>"), format)
}

/// Read and parse a document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path, format: &impl Format) -> Result<Tree> {
    let source = fs::read_to_string(path)?;
    parse_named(&source, path, format)
}

/// Read a document and flatten its outline into sections.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn extract_sections(
    path: &Path,
    format: &impl Format,
    options: &OutlineOptions,
) -> Result<Vec<Section>> {
    let tree = load_document(path, format)?;
    Ok(Section::collect(&tree, &path.to_string_lossy(), options))
}

fn parse_named(source: &str, path: &Path, format: &impl Format) -> Result<Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&format.language())?;

    let syntax = parser.parse(source, None).ok_or_else(|| Error::Parse {
        path: path.to_path_buf(),
    })?;
    let root = syntax.root_node();

    let mut builder =
        TreeBuilder::with_root(Block::new(NodeKind::Document).at(1, 0, root.byte_range()));
    convert_children(root, source, format, &mut builder);
    let tree = builder.finish();

    debug!(path = %path.display(), nodes = tree.len(), "parsed document");
    Ok(tree)
}

/// Append the named children of `node` to the builder's open container.
fn convert_children(
    node: tree_sitter::Node<'_>,
    source: &str,
    format: &impl Format,
    builder: &mut TreeBuilder,
) {
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();

    for child in children {
        match format.shape(&child) {
            Shape::Ignore => {}
            Shape::Flatten => convert_children(child, source, format, builder),
            Shape::Node(kind) => {
                let title = if kind.is_header() {
                    format.title(&child, source)
                } else {
                    String::new()
                };
                let start = child.start_position();
                let block = Block {
                    kind,
                    title,
                    line: start.row + 1,
                    column: start.column,
                    byte_range: child.byte_range(),
                };
                trace!(grammar = child.kind(), ?kind, line = block.line, "converted node");

                if kind.is_transparent() {
                    builder.open(block);
                    convert_children(child, source, format, builder);
                    builder.close();
                } else {
                    builder.push(block);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
