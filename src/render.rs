//! Presentation of outlines: owned entries, ordering, filtering and text output.
//!
//! Entries detach the outline from the document tree so they can be sorted, filtered and
//! serialised freely.

use crate::outline::OutlineItem;
use crate::tree::NodeRef;
use serde::Serialize;
use std::fmt::Write;

/// Text shown for a heading with no content, e.g. a bare `#`.
pub const UNTITLED: &str = "<untitled>";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A heading in a presentable outline.
pub struct OutlineEntry {
    /// Heading text without markup.
    pub title: String,
    /// Heading level (1 for `#`).
    pub level: u8,
    /// Line of the heading (1-indexed).
    pub line: usize,
    /// Nested headings in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    #[must_use]
    /// Detach an outline from its tree.
    pub fn from_items(items: &[OutlineItem<NodeRef<'_>>]) -> Vec<Self> {
        items
            .iter()
            .map(|item| {
                let block = item.node.block();
                Self {
                    title: block.title.clone(),
                    level: block.kind.header_level().unwrap_or_default(),
                    line: block.line,
                    children: Self::from_items(&item.children),
                }
            })
            .collect()
    }

    #[must_use]
    /// Title, or a placeholder when the heading is empty.
    pub fn presentable_text(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    #[must_use]
    /// Where the heading sits in its file.
    pub fn location(&self) -> String {
        format!(":{}", self.line)
    }

    fn matches(&self, keyword: &str) -> bool {
        self.presentable_text().to_lowercase().contains(keyword)
            || self.location().contains(keyword)
    }
}

/// Order entries by title at every depth, ignoring case. Equal titles keep document order.
pub fn sort_alphabetically(entries: &mut [OutlineEntry]) {
    entries.sort_by_cached_key(|entry| entry.title.to_lowercase());
    for entry in entries {
        sort_alphabetically(&mut entry.children);
    }
}

#[must_use]
/// Keep entries matching `keyword`, along with the ancestors of every match.
///
/// Matching is case-insensitive against the title and the location. A blank keyword keeps
/// everything.
pub fn filter_entries(entries: &[OutlineEntry], keyword: &str) -> Vec<OutlineEntry> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter_map(|entry| filter_entry(entry, &keyword))
        .collect()
}

fn filter_entry(entry: &OutlineEntry, keyword: &str) -> Option<OutlineEntry> {
    let children: Vec<_> = entry
        .children
        .iter()
        .filter_map(|child| filter_entry(child, keyword))
        .collect();

    if !entry.matches(keyword) && children.is_empty() {
        return None;
    }

    Some(OutlineEntry {
        title: entry.title.clone(),
        level: entry.level,
        line: entry.line,
        children,
    })
}

#[must_use]
/// Indented text outline, one heading per line.
pub fn render_text(entries: &[OutlineEntry]) -> String {
    let mut output = String::new();
    write_entries(&mut output, entries, 0);
    output
}

fn write_entries(output: &mut String, entries: &[OutlineEntry], depth: usize) {
    for entry in entries {
        let _ = writeln!(
            output,
            "{}{} {} {}",
            "  ".repeat(depth),
            "#".repeat(usize::from(entry.level)),
            entry.presentable_text(),
            entry.location()
        );
        write_entries(output, &entry.children, depth + 1);
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
