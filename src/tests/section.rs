use super::Section;
use crate::kind::NodeKind;
use crate::outline::OutlineOptions;
use crate::tree::{Block, TreeBuilder};

#[test]
fn test_indices_follow_outline() {
    let mut builder = TreeBuilder::new();
    builder.push(Block::header(1, "One").at(1, 0, 0..5));
    builder.push(Block::header(2, "Two").at(3, 0, 7..13));
    builder.open(Block::new(NodeKind::BlockQuote));
    builder.push(Block::header(3, "Three").at(5, 2, 17..26));
    builder.close();
    builder.push(Block::header(2, "Four").at(7, 0, 28..35));
    builder.push(Block::header(1, "Five").at(9, 0, 37..43));
    let tree = builder.finish();

    let sections = Section::collect(&tree, "doc.md", &OutlineOptions::default());

    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three", "Four", "Five"]);

    assert_eq!(sections[0].parent_index, None);
    assert_eq!(sections[0].children_indices, vec![1, 3]);
    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[1].children_indices, vec![2]);
    assert_eq!(sections[2].parent_index, Some(1));
    assert_eq!(sections[3].parent_index, Some(0));
    assert_eq!(sections[4].parent_index, None);
    assert!(sections[4].children_indices.is_empty());

    let three = &sections[2];
    assert_eq!(three.level, 3);
    assert_eq!((three.line, three.column), (5, 2));
    assert_eq!((three.byte_start, three.byte_end), (17, 26));
    assert_eq!(three.file_path, "doc.md");
}

#[test]
fn test_max_level_prunes_sections() {
    let mut builder = TreeBuilder::new();
    builder.push(Block::header(1, "Top"));
    builder.push(Block::header(2, "Hidden"));
    builder.push(Block::header(1, "Next"));
    let tree = builder.finish();

    let sections = Section::collect(&tree, "doc.md", &OutlineOptions { max_level: 1 });

    assert_eq!(sections.len(), 2);
    assert!(sections.iter().all(|s| s.children_indices.is_empty()));
}

#[test]
fn test_sections_serialise() {
    let mut builder = TreeBuilder::new();
    builder.push(Block::header(1, "Only").at(1, 0, 0..6));
    let tree = builder.finish();

    let sections = Section::collect(&tree, "a.md", &OutlineOptions::default());
    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json[0]["title"], "Only");
    assert_eq!(json[0]["level"], 1);
    assert!(json[0]["parent_index"].is_null());
}
