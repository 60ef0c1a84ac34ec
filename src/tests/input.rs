use super::{extract_sections, find_documents, load_document};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use crate::outline::OutlineOptions;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn md() -> Vec<String> {
    vec!["md".to_string()]
}

#[test]
fn test_find_documents_walks_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "# A\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "# not markdown\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("b.MD"), "# B\n").unwrap();
    fs::create_dir(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join(".hidden").join("c.md"), "# C\n").unwrap();

    let documents = find_documents(vec![dir.path().to_path_buf()], &md()).unwrap();

    assert_eq!(
        documents,
        vec![dir.path().join("a.md"), dir.path().join("sub").join("b.MD")],
        "Hidden directories and other extensions should be skipped"
    );
}

#[test]
fn test_find_documents_keeps_explicit_files() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("README.markdown");
    fs::write(&readme, "# Readme\n").unwrap();

    let documents = find_documents(vec![readme.clone(), readme.clone()], &md()).unwrap();

    assert_eq!(documents, vec![readme], "Duplicates should collapse");
}

#[test]
fn test_find_documents_accepts_dotted_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("guide.markdown"), "# Guide\n").unwrap();

    let documents =
        find_documents(vec![dir.path().to_path_buf()], &[".markdown".to_string()]).unwrap();

    assert_eq!(documents, vec![dir.path().join("guide.markdown")]);
}

#[test]
fn test_find_documents_missing_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let result = find_documents(vec![missing], &md());

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_document_missing_file() {
    let dir = tempdir().unwrap();

    let result = load_document(&dir.path().join("absent.md"), &MarkdownFormat);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_extract_sections_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Hello\n\n?\n\n## World\n\n??\n\n# Again").unwrap();

    let sections =
        extract_sections(file.path(), &MarkdownFormat, &OutlineOptions::default()).unwrap();

    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Hello", "World", "Again"]);

    assert_eq!(sections[0].level, 1);
    assert_eq!(sections[0].line, 1);
    assert_eq!(sections[0].children_indices, vec![1]);
    assert_eq!(sections[1].level, 2);
    assert_eq!(sections[1].line, 5);
    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[2].parent_index, None);
    assert_eq!(
        sections[0].file_path,
        file.path().to_string_lossy().to_string()
    );
}
