//! Source discovery and Markdown conversion against real files.

use std::fs;
use std::path::Path;

use glean::build::{collect_pages, discover_sources, load_pages};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

#[test]
fn test_discovers_markdown_recursively_sorted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "zeta.md", "# Zeta");
    write(dir.path(), "guide/alpha.md", "# Alpha");
    write(dir.path(), "about.md", "# About");
    write(dir.path(), "notes.txt", "not markdown");
    write(dir.path(), ".git/HEAD.md", "# hidden");

    let sources = discover_sources(dir.path()).unwrap();
    let relative: Vec<String> = sources
        .iter()
        .map(|s| s.relative.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(relative, vec!["about.md", "guide/alpha.md", "zeta.md"]);
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = discover_sources(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, glean::Error::Io { .. }));
}

#[test]
fn test_pages_keep_source_order() {
    let dir = TempDir::new().unwrap();
    for name in ["c", "a", "b"] {
        write(dir.path(), &format!("{}.md", name), &format!("# Page {}\n\nBody {}.", name, name));
    }
    let sources = discover_sources(dir.path()).unwrap();
    let pages = load_pages(&sources).unwrap();
    let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Page a", "Page b", "Page c"]);
    assert_eq!(pages[0].url, "a.html");
}

#[test]
fn test_markdown_is_flattened() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "setup.md",
        "# Setup\n\n- Run **cargo build**\n- Then `cargo test`\n\n```sh\nmake install\n```\n",
    );
    let pages = load_pages(&discover_sources(dir.path()).unwrap()).unwrap();
    let content = &pages[0].content;
    assert!(content.contains("Run cargo build"));
    assert!(content.contains("Then cargo test"));
    assert!(content.contains("make install"));
    assert!(!content.contains('*'));
    assert!(!content.contains('`'));
}

#[test]
fn test_title_falls_back_to_file_stem() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "faq.md", "No heading here.");
    let pages = collect_pages(dir.path()).unwrap();
    assert_eq!(pages[0].title, "faq");
}
