//! Build a site, then search it the way the page would.

use std::fs;

use glean::build::run_build;
use glean::{search, DirSource, IndexLoader, SearchIndex, DEFAULT_INDEX_PATH};
use tempfile::TempDir;

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir_all(docs.join("guide")).unwrap();
    fs::write(docs.join("index.md"), "# Welcome\n\nStart with the guide.").unwrap();
    fs::write(
        docs.join("guide/install.md"),
        "# Installing\n\nDownload the **release** archive and unpack it.",
    )
    .unwrap();
    dir
}

#[test]
fn test_build_then_search() {
    let dir = site();
    let out = dir.path().join("public");

    let summary = run_build(&dir.path().join("docs"), &out).unwrap();
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.output, out.join(DEFAULT_INDEX_PATH));
    assert!(summary.bytes > 0);

    let mut loader = IndexLoader::new(DEFAULT_INDEX_PATH);
    let index = loader.load_from(&DirSource::new(&out)).unwrap();
    assert_eq!(index.len(), 2);

    let results = search(&index, "release").results().to_vec();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Installing");
    assert_eq!(results[0].url, "guide/install.html");
    assert!(results[0].preview.contains("release archive"));
}

#[test]
fn test_index_is_plain_json() {
    let dir = site();
    let out = dir.path().join("public");
    run_build(&dir.path().join("docs"), &out).unwrap();

    let raw = fs::read_to_string(out.join(DEFAULT_INDEX_PATH)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages[0]["title"], "Installing");
    assert_eq!(pages[1]["url"], "index.html");

    let parsed = SearchIndex::from_json(raw.as_bytes()).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_empty_site_writes_empty_index() {
    let dir = TempDir::new().unwrap();
    let summary = run_build(dir.path(), &dir.path().join("out")).unwrap();
    assert_eq!(summary.pages, 0);
    let parsed = SearchIndex::from_json(&fs::read(&summary.output).unwrap()).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_loader_reports_missing_index() {
    let dir = TempDir::new().unwrap();
    let mut loader = IndexLoader::default();
    let err = loader.load_from(&DirSource::new(dir.path())).unwrap_err();
    assert!(matches!(err, glean::Error::Fetch { .. }));
    assert!(err.is_retryable());
}
