// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source discovery and page extraction.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::markdown::{extract_title, normalize_whitespace, strip_markdown};
use crate::error::{Error, Result};
use crate::types::Page;

/// A Markdown file found under the input directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Path relative to the input root; determines the page URL.
    pub relative: PathBuf,
    pub path: PathBuf,
}

impl SourceFile {
    /// Read and convert the file.
    pub fn load(&self) -> Result<Page> {
        let text = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(page_from_text(&self.relative, &text))
    }
}

/// Every `*.md` below `root`, sorted by relative path. Dot-directories are
/// skipped.
pub fn discover_sources(root: &Path) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();
    walk(root, root, &mut sources)?;
    sources.sort();
    Ok(sources)
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<SourceFile>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            walk(root, &path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            out.push(SourceFile { relative, path });
        }
    }
    Ok(())
}

/// URL of the rendered page: `guide/intro.md` becomes `guide/intro.html`.
pub fn page_url(relative: &Path) -> String {
    relative
        .with_extension("html")
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Build a page from Markdown text. Title falls back to the file stem.
pub fn page_from_text(relative: &Path, text: &str) -> Page {
    let title = extract_title(text).unwrap_or_else(|| {
        relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    Page {
        title,
        url: page_url(relative),
        content: normalize_whitespace(&strip_markdown(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(page_url(Path::new("guide/intro.md")), "guide/intro.html");
        assert_eq!(page_url(Path::new("index.md")), "index.html");
    }

    #[test]
    fn test_page_from_text() {
        let page = page_from_text(Path::new("setup.md"), "# Setup\n\nRun **cargo** build.");
        assert_eq!(page.title, "Setup");
        assert_eq!(page.url, "setup.html");
        assert_eq!(page.content, "Setup Run cargo build.");
    }

    #[test]
    fn test_title_falls_back_to_stem() {
        let page = page_from_text(Path::new("faq.md"), "no heading here");
        assert_eq!(page.title, "faq");
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("b/two.md"), "# Two").unwrap();
        fs::write(dir.path().join("a.md"), "# One").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::write(dir.path().join(".git/x.md"), "# Hidden").unwrap();

        let sources = discover_sources(dir.path()).unwrap();
        let relative: Vec<_> = sources.iter().map(|s| page_url(&s.relative)).collect();
        assert_eq!(relative, vec!["a.html", "b/two.html"]);
    }
}
