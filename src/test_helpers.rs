//! Shared test utilities for the ebook-designer test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let doc = scan(tmp.path()).unwrap();
//!
//! let florida = find_page(&doc, "Florida, USA");
//! assert_eq!(florida.images.len(), 1);
//! assert_eq!(page_ids(&doc), vec![1, 2, 3, 4, 5]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::document::Document;
use crate::page::Page;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/book/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/book");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Document lookups: panic with a clear message on miss
// =========================================================================

/// Find a page by title. Panics if not found.
pub fn find_page<'a>(doc: &'a Document, title: &str) -> &'a Page {
    doc.pages()
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles = page_titles(doc);
            panic!("page '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All page titles in document order.
pub fn page_titles(doc: &Document) -> Vec<&str> {
    doc.pages().iter().map(|p| p.title.as_str()).collect()
}

/// All page ids in document order.
pub fn page_ids(doc: &Document) -> Vec<u32> {
    doc.pages().iter().map(|p| p.id).collect()
}
