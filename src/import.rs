//! Build a document from a directory of Markdown pages.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── 010-welcome.md           # Page 1
//! ├── 020-florida.md           # Page 2
//! ├── 020-florida/             # Images for page 2 (same stem as the .md)
//! │   ├── 001-beach.jpg
//! │   └── 002-park.jpg
//! ├── 030-resources.md         # Page 3
//! └── appendix.md              # Unnumbered: placed after numbered pages
//! ```
//!
//! ## Page Fields
//!
//! - **Title**: first `# ` heading, else the file name without its number
//!   prefix, dashes turned into spaces (`020-florida-keys` → "florida keys").
//! - **Subtitle**: a `## ` heading directly after the title (blank lines
//!   allowed in between).
//! - **Content**: everything else, trimmed.
//! - **Images**: files in the same-stem directory, ordered by number prefix
//!   then name, recorded as root-relative paths.
//! - **Template**: picked from the image count, like adding images by hand.
//!
//! Pages are numbered `1..=n` in import order. Two files sharing a number
//! prefix are an error, since their order would be ambiguous.

use crate::analysis::auto_template;
use crate::document::{Document, DocumentError};
use crate::page::Page;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate page number {0} in {1}")]
    DuplicateNumber(u32, PathBuf),
    #[error("No Markdown pages found in {0}")]
    NoPages(PathBuf),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"];

/// Split `NNN-name` into its number and the rest.
///
/// `"020-florida"` → `(Some(20), "florida")`, `"appendix"` → `(None, "appendix")`.
fn split_number_prefix(stem: &str) -> (Option<u32>, &str) {
    if let Some((prefix, rest)) = stem.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return (Some(num), rest);
    }
    match stem.parse::<u32>() {
        Ok(num) => (Some(num), ""),
        Err(_) => (None, stem),
    }
}

fn display_title(name: &str) -> String {
    name.replace('-', " ")
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sort key placing numbered entries first, by number, then by name.
fn order_key(path: &Path) -> (u32, String) {
    let stem = file_stem(path);
    let number = split_number_prefix(&stem).0.unwrap_or(u32::MAX);
    (number, stem)
}

pub fn scan(root: &Path) -> Result<Document, ImportError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, &["md"]))
        .collect();
    md_files.sort_by_key(|p| order_key(p));

    for pair in md_files.windows(2) {
        let a = split_number_prefix(&file_stem(&pair[0])).0;
        let b = split_number_prefix(&file_stem(&pair[1])).0;
        if let (Some(a), Some(b)) = (a, b)
            && a == b
        {
            return Err(ImportError::DuplicateNumber(a, root.to_path_buf()));
        }
    }

    let mut pages = Vec::with_capacity(md_files.len());
    for (i, md_path) in md_files.iter().enumerate() {
        let page = parse_page(i as u32 + 1, md_path, root)?;
        debug!(
            page = page.id,
            images = page.images.len(),
            source = %md_path.display(),
            "imported page"
        );
        pages.push(page);
    }

    if pages.is_empty() {
        return Err(ImportError::NoPages(root.to_path_buf()));
    }

    let title = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .map(|name| display_title(split_number_prefix(&name).1))
        .unwrap_or_else(|| "Untitled".to_string());

    info!(pages = pages.len(), root = %root.display(), "scanned content directory");
    Ok(Document::new(title, pages)?)
}

/// Title, subtitle and body extracted from a Markdown source.
#[derive(Debug, PartialEq)]
struct MarkdownParts {
    title: Option<String>,
    subtitle: Option<String>,
    body: String,
}

fn split_markdown(source: &str) -> MarkdownParts {
    let lines: Vec<&str> = source.lines().collect();
    let Some(title_idx) = lines.iter().position(|l| l.starts_with("# ")) else {
        return MarkdownParts {
            title: None,
            subtitle: None,
            body: source.trim().to_string(),
        };
    };
    let title = lines[title_idx].trim_start_matches("# ").trim().to_string();

    let subtitle_idx = lines[title_idx + 1..]
        .iter()
        .position(|l| !l.trim().is_empty())
        .map(|offset| title_idx + 1 + offset)
        .filter(|&idx| lines[idx].starts_with("## "));
    let subtitle = subtitle_idx.map(|idx| lines[idx].trim_start_matches("## ").trim().to_string());

    let body = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != title_idx && Some(*idx) != subtitle_idx)
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    MarkdownParts {
        title: Some(title),
        subtitle,
        body,
    }
}

fn parse_page(id: u32, md_path: &Path, root: &Path) -> Result<Page, ImportError> {
    let stem = file_stem(md_path);
    let source = fs::read_to_string(md_path)?;
    let parts = split_markdown(&source);

    let title = parts
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| display_title(split_number_prefix(&stem).1));

    let images = collect_images(&root.join(&stem), root)?;

    let mut page = Page::new(id, title, parts.body)
        .with_template(auto_template(images.len()))
        .with_images(images);
    page.subtitle = parts.subtitle;
    Ok(page)
}

/// Image files in `dir` as root-relative, `/`-separated paths.
/// A missing directory means no images.
fn collect_images(dir: &Path, root: &Path) -> Result<Vec<String>, ImportError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let hidden = p
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'));
            p.is_file() && !hidden && has_extension(p, IMAGE_EXTENSIONS)
        })
        .collect();
    files.sort_by_key(|p| order_key(p));

    Ok(files
        .iter()
        .map(|p| {
            let rel = p.strip_prefix(root).unwrap_or(p);
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect())
}
