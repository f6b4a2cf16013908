//! CLI output formatting.
//!
//! Output is **page-centric**: every page is shown by its position and
//! title, with layout and content profile as indented context lines. The
//! same header shape is used by `check`, `templates` and `preview`, so a
//! page reads the same wherever it appears.
//!
//! # Output Format
//!
//! ## Document
//!
//! ```text
//! Family Vacation Guide (4 pages)
//! 001 The Top 10 Vacation Destinations for Families *
//!     Template: Title Page
//!     Subtitle: A Complete Guide to Family Travel
//!     Content: minimal, 14 words, 0 images
//! 002 Florida, USA: The #1 Vacation Destination
//!     Template: Text Left, Image Right
//!     Content: balanced, 47 words, 1 image
//!     Image: https://images.unsplash.com/...
//! ```
//!
//! ## Templates
//!
//! ```text
//! 003 Our Top Vacation Resources (minimal)
//!     [2] Color Sidebar            mixed        color-block-left
//!     [2] Color Header             mixed        color-block-top
//!     [2] Hero Banner              mixed        hero-banner
//!     [1] Title Page               text-only    title
//!     [1] Text Only                text-only    text-only  (current)
//!     [1] Table of Contents        text-only    table-of-contents
//! ```
//!
//! ## Generate
//!
//! ```text
//! Preview → index.html
//! 001 Cover → gallery/page-1.html
//!
//! Generated 1 preview, 4 galleries
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::analysis::{analyze_page_content, category_score, filtered_templates_for_page};
use crate::document::Document;
use crate::page::Page;
use crate::render::GenerateSummary;
use crate::template::TEMPLATES;
use crate::theme::Theme;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based page id as 3-digit zero-padded.
fn format_index(id: u32) -> String {
    format!("{:0>3}", id)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Page header: index + title, with a `*` marker for the selected page.
fn page_header(page: &Page, selected: bool) -> String {
    if selected {
        format!("{} {} *", format_index(page.id), page.title)
    } else {
        format!("{} {}", format_index(page.id), page.title)
    }
}

/// Path relative to `base`, for display.
fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

// ============================================================================
// Document inventory
// ============================================================================

pub fn format_document(doc: &Document) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        doc.title,
        count(doc.pages().len(), "page", "pages")
    )];

    for page in doc.pages() {
        let analysis = analyze_page_content(page);
        lines.push(page_header(page, page.id == doc.selected()));
        lines.push(format!("{}Template: {}", indent(1), page.template.label()));
        if let Some(subtitle) = &page.subtitle {
            lines.push(format!("{}Subtitle: {}", indent(1), subtitle));
        }
        lines.push(format!(
            "{}Content: {}, {}, {}",
            indent(1),
            analysis.content_type,
            count(analysis.word_count, "word", "words"),
            count(analysis.image_count, "image", "images"),
        ));
        for src in &page.images {
            lines.push(format!("{}Image: {}", indent(1), src));
        }
    }
    lines
}

pub fn print_document(doc: &Document) {
    for line in format_document(doc) {
        println!("{}", line);
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Ranked templates for one page, with the fit score in brackets.
pub fn format_templates(page: &Page) -> Vec<String> {
    let analysis = analyze_page_content(page);
    let mut lines = vec![format!(
        "{} {} ({})",
        format_index(page.id),
        page.title,
        analysis.content_type
    )];

    for template in filtered_templates_for_page(page, &TEMPLATES) {
        let category = template.category();
        let score = category_score(category, analysis.content_type);
        let current = if template.kind == page.template {
            "  (current)"
        } else {
            ""
        };
        lines.push(format!(
            "{}[{}] {:<24} {:<12} {}{}",
            indent(1),
            score,
            template.label,
            category.to_string(),
            template.kind.tag(),
            current
        ));
    }
    lines
}

pub fn print_templates(page: &Page) {
    for line in format_templates(page) {
        println!("{}", line);
    }
}

/// The full catalog: tag, label and category per line.
pub fn format_catalog() -> Vec<String> {
    let mut lines = vec!["Templates".to_string()];
    for template in &TEMPLATES {
        lines.push(format!(
            "{}{:<20} {:<24} {}",
            indent(1),
            template.kind.tag(),
            template.label,
            template.category()
        ));
    }
    lines
}

pub fn print_catalog() {
    for line in format_catalog() {
        println!("{}", line);
    }
}

// ============================================================================
// Themes
// ============================================================================

pub fn format_themes(themes: &[Theme], active: &str) -> Vec<String> {
    let mut lines = vec!["Themes".to_string()];
    for theme in themes {
        let marker = if theme.name.eq_ignore_ascii_case(active) {
            " *"
        } else {
            ""
        };
        lines.push(format!("{} ({}){}", theme.name, theme.category, marker));
        lines.push(format!("{}{}", indent(1), theme.description));
        lines.push(format!(
            "{}Fonts: {} / {}",
            indent(1),
            theme.typography.heading_font,
            theme.typography.body_font
        ));
    }
    lines
}

pub fn print_themes(themes: &[Theme], active: &str) {
    for line in format_themes(themes, active) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(
    doc: &Document,
    summary: &GenerateSummary,
    output_dir: &Path,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Preview → {}",
        relative(&summary.index, output_dir)
    )];

    for (id, path) in &summary.galleries {
        let title = doc.page(*id).map(|p| p.title.as_str()).unwrap_or("");
        lines.push(format!(
            "{} {} → {}",
            format_index(*id),
            title,
            relative(path, output_dir)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 preview, {}",
        count(summary.galleries.len(), "gallery", "galleries")
    ));
    lines
}

pub fn print_generate_output(doc: &Document, summary: &GenerateSummary, output_dir: &Path) {
    for line in format_generate_output(doc, summary, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateKind;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn count_singular_and_plural() {
        assert_eq!(count(1, "image", "images"), "1 image");
        assert_eq!(count(0, "image", "images"), "0 images");
    }

    #[test]
    fn document_header_and_selected_marker() {
        let doc = Document::sample();
        let lines = format_document(&doc);
        assert_eq!(lines[0], "Family Vacation Guide (4 pages)");
        assert_eq!(
            lines[1],
            "001 The Top 10 Vacation Destinations for Families *"
        );
        assert!(lines.iter().any(|l| l == "004 Table of Contents"));
    }

    #[test]
    fn document_context_lines() {
        let doc = Document::sample();
        let lines = format_document(&doc);
        assert!(lines.contains(&"    Template: Title Page".to_string()));
        assert!(lines.contains(&"    Subtitle: A Complete Guide to Family Travel".to_string()));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("    Content: balanced,") && l.ends_with("1 image"))
        );
        assert!(lines.iter().any(|l| l.starts_with("    Image: https://")));
    }

    #[test]
    fn templates_marks_current_and_ranks() {
        let page = Page::new(1, "Essay", "word ".repeat(150));
        let lines = format_templates(&page);
        assert_eq!(lines[0], "001 Essay (text-heavy)");
        // Text-heavy content: text-only templates score 3 and come first
        assert!(lines[1].starts_with("    [3] Title Page"));
        let current: Vec<_> = lines.iter().filter(|l| l.ends_with("(current)")).collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].contains("text-only"));
        assert!(!lines.iter().any(|l| l.contains("image-grid-2")));
    }

    #[test]
    fn catalog_lists_every_template() {
        let lines = format_catalog();
        assert_eq!(lines.len(), TEMPLATES.len() + 1);
        assert!(lines[1].contains(TemplateKind::Title.tag()));
    }

    #[test]
    fn themes_mark_active() {
        let lines = format_themes(&Theme::presets(), "modern");
        let marked: Vec<_> = lines.iter().filter(|l| l.ends_with(" *")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].to_lowercase().starts_with("modern"));
    }

    #[test]
    fn generate_output_paths_are_relative() {
        let doc = Document::sample();
        let out = PathBuf::from("/tmp/dist");
        let summary = GenerateSummary {
            index: out.join("index.html"),
            galleries: vec![(2, out.join("gallery/page-2.html"))],
        };
        let lines = format_generate_output(&doc, &summary, &out);
        assert_eq!(lines[0], "Preview → index.html");
        assert_eq!(
            lines[1],
            "002 Florida, USA: The #1 Vacation Destination → gallery/page-2.html"
        );
        assert_eq!(lines.last().unwrap(), "Generated 1 preview, 1 gallery");
    }
}
