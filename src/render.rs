//! HTML preview rendering.
//!
//! Produces a static preview of the document from the resolved theme and
//! the page list. Nothing here mutates the document.
//!
//! ## Generated Files
//!
//! ```text
//! dist/
//! ├── index.html            # Dual pane: page list (edit pane) + rendered pages
//! └── gallery/
//!     ├── page-1.html       # Candidate templates for page 1, best fit first
//!     └── page-2.html
//! ```
//!
//! ## Template Rendering
//!
//! Every catalog template has its own layout, drawn at two sizes:
//! [`RenderSize::Full`] for the preview pane and [`RenderSize::Thumbnail`]
//! for gallery tiles. Full-size body text is Markdown; thumbnails show a
//! plain-text excerpt. Image slots the page cannot fill become placeholder
//! tiles (or are left out when placeholders are disabled). Kinds outside
//! the catalog share a centered fallback layout.
//!
//! Styling comes from `static/style.css`, embedded at compile time, with the
//! theme injected as CSS custom properties. HTML is built with
//! [maud](https://maud.lambda.xyz/), so interpolated text is escaped; raw
//! HTML inside Markdown bodies is escaped as well, and links or images with
//! a script-capable scheme point at `#` instead.

use crate::analysis::{analyze_page_content, category_score, filtered_templates_for_page};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::page::Page;
use crate::template::{TEMPLATES, TemplateKind};
use crate::theme::generate_theme_css;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{CowStr, Event, Parser, Tag, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSize {
    Full,
    Thumbnail,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub size: RenderSize,
    pub show_placeholders: bool,
}

impl RenderOptions {
    pub fn full() -> Self {
        Self {
            size: RenderSize::Full,
            show_placeholders: true,
        }
    }

    pub fn thumbnail() -> Self {
        Self {
            size: RenderSize::Thumbnail,
            show_placeholders: true,
        }
    }

    pub fn placeholders(mut self, show: bool) -> Self {
        self.show_placeholders = show;
        self
    }
}

/// Files written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub index: PathBuf,
    /// `(page id, gallery file)` in page order.
    pub galleries: Vec<(u32, PathBuf)>,
}

pub fn gallery_filename(page_id: u32) -> String {
    format!("page-{page_id}.html")
}

pub fn stylesheet(config: &EditorConfig) -> String {
    format!("{}\n\n{}", generate_theme_css(&config.theme), CSS_STATIC)
}

pub fn generate(
    doc: &Document,
    config: &EditorConfig,
    output_dir: &Path,
) -> Result<GenerateSummary, RenderError> {
    let css = stylesheet(config);
    fs::create_dir_all(output_dir)?;

    let index = output_dir.join("index.html");
    fs::write(&index, render_preview(doc, config, &css).into_string())?;

    let gallery_dir = output_dir.join("gallery");
    remove_stale_galleries(&gallery_dir)?;

    let mut galleries = Vec::new();
    if config.preview.galleries {
        fs::create_dir_all(&gallery_dir)?;
        for page in doc.pages() {
            let path = gallery_dir.join(gallery_filename(page.id));
            let html = render_gallery(page, doc, config, &css);
            fs::write(&path, html.into_string())?;
            galleries.push((page.id, path));
        }
    }

    info!(
        pages = doc.pages().len(),
        galleries = galleries.len(),
        output = %output_dir.display(),
        "preview generated"
    );
    Ok(GenerateSummary { index, galleries })
}

/// Delete `page-*.html` files left by an earlier run, so deleted or
/// renumbered pages do not keep a gallery. Other files are left alone.
fn remove_stale_galleries(gallery_dir: &Path) -> Result<(), RenderError> {
    if !gallery_dir.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(gallery_dir)? {
        let path = entry?.path();
        let is_gallery = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("page-") && n.ends_with(".html"));
        if path.is_file() && is_gallery {
            fs::remove_file(&path)?;
            debug!(file = %path.display(), "removed stale gallery");
        }
    }
    Ok(())
}

// ============================================================================
// Text helpers
// ============================================================================

/// First `max` characters of `text`.
fn excerpt(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Whether a link or image destination may appear in generated HTML.
///
/// Relative URLs, `http`, `https`, `mailto` and `data:image/` pass; any
/// other scheme (`javascript:`, `vbscript:`, `data:text/html`, ...) does not.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    let scheme_end = url.find(':');
    let path_start = url.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => match &url[..colon] {
            "http" | "https" | "mailto" => true,
            "data" => url.starts_with("data:image/"),
            _ => false,
        },
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("#") }
}

/// Markdown to HTML with raw HTML escaped as text and unsafe link or image
/// destinations replaced by `#`.
fn markdown_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Page body: Markdown at full size, plain excerpt in thumbnails.
fn body(page: &Page, fallback: &str, opts: RenderOptions) -> Markup {
    let text = page.content.trim();
    html! {
        @if text.is_empty() {
            p.body.empty { (fallback) }
        } @else if opts.size == RenderSize::Thumbnail {
            p.body { (excerpt(text, 180)) }
        } @else {
            div.body { (PreEscaped(markdown_html(text))) }
        }
    }
}

// ============================================================================
// Template layouts
// ============================================================================

fn image_slot(page: &Page, index: usize, label: &str, opts: RenderOptions) -> Markup {
    html! {
        @if let Some(src) = page.images.get(index) {
            img.page-image src=(src) alt={ (page.title) " image " (index + 1) } loading="lazy";
        } @else if opts.show_placeholders {
            div.placeholder { span { (label) } }
        }
    }
}

fn heading(page: &Page) -> Markup {
    html! {
        h2 { (page.title) }
        @if let Some(subtitle) = &page.subtitle {
            p.subtitle { (subtitle) }
        }
    }
}

fn grid(page: &Page, kind: TemplateKind, opts: RenderOptions) -> Markup {
    let slots = kind.image_slots();
    let class = format!("layout layout-grid grid-{slots}");
    html! {
        div class=(class) {
            h2.grid-title { (page.title) }
            div.grid {
                @for index in 0..slots {
                    div.cell { (image_slot(page, index, &(index + 1).to_string(), opts)) }
                }
            }
        }
    }
}

fn split(page: &Page, image_first: bool, opts: RenderOptions) -> Markup {
    let text = html! {
        div.text {
            (heading(page))
            (body(page, "Page content will appear here...", opts))
        }
    };
    let media = html! { div.media { (image_slot(page, 0, "IMG", opts)) } };
    html! {
        div.layout.layout-split {
            @if image_first { (media) (text) } @else { (text) (media) }
        }
    }
}

fn stack(page: &Page, image_first: bool, opts: RenderOptions) -> Markup {
    let fallback = if image_first {
        "Text content below image..."
    } else {
        "Text content above image..."
    };
    let text = html! {
        div.text {
            (heading(page))
            (body(page, fallback, opts))
        }
    };
    let media = html! { div.media { (image_slot(page, 0, "IMAGE", opts)) } };
    html! {
        div.layout.layout-stack {
            @if image_first { (media) (text) } @else { (text) (media) }
        }
    }
}

fn color_block(page: &Page, side: bool, opts: RenderOptions) -> Markup {
    let (class, label, fallback) = if side {
        (
            "layout layout-color-left",
            "SIDEBAR",
            "Content with color sidebar layout...",
        )
    } else {
        (
            "layout layout-color-top",
            "HEADER",
            "Content with color header layout...",
        )
    };
    html! {
        div class=(class) {
            div.color-block { span { (label) } }
            div.text {
                (heading(page))
                (body(page, fallback, opts))
            }
        }
    }
}

/// Render one page in one layout.
pub fn render_template(page: &Page, kind: TemplateKind, opts: RenderOptions) -> Markup {
    let content = page.content.trim();
    match kind {
        TemplateKind::Title => html! {
            div.layout.layout-title {
                h1 { (page.title) }
                @if let Some(subtitle) = &page.subtitle {
                    p.subtitle { (subtitle) }
                }
                p.lead {
                    @if content.is_empty() { "Title page content..." } @else { (excerpt(content, 50)) }
                }
            }
        },
        TemplateKind::FullImage => html! {
            div.layout.layout-full-image {
                @if page.images.is_empty() && opts.show_placeholders {
                    div.placeholder.full { span { "FULL IMAGE" } }
                } @else {
                    (image_slot(page, 0, "FULL IMAGE", opts))
                }
                div.caption {
                    h2 { (page.title) }
                    @if !content.is_empty() {
                        p { (excerpt(content, 60)) "..." }
                    }
                }
            }
        },
        TemplateKind::TextImageRight => split(page, false, opts),
        TemplateKind::TextImageLeft => split(page, true, opts),
        TemplateKind::ImageTopText => stack(page, true, opts),
        TemplateKind::TextTopImage => stack(page, false, opts),
        TemplateKind::TextOnly => html! {
            div.layout.layout-text {
                (heading(page))
                (body(
                    page,
                    "This is a text-only layout. Your content will appear here with clean typography and optimal readability.",
                    opts,
                ))
            }
        },
        TemplateKind::TableOfContents => html! {
            div.layout.layout-toc {
                (heading(page))
                (body(page, "Chapters will be listed here...", opts))
            }
        },
        TemplateKind::ImageGrid2
        | TemplateKind::ImageGrid3
        | TemplateKind::ImageGrid4
        | TemplateKind::ImageGridMulti => grid(page, kind, opts),
        TemplateKind::ColorBlockLeft => color_block(page, true, opts),
        TemplateKind::ColorBlockTop => color_block(page, false, opts),
        TemplateKind::HeroBanner => html! {
            div.layout.layout-hero {
                h1 { (page.title) }
                p.lead {
                    @if content.is_empty() { "Epic hero banner content..." } @else { (excerpt(content, 80)) }
                }
            }
        },
        TemplateKind::ColorSplit
        | TemplateKind::AccentSidebar
        | TemplateKind::MagazineLayout
        | TemplateKind::Timeline => html! {
            div.layout.layout-generic {
                h2 { (page.title) }
                p {
                    @if content.is_empty() { "Content preview..." } @else { (excerpt(content, 100)) }
                }
            }
        },
    }
}

/// The page "sheet": layout plus the cover background for title pages.
fn sheet(page: &Page, kind: TemplateKind, opts: RenderOptions) -> Markup {
    let mut class = String::from("sheet");
    if kind == TemplateKind::Title {
        class.push_str(" cover");
    }
    if opts.size == RenderSize::Thumbnail {
        class.push_str(" thumb");
    }
    html! {
        div class=(class) data-template=(kind.tag()) {
            (render_template(page, kind, opts))
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

fn page_card(page: &Page, selected: bool, galleries: bool) -> Markup {
    let analysis = analyze_page_content(page);
    html! {
        article.page-card.selected[selected] data-page-id=(page.id) {
            div.page-number { (page.id) }
            div.page-details {
                h3 { (page.title) }
                p.meta {
                    span.template { (page.template.label()) }
                    " · " (analysis.content_type)
                    " · " (plural(analysis.word_count, "word", "words"))
                    " · " (plural(analysis.image_count, "image", "images"))
                }
                @if analysis.has_text {
                    p.excerpt { (excerpt(page.content.trim(), 140)) }
                }
                @if !page.images.is_empty() {
                    ul.thumbs {
                        @for src in &page.images {
                            li { img src=(src) alt="" loading="lazy"; }
                        }
                    }
                }
                @if galleries {
                    a.gallery-link href={ "gallery/" (gallery_filename(page.id)) } { "Choose template" }
                }
            }
        }
    }
}

/// The dual-pane document preview.
pub fn render_preview(doc: &Document, config: &EditorConfig, css: &str) -> Markup {
    let opts = RenderOptions::full().placeholders(config.preview.show_placeholders);
    let pane_class = format!("preview-pane {}", config.preview.layout.css_class());

    let content = html! {
        header.top-bar {
            h1 { "Ebook Designer" }
            span.doc-title { (doc.title) }
            span.theme-name { "Theme: " (config.theme.name) }
        }
        main.workspace {
            section.edit-pane {
                h2 { "Pages" }
                @for page in doc.pages() {
                    (page_card(page, page.id == doc.selected(), config.preview.galleries))
                }
                @if !config.library.images.is_empty() {
                    h2 { "Image Library" }
                    ul.library {
                        @for src in &config.library.images {
                            li { img src=(src) alt="" loading="lazy"; }
                        }
                    }
                }
            }
            section class=(pane_class) {
                @for page in doc.pages() {
                    figure.page-preview data-preview-id=(page.id) {
                        (sheet(page, page.template, opts))
                        figcaption { "Page " (page.id) " · " (page.template.label()) }
                    }
                }
            }
        }
    };

    base_document(&doc.title, css, content)
}

/// Candidate templates for one page, best fit first.
pub fn render_gallery(page: &Page, doc: &Document, config: &EditorConfig, css: &str) -> Markup {
    let opts = RenderOptions::thumbnail().placeholders(config.preview.show_placeholders);
    let analysis = analyze_page_content(page);
    let candidates = filtered_templates_for_page(page, &TEMPLATES);

    let content = html! {
        header.top-bar {
            a.back href="../index.html" { "← " (doc.title) }
            h1 { "Templates for page " (page.id) ": " (page.title) }
        }
        main.gallery-page {
            p.analysis {
                "Content profile: " strong { (analysis.content_type) }
                " (" (plural(analysis.word_count, "word", "words"))
                ", " (plural(analysis.image_count, "image", "images")) ")"
            }
            div.gallery {
                @for template in &candidates {
                    @let selected = template.kind == page.template;
                    @let score = category_score(template.category(), analysis.content_type);
                    figure.gallery-item.selected[selected] data-template=(template.kind.tag()) data-score=(score) {
                        (sheet(page, template.kind, opts))
                        figcaption {
                            span.label { (template.label) }
                            span.category { (template.category()) }
                        }
                    }
                }
            }
        }
    };

    base_document(&format!("{} · templates", page.title), css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page(content: &str, images: usize) -> Page {
        Page::new(1, "Florida", content).with_images((0..images).map(|i| format!("img-{i}.jpg")))
    }

    fn render(page: &Page, kind: TemplateKind) -> String {
        render_template(page, kind, RenderOptions::full()).into_string()
    }

    #[test]
    fn every_kind_renders_title() {
        let p = page("Sunny beaches", 2);
        for kind in TemplateKind::ALL {
            let html = render(&p, kind);
            assert!(html.contains("Florida"), "{kind} missing title");
        }
    }

    #[test]
    fn title_layout_truncates_to_fifty_chars() {
        let long = "x".repeat(80);
        let html = render(&page(&long, 0), TemplateKind::Title);
        assert!(html.contains(&"x".repeat(50)));
        assert!(!html.contains(&"x".repeat(51)));
    }

    #[test]
    fn hero_banner_truncates_to_eighty_chars() {
        let long = "y".repeat(120);
        let html = render(&page(&long, 0), TemplateKind::HeroBanner);
        assert!(html.contains(&"y".repeat(80)));
        assert!(!html.contains(&"y".repeat(81)));
    }

    #[test]
    fn full_image_caption_has_ellipsis() {
        let html = render(&page("Short caption", 1), TemplateKind::FullImage);
        assert!(html.contains("Short caption..."));
        assert!(html.contains(r#"src="img-0.jpg""#));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll");
        assert_eq!(excerpt("ab", 10), "ab");
    }

    #[test]
    fn empty_content_uses_fallback() {
        let html = render(&page("", 0), TemplateKind::TextOnly);
        assert!(html.contains("This is a text-only layout"));
        let html = render(&page("  ", 0), TemplateKind::Title);
        assert!(html.contains("Title page content..."));
    }

    #[test]
    fn full_size_renders_markdown() {
        let html = render(&page("Some **bold** text", 0), TemplateKind::TextOnly);
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn thumbnail_uses_plain_excerpt() {
        let p = page("Some **bold** text", 0);
        let html = render_template(&p, TemplateKind::TextOnly, RenderOptions::thumbnail()).into_string();
        assert!(!html.contains("<strong>"));
        assert!(html.contains("Some **bold** text"));
    }

    #[test]
    fn raw_html_in_markdown_is_escaped() {
        let html = render(&page("<script>alert('x')</script>", 0), TemplateKind::TextOnly);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn script_links_are_neutralized() {
        let html = render(&page("[click](javascript:alert(1))", 0), TemplateKind::TextOnly);
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = render(&page("![x](JavaScript:alert(1)) [y](vbscript:x)", 0), TemplateKind::TextOnly);
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(!html.contains("vbscript:"));
    }

    #[test]
    fn ordinary_links_are_kept() {
        let html = render(
            &page("[a](https://example.com) [b](../notes.html) [c](mailto:me@example.com)", 0),
            TemplateKind::TextOnly,
        );
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="../notes.html""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
    }

    #[test]
    fn url_safety_rules() {
        assert!(is_safe_url("photos/a.jpg"));
        assert!(is_safe_url("/abs/path?q=a:b"));
        assert!(is_safe_url("HTTPS://example.com"));
        assert!(is_safe_url("data:image/png;base64,AAAA"));
        assert!(!is_safe_url("data:text/html,<b>"));
        assert!(!is_safe_url("  javascript:alert(1)"));
    }

    #[test]
    fn title_text_is_escaped() {
        let mut p = page("body", 0);
        p.title = "<b>Bold</b>".to_string();
        let html = render(&p, TemplateKind::TextOnly);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }

    #[test]
    fn grid_fills_images_in_order_then_placeholders() {
        let html = render(&page("", 2), TemplateKind::ImageGrid4);
        let first = html.find("img-0.jpg").unwrap();
        let second = html.find("img-1.jpg").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"placeholder\"").count(), 2);
    }

    #[test]
    fn multi_grid_has_six_cells() {
        let html = render(&page("", 3), TemplateKind::ImageGridMulti);
        assert_eq!(html.matches("class=\"cell\"").count(), 6);
        assert!(html.contains("grid-6"));
    }

    #[test]
    fn placeholders_can_be_disabled() {
        let p = page("", 0);
        let opts = RenderOptions::full().placeholders(false);
        let html = render_template(&p, TemplateKind::ImageGrid2, opts).into_string();
        assert!(!html.contains("placeholder"));
    }

    #[test]
    fn image_left_puts_media_first() {
        let html = render(&page("text", 1), TemplateKind::TextImageLeft);
        assert!(html.find("media").unwrap() < html.find("class=\"text\"").unwrap());
        let html = render(&page("text", 1), TemplateKind::TextImageRight);
        assert!(html.find("class=\"text\"").unwrap() < html.find("media").unwrap());
    }

    #[test]
    fn legacy_kinds_use_generic_layout() {
        let html = render(&page("", 0), TemplateKind::Timeline);
        assert!(html.contains("layout-generic"));
        assert!(html.contains("Content preview..."));
    }

    #[test]
    fn subtitle_rendered_when_present() {
        let p = page("body", 0).with_subtitle("A Guide");
        assert!(render(&p, TemplateKind::Title).contains("A Guide"));
        assert!(render(&p, TemplateKind::TextOnly).contains("A Guide"));
    }

    // =========================================================================
    // Document pages
    // =========================================================================

    #[test]
    fn preview_lists_every_page_in_both_panes() {
        let doc = Document::sample();
        let config = EditorConfig::default();
        let html = render_preview(&doc, &config, "").into_string();
        for page in doc.pages() {
            assert!(html.contains(&format!(r#"data-page-id="{}""#, page.id)));
            assert!(html.contains(&format!(r#"data-preview-id="{}""#, page.id)));
        }
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("grid-double"));
    }

    #[test]
    fn preview_marks_selected_page() {
        let mut doc = Document::sample();
        doc.select(2).unwrap();
        let html = render_preview(&doc, &EditorConfig::default(), "").into_string();
        assert!(html.contains(r#"class="page-card selected" data-page-id="2""#));
        assert!(html.contains(r#"class="page-card" data-page-id="1""#));
    }

    #[test]
    fn title_sheet_gets_cover_class() {
        let doc = Document::sample();
        let html = render_preview(&doc, &EditorConfig::default(), "").into_string();
        assert!(html.contains(r#"class="sheet cover" data-template="title""#));
    }

    #[test]
    fn gallery_lists_filtered_templates_in_rank_order() {
        let doc = Document::sample();
        let page = doc.page(3).unwrap();
        let html = render_gallery(page, &doc, &EditorConfig::default(), "").into_string();
        // No images: image templates are filtered out
        assert!(!html.contains(r#"data-template="full-image""#));
        assert!(html.contains(r#"data-template="hero-banner""#));
        // Selected template highlighted
        assert!(html.contains(r#"class="gallery-item selected" data-template="text-only""#));
    }

    #[test]
    fn generate_writes_index_and_galleries() {
        let tmp = TempDir::new().unwrap();
        let doc = Document::sample();
        let config = EditorConfig::default();
        let summary = generate(&doc, &config, tmp.path()).unwrap();

        assert!(summary.index.exists());
        assert_eq!(summary.galleries.len(), doc.pages().len());
        assert!(tmp.path().join("gallery/page-1.html").exists());

        let index = fs::read_to_string(&summary.index).unwrap();
        assert!(index.contains("--color-primary: #1e3a5f"));
    }

    #[test]
    fn regenerate_removes_galleries_of_deleted_pages() {
        let tmp = TempDir::new().unwrap();
        let config = EditorConfig::default();
        let mut doc = Document::sample();
        generate(&doc, &config, tmp.path()).unwrap();
        assert!(tmp.path().join("gallery/page-4.html").exists());

        fs::write(tmp.path().join("gallery/notes.txt"), "keep").unwrap();
        doc.delete_page(2).unwrap();
        doc.renumber();
        let summary = generate(&doc, &config, tmp.path()).unwrap();

        assert_eq!(summary.galleries.len(), 3);
        assert!(tmp.path().join("gallery/page-3.html").exists());
        assert!(!tmp.path().join("gallery/page-4.html").exists());
        assert!(tmp.path().join("gallery/notes.txt").exists());
    }

    #[test]
    fn generate_skips_galleries_when_disabled() {
        let tmp = TempDir::new().unwrap();
        let mut config = EditorConfig::default();
        config.preview.galleries = false;
        let summary = generate(&Document::sample(), &config, tmp.path()).unwrap();
        assert!(summary.galleries.is_empty());
        assert!(!tmp.path().join("gallery").exists());
        let index = fs::read_to_string(&summary.index).unwrap();
        assert!(!index.contains("Choose template"));
    }
}
