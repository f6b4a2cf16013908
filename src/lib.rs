//! # Ebook Designer
//!
//! Compose multi-page ebooks from a fixed catalog of layout templates. Each
//! page holds a title, Markdown content and an ordered list of images; the
//! designer inspects that content, proposes the templates that fit it and
//! renders a themed HTML preview of the whole book.
//!
//! # Workflow
//!
//! ```text
//! 1. Import    content/   →  book.json   (NNN-name Markdown files + image dirs)
//! 2. Edit      book.json  →  book.json   (page CRUD, images, template choice)
//! 3. Preview   book.json  →  dist/       (dual-pane HTML + per-page galleries)
//! ```
//!
//! The document file is plain JSON, so every step can be inspected or edited
//! by hand between commands.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`template`] | Template kinds, the presentation catalog and categorization |
//! | [`page`] | The page record and sparse page updates |
//! | [`analysis`] | Content classification, template fit scoring and filtering |
//! | [`document`] | Ordered pages plus selection: CRUD, reordering, image edits, JSON persistence |
//! | [`theme`] | Theme presets and CSS custom property generation |
//! | [`config`] | `config.toml` loading: theme preset and overrides, preview and library settings |
//! | [`import`] | Builds a document from a content directory |
//! | [`render`] | Maud HTML rendering of templates, the document preview and galleries |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Typed Template Tags
//!
//! Layout tags are a closed enum ([`template::TemplateKind`]) serialized as
//! their kebab-case strings. An unknown tag fails when the document is read,
//! not when a page is rendered.
//!
//! ## Ids Follow Display Order
//!
//! Page ids are unique and, after any reorder, equal to the 1-based display
//! position. The selection is stored by id and follows its page through moves.
//!
//! ## Stateless Filtering
//!
//! [`analysis::filtered_templates_for_page`] is a pure function of the page
//! and the catalog. Ranking uses a stable sort, so templates with equal fit
//! keep catalog order.

pub mod analysis;
pub mod config;
pub mod document;
pub mod import;
pub mod output;
pub mod page;
pub mod render;
pub mod template;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
