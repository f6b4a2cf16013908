//! Content-aware template recommendation.
//!
//! Three pure functions drive the template picker:
//!
//! 1. [`analyze_page_content`] classifies a page by its text/image balance.
//! 2. [`categorize_template`](crate::template::categorize_template) buckets a
//!    template as text-only, image-heavy or mixed.
//! 3. [`filtered_templates_for_page`] drops templates the page cannot fill,
//!    then ranks the rest by how well their category fits the page.
//!
//! ## Classification
//!
//! First match wins:
//!
//! | Content type | Rule |
//! |--------------|------|
//! | image-heavy | more than 2 images and fewer than 50 words |
//! | text-heavy | no images and more than 100 words |
//! | balanced | at least one image and more than 20 words |
//! | minimal | anything else |
//!
//! ## Ranking
//!
//! A template whose category matches the page's content type scores 3,
//! any other mixed template scores 2, everything else 1. The sort is stable,
//! so equal scores keep catalog order.

use crate::page::Page;
use crate::template::{Template, TemplateCategory, TemplateKind, categorize_template};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

/// Derived text/image profile of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    TextHeavy,
    ImageHeavy,
    Balanced,
    Minimal,
}

impl ContentType {
    /// The template category that suits this content best, if any.
    pub fn preferred_category(self) -> Option<TemplateCategory> {
        match self {
            ContentType::TextHeavy => Some(TemplateCategory::TextOnly),
            ContentType::ImageHeavy => Some(TemplateCategory::ImageHeavy),
            ContentType::Balanced => Some(TemplateCategory::Mixed),
            ContentType::Minimal => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentType::TextHeavy => "text-heavy",
            ContentType::ImageHeavy => "image-heavy",
            ContentType::Balanced => "balanced",
            ContentType::Minimal => "minimal",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentAnalysis {
    pub image_count: usize,
    pub has_text: bool,
    pub word_count: usize,
    pub content_type: ContentType,
}

pub fn analyze_page_content(page: &Page) -> ContentAnalysis {
    let image_count = page.images.len();
    let word_count = page.content.split_whitespace().count();
    let has_text = !page.content.trim().is_empty();

    let content_type = if image_count > 2 && word_count < 50 {
        ContentType::ImageHeavy
    } else if image_count == 0 && word_count > 100 {
        ContentType::TextHeavy
    } else if image_count > 0 && word_count > 20 {
        ContentType::Balanced
    } else {
        ContentType::Minimal
    };

    ContentAnalysis {
        image_count,
        has_text,
        word_count,
        content_type,
    }
}

/// Fit score of a template category for a content type (1..=3).
pub fn category_score(category: TemplateCategory, content_type: ContentType) -> u8 {
    if content_type.preferred_category() == Some(category) {
        3
    } else if category == TemplateCategory::Mixed {
        2
    } else {
        1
    }
}

/// Whether a page has enough images for the template.
pub fn template_fits(kind: TemplateKind, image_count: usize) -> bool {
    kind.is_always_available() || image_count >= kind.required_images()
}

/// Templates from `templates` the page can fill, best fit first.
pub fn filtered_templates_for_page<'a>(page: &Page, templates: &'a [Template]) -> Vec<&'a Template> {
    let analysis = analyze_page_content(page);

    let mut filtered: Vec<&Template> = templates
        .iter()
        .filter(|t| template_fits(t.kind, analysis.image_count))
        .collect();

    // sort_by_key is stable: ties keep catalog order
    filtered.sort_by_key(|t| Reverse(category_score(categorize_template(t.kind), analysis.content_type)));
    filtered
}

/// Template chosen automatically when a page's image list changes.
pub fn auto_template(image_count: usize) -> TemplateKind {
    match image_count {
        0 => TemplateKind::TextOnly,
        1 => TemplateKind::TextImageRight,
        _ => TemplateKind::ImageTopText,
    }
}
