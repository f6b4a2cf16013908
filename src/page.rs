//! The page record and its partial-update type.

use crate::template::TemplateKind;
use serde::{Deserialize, Serialize};

/// One unit of ebook content.
///
/// `id` doubles as the display number: the document renumbers ids to
/// `1..=n` whenever pages are reordered. Image order is rendering order in
/// multi-image layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub template: TemplateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Editor-only state, never persisted.
    #[serde(skip)]
    pub is_generating: bool,
    #[serde(skip)]
    pub show_prompt: bool,
    #[serde(skip)]
    pub prompt_text: String,
}

impl Page {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            images: Vec::new(),
            template: TemplateKind::TextOnly,
            subtitle: None,
            is_generating: false,
            show_prompt: false,
            prompt_text: String::new(),
        }
    }

    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub(crate) fn clear_transient(&mut self) {
        self.is_generating = false;
        self.show_prompt = false;
        self.prompt_text.clear();
    }
}

/// A sparse set of field edits applied by [`Document::update_page`](crate::document::Document::update_page).
///
/// `subtitle: Some(None)` clears the subtitle.
#[derive(Debug, Clone, Default)]
pub struct PageUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub template: Option<TemplateKind>,
    pub images: Option<Vec<String>>,
}

impl PageUpdate {
    pub(crate) fn apply(self, page: &mut Page) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(content) = self.content {
            page.content = content;
        }
        if let Some(subtitle) = self.subtitle {
            page.subtitle = subtitle;
        }
        if let Some(template) = self.template {
            page.template = template;
        }
        if let Some(images) = self.images {
            page.images = images;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_defaults_to_text_only() {
        let page = Page::new(3, "Intro", "Hello");
        assert_eq!(page.id, 3);
        assert_eq!(page.template, TemplateKind::TextOnly);
        assert!(page.images.is_empty());
        assert!(page.subtitle.is_none());
    }

    #[test]
    fn transient_flags_are_not_serialized() {
        let mut page = Page::new(1, "A", "b");
        page.show_prompt = true;
        page.prompt_text = "beaches".to_string();
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("prompt"));
        assert!(!json.contains("generating"));

        let back: Page = serde_json::from_str(&json).unwrap();
        assert!(!back.show_prompt);
        assert!(back.prompt_text.is_empty());
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let page: Page =
            serde_json::from_str(r#"{"id": 2, "title": "T", "template": "hero-banner"}"#).unwrap();
        assert_eq!(page.content, "");
        assert!(page.images.is_empty());
        assert_eq!(page.template, TemplateKind::HeroBanner);
    }

    #[test]
    fn unknown_template_fails_to_deserialize() {
        let result: Result<Page, _> =
            serde_json::from_str(r#"{"id": 2, "title": "T", "template": "poster"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_applies_only_given_fields() {
        let mut page = Page::new(1, "Old", "Body").with_subtitle("Sub");
        PageUpdate {
            title: Some("New".to_string()),
            subtitle: Some(None),
            ..Default::default()
        }
        .apply(&mut page);
        assert_eq!(page.title, "New");
        assert_eq!(page.content, "Body");
        assert!(page.subtitle.is_none());
    }
}
