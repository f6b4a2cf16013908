//! The ebook document: an ordered, never-empty list of pages.
//!
//! All edits go through [`Document`] so its invariants hold at every point:
//!
//! - at least one page exists (deleting the last page is refused)
//! - page ids are unique
//! - the selected id names an existing page
//!
//! Edits aimed at a missing page return [`DocumentError::PageNotFound`] and
//! leave the document untouched. Documents are stored as pretty JSON; loading
//! re-checks the invariants, so a hand-edited file with duplicate ids, no
//! pages or a selection naming a missing page is rejected instead of
//! silently repaired.
//!
//! ## Image edits and template auto-selection
//!
//! Adding or removing an image re-picks the page template from the image
//! count ([`auto_template`]). Choosing a template explicitly
//! ([`Document::set_template`]) is never overridden until the image list
//! changes again.

use crate::analysis::auto_template;
use crate::page::{Page, PageUpdate};
use crate::template::TemplateKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Page {0} not found")]
    PageNotFound(u32),
    #[error("Cannot delete the last remaining page")]
    LastPage,
    #[error("Document has no pages")]
    Empty,
    #[error("Duplicate page id {0}")]
    DuplicateId(u32),
    #[error("Selected page {0} does not exist")]
    InvalidSelection(u32),
}

/// Direction for [`Document::move_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// On-disk shape. Converted through [`Document::try_from`] so invariants are
/// checked on every load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentFile {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<u32>,
    pages: Vec<Page>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DocumentFile", into = "DocumentFile")]
pub struct Document {
    pub title: String,
    pages: Vec<Page>,
    selected: u32,
}

impl TryFrom<DocumentFile> for Document {
    type Error = DocumentError;

    fn try_from(file: DocumentFile) -> Result<Self, Self::Error> {
        let mut doc = Document::new(file.title, file.pages)?;
        if let Some(id) = file.selected {
            if doc.page(id).is_none() {
                return Err(DocumentError::InvalidSelection(id));
            }
            doc.selected = id;
        }
        Ok(doc)
    }
}

impl From<Document> for DocumentFile {
    fn from(doc: Document) -> Self {
        DocumentFile {
            title: doc.title,
            selected: Some(doc.selected),
            pages: doc.pages,
        }
    }
}

impl Document {
    /// Build a document, checking it is non-empty with unique ids.
    /// The first page starts selected.
    pub fn new(title: impl Into<String>, pages: Vec<Page>) -> Result<Self, DocumentError> {
        let first = pages.first().ok_or(DocumentError::Empty)?.id;
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].iter().any(|p| p.id == page.id) {
                return Err(DocumentError::DuplicateId(page.id));
            }
        }
        Ok(Self {
            title: title.into(),
            pages,
            selected: first,
        })
    }

    /// The starter document created by `init`.
    pub fn sample() -> Self {
        let pages = vec![
            Page::new(
                1,
                "The Top 10 Vacation Destinations for Families",
                "Discover the best family-friendly vacation spots that offer unforgettable experiences for all ages.",
            )
            .with_template(TemplateKind::Title)
            .with_subtitle("A Complete Guide to Family Travel"),
            Page::new(
                2,
                "Florida, USA: The #1 Vacation Destination",
                "Families love to travel to Florida because of its spectacular beaches and attractions. \
                 From the beautiful Gulf Coast to the world-famous theme parks, Florida has something for everyone. \
                 The year-round sunshine and warm temperatures make it the perfect destination for a family vacation.",
            )
            .with_template(TemplateKind::TextImageRight)
            .with_images(["https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=400&fit=crop"]),
            Page::new(
                3,
                "Our Top Vacation Resources",
                "Access our curated collection of travel guides, booking tools, and insider tips to make your family vacation planning effortless.",
            ),
            Page::new(
                4,
                "Table of Contents",
                "What You'll Discover Inside:\n\n1. Top Family Destinations\n2. Budget Planning Guide\n3. Travel Tips & Tricks\n4. Safety Considerations\n5. Packing Essentials",
            )
            .with_template(TemplateKind::TableOfContents),
        ];
        Self {
            title: "Family Vacation Guide".to_string(),
            pages,
            selected: 1,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn select(&mut self, id: u32) -> Result<(), DocumentError> {
        self.index_of(id)?;
        self.selected = id;
        Ok(())
    }

    fn index_of(&self, id: u32) -> Result<usize, DocumentError> {
        self.pages
            .iter()
            .position(|p| p.id == id)
            .ok_or(DocumentError::PageNotFound(id))
    }

    fn page_mut(&mut self, id: u32) -> Result<&mut Page, DocumentError> {
        self.pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DocumentError::PageNotFound(id))
    }

    fn next_id(&self) -> u32 {
        self.pages.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Append a blank text page and select it. Returns the new id.
    pub fn add_page(&mut self) -> u32 {
        let id = self.next_id();
        let title = format!("Page {}", self.pages.len() + 1);
        self.pages.push(Page::new(id, title, "Enter your content here..."));
        self.selected = id;
        debug!(page = id, "added page");
        id
    }

    pub fn update_page(&mut self, id: u32, update: PageUpdate) -> Result<(), DocumentError> {
        update.apply(self.page_mut(id)?);
        debug!(page = id, "updated page");
        Ok(())
    }

    pub fn delete_page(&mut self, id: u32) -> Result<Page, DocumentError> {
        let index = self.index_of(id)?;
        if self.pages.len() <= 1 {
            return Err(DocumentError::LastPage);
        }
        let removed = self.pages.remove(index);
        if self.selected == id {
            self.selected = self.pages[0].id;
        }
        debug!(page = id, "deleted page");
        Ok(removed)
    }

    /// Copy a page, insert the copy right after it and select it.
    pub fn duplicate_page(&mut self, id: u32) -> Result<u32, DocumentError> {
        let index = self.index_of(id)?;
        let new_id = self.next_id();
        let mut copy = self.pages[index].clone();
        copy.id = new_id;
        copy.title = format!("{} (Copy)", copy.title);
        copy.clear_transient();
        self.pages.insert(index + 1, copy);
        self.selected = new_id;
        debug!(page = id, copy = new_id, "duplicated page");
        Ok(new_id)
    }

    /// Swap a page with its neighbour, then renumber all pages `1..=n`.
    ///
    /// Moving the first page up or the last page down changes nothing.
    /// Returns the page's id after renumbering.
    pub fn move_page(&mut self, id: u32, direction: MoveDirection) -> Result<u32, DocumentError> {
        let index = self.index_of(id)?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&i| i < self.pages.len()),
        };
        let Some(target) = target else {
            return Ok(id);
        };
        self.pages.swap(index, target);
        self.renumber();
        debug!(page = id, position = target + 1, "moved page");
        Ok(self.pages[target].id)
    }

    /// Reassign ids to match display order. The selection follows its page.
    pub fn renumber(&mut self) {
        let mut selected = self.selected;
        let mut remapped = false;
        for (i, page) in self.pages.iter_mut().enumerate() {
            let new_id = i as u32 + 1;
            if !remapped && page.id == self.selected {
                selected = new_id;
                remapped = true;
            }
            page.id = new_id;
        }
        self.selected = selected;
    }

    pub fn set_template(&mut self, id: u32, template: TemplateKind) -> Result<(), DocumentError> {
        self.page_mut(id)?.template = template;
        debug!(page = id, %template, "set template");
        Ok(())
    }

    /// Append an image unless the page already has it.
    ///
    /// Returns `false` when the image was already present (nothing changes).
    pub fn add_image(&mut self, id: u32, src: &str) -> Result<bool, DocumentError> {
        let page = self.page_mut(id)?;
        if page.images.iter().any(|i| i == src) {
            return Ok(false);
        }
        page.images.push(src.to_string());
        page.template = auto_template(page.images.len());
        debug!(page = id, images = page.images.len(), template = %page.template, "added image");
        Ok(true)
    }

    /// Remove every occurrence of an image and re-pick the template.
    pub fn remove_image(&mut self, id: u32, src: &str) -> Result<(), DocumentError> {
        let page = self.page_mut(id)?;
        page.images.retain(|i| i != src);
        page.template = auto_template(page.images.len());
        debug!(page = id, images = page.images.len(), template = %page.template, "removed image");
        Ok(())
    }
}
