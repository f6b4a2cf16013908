//! Layout template catalog.
//!
//! Every page carries exactly one [`TemplateKind`]. The kinds form a closed
//! set: parsing an unknown tag fails, so a page can never reference a layout
//! that does not exist. Tags serialize as their kebab-case names
//! (`text-image-right`, `image-grid-2`, ...), which is also what the CLI
//! accepts.
//!
//! [`TEMPLATES`] is the catalog offered to users when choosing a layout. It
//! holds 15 of the 19 kinds; `color-split`, `accent-sidebar`,
//! `magazine-layout` and `timeline` remain valid on pages (older documents
//! use them) but are not offered. Catalog order is significant: it is the
//! tie-breaker when recommendations are sorted.
//!
//! ## Categories
//!
//! | Category | Kinds |
//! |----------|-------|
//! | text-only | title, text-only, table-of-contents |
//! | image-heavy | full-image, image-grid-2/3/4/multi |
//! | mixed | everything else |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

/// Layout tag of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "text-image-right")]
    TextImageRight,
    #[serde(rename = "text-image-left")]
    TextImageLeft,
    #[serde(rename = "image-top-text")]
    ImageTopText,
    #[serde(rename = "text-top-image")]
    TextTopImage,
    #[serde(rename = "text-only")]
    TextOnly,
    #[serde(rename = "table-of-contents")]
    TableOfContents,
    #[serde(rename = "full-image")]
    FullImage,
    #[serde(rename = "image-grid-2")]
    ImageGrid2,
    #[serde(rename = "image-grid-3")]
    ImageGrid3,
    #[serde(rename = "image-grid-4")]
    ImageGrid4,
    #[serde(rename = "image-grid-multi")]
    ImageGridMulti,
    #[serde(rename = "color-block-left")]
    ColorBlockLeft,
    #[serde(rename = "color-block-top")]
    ColorBlockTop,
    #[serde(rename = "color-split")]
    ColorSplit,
    #[serde(rename = "accent-sidebar")]
    AccentSidebar,
    #[serde(rename = "magazine-layout")]
    MagazineLayout,
    #[serde(rename = "hero-banner")]
    HeroBanner,
    #[serde(rename = "timeline")]
    Timeline,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 19] = [
        TemplateKind::Title,
        TemplateKind::TextImageRight,
        TemplateKind::TextImageLeft,
        TemplateKind::ImageTopText,
        TemplateKind::TextTopImage,
        TemplateKind::TextOnly,
        TemplateKind::TableOfContents,
        TemplateKind::FullImage,
        TemplateKind::ImageGrid2,
        TemplateKind::ImageGrid3,
        TemplateKind::ImageGrid4,
        TemplateKind::ImageGridMulti,
        TemplateKind::ColorBlockLeft,
        TemplateKind::ColorBlockTop,
        TemplateKind::ColorSplit,
        TemplateKind::AccentSidebar,
        TemplateKind::MagazineLayout,
        TemplateKind::HeroBanner,
        TemplateKind::Timeline,
    ];

    /// The kebab-case tag used in documents and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            TemplateKind::Title => "title",
            TemplateKind::TextImageRight => "text-image-right",
            TemplateKind::TextImageLeft => "text-image-left",
            TemplateKind::ImageTopText => "image-top-text",
            TemplateKind::TextTopImage => "text-top-image",
            TemplateKind::TextOnly => "text-only",
            TemplateKind::TableOfContents => "table-of-contents",
            TemplateKind::FullImage => "full-image",
            TemplateKind::ImageGrid2 => "image-grid-2",
            TemplateKind::ImageGrid3 => "image-grid-3",
            TemplateKind::ImageGrid4 => "image-grid-4",
            TemplateKind::ImageGridMulti => "image-grid-multi",
            TemplateKind::ColorBlockLeft => "color-block-left",
            TemplateKind::ColorBlockTop => "color-block-top",
            TemplateKind::ColorSplit => "color-split",
            TemplateKind::AccentSidebar => "accent-sidebar",
            TemplateKind::MagazineLayout => "magazine-layout",
            TemplateKind::HeroBanner => "hero-banner",
            TemplateKind::Timeline => "timeline",
        }
    }

    /// Human label from the catalog, or the tag for kinds the catalog omits.
    pub fn label(self) -> &'static str {
        find_template(self).map(|t| t.label).unwrap_or(self.tag())
    }

    /// Templates offered regardless of how many images a page has.
    pub fn is_always_available(self) -> bool {
        matches!(
            self,
            TemplateKind::Title
                | TemplateKind::TextOnly
                | TemplateKind::TableOfContents
                | TemplateKind::HeroBanner
                | TemplateKind::ColorBlockLeft
                | TemplateKind::ColorBlockTop
        )
    }

    /// Minimum number of page images before this template is offered.
    pub fn required_images(self) -> usize {
        match self {
            TemplateKind::FullImage
            | TemplateKind::TextImageRight
            | TemplateKind::TextImageLeft
            | TemplateKind::ImageTopText
            | TemplateKind::TextTopImage => 1,
            TemplateKind::ImageGrid2 => 2,
            TemplateKind::ImageGrid3 | TemplateKind::ImageGridMulti => 3,
            TemplateKind::ImageGrid4 => 4,
            _ => 0,
        }
    }

    /// Number of image slots the layout draws (filled or placeholder).
    pub fn image_slots(self) -> usize {
        match self {
            TemplateKind::ImageGridMulti => 6,
            TemplateKind::ImageGrid4 => 4,
            TemplateKind::ImageGrid3 => 3,
            TemplateKind::ImageGrid2 => 2,
            other => other.required_images(),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TemplateKind {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Broad shape of a template, used to match templates against page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    TextOnly,
    ImageHeavy,
    Mixed,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateCategory::TextOnly => "text-only",
            TemplateCategory::ImageHeavy => "image-heavy",
            TemplateCategory::Mixed => "mixed",
        })
    }
}

pub fn categorize_template(kind: TemplateKind) -> TemplateCategory {
    match kind {
        TemplateKind::Title | TemplateKind::TextOnly | TemplateKind::TableOfContents => {
            TemplateCategory::TextOnly
        }
        TemplateKind::FullImage
        | TemplateKind::ImageGrid2
        | TemplateKind::ImageGrid3
        | TemplateKind::ImageGrid4
        | TemplateKind::ImageGridMulti => TemplateCategory::ImageHeavy,
        _ => TemplateCategory::Mixed,
    }
}

/// A catalog entry: layout tag plus the label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub kind: TemplateKind,
    pub label: &'static str,
}

impl Template {
    pub fn category(&self) -> TemplateCategory {
        categorize_template(self.kind)
    }
}

const fn entry(kind: TemplateKind, label: &'static str) -> Template {
    Template { kind, label }
}

/// The templates offered to users, in presentation order.
pub const TEMPLATES: [Template; 15] = [
    entry(TemplateKind::Title, "Title Page"),
    entry(TemplateKind::TextImageRight, "Text Left, Image Right"),
    entry(TemplateKind::TextImageLeft, "Image Left, Text Right"),
    entry(TemplateKind::ImageTopText, "Image Top, Text Bottom"),
    entry(TemplateKind::TextTopImage, "Text Top, Image Bottom"),
    entry(TemplateKind::TextOnly, "Text Only"),
    entry(TemplateKind::TableOfContents, "Table of Contents"),
    entry(TemplateKind::FullImage, "Full Image"),
    entry(TemplateKind::ImageGrid2, "2-Image Grid"),
    entry(TemplateKind::ImageGrid3, "3-Image Grid"),
    entry(TemplateKind::ImageGrid4, "4-Image Grid"),
    entry(TemplateKind::ImageGridMulti, "Multi-Image Grid"),
    entry(TemplateKind::ColorBlockLeft, "Color Sidebar"),
    entry(TemplateKind::ColorBlockTop, "Color Header"),
    entry(TemplateKind::HeroBanner, "Hero Banner"),
];

pub fn find_template(kind: TemplateKind) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.tag().parse::<TemplateKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "image-grid-5".parse::<TemplateKind>().unwrap_err();
        assert_eq!(err, UnknownTemplate("image-grid-5".to_string()));
        assert_eq!(err.to_string(), "unknown template 'image-grid-5'");
    }

    #[test]
    fn serde_uses_kebab_tags() {
        let json = serde_json::to_string(&TemplateKind::ImageGrid2).unwrap();
        assert_eq!(json, r#""image-grid-2""#);
        let kind: TemplateKind = serde_json::from_str(r#""table-of-contents""#).unwrap();
        assert_eq!(kind, TemplateKind::TableOfContents);
        assert!(serde_json::from_str::<TemplateKind>(r#""poster""#).is_err());
    }

    #[test]
    fn catalog_has_fifteen_unique_entries() {
        assert_eq!(TEMPLATES.len(), 15);
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }

    #[test]
    fn catalog_omits_legacy_kinds() {
        for kind in [
            TemplateKind::ColorSplit,
            TemplateKind::AccentSidebar,
            TemplateKind::MagazineLayout,
            TemplateKind::Timeline,
        ] {
            assert!(find_template(kind).is_none());
            assert_eq!(kind.label(), kind.tag());
        }
    }

    #[test]
    fn labels_come_from_catalog() {
        assert_eq!(TemplateKind::Title.label(), "Title Page");
        assert_eq!(TemplateKind::ColorBlockLeft.label(), "Color Sidebar");
    }

    #[test]
    fn categories() {
        assert_eq!(categorize_template(TemplateKind::Title), TemplateCategory::TextOnly);
        assert_eq!(categorize_template(TemplateKind::TextOnly), TemplateCategory::TextOnly);
        assert_eq!(
            categorize_template(TemplateKind::TableOfContents),
            TemplateCategory::TextOnly
        );
        assert_eq!(categorize_template(TemplateKind::FullImage), TemplateCategory::ImageHeavy);
        assert_eq!(
            categorize_template(TemplateKind::ImageGridMulti),
            TemplateCategory::ImageHeavy
        );
        assert_eq!(categorize_template(TemplateKind::HeroBanner), TemplateCategory::Mixed);
        assert_eq!(categorize_template(TemplateKind::TextImageLeft), TemplateCategory::Mixed);
        assert_eq!(categorize_template(TemplateKind::Timeline), TemplateCategory::Mixed);
    }

    #[test]
    fn image_requirements() {
        assert_eq!(TemplateKind::HeroBanner.required_images(), 0);
        assert_eq!(TemplateKind::TextTopImage.required_images(), 1);
        assert_eq!(TemplateKind::ImageGrid2.required_images(), 2);
        assert_eq!(TemplateKind::ImageGrid3.required_images(), 3);
        assert_eq!(TemplateKind::ImageGridMulti.required_images(), 3);
        assert_eq!(TemplateKind::ImageGrid4.required_images(), 4);
        assert_eq!(TemplateKind::MagazineLayout.required_images(), 0);
    }

    #[test]
    fn multi_grid_draws_six_slots() {
        assert_eq!(TemplateKind::ImageGridMulti.image_slots(), 6);
        assert_eq!(TemplateKind::TextImageRight.image_slots(), 1);
        assert_eq!(TemplateKind::TextOnly.image_slots(), 0);
    }
}
