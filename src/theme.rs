//! Global visual theme: typography, palette, cover background, banners and
//! image styling.
//!
//! A theme starts from one of the compiled-in [presets](Theme::presets) and
//! is then sparsely overridden from `config.toml` (see [`crate::config`]).
//! The resolved theme applies to every page preview through CSS custom
//! properties produced by [`generate_theme_css`].
//!
//! ```toml
//! [theme]
//! preset = "midnight"
//!
//! [theme.colors]
//! accent = "#ff6b6b"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    pub category: String,
    pub description: String,
    pub typography: Typography,
    pub colors: Palette,
    pub cover_background: CoverBackground,
    pub banners: Banners,
    pub image_style: ImageStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub h1_size: String,
    pub h2_size: String,
    pub body_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Solid,
    Gradient,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Gradient {
    pub from: String,
    pub to: String,
    /// CSS direction, e.g. `"135deg"` or `"to right"`.
    pub direction: String,
}

/// Background of title pages.
///
/// `value` is used verbatim for solid and pattern backgrounds. Gradient
/// backgrounds are built from `gradient` when present and fall back to
/// `value` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverBackground {
    pub kind: BackgroundKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

impl CoverBackground {
    pub fn solid(value: &str) -> Self {
        Self {
            kind: BackgroundKind::Solid,
            value: value.to_string(),
            gradient: None,
        }
    }

    pub fn gradient(from: &str, to: &str, direction: &str) -> Self {
        let gradient = Gradient {
            from: from.to_string(),
            to: to.to_string(),
            direction: direction.to_string(),
        };
        Self {
            kind: BackgroundKind::Gradient,
            value: gradient.to_css(),
            gradient: Some(gradient),
        }
    }

    pub fn to_css(&self) -> String {
        match (self.kind, &self.gradient) {
            (BackgroundKind::Gradient, Some(g)) => g.to_css(),
            _ => self.value.clone(),
        }
    }
}

impl Gradient {
    pub fn to_css(&self) -> String {
        format!("linear-gradient({}, {}, {})", self.direction, self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Banners {
    pub enabled: bool,
    pub color: String,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageStyle {
    pub border_radius: String,
    pub border_width: String,
    pub border_color: String,
    pub shadow: String,
    pub borders_enabled: bool,
}

impl ImageStyle {
    /// CSS `border` shorthand, `none` when borders are disabled.
    pub fn border_css(&self) -> String {
        if self.borders_enabled {
            format!("{} solid {}", self.border_width, self.border_color)
        } else {
            "none".to_string()
        }
    }
}

pub const DEFAULT_PRESET: &str = "classic";

impl Theme {
    /// Every value written into the generated stylesheet, keyed by its
    /// config path.
    pub fn css_values(&self) -> Vec<(&'static str, &str)> {
        let mut values = vec![
            ("theme.typography.heading_font", self.typography.heading_font.as_str()),
            ("theme.typography.body_font", self.typography.body_font.as_str()),
            ("theme.typography.h1_size", self.typography.h1_size.as_str()),
            ("theme.typography.h2_size", self.typography.h2_size.as_str()),
            ("theme.typography.body_size", self.typography.body_size.as_str()),
            ("theme.colors.primary", self.colors.primary.as_str()),
            ("theme.colors.secondary", self.colors.secondary.as_str()),
            ("theme.colors.text", self.colors.text.as_str()),
            ("theme.colors.background", self.colors.background.as_str()),
            ("theme.colors.accent", self.colors.accent.as_str()),
            ("theme.cover_background.value", self.cover_background.value.as_str()),
            ("theme.banners.color", self.banners.color.as_str()),
            ("theme.image_style.border_radius", self.image_style.border_radius.as_str()),
            ("theme.image_style.border_width", self.image_style.border_width.as_str()),
            ("theme.image_style.border_color", self.image_style.border_color.as_str()),
            ("theme.image_style.shadow", self.image_style.shadow.as_str()),
        ];
        if let Some(g) = &self.cover_background.gradient {
            values.push(("theme.cover_background.gradient.from", g.from.as_str()));
            values.push(("theme.cover_background.gradient.to", g.to.as_str()));
            values.push(("theme.cover_background.gradient.direction", g.direction.as_str()));
        }
        values
    }

    /// Preset names in listing order.
    pub const PRESET_NAMES: [&'static str; 4] = ["classic", "modern", "midnight", "sunset"];

    pub fn presets() -> Vec<Theme> {
        Self::PRESET_NAMES.iter().filter_map(|n| Self::preset(n)).collect()
    }

    /// Look up a preset by its key (case-insensitive).
    pub fn preset(key: &str) -> Option<Theme> {
        let theme = match key.to_ascii_lowercase().as_str() {
            "classic" => Theme {
                name: "Classic".to_string(),
                category: "Professional".to_string(),
                description: "Serif headings on warm paper with a navy accent".to_string(),
                typography: Typography {
                    heading_font: "Georgia, 'Times New Roman', serif".to_string(),
                    body_font: "Georgia, serif".to_string(),
                    h1_size: "2.5rem".to_string(),
                    h2_size: "1.75rem".to_string(),
                    body_size: "1rem".to_string(),
                },
                colors: Palette {
                    primary: "#1e3a5f".to_string(),
                    secondary: "#4a6fa5".to_string(),
                    text: "#222222".to_string(),
                    background: "#fdfbf7".to_string(),
                    accent: "#c9a227".to_string(),
                },
                cover_background: CoverBackground::solid("#1e3a5f"),
                banners: Banners {
                    enabled: false,
                    color: "#1e3a5f".to_string(),
                    opacity: 0.8,
                },
                image_style: ImageStyle {
                    border_radius: "4px".to_string(),
                    border_width: "1px".to_string(),
                    border_color: "#d8d2c4".to_string(),
                    shadow: "none".to_string(),
                    borders_enabled: true,
                },
            },
            "modern" => Theme {
                name: "Modern".to_string(),
                category: "Minimal".to_string(),
                description: "Clean sans-serif layout with a purple gradient cover".to_string(),
                typography: Typography {
                    heading_font: "'Inter', 'Helvetica Neue', Arial, sans-serif".to_string(),
                    body_font: "'Inter', Arial, sans-serif".to_string(),
                    h1_size: "2.75rem".to_string(),
                    h2_size: "1.5rem".to_string(),
                    body_size: "1rem".to_string(),
                },
                colors: Palette {
                    primary: "#7c3aed".to_string(),
                    secondary: "#a78bfa".to_string(),
                    text: "#111827".to_string(),
                    background: "#ffffff".to_string(),
                    accent: "#ec4899".to_string(),
                },
                cover_background: CoverBackground::gradient("#7c3aed", "#ec4899", "135deg"),
                banners: Banners {
                    enabled: true,
                    color: "#7c3aed".to_string(),
                    opacity: 0.9,
                },
                image_style: ImageStyle {
                    border_radius: "12px".to_string(),
                    border_width: "0".to_string(),
                    border_color: "transparent".to_string(),
                    shadow: "0 10px 25px rgba(0, 0, 0, 0.15)".to_string(),
                    borders_enabled: false,
                },
            },
            "midnight" => Theme {
                name: "Midnight".to_string(),
                category: "Dark".to_string(),
                description: "Light text on deep slate for screen reading".to_string(),
                typography: Typography {
                    heading_font: "'Playfair Display', Georgia, serif".to_string(),
                    body_font: "'Source Sans Pro', Arial, sans-serif".to_string(),
                    h1_size: "2.5rem".to_string(),
                    h2_size: "1.6rem".to_string(),
                    body_size: "1.05rem".to_string(),
                },
                colors: Palette {
                    primary: "#38bdf8".to_string(),
                    secondary: "#818cf8".to_string(),
                    text: "#e2e8f0".to_string(),
                    background: "#0f172a".to_string(),
                    accent: "#f472b6".to_string(),
                },
                cover_background: CoverBackground::gradient("#0f172a", "#1e293b", "to bottom"),
                banners: Banners {
                    enabled: true,
                    color: "#1e293b".to_string(),
                    opacity: 0.7,
                },
                image_style: ImageStyle {
                    border_radius: "8px".to_string(),
                    border_width: "2px".to_string(),
                    border_color: "#334155".to_string(),
                    shadow: "0 4px 12px rgba(0, 0, 0, 0.5)".to_string(),
                    borders_enabled: true,
                },
            },
            "sunset" => Theme {
                name: "Sunset".to_string(),
                category: "Vibrant".to_string(),
                description: "Warm orange-to-rose cover with rounded imagery".to_string(),
                typography: Typography {
                    heading_font: "'Montserrat', Arial, sans-serif".to_string(),
                    body_font: "'Open Sans', Arial, sans-serif".to_string(),
                    h1_size: "3rem".to_string(),
                    h2_size: "1.75rem".to_string(),
                    body_size: "1rem".to_string(),
                },
                colors: Palette {
                    primary: "#ea580c".to_string(),
                    secondary: "#fb7185".to_string(),
                    text: "#1f2937".to_string(),
                    background: "#fff7ed".to_string(),
                    accent: "#f59e0b".to_string(),
                },
                cover_background: CoverBackground::gradient("#f97316", "#e11d48", "to right"),
                banners: Banners {
                    enabled: true,
                    color: "#ea580c".to_string(),
                    opacity: 0.85,
                },
                image_style: ImageStyle {
                    border_radius: "16px".to_string(),
                    border_width: "3px".to_string(),
                    border_color: "#ffffff".to_string(),
                    shadow: "0 6px 18px rgba(234, 88, 12, 0.25)".to_string(),
                    borders_enabled: true,
                },
            },
            _ => return None,
        };
        Some(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(DEFAULT_PRESET).expect("default preset must exist")
    }
}

/// CSS custom properties for a theme, consumed by the embedded stylesheet.
pub fn generate_theme_css(theme: &Theme) -> String {
    let banner_opacity = theme.banners.opacity.clamp(0.0, 1.0);
    format!(
        r#":root {{
    --font-heading: {heading_font};
    --font-body: {body_font};
    --size-h1: {h1};
    --size-h2: {h2};
    --size-body: {body};
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-text: {text};
    --color-bg: {background};
    --color-accent: {accent};
    --cover-bg: {cover};
    --banner-color: {banner_color};
    --banner-opacity: {banner_opacity};
    --img-radius: {radius};
    --img-border: {border};
    --img-shadow: {shadow};
}}"#,
        heading_font = theme.typography.heading_font,
        body_font = theme.typography.body_font,
        h1 = theme.typography.h1_size,
        h2 = theme.typography.h2_size,
        body = theme.typography.body_size,
        primary = theme.colors.primary,
        secondary = theme.colors.secondary,
        text = theme.colors.text,
        background = theme.colors.background,
        accent = theme.colors.accent,
        cover = theme.cover_background.to_css(),
        banner_color = theme.banners.color,
        banner_opacity = if theme.banners.enabled { banner_opacity } else { 0.0 },
        radius = theme.image_style.border_radius,
        border = theme.image_style.border_css(),
        shadow = theme.image_style.shadow,
    )
}
