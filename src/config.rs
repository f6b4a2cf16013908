//! Editor configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are the base layer; the user file is merged on top key by key, so it only
//! needs the values it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! preset = "classic"         # classic | modern | midnight | sunset
//!
//! # Any theme field can be overridden on top of the preset:
//! [theme.colors]
//! accent = "#c9a227"
//!
//! [theme.typography]
//! heading_font = "Georgia, serif"
//!
//! [preview]
//! layout = "double"          # single | double column preview grid
//! show_placeholders = true   # draw empty image slots
//! galleries = true           # write a template gallery per page
//!
//! [library]
//! images = ["https://..."]   # Image sources offered by the image tray
//! ```
//!
//! ## Theme Resolution
//!
//! `theme.preset` picks the base theme, then every other key under
//! `[theme]` is merged over it. Switching presets therefore keeps any
//! explicit overrides:
//!
//! ```text
//! stock defaults → preset theme → user [theme] overrides
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::theme::{DEFAULT_PRESET, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Editor configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Fully resolved global theme (preset plus overrides).
    pub theme: Theme,
    /// Preview rendering settings.
    pub preview: PreviewConfig,
    /// Image tray contents.
    pub library: LibraryConfig,
}

impl EditorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let opacity = self.theme.banners.opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::Validation(
                "theme.banners.opacity must be between 0 and 1".into(),
            ));
        }
        if self.theme.typography.heading_font.trim().is_empty()
            || self.theme.typography.body_font.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "theme.typography fonts must not be empty".into(),
            ));
        }
        // The stylesheet is embedded in a <style> element unescaped
        if let Some((key, _)) = self.theme.css_values().into_iter().find(|(_, v)| v.contains('<')) {
            return Err(ConfigError::Validation(format!(
                "{key} must not contain '<'"
            )));
        }
        if self.library.images.iter().any(|src| src.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "library.images must not contain empty sources".into(),
            ));
        }
        Ok(())
    }
}

/// Column layout of the preview pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLayout {
    Single,
    #[default]
    Double,
}

impl GridLayout {
    pub fn css_class(self) -> &'static str {
        match self {
            GridLayout::Single => "grid-single",
            GridLayout::Double => "grid-double",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub layout: GridLayout,
    /// Draw placeholder tiles for image slots the page cannot fill.
    pub show_placeholders: bool,
    /// Write `gallery/page-N.html` for every page.
    pub galleries: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::Double,
            show_placeholders: true,
            galleries: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    pub images: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            images: [
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=225&fit=crop",
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=225&fit=crop",
                "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=225&fit=crop",
                "https://images.unsplash.com/photo-1464822759844-d150ad6d1dde?w=400&h=225&fit=crop",
                "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=400&h=225&fit=crop",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults with the given theme as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value(theme: Theme) -> toml::Value {
    let config = EditorConfig {
        theme,
        ..EditorConfig::default()
    };
    toml::Value::try_from(config).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Remove `theme.preset` from a raw overlay, returning the preset key.
fn take_preset(overlay: &mut toml::Value) -> Result<String, ConfigError> {
    let preset = overlay
        .get_mut("theme")
        .and_then(|t| t.as_table_mut())
        .and_then(|t| t.remove("preset"));
    match preset {
        None => Ok(DEFAULT_PRESET.to_string()),
        Some(toml::Value::String(name)) => Ok(name),
        Some(_) => Err(ConfigError::Validation(
            "theme.preset must be a string".into(),
        )),
    }
}

/// Resolve the preset, merge the overlay on top, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<EditorConfig, ConfigError> {
    let mut overlay = overlay.unwrap_or_else(|| toml::Value::Table(toml::Table::new()));
    let preset = take_preset(&mut overlay)?;
    let theme = Theme::preset(&preset).ok_or_else(|| {
        ConfigError::Validation(format!(
            "unknown theme preset '{preset}' (available: {})",
            Theme::PRESET_NAMES.join(", ")
        ))
    })?;
    let merged = merge_toml(stock_defaults_value(theme), overlay);
    let config: EditorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Falls back to stock defaults when the file is missing.
pub fn load_config(dir: &Path) -> Result<EditorConfig, ConfigError> {
    resolve_config(load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Ebook Designer Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Base theme. One of: classic, modern, midnight, sunset.
preset = "classic"

# Every theme field may be overridden on top of the preset. Uncomment the
# tables you want to change; omitted keys keep the preset's value.

# [theme.typography]
# heading_font = "Georgia, 'Times New Roman', serif"
# body_font = "Georgia, serif"
# h1_size = "2.5rem"
# h2_size = "1.75rem"
# body_size = "1rem"

# [theme.colors]
# primary = "#1e3a5f"
# secondary = "#4a6fa5"
# text = "#222222"
# background = "#fdfbf7"
# accent = "#c9a227"

# Title page background. kind = "solid" | "gradient" | "pattern".
# [theme.cover_background]
# kind = "gradient"
# value = "#1e3a5f"
# gradient = { from = "#1e3a5f", to = "#4a6fa5", direction = "135deg" }

# [theme.banners]
# enabled = false
# color = "#1e3a5f"
# opacity = 0.8           # 0.0 - 1.0

# [theme.image_style]
# border_radius = "4px"
# border_width = "1px"
# border_color = "#d8d2c4"
# shadow = "none"
# borders_enabled = true

# ---------------------------------------------------------------------------
# Preview
# ---------------------------------------------------------------------------
[preview]
# Preview pane grid: "single" or "double" column.
layout = "double"

# Draw placeholder tiles for image slots a page cannot fill.
show_placeholders = true

# Write a template gallery (gallery/page-N.html) for every page.
galleries = true

# ---------------------------------------------------------------------------
# Image library
# ---------------------------------------------------------------------------
[library]
# Image sources offered when adding images to a page.
images = [
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=225&fit=crop",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=225&fit=crop",
    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=225&fit=crop",
    "https://images.unsplash.com/photo-1464822759844-d150ad6d1dde?w=400&h=225&fit=crop",
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=400&h=225&fit=crop",
]
"##
}
