//! Serializable render profile.
//!
//! A [`RenderProfile`] captures everything that influences the generated
//! icons (size, output directory, colors) in a JSON-friendly format. Every
//! field is optional; missing fields fall back to the built-in defaults, so an
//! empty `{}` profile reproduces the stock icon set.
//!
//! # Example
//!
//! ```
//! use tabbar_icons::{PaletteSettings, RenderProfile};
//!
//! let profile = RenderProfile::new()
//!     .with_size(162)
//!     .with_active(PaletteSettings::new("#e67e22", "#ffffffc8"));
//!
//! let json = profile.to_json().unwrap();
//! let restored = RenderProfile::from_json(&json).unwrap();
//! assert_eq!(restored.size, 162);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::DEFAULT_SIZE;
use crate::render::IconRenderer;
use crate::theme::{self, Palette, Theme};

/// Default directory the icons are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "images/tabbar";

// ============================================================================
// PaletteSettings
// ============================================================================

/// Hex-encoded colors for one icon state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSettings {
    /// Dominant color, `#RRGGBB` or `#RRGGBBAA`.
    pub primary: String,

    /// Detail color, `#RRGGBB` or `#RRGGBBAA`.
    pub detail: String,
}

impl PaletteSettings {
    pub fn new(primary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            detail: detail.into(),
        }
    }

    fn to_palette(&self) -> Result<Palette> {
        Ok(Palette::new(
            theme::parse_hex(&self.primary)?,
            theme::parse_hex(&self.detail)?,
        ))
    }
}

impl From<Palette> for PaletteSettings {
    fn from(palette: Palette) -> Self {
        Self::new(theme::to_hex(palette.primary), theme::to_hex(palette.detail))
    }
}

fn default_normal() -> PaletteSettings {
    Theme::default().normal.into()
}

fn default_active() -> PaletteSettings {
    Theme::default().active.into()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

// ============================================================================
// RenderProfile
// ============================================================================

/// All settings needed to regenerate the icon set.
///
/// # JSON Format
///
/// ```json
/// {
///   "size": 81,
///   "outputDir": "images/tabbar",
///   "normal": { "primary": "#7a7e83", "detail": "#c8c8c8c8" },
///   "active": { "primary": "#9b59b6", "detail": "#ffffffc8" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProfile {
    /// Icon side length in pixels.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Directory the PNG files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Colors for unselected tabs.
    #[serde(default = "default_normal")]
    pub normal: PaletteSettings,

    /// Colors for the selected tab.
    #[serde(default = "default_active")]
    pub active: PaletteSettings,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            size: default_size(),
            output_dir: default_output_dir(),
            normal: default_normal(),
            active: default_active(),
        }
    }
}

impl RenderProfile {
    /// Creates a profile with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_normal(mut self, settings: PaletteSettings) -> Self {
        self.normal = settings;
        self
    }

    pub fn with_active(mut self, settings: PaletteSettings) -> Self {
        self.active = settings;
        self
    }

    /// Parses the color settings into a [`Theme`].
    pub fn theme(&self) -> Result<Theme> {
        Ok(Theme {
            normal: self.normal.to_palette()?,
            active: self.active.to_palette()?,
        })
    }

    /// Builds a renderer for this profile.
    ///
    /// Fails if the size is zero or a color is malformed.
    pub fn renderer(&self) -> Result<IconRenderer> {
        if self.size == 0 {
            return Err(Error::InvalidSize(self.size));
        }
        Ok(IconRenderer::new(self.size, self.theme()?))
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ACCENT, NEUTRAL};

    #[test]
    fn empty_profile_uses_defaults() {
        let profile = RenderProfile::from_json("{}").unwrap();
        assert_eq!(profile, RenderProfile::default());
        assert_eq!(profile.size, 81);
        assert_eq!(profile.output_dir, PathBuf::from("images/tabbar"));
        assert_eq!(profile.theme().unwrap(), Theme::default());
    }

    #[test]
    fn default_palettes_as_hex() {
        let profile = RenderProfile::default();
        assert_eq!(profile.normal, PaletteSettings::new("#7a7e83", "#c8c8c8c8"));
        assert_eq!(profile.active, PaletteSettings::new("#9b59b6", "#ffffffc8"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = RenderProfile::default().to_json_pretty().unwrap();
        assert!(json.contains("\"outputDir\""));
        assert!(json.contains("\"primary\""));
        assert!(json.contains("\"#9b59b6\""));
    }

    #[test]
    fn partial_profile_overrides_only_given_fields() {
        let json = r##"{ "size": 48, "active": { "primary": "#ff0000", "detail": "#ffffff" } }"##;
        let profile = RenderProfile::from_json(json).unwrap();

        assert_eq!(profile.size, 48);
        assert_eq!(profile.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));

        let theme = profile.theme().unwrap();
        assert_eq!(theme.normal.primary, NEUTRAL);
        assert_ne!(theme.active.primary, ACCENT);
        assert_eq!(theme.active.detail.alpha, 255);
    }

    #[test]
    fn bad_color_is_reported() {
        let profile = RenderProfile::new().with_normal(PaletteSettings::new("gray", "#ffffff"));
        assert!(matches!(profile.theme(), Err(Error::InvalidColor(c)) if c == "gray"));
        assert!(profile.renderer().is_err());
    }

    #[test]
    fn non_ascii_color_is_an_error() {
        let json = r##"{ "active": { "primary": "#abcde€", "detail": "#ffffff" } }"##;
        let profile = RenderProfile::from_json(json).unwrap();
        assert!(matches!(profile.theme(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn zero_size_renderer_is_rejected() {
        let profile = RenderProfile::new().with_size(0);
        assert!(matches!(profile.renderer(), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            RenderProfile::from_json("{ size: }"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = RenderProfile::new()
            .with_size(64)
            .with_output_dir("out/icons");
        fs::write(&path, profile.to_json().unwrap()).unwrap();

        assert_eq!(RenderProfile::load(&path).unwrap(), profile);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = RenderProfile::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
