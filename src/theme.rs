//! Color palettes for the normal and active icon states.

use std::str::FromStr;

use image::Rgba;
use palette::Srgb;

use crate::error::{Error, Result};
use crate::icon::RenderState;

/// An 8-bit sRGB color with straight alpha.
pub type Color = palette::Srgba<u8>;

/// Neutral gray used for unselected tabs (`#7A7E83`).
pub const NEUTRAL: Color = Color::new(122, 126, 131, 255);

/// Accent purple used for the selected tab (`#9B59B6`).
pub const ACCENT: Color = Color::new(155, 89, 182, 255);

/// Light gray interior detail on unselected icons.
pub const NEUTRAL_DETAIL: Color = Color::new(200, 200, 200, 200);

/// Near-white interior detail on the selected icon.
pub const ACCENT_DETAIL: Color = Color::new(255, 255, 255, 200);

// ============================================================================
// Palette
// ============================================================================

/// The colors applied to one icon state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Dominant fill and stroke color.
    pub primary: Color,
    /// Small interior ornamentation, such as the kitchen door.
    pub detail: Color,
}

impl Palette {
    pub fn new(primary: Color, detail: Color) -> Self {
        Self { primary, detail }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// A pair of palettes, one per [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub normal: Palette,
    pub active: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: Palette::new(NEUTRAL, NEUTRAL_DETAIL),
            active: Palette::new(ACCENT, ACCENT_DETAIL),
        }
    }
}

impl Theme {
    /// Returns the palette for the given state.
    pub fn palette(&self, state: RenderState) -> Palette {
        match state {
            RenderState::Normal => self.normal,
            RenderState::Active => self.active,
        }
    }
}

// ============================================================================
// Color Utilities
// ============================================================================

/// Converts a palette color into an `image` pixel.
pub fn to_pixel(color: Color) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, color.alpha])
}

/// Parses `#RRGGBB`, `#RGB` or `#RRGGBBAA` (leading `#` optional).
///
/// Colors without an alpha component are fully opaque.
pub fn parse_hex(s: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(s.to_string());
    let hex = s.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let (rgb, alpha) = match hex.len() {
        3 | 6 => (hex, 255),
        8 => {
            let alpha = u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?;
            (&hex[..6], alpha)
        }
        _ => return Err(invalid()),
    };

    let rgb = Srgb::<u8>::from_str(rgb).map_err(|_| invalid())?;
    Ok(Color::new(rgb.red, rgb.green, rgb.blue, alpha))
}

/// Formats a color as lowercase hex, omitting alpha when opaque.
pub fn to_hex(color: Color) -> String {
    if color.alpha == 255 {
        format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.red, color.green, color.blue, color.alpha
        )
    }
}
