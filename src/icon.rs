//! Icon types for the tab bar icon set.
//!
//! This module defines the closed set of icon kinds, the two visual states a
//! tab can be in, and the rendered image type that carries both.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Default side length of a tab bar icon, in pixels.
///
/// 81x81 is the size recommended for mini-program tab bar icons.
pub const DEFAULT_SIZE: u32 = 81;

// ============================================================================
// IconKind
// ============================================================================

/// The fixed set of tab bar icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// A house with a door, for the kitchen tab.
    Kitchen,
    /// A bag outline with content rows, for the order tab.
    Order,
    /// A head-and-shoulders silhouette, for the profile tab.
    Profile,
}

impl IconKind {
    /// All kinds, in generation order.
    pub const ALL: [IconKind; 3] = [IconKind::Kitchen, IconKind::Order, IconKind::Profile];

    /// File name stem for this kind (`kitchen`, `order`, `profile`).
    pub fn slug(self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Order => "order",
            Self::Profile => "profile",
        }
    }

    /// Label shown under the tab.
    pub fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "厨房",
            Self::Order => "订单",
            Self::Profile => "我的",
        }
    }

    /// Page the tab switches to, relative to the mini-program root.
    pub fn page_path(self) -> &'static str {
        match self {
            Self::Kitchen => "pages/kitchen/kitchen",
            Self::Order => "pages/order/list/list",
            Self::Profile => "pages/profile/profile",
        }
    }
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

// ============================================================================
// RenderState
// ============================================================================

/// Whether the tab is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderState {
    #[default]
    Normal,
    Active,
}

impl RenderState {
    /// Both states, in generation order.
    pub const ALL: [RenderState; 2] = [RenderState::Normal, RenderState::Active];

    pub fn from_active(active: bool) -> Self {
        if active { Self::Active } else { Self::Normal }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Returns the output file name for `kind` in this state.
    ///
    /// Normal icons are `<slug>.png`, active icons `<slug>-active.png`.
    pub fn file_name(self, kind: IconKind) -> String {
        match self {
            Self::Normal => format!("{}.png", kind.slug()),
            Self::Active => format!("{}-active.png", kind.slug()),
        }
    }

    /// Human-readable state description used in progress output.
    pub fn description(self) -> &'static str {
        match self {
            Self::Normal => "未选中",
            Self::Active => "选中",
        }
    }
}

impl std::fmt::Display for RenderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Active => f.write_str("active"),
        }
    }
}

// ============================================================================
// IconImage
// ============================================================================

/// A rendered tab bar icon together with what it depicts.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format (straight alpha).
    pub data: RgbaImage,

    /// Which icon this is.
    pub kind: IconKind,

    /// Which state it was rendered for.
    pub state: RenderState,
}

impl IconImage {
    pub fn new(data: RgbaImage, kind: IconKind, state: RenderState) -> Self {
        Self { data, kind, state }
    }

    /// Returns `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    /// Output file name for this icon.
    pub fn file_name(&self) -> String {
        self.state.file_name(self.kind)
    }

    /// Returns the most frequent non-transparent pixel value.
    ///
    /// Ties are broken by the raw RGBA value so the result is stable.
    /// Returns `None` for a fully transparent image.
    pub fn dominant_color(&self) -> Option<Rgba<u8>> {
        let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
        for pixel in self.data.pixels() {
            if pixel[3] > 0 {
                *counts.entry(pixel.0).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .max_by_key(|&(rgba, count)| (count, rgba))
            .map(|(rgba, _)| Rgba(rgba))
    }

    /// Counts pixels that are not fully transparent.
    pub fn coverage(&self) -> usize {
        self.data.pixels().filter(|p| p[3] > 0).count()
    }
}
