//! tabbar-icons: procedurally drawn tab bar icons for a mini-program.
//!
//! This crate draws the kitchen, order and profile tab icons from simple
//! vector shapes, in a neutral (unselected) and an accent (selected) color,
//! and writes them as transparent PNG files.
//!
//! # Example
//!
//! ```
//! use tabbar_icons::{IconKind, IconRenderer, RenderState};
//!
//! let renderer = IconRenderer::default();
//! let icon = renderer.render(IconKind::Profile, RenderState::Active).unwrap();
//!
//! assert_eq!(icon.file_name(), "profile-active.png");
//! assert_eq!(icon.dominant_color().unwrap().0, [155, 89, 182, 255]);
//! ```
//!
//! # Batch Generation
//!
//! [`BatchDriver`] renders all six icons and saves them, optionally together
//! with a `tabbar.json` manifest. A [`RenderProfile`] loaded from JSON can
//! override the size, output directory and colors:
//!
//! ```no_run
//! use tabbar_icons::{BatchDriver, RenderProfile};
//!
//! let profile = RenderProfile::load("tabbar-profile.json").unwrap();
//! let report = BatchDriver::from_profile(&profile)
//!     .unwrap()
//!     .with_manifest(true)
//!     .run()
//!     .unwrap();
//! ```

mod batch;
mod canvas;
mod error;
mod icon;
mod manifest;
mod profile;
mod render;
mod theme;

pub use batch::{BatchDriver, BatchReport, WrittenIcon, save_png};
pub use canvas::{Canvas, bbox};
pub use error::{Error, Result};
pub use icon::{DEFAULT_SIZE, IconImage, IconKind, RenderState};
pub use manifest::{MANIFEST_FILE, TabBarItem, TabBarManifest};
pub use profile::{DEFAULT_OUTPUT_DIR, PaletteSettings, RenderProfile};
pub use render::{IconRenderer, render};
pub use theme::{
    ACCENT, ACCENT_DETAIL, Color, NEUTRAL, NEUTRAL_DETAIL, Palette, Theme, parse_hex, to_hex,
};
