//! Procedural drawing of the tab bar icons.
//!
//! Every coordinate is a fraction of the icon size, so the same drawing
//! scales to any canvas size. Shapes are drawn in a fixed order and later
//! shapes overwrite earlier ones.

use tracing::debug;

use crate::canvas::{Canvas, bbox};
use crate::error::Result;
use crate::icon::{DEFAULT_SIZE, IconImage, IconKind, RenderState};
use crate::theme::{Palette, Theme};

/// Outline width of the order bag and its handle.
const BAG_STROKE: f32 = 4.0;

/// Width of the order content rows.
const ROW_STROKE: f32 = 2.0;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders tab bar icons at a fixed size with a fixed theme.
///
/// # Example
///
/// ```
/// use tabbar_icons::{IconKind, IconRenderer, RenderState};
///
/// let renderer = IconRenderer::default();
/// let icon = renderer.render(IconKind::Kitchen, RenderState::Active).unwrap();
/// assert_eq!(icon.data.width(), 81);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconRenderer {
    size: u32,
    theme: Theme,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, Theme::default())
    }
}

impl IconRenderer {
    pub fn new(size: u32, theme: Theme) -> Self {
        Self { size, theme }
    }

    /// Side length of the rendered icons.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders one icon onto a fresh transparent canvas.
    pub fn render(&self, kind: IconKind, state: RenderState) -> Result<IconImage> {
        let mut canvas = Canvas::new(self.size)?;
        let palette = self.theme.palette(state);

        match kind {
            IconKind::Kitchen => draw_kitchen(&mut canvas, palette)?,
            IconKind::Order => draw_order(&mut canvas, palette)?,
            IconKind::Profile => draw_profile(&mut canvas, palette)?,
        }

        debug!(%kind, %state, size = self.size, "rendered icon");
        Ok(IconImage::new(canvas.into_image(), kind, state))
    }
}

/// Renders `kind` at the default size with the default theme.
pub fn render(kind: IconKind, active: bool) -> Result<IconImage> {
    IconRenderer::default().render(kind, RenderState::from_active(active))
}

// ============================================================================
// Drawing Procedures
// ============================================================================

/// House: triangular roof, square body, door in the detail color.
fn draw_kitchen(canvas: &mut Canvas, palette: Palette) -> Result<()> {
    let s = canvas.size() as f32;

    let roof = [(s * 0.2, s * 0.5), (s * 0.5, s * 0.2), (s * 0.8, s * 0.5)];
    canvas.fill_polygon(&roof, palette.primary)?;

    canvas.fill_rect(bbox(s * 0.3, s * 0.5, s * 0.7, s * 0.8)?, palette.primary)?;

    // Drawn last so it cuts into the body.
    canvas.fill_rect(bbox(s * 0.4, s * 0.6, s * 0.6, s * 0.8)?, palette.detail)
}

/// Shopping bag outline with a handle and three content rows.
fn draw_order(canvas: &mut Canvas, palette: Palette) -> Result<()> {
    let s = canvas.size() as f32;

    canvas.stroke_rect(
        bbox(s * 0.25, s * 0.3, s * 0.75, s * 0.75)?,
        BAG_STROKE,
        palette.primary,
    )?;

    canvas.stroke_arc(
        bbox(s * 0.25, s * 0.25, s * 0.75, s * 0.45)?,
        0.0,
        180.0,
        BAG_STROKE,
        palette.primary,
    )?;

    for row in 0..3 {
        let y = s * (0.45 + row as f32 * 0.1);
        canvas.line((s * 0.35, y), (s * 0.65, y), ROW_STROKE, palette.primary)?;
    }

    Ok(())
}

/// Round head above an elliptical body.
fn draw_profile(canvas: &mut Canvas, palette: Palette) -> Result<()> {
    let s = canvas.size() as f32;

    let (cx, cy) = (s * 0.5, s * 0.35);
    let radius = s * 0.15;
    canvas.fill_ellipse(
        bbox(cx - radius, cy - radius, cx + radius, cy + radius)?,
        palette.primary,
    )?;

    let head_bottom = cy + radius;
    canvas.fill_ellipse(bbox(s * 0.2, head_bottom, s * 0.8, s * 0.85)?, palette.primary)
}
