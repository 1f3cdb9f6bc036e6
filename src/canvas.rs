//! Raster canvas with basic vector drawing primitives.
//!
//! Shapes are built as [`tiny_skia`](resvg::tiny_skia) paths and rasterized
//! into a coverage mask without anti-aliasing. Covered pixels are then
//! *replaced* with the shape color rather than blended over what is already
//! there, so a semi-transparent shape punches its exact color into the image.
//!
//! Rectangle outlines and arcs are stroked inside their bounding box, so a
//! stroked shape never extends past the box it was given.

use std::f32::consts::PI;

use image::RgbaImage;
use resvg::tiny_skia::{FillRule, LineCap, Mask, Path, PathBuilder, Rect, Stroke, Transform};
use tracing::trace;

use crate::error::{Error, Result};
use crate::theme::{Color, to_pixel};

/// Builds a bounding box from its left, top, right and bottom edges.
pub fn bbox(left: f32, top: f32, right: f32, bottom: f32) -> Result<Rect> {
    Rect::from_ltrb(left, top, right, bottom).ok_or(Error::InvalidShape("bounding box"))
}

// ============================================================================
// Canvas
// ============================================================================

/// A square, initially transparent drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a fully transparent `size x size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            image: RgbaImage::new(size, size),
        })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Read-only view of the pixels drawn so far.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Finishes drawing and returns the pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // ---- Fills ----

    /// Fills a closed polygon through `points`.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) -> Result<()> {
        let path = polygon_path(points).ok_or(Error::InvalidShape("polygon"))?;
        self.paint(&path, color)
    }

    /// Fills a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.paint(&PathBuilder::from_rect(rect), color)
    }

    /// Fills the ellipse inscribed in `rect`.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<()> {
        let path = PathBuilder::from_oval(rect).ok_or(Error::InvalidShape("ellipse"))?;
        self.paint(&path, color)
    }

    // ---- Strokes ----

    /// Outlines a rectangle with a `width`-pixel border inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) -> Result<()> {
        let inner = inset(rect, width / 2.0).ok_or(Error::InvalidShape("rectangle outline"))?;
        self.stroke(&PathBuilder::from_rect(inner), width, color)
    }

    /// Strokes part of the ellipse inscribed in `rect`.
    ///
    /// Angles are in degrees, measured clockwise from the 3 o'clock position
    /// (y grows downwards), so `0..180` is the lower half.
    pub fn stroke_arc(
        &mut self,
        rect: Rect,
        start_deg: f32,
        end_deg: f32,
        width: f32,
        color: Color,
    ) -> Result<()> {
        let inner = inset(rect, width / 2.0).ok_or(Error::InvalidShape("arc"))?;
        let path = arc_path(inner, start_deg, end_deg).ok_or(Error::InvalidShape("arc"))?;
        self.stroke(&path, width, color)
    }

    /// Draws a straight line with butt caps.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) -> Result<()> {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let path = pb.finish().ok_or(Error::InvalidShape("line"))?;
        self.stroke(&path, width, color)
    }

    // ---- Rasterization ----

    fn stroke(&mut self, path: &Path, width: f32, color: Color) -> Result<()> {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        let outline = path
            .stroke(&stroke, 1.0)
            .ok_or(Error::InvalidShape("stroke"))?;
        self.paint(&outline, color)
    }

    /// Rasterizes `path` into a coverage mask and writes `color` into every
    /// covered pixel.
    fn paint(&mut self, path: &Path, color: Color) -> Result<()> {
        let (width, height) = self.image.dimensions();
        let mut mask = Mask::new(width, height).ok_or(Error::InvalidSize(width))?;
        mask.fill_path(path, FillRule::Winding, false, Transform::identity());

        let pixel = to_pixel(color);
        let mut covered = 0usize;
        for (i, coverage) in mask.data().iter().enumerate() {
            if *coverage == 0 {
                continue;
            }
            let x = i as u32 % width;
            let y = i as u32 / width;
            self.image.put_pixel(x, y, pixel);
            covered += 1;
        }

        trace!(covered, "painted shape");
        Ok(())
    }
}

// ============================================================================
// Path Helpers
// ============================================================================

fn polygon_path(points: &[(f32, f32)]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

fn inset(rect: Rect, amount: f32) -> Option<Rect> {
    Rect::from_ltrb(
        rect.left() + amount,
        rect.top() + amount,
        rect.right() - amount,
        rect.bottom() - amount,
    )
}

/// Approximates an elliptical arc with one cubic Bézier per quarter turn.
fn arc_path(rect: Rect, start_deg: f32, end_deg: f32) -> Option<Path> {
    if end_deg <= start_deg {
        return None;
    }

    let cx = (rect.left() + rect.right()) / 2.0;
    let cy = (rect.top() + rect.bottom()) / 2.0;
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let point = |a: f32| (cx + rx * a.cos(), cy + ry * a.sin());
    // Derivative of `point`, scaled per segment below.
    let tangent = |a: f32| (-rx * a.sin(), ry * a.cos());

    let start = start_deg.to_radians();
    let end = end_deg.to_radians();
    let segments = ((end - start) / (PI / 2.0)).ceil().max(1.0) as u32;
    let step = (end - start) / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut pb = PathBuilder::new();
    let (x0, y0) = point(start);
    pb.move_to(x0, y0);

    for i in 0..segments {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        let (p0x, p0y) = point(a0);
        let (p1x, p1y) = point(a1);
        let (t0x, t0y) = tangent(a0);
        let (t1x, t1y) = tangent(a1);
        pb.cubic_to(
            p0x + k * t0x,
            p0y + k * t0y,
            p1x - k * t1x,
            p1y - k * t1y,
            p1x,
            p1y,
        );
    }

    pb.finish()
}
