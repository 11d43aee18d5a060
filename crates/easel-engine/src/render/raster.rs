use anyhow::{Context, Result};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke};

use crate::coords::{Rect, Transform, Viewport};
use crate::paint::Color;
use crate::scene::Geometry;

use super::Surface;

/// CPU surface backed by a `tiny_skia::Pixmap`.
///
/// The pixmap lives in physical pixels; `scale` maps logical coordinates onto
/// it. Used by the software presenter and by pixel-level tests.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    transform: Transform,
    anti_alias: bool,
}

impl RasterSurface {
    /// Creates a transparent surface of `width`×`height` physical pixels.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self> {
        anyhow::ensure!(scale.is_finite() && scale > 0.0, "invalid surface scale {scale}");

        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} pixmap"))?;

        Ok(Self {
            pixmap,
            scale,
            transform: Transform::identity(),
            anti_alias: true,
        })
    }

    /// Enables or disables anti-aliasing for geometry (rect fills are never smoothed).
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    #[inline]
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Fills every pixel, bypassing the transform.
    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// Reads back a physical pixel, un-premultiplied. `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgb(c.red(), c.green(), c.blue())
        })
    }

    /// Writes the pixmap as `0x00RRGGBB` words into `out`, row-major.
    ///
    /// Alpha is dropped, so callers should clear to an opaque color first.
    pub fn copy_to_xrgb(&self, out: &mut [u32]) {
        for (dst, px) in out.iter_mut().zip(self.pixmap.pixels()) {
            *dst = Color::rgb(px.red(), px.green(), px.blue()).to_xrgb_u32();
        }
    }

    fn device_transform(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_scale(self.scale, self.scale)
            .pre_translate(self.transform.tx, self.transform.ty)
    }

    fn paint(&self, color: Color, anti_alias: bool) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = anti_alias;
        paint
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Viewport {
        Viewport::new(
            self.pixmap.width() as f32 / self.scale,
            self.pixmap.height() as f32 / self.scale,
        )
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.normalized();
        let Some(rect) = tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
        else {
            return;
        };
        let paint = self.paint(color, false);
        let ts = self.device_transform();
        self.pixmap.fill_rect(rect, &paint, ts, None);
    }

    fn fill(&mut self, geometry: &Geometry, color: Color) {
        if !geometry.is_fillable() {
            return;
        }
        let Some(path) = build_path(geometry) else { return };
        let paint = self.paint(color, self.anti_alias);
        let ts = self.device_transform();
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, ts, None);
    }

    fn stroke(&mut self, geometry: &Geometry, color: Color, width: f32) {
        let Some(path) = build_path(geometry) else { return };
        let paint = self.paint(color, self.anti_alias);
        let stroke = Stroke {
            width,
            line_cap: LineCap::Square,
            ..Stroke::default()
        };
        let ts = self.device_transform();
        self.pixmap.stroke_path(&path, &paint, &stroke, ts, None);
    }
}

/// Degenerate geometry (empty ellipse, zero-length line) yields `None`.
fn build_path(geometry: &Geometry) -> Option<tiny_skia::Path> {
    match *geometry {
        Geometry::Ellipse(bounds) => {
            let b = bounds.normalized();
            let rect = tiny_skia::Rect::from_xywh(b.origin.x, b.origin.y, b.size.x, b.size.y)?;
            PathBuilder::from_oval(rect)
        }
        Geometry::Line { from, to } => {
            if from == to {
                return None;
            }
            let mut pb = PathBuilder::new();
            pb.move_to(from.x, from.y);
            pb.line_to(to.x, to.y);
            pb.finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Canvas, Op, ShapeOp};

    fn surface() -> RasterSurface {
        RasterSurface::new(300, 300, 1.0).unwrap()
    }

    fn is_uniform(s: &RasterSurface, color: Color) -> bool {
        (0..300).all(|y| (0..300).all(|x| s.pixel(x, y) == Some(color)))
    }

    fn dark(c: Option<Color>) -> bool {
        matches!(c, Some(c) if c.r < 40 && c.g < 40 && c.b < 40)
    }

    fn canvas(ops: &[Op]) -> Canvas {
        let mut c = Canvas::new(Viewport::new(300.0, 300.0));
        for op in ops {
            c.draw(*op);
        }
        c
    }

    #[test]
    fn logical_size_accounts_for_scale() {
        let s = RasterSurface::new(600, 600, 2.0).unwrap();
        assert_eq!(s.size(), Viewport::new(300.0, 300.0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(RasterSurface::new(0, 10, 1.0).is_err());
        assert!(RasterSurface::new(10, 10, 0.0).is_err());
    }

    #[test]
    fn clear_op_fills_whole_surface() {
        let mut s = surface();
        canvas(&[Op::Clear(Color::rgb(230, 240, 200))]).repaint(&mut s);
        assert!(is_uniform(&s, Color::rgb(230, 240, 200)));
    }

    #[test]
    fn shape_without_paint_leaves_white() {
        let mut s = surface();
        canvas(&[Op::Clear(Color::WHITE), Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0))])
            .repaint(&mut s);
        assert!(is_uniform(&s, Color::WHITE));
    }

    #[test]
    fn nostroke_after_stroke_draws_no_outline() {
        let mut s = surface();
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::ClearStroke,
            Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0)),
        ])
        .repaint(&mut s);
        assert!(is_uniform(&s, Color::WHITE));
    }

    #[test]
    fn nofill_after_fill_draws_no_interior() {
        let mut s = surface();
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetFill(Color::BLACK),
            Op::ClearFill,
            Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0)),
        ])
        .repaint(&mut s);
        assert!(is_uniform(&s, Color::WHITE));
    }

    #[test]
    fn filled_oval_paints_interior_only() {
        let mut s = surface();
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetFill(Color::BLACK),
            Op::Shape(ShapeOp::oval(100.0, 100.0, 50.0, 50.0)),
        ])
        .repaint(&mut s);
        assert!(dark(s.pixel(125, 125)));
        assert_eq!(s.pixel(90, 125), Some(Color::WHITE));
        assert_eq!(s.pixel(101, 101), Some(Color::WHITE));
    }

    #[test]
    fn stroked_oval_leaves_interior_untouched() {
        let mut s = surface();
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(4),
            Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0)),
        ])
        .repaint(&mut s);
        assert!(dark(s.pixel(24, 140)));
        assert_eq!(s.pixel(126, 140), Some(Color::WHITE));
        assert_eq!(s.pixel(10, 140), Some(Color::WHITE));
    }

    #[test]
    fn odd_width_line_lands_on_pixel_column() {
        let mut s = surface();
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::Shape(ShapeOp::line(126.0, 38.0, 126.0, 45.0)),
        ])
        .repaint(&mut s);
        // The half-pixel offset centres the 1px stroke on column 126.
        assert!(dark(s.pixel(126, 42)));
        assert_eq!(s.pixel(125, 42), Some(Color::WHITE));
        assert_eq!(s.pixel(127, 42), Some(Color::WHITE));
    }

    #[test]
    fn replay_is_pixel_identical() {
        let c = canvas(&[
            Op::Clear(Color::rgb(230, 240, 200)),
            Op::SetFill(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(3),
            Op::Shape(ShapeOp::oval(30.0, 30.0, 101.0, 67.0)),
            Op::Shape(ShapeOp::line(0.0, 0.0, 299.0, 170.0)),
        ]);

        let mut a = surface();
        let mut b = surface();
        c.repaint(&mut a);
        c.repaint(&mut b);
        assert_eq!(a.pixmap().data(), b.pixmap().data());

        // Replaying again onto an already painted surface converges to the same pixels.
        c.repaint(&mut a);
        assert_eq!(a.pixmap().data(), b.pixmap().data());
    }

    #[test]
    fn aliased_rendering_produces_only_pure_colors() {
        let mut s = surface().with_anti_alias(false);
        assert!(!s.anti_alias());
        canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(3),
            Op::Shape(ShapeOp::oval(20.0, 20.0, 200.0, 150.0)),
        ])
        .repaint(&mut s);
        assert!(
            (0..300).all(|y| (0..300).all(|x| matches!(
                s.pixel(x, y),
                Some(Color::WHITE) | Some(Color::BLACK)
            )))
        );
    }

    #[test]
    fn xrgb_copy_matches_pixels() {
        let mut s = RasterSurface::new(4, 2, 1.0).unwrap();
        s.clear(Color::rgb(1, 2, 3));
        let mut out = vec![0u32; 8];
        s.copy_to_xrgb(&mut out);
        assert!(out.iter().all(|&w| w == 0x0001_0203));
    }

    #[test]
    fn pixel_outside_is_none() {
        assert_eq!(surface().pixel(300, 0), None);
    }
}
