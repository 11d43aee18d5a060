use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::Surface;

use super::{Geometry, PainterState};

/// Extra extent added to both oval axes so even diameters stroke symmetrically.
pub const OVAL_INFLATE: f32 = 0.5;

/// Shape payload: optional interior and optional outline.
///
/// Ovals carry the same geometry in both slots; lines only have an outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeOp {
    pub fill: Option<Geometry>,
    pub stroke: Option<Geometry>,
}

impl ShapeOp {
    #[inline]
    pub fn new(fill: Option<Geometry>, stroke: Option<Geometry>) -> Self {
        Self { fill, stroke }
    }

    /// Ellipse in the box at `(x, y)` with extent `(w, h)`, each inflated by [`OVAL_INFLATE`].
    pub fn oval(x: f32, y: f32, w: f32, h: f32) -> Self {
        let shape = Geometry::ellipse(Rect::new(x, y, w + OVAL_INFLATE, h + OVAL_INFLATE));
        Self::new(Some(shape), Some(shape))
    }

    pub fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(None, Some(Geometry::line(Vec2::new(x0, y0), Vec2::new(x1, y1))))
    }

    fn apply(&self, state: &PainterState, surface: &mut dyn Surface) {
        if let (Some(geometry), Some(color)) = (&self.fill, state.fill) {
            surface.fill(geometry, color);
        }

        if let (Some(geometry), Some(color)) = (&self.stroke, state.stroke) {
            let width = state.effective_stroke_width();
            let saved = surface.transform();
            if state.wants_half_pixel_offset() {
                surface.translate(0.5, 0.5);
            }
            surface.stroke(geometry, color, width as f32);
            surface.set_transform(saved);
        }
    }
}

/// One recorded drawing or state-change instruction.
///
/// Ops are immutable once recorded and only ever appended to a
/// [`Canvas`](super::Canvas).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Op {
    /// Fills the whole surface, ignoring painter state.
    Clear(Color),
    Shape(ShapeOp),
    SetStroke(Color),
    SetFill(Color),
    SetStrokeWidth(u32),
    ClearStroke,
    ClearFill,
}

impl Op {
    /// Executes this op against the replay state and surface.
    pub fn apply(&self, state: &mut PainterState, surface: &mut dyn Surface) {
        match self {
            Op::Clear(color) => {
                let rect = surface.size().rect();
                surface.fill_rect(rect, *color);
            }
            Op::Shape(shape) => shape.apply(state, surface),
            Op::SetStroke(color) => state.stroke = Some(*color),
            Op::SetFill(color) => state.fill = Some(*color),
            Op::SetStrokeWidth(width) => state.stroke_width = *width,
            Op::ClearStroke => state.stroke = None,
            Op::ClearFill => state.fill = None,
        }
    }
}
