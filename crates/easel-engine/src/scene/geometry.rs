use crate::coords::{Rect, Vec2};

/// Shape outline consumed by surfaces, immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    /// Ellipse inscribed in `bounds`.
    Ellipse(Rect),
    /// Straight segment between two endpoints.
    Line { from: Vec2, to: Vec2 },
}

impl Geometry {
    #[inline]
    pub const fn ellipse(bounds: Rect) -> Self {
        Geometry::Ellipse(bounds)
    }

    #[inline]
    pub const fn line(from: Vec2, to: Vec2) -> Self {
        Geometry::Line { from, to }
    }

    /// Axis-aligned bounding box, before any stroke width is applied.
    pub fn bounds(&self) -> Rect {
        match *self {
            Geometry::Ellipse(bounds) => bounds.normalized(),
            Geometry::Line { from, to } => Rect::from_points(from, to),
        }
    }

    /// Lines have no interior.
    #[inline]
    pub fn is_fillable(&self) -> bool {
        matches!(self, Geometry::Ellipse(_))
    }
}
