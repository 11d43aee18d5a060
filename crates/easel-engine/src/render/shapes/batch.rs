use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Transform, Viewport};
use crate::paint::Color;
use crate::scene::Geometry;
use crate::render::Surface;

/// Primitive selector understood by `shaders/shape.wgsl`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum ShapeKind {
    /// `p0` = min corner, `p1` = max corner.
    Rect = 0,
    /// `p0` = center, `p1` = radii.
    EllipseFill = 1,
    /// `p0` = center, `p1` = radii, stroked at `width`.
    EllipseStroke = 2,
    /// `p0`/`p1` = endpoints, stroked at `width` with square caps.
    Line = 3,
}

/// Instance data layout (40 bytes):
///
///  offset  0  kind_width [f32; 2]   loc 1  (.x = kind, .y = stroke width)
///  offset  8  p0         [f32; 2]   loc 2
///  offset 16  p1         [f32; 2]   loc 3
///  offset 24  color      [f32; 4]   loc 4  (straight sRGB, alpha 1)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub kind_width: [f32; 2],
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // kind_width
        2 => Float32x2, // p0
        3 => Float32x2, // p1
        4 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn new(kind: ShapeKind, width: f32, p0: [f32; 2], p1: [f32; 2], color: Color) -> Self {
        Self {
            kind_width: [kind as u32 as f32, width],
            p0,
            p1,
            color: color.to_srgb_f32(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self.kind_width[0] as u32 {
            0 => ShapeKind::Rect,
            1 => ShapeKind::EllipseFill,
            2 => ShapeKind::EllipseStroke,
            _ => ShapeKind::Line,
        }
    }
}

/// GPU-side [`Surface`]: records one instance per primitive, in draw order.
///
/// The current transform is baked into instance positions at record time,
/// so restoring a transform never touches already recorded primitives.
/// Performance characteristics:
/// - every draw call is O(1)
/// - `reset()` keeps the allocation for the next repaint
#[derive(Debug, Default)]
pub struct ShapeBatch {
    size: Viewport,
    transform: Transform,
    instances: Vec<ShapeInstance>,
}

impl ShapeBatch {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            transform: Transform::identity(),
            instances: Vec::new(),
        }
    }

    /// Drops recorded instances and resets the transform. Keeps capacity.
    pub fn reset(&mut self, size: Viewport) {
        self.size = size;
        self.transform = Transform::identity();
        self.instances.clear();
    }

    #[inline]
    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn push(&mut self, instance: ShapeInstance) {
        self.instances.push(instance);
    }
}

impl Surface for ShapeBatch {
    fn size(&self) -> Viewport {
        self.size
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.normalized();
        if r.is_empty() {
            return;
        }
        let min = self.transform.apply(r.min());
        let max = self.transform.apply(r.max());
        self.push(ShapeInstance::new(ShapeKind::Rect, 0.0, [min.x, min.y], [max.x, max.y], color));
    }

    fn fill(&mut self, geometry: &Geometry, color: Color) {
        let Geometry::Ellipse(bounds) = *geometry else { return };
        let b = bounds.normalized();
        if b.is_empty() {
            return;
        }
        let c = self.transform.apply(b.center());
        let radii = [b.size.x * 0.5, b.size.y * 0.5];
        self.push(ShapeInstance::new(ShapeKind::EllipseFill, 0.0, [c.x, c.y], radii, color));
    }

    fn stroke(&mut self, geometry: &Geometry, color: Color, width: f32) {
        match *geometry {
            Geometry::Ellipse(bounds) => {
                let b = bounds.normalized();
                if b.is_empty() {
                    return;
                }
                let c = self.transform.apply(b.center());
                let radii = [b.size.x * 0.5, b.size.y * 0.5];
                self.push(ShapeInstance::new(
                    ShapeKind::EllipseStroke,
                    width,
                    [c.x, c.y],
                    radii,
                    color,
                ));
            }
            Geometry::Line { from, to } => {
                if from == to {
                    return;
                }
                let a = self.transform.apply(from);
                let b = self.transform.apply(to);
                self.push(ShapeInstance::new(ShapeKind::Line, width, [a.x, a.y], [b.x, b.y], color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Canvas, Op, ShapeOp};

    fn replay(ops: &[Op]) -> ShapeBatch {
        let mut canvas = Canvas::new(Viewport::new(300.0, 300.0));
        for op in ops {
            canvas.draw(*op);
        }
        let mut batch = ShapeBatch::new(canvas.size());
        canvas.repaint(&mut batch);
        batch
    }

    #[test]
    fn instance_is_forty_bytes() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 40);
    }

    #[test]
    fn clear_becomes_full_viewport_rect() {
        let batch = replay(&[Op::Clear(Color::WHITE)]);
        let [inst] = batch.instances() else { panic!("expected one instance") };
        assert_eq!(inst.kind(), ShapeKind::Rect);
        assert_eq!(inst.p0, [0.0, 0.0]);
        assert_eq!(inst.p1, [300.0, 300.0]);
        assert_eq!(inst.color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn records_in_paint_order() {
        let batch = replay(&[
            Op::Clear(Color::WHITE),
            Op::SetFill(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(4),
            Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0)),
            Op::Shape(ShapeOp::line(126.0, 38.0, 126.0, 45.0)),
        ]);
        let kinds: Vec<ShapeKind> = batch.instances().iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rect, ShapeKind::EllipseFill, ShapeKind::EllipseStroke, ShapeKind::Line]
        );
    }

    #[test]
    fn even_stroke_shares_fill_geometry() {
        let batch = replay(&[
            Op::SetFill(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(4),
            Op::Shape(ShapeOp::oval(24.0, 38.0, 204.0, 204.0)),
        ]);
        let [fill, stroke] = batch.instances() else { panic!("expected two instances") };
        assert_eq!(fill.p0, [126.25, 140.25]);
        assert_eq!(fill.p1, [102.25, 102.25]);
        assert_eq!((stroke.p0, stroke.p1), (fill.p0, fill.p1));
        assert_eq!(stroke.kind_width[1], 4.0);
    }

    #[test]
    fn odd_stroke_is_shifted_half_pixel() {
        let batch = replay(&[
            Op::SetFill(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::Shape(ShapeOp::oval(10.0, 10.0, 20.0, 20.0)),
            Op::Shape(ShapeOp::line(0.0, 5.0, 10.0, 5.0)),
        ]);
        let [fill, stroke, line] = batch.instances() else { panic!("expected three instances") };
        assert_eq!(fill.p0, [20.25, 20.25]);
        assert_eq!(stroke.p0, [20.75, 20.75]);
        assert_eq!(line.p0, [0.5, 5.5]);
        assert_eq!(line.p1, [10.5, 5.5]);
        assert_eq!(batch.transform(), Transform::identity());
    }

    #[test]
    fn lines_are_never_filled() {
        let batch = replay(&[Op::SetFill(Color::BLACK), Op::Shape(ShapeOp::line(0.0, 0.0, 5.0, 5.0))]);
        assert!(batch.is_empty());
    }

    #[test]
    fn reset_keeps_nothing() {
        let mut batch = replay(&[Op::Clear(Color::BLACK)]);
        batch.set_transform(Transform::from_translate(1.0, 1.0));
        batch.reset(Viewport::new(10.0, 10.0));
        assert!(batch.is_empty());
        assert_eq!(batch.size(), Viewport::new(10.0, 10.0));
        assert!(batch.transform().is_identity());
    }
}
