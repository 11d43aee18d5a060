use crate::coords::Viewport;
use crate::render::Surface;

use super::{Op, PainterState};

/// Append-only operation list for one window.
///
/// Written once while the script runs, then replayed by every repaint.
/// - `draw()` is O(1) amortized
/// - `repaint()` is a single in-order pass and may run any number of times
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    size: Viewport,
    ops: Vec<Op>,
}

impl Canvas {
    #[inline]
    pub fn new(size: Viewport) -> Self {
        Self { size, ops: Vec::new() }
    }

    /// Logical size the canvas was created for.
    #[inline]
    pub fn size(&self) -> Viewport {
        self.size
    }

    /// Records an operation.
    #[inline]
    pub fn draw(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Returns operations in recording order.
    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replays every recorded op against `surface`, starting from a fresh painter state.
    pub fn repaint(&self, surface: &mut dyn Surface) {
        log::trace!("replaying {} ops", self.ops.len());

        let mut state = PainterState::new();
        for op in &self.ops {
            op.apply(&mut state, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::render::recording::{Call, RecordingSurface};
    use crate::scene::ShapeOp;

    fn canvas(ops: &[Op]) -> Canvas {
        let mut c = Canvas::new(Viewport::new(300.0, 300.0));
        for op in ops {
            c.draw(*op);
        }
        c
    }

    #[test]
    fn draw_appends_in_order() {
        let c = canvas(&[Op::Clear(Color::WHITE), Op::SetStroke(Color::BLACK), Op::ClearStroke]);
        assert_eq!(c.len(), 3);
        assert_eq!(
            c.ops(),
            &[Op::Clear(Color::WHITE), Op::SetStroke(Color::BLACK), Op::ClearStroke]
        );
    }

    #[test]
    fn new_canvas_is_empty() {
        let c = Canvas::new(Viewport::new(300.0, 300.0));
        assert!(c.is_empty());
        assert_eq!(c.size(), Viewport::new(300.0, 300.0));
    }

    #[test]
    fn repaint_starts_from_fresh_state() {
        // A stroke set during one pass must not leak into the next one's first shape.
        let c = canvas(&[
            Op::Shape(ShapeOp::oval(0.0, 0.0, 10.0, 10.0)),
            Op::SetStroke(Color::BLACK),
        ]);

        let mut surface = RecordingSurface::new(300.0, 300.0);
        c.repaint(&mut surface);
        c.repaint(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn repaint_is_repeatable() {
        let c = canvas(&[
            Op::Clear(Color::WHITE),
            Op::SetStroke(Color::BLACK),
            Op::SetStrokeWidth(3),
            Op::Shape(ShapeOp::oval(10.0, 10.0, 40.0, 40.0)),
            Op::SetFill(Color::BLACK),
            Op::Shape(ShapeOp::oval(20.0, 20.0, 5.0, 5.0)),
        ]);

        let mut first = RecordingSurface::new(300.0, 300.0);
        let mut second = RecordingSurface::new(300.0, 300.0);
        c.repaint(&mut first);
        c.repaint(&mut second);

        assert_eq!(first.calls, second.calls);
        assert_eq!(first.draws().len(), 4);
        assert!(matches!(first.draws()[0], Call::FillRect(..)));
    }
}
