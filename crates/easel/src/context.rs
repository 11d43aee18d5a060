use easel_engine::coords::Viewport;
use easel_engine::paint::Color;
use easel_engine::scene::{Canvas, Op, ShapeOp};

/// The drawing verbs a script is written against.
///
/// Every verb records exactly one operation on the underlying [`Canvas`];
/// nothing is drawn until the window repaints.
///
/// ```rust,ignore
/// easel::render("target", |ctx| {
///     ctx.background(ctx.white());
///     ctx.stroke(ctx.black());
///     ctx.strokewidth(4);
///     ctx.oval(24.0, 38.0, 204.0, 204.0);
///     Ok(())
/// })
/// ```
pub struct Context<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> Context<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    /// Logical size of the window being drawn into.
    pub fn size(&self) -> Viewport {
        self.canvas.size()
    }

    /// Fills the whole window with `color`, regardless of fill/stroke state.
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.canvas.draw(Op::Clear(color));
        self
    }

    /// Ellipse inside the box with top-left `(x, y)` and extent `(w, h)`.
    pub fn oval(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.canvas.draw(Op::Shape(ShapeOp::oval(x, y, w, h)));
        self
    }

    /// Segment from `(x0, y0)` to `(x1, y1)`. Lines are only ever stroked.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> &mut Self {
        self.canvas.draw(Op::Shape(ShapeOp::line(x0, y0, x1, y1)));
        self
    }

    pub fn stroke(&mut self, color: Color) -> &mut Self {
        self.canvas.draw(Op::SetStroke(color));
        self
    }

    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.canvas.draw(Op::SetFill(color));
        self
    }

    /// Outline width in pixels. Zero is drawn as a 1px hairline.
    pub fn strokewidth(&mut self, width: u32) -> &mut Self {
        self.canvas.draw(Op::SetStrokeWidth(width));
        self
    }

    pub fn nostroke(&mut self) -> &mut Self {
        self.canvas.draw(Op::ClearStroke);
        self
    }

    pub fn nofill(&mut self) -> &mut Self {
        self.canvas.draw(Op::ClearFill);
        self
    }

    // Color helpers, mirrored from `easel::color` so scripts need no imports.

    pub fn rgb(&self, r: u8, g: u8, b: u8) -> Color {
        crate::color::rgb(r, g, b)
    }

    pub fn black(&self) -> Color {
        crate::color::black()
    }

    pub fn white(&self) -> Color {
        crate::color::white()
    }
}
