use crate::paint::Color;

/// Transient painter state threaded through one replay pass.
///
/// Created fresh by [`Canvas::repaint`](super::Canvas::repaint); nothing
/// survives from one repaint to the next.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PainterState {
    /// `None` = shapes are not outlined.
    pub stroke: Option<Color>,
    /// `None` = shapes are not filled.
    pub fill: Option<Color>,
    /// Width as recorded by the script; see [`effective_stroke_width`](Self::effective_stroke_width).
    pub stroke_width: u32,
}

impl PainterState {
    #[inline]
    pub const fn new() -> Self {
        Self {
            stroke: None,
            fill: None,
            stroke_width: 1,
        }
    }

    /// Width handed to surfaces. A recorded width of zero draws as one pixel.
    #[inline]
    pub fn effective_stroke_width(&self) -> u32 {
        self.stroke_width.max(1)
    }

    /// Odd recorded widths straddle pixel centers and need the half-pixel
    /// stroke offset. Zero counts as even: its hairline is drawn unshifted.
    #[inline]
    pub fn wants_half_pixel_offset(&self) -> bool {
        self.stroke_width % 2 == 1
    }
}

impl Default for PainterState {
    fn default() -> Self {
        Self::new()
    }
}
