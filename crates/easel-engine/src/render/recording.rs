//! Test double that records surface calls instead of drawing.

use crate::coords::{Rect, Transform, Viewport};
use crate::paint::Color;
use crate::scene::Geometry;

use super::Surface;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    FillRect(Rect, Color),
    Fill(Geometry, Color, Transform),
    Stroke(Geometry, Color, f32, Transform),
    SetTransform(Transform),
}

#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub size: Viewport,
    pub transform: Transform,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Viewport::new(width, height),
            transform: Transform::identity(),
            calls: Vec::new(),
        }
    }

    /// Draw calls only, without transform bookkeeping.
    pub fn draws(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::SetTransform(_)))
            .cloned()
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.calls.push(Call::SetTransform(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(Call::FillRect(rect, color));
    }

    fn fill(&mut self, geometry: &Geometry, color: Color) {
        self.calls.push(Call::Fill(*geometry, color, self.transform));
    }

    fn stroke(&mut self, geometry: &Geometry, color: Color, width: f32) {
        self.calls.push(Call::Stroke(*geometry, color, width, self.transform));
    }
}
