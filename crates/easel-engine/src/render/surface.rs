use crate::coords::{Rect, Transform, Viewport};
use crate::paint::Color;
use crate::scene::Geometry;

/// Drawing target an operation list is replayed against.
///
/// Implementations:
/// - [`RasterSurface`](super::RasterSurface): CPU pixmap (software backend, tests)
/// - [`ShapeBatch`](super::ShapeBatch): GPU instance batch (wgpu backend)
///
/// All coordinates are logical pixels. The current [`Transform`] applies to
/// every primitive drawn after it is set.
pub trait Surface {
    /// Logical size of the drawable area.
    fn size(&self) -> Viewport;

    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);

    /// Post-translates the current transform.
    fn translate(&mut self, dx: f32, dy: f32) {
        let t = self.transform().translated(dx, dy);
        self.set_transform(t);
    }

    /// Fills an axis-aligned rectangle, ignoring anti-aliasing.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Paints the interior of `geometry`. Geometry without an interior is ignored.
    fn fill(&mut self, geometry: &Geometry, color: Color);

    /// Paints the outline of `geometry` centred on its path.
    fn stroke(&mut self, geometry: &Geometry, color: Color, width: f32);
}
