//! Drawing surfaces.
//!
//! A [`Canvas`](crate::scene::Canvas) replays against anything implementing
//! [`Surface`]. Two implementations back the two presenters:
//! - [`RasterSurface`]: tiny-skia pixmap, blitted through softbuffer
//! - [`ShapeBatch`]: GPU instances drawn by [`ShapeRenderer`] via wgpu
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The GPU vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod raster;
mod surface;
pub mod shapes;

#[cfg(test)]
pub(crate) mod recording;

pub use ctx::{RenderCtx, RenderTarget};
pub use raster::RasterSurface;
pub use shapes::{ShapeBatch, ShapeInstance, ShapeKind, ShapeRenderer};
pub use surface::Surface;
