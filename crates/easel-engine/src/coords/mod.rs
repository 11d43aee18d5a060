//! Coordinate and geometry types shared by the operation model and surfaces.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Surfaces map logical pixels to device pixels themselves (pixmap scale for
//! the software path, a viewport uniform for the GPU path).

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
