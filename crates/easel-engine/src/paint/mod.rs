//! Paint model shared between the operation list and the surfaces.
//!
//! Scope is deliberately small: opaque 8-bit sRGB colors. Geometry types
//! remain in `coords` and `scene`.

pub mod color;

pub use color::Color;
