//! Color helpers usable outside a [`Context`](crate::Context).
//!
//! All colors are opaque 8-bit sRGB.

pub use easel_engine::paint::Color;

/// Opaque color from 8-bit channels.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

#[inline]
pub const fn black() -> Color {
    Color::BLACK
}

#[inline]
pub const fn white() -> Color {
    Color::WHITE
}
