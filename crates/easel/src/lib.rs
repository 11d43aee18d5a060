//! Easel: declarative 2D drawing scripts shown in a fixed-size window.
//!
//! A script is a closure over a [`Context`]. It runs once, recording drawing
//! operations; the window then replays that fixed list on every repaint.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel::prelude::*;
//!
//! render("clock", |ctx| {
//!     ctx.background(ctx.rgb(230, 240, 200));
//!     ctx.fill(ctx.white());
//!     ctx.stroke(ctx.black());
//!     ctx.strokewidth(4);
//!     ctx.oval(24.0, 38.0, 204.0, 204.0);
//!     Ok(())
//! })?;
//! ```

pub mod color;
mod context;
mod error;
mod sketch;

pub use context::Context;
pub use error::Error;
pub use sketch::{render, Script, Sketch};

/// Default window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 300;
/// Default window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 300;

/// Everything a script file needs.
pub mod prelude {
    pub use crate::color::{black, rgb, white, Color};
    pub use crate::{render, Context, Error, Sketch, WINDOW_HEIGHT, WINDOW_WIDTH};

    pub use easel_engine::window::BackendPreference;
}
