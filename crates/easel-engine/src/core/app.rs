use crate::render::Surface;

use super::ctx::WindowCtx;

/// Application contract implemented by higher layers.
///
/// Both callbacks run on the event-loop thread.
pub trait App {
    /// Called once, right after the window and its presenter exist and before
    /// the first repaint.
    ///
    /// Returning an error closes the window, ends the event loop and makes
    /// [`Runtime::run`](crate::window::Runtime::run) fail with that error.
    fn on_start(&mut self, window: &WindowCtx<'_>) -> anyhow::Result<()>;

    /// Called whenever the platform asks for the window's contents.
    ///
    /// `surface` has already been cleared to the configured backdrop.
    fn on_paint(&mut self, surface: &mut dyn Surface);
}
