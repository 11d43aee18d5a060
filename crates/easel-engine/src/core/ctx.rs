use winit::window::{Window, WindowId};

use crate::window::Backend;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:      WindowId,
    pub window:  &'a Window,
    pub backend: Backend,
}

impl<'a> WindowCtx<'a> {
    /// Ratio of physical to logical pixels.
    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }
}
