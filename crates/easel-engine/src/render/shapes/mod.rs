//! GPU shape batching and rendering.

mod batch;
mod common;
mod renderer;

pub use batch::{ShapeBatch, ShapeInstance, ShapeKind};
pub use renderer::ShapeRenderer;
