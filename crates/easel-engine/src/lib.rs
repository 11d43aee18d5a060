//! Easel engine crate.
//!
//! This crate owns the retained drawing model and the platform + rendering
//! runtime used by the `easel` sketch layer:
//! - `scene`: recorded operations, painter state and the canvas that replays them
//! - `render`: the [`Surface`](render::Surface) seam with CPU and GPU implementations
//! - `device` / `window`: wgpu setup, presenters and the winit event loop

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
