//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single sketch window, and wires the
//! window to whichever presenter the backend selection produced.

mod backend;
mod present;
mod runtime;

pub use backend::{Backend, BackendPreference, BACKEND_ENV};
pub use runtime::{Runtime, RuntimeConfig};
