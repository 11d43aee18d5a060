//! Retained operation model.
//!
//! Responsibilities:
//! - store backend-agnostic drawing operations in recording order
//! - hold the painter state consulted while replaying them
//! - replay deterministically against any [`Surface`](crate::render::Surface)
//!
//! Extending the model:
//! - add a variant to [`Op`]
//! - handle it in `Op::apply`
//! - add a verb for it on the DSL context

mod canvas;
mod geometry;
mod op;
mod state;

pub use canvas::Canvas;
pub use geometry::Geometry;
pub use op::{Op, ShapeOp, OVAL_INFLATE};
pub use state::PainterState;
