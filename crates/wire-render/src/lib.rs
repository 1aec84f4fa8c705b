//! Renderer-agnostic drawing of the ground grid and wireframe models into a
//! host-supplied line sink.

pub mod grid;
pub mod mode;
pub mod model;
pub mod sink;

pub use grid::{GridConfig, GridError, GroundGrid, MAX_GRID_LINES};
pub use mode::{RenderContext, VectorMode};
pub use model::{model_fade, render_model, ModelInstance, MODEL_LINE_WIDTH};
pub use sink::{DrawnLine, LineList, LineSink, LineStyle};
