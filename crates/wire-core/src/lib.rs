//! Core value types for the wireframe engine: vectors and model data.

pub mod color;
pub mod model;
pub mod shapes;
pub mod vector;

pub use model::{
    create_edges, create_model, ColorConfig, ColorSlot, Edge, EdgeColor, ModelError,
    WireframeModel, DEFAULT_MODEL_COLOR,
};
pub use vector::Vec3;
