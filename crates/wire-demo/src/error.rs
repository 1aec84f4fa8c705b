use thiserror::Error;
use wire_core::ModelError;
use wire_geom::CameraError;
use wire_render::GridError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("invalid model: {0}")]
    Model(#[from] ModelError),
    #[error("{0}")]
    Usage(String),
}
