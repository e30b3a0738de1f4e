use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("container size {width}x{height} is not usable")]
    InvalidContainer { width: f64, height: f64 },
    #[error("cannot allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },
    #[error("failed to write snapshot to {path:?}: {message}")]
    Snapshot { path: PathBuf, message: String },
}
