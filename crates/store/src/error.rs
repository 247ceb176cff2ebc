//! Error types for store operations.

use crate::validation::ValidationError;
use raster::RasterError;

/// Errors that can occur in the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No canvas is registered under the given id.
    #[error("canvas {0} was not found")]
    NotFound(u64),

    /// The request parameters were rejected before any I/O happened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The codec failed against the backing file.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// The registry snapshot could not be encoded or decoded.
    #[error("registry snapshot failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Filesystem failure outside the codec (snapshot file, storage root).
    #[error("store i/o failed: {0}")]
    Storage(#[from] std::io::Error),
}
