//! Error types for canvas storage operations.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while operating on a canvas file.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The backing file for the canvas no longer exists.
    #[error("canvas file {path:?} is missing")]
    Missing { path: PathBuf },

    /// Any other storage failure (unreadable, unwritable, disk full).
    #[error("storage i/o failed: {0}")]
    Storage(#[from] io::Error),

    /// The incoming fragment stream ended before all needed rows arrived.
    #[error("fragment stream ended before row {row}")]
    TruncatedFragment { row: u32 },
}
