//! Canvas handles - allocation and deletion of backing files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::ZERO_CHUNK_LEN;
use crate::error::RasterError;
use crate::geometry::{pixel_data_len, row_stride};
use crate::header::encode_header;

/// A handle to one on-disk canvas.
///
/// Identity and dimensions are fixed at creation and owned by the caller's
/// metadata layer; only pixel content changes afterwards. The handle itself
/// holds no open file - every operation opens, streams and closes.
#[derive(Debug, Clone)]
pub struct Canvas {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a new zero-filled canvas file.
    ///
    /// Writes the header, then streams the pixel data as fixed-size chunks of
    /// zero bytes so peak memory stays constant regardless of canvas size.
    /// On failure the caller must treat the creation as failed and roll back
    /// any metadata recorded for the canvas; a partial file may remain.
    pub fn allocate(
        path: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Result<Self, RasterError> {
        let path = path.into();
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(&encode_header(width, height))?;

        let chunk = [0u8; ZERO_CHUNK_LEN];
        let mut remaining = pixel_data_len(width, height);
        while remaining > 0 {
            let n = remaining.min(ZERO_CHUNK_LEN as u64) as usize;
            writer.write_all(&chunk[..n])?;
            remaining -= n as u64;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), width, height, "allocated canvas");
        Ok(Self {
            path,
            width,
            height,
        })
    }

    /// Wrap an existing canvas file whose dimensions are known from metadata.
    /// Performs no I/O; a stale handle surfaces as `Missing` on first use.
    pub fn open(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Remove the backing file.
    ///
    /// Returns whether a file was actually deleted; an already-absent file
    /// yields `false` rather than an error, so deletion is idempotent.
    pub fn delete(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "deleted canvas");
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per stored canvas row, padding included.
    #[inline]
    pub fn stride(&self) -> u64 {
        row_stride(self.width)
    }
}
