//! Windowed fragment access - streaming writes into and reads out of a canvas.
//!
//! Both directions share the same clip math: intersect the requested
//! rectangle with the canvas once, then walk rows bottom-up (the order they
//! sit in the file) with a uniform bounds test per row. Fragment streams are
//! self-contained bitmaps, header included.

mod read;
mod write;

use std::io::{self, Read};
use std::path::Path;

use crate::error::RasterError;

/// Open a canvas file, mapping "file not found" to [`RasterError::Missing`].
pub(crate) fn open_canvas_file(
    path: &Path,
    options: &std::fs::OpenOptions,
) -> Result<std::fs::File, RasterError> {
    options.open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            RasterError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            RasterError::Storage(err)
        }
    })
}

/// Discard exactly `n` bytes from a reader.
///
/// `Read` has no seek, so skipped source rows are drained through a small
/// scratch buffer.
pub(crate) fn skip_exact<R: Read>(reader: &mut R, mut n: u64) -> io::Result<()> {
    let mut scratch = [0u8; 512];
    while n > 0 {
        let take = n.min(scratch.len() as u64) as usize;
        reader.read_exact(&mut scratch[..take])?;
        n -= take as u64;
    }
    Ok(())
}

/// Map a fragment-stream read failure: early EOF means the caller sent fewer
/// rows than declared, anything else is a plain storage error.
pub(crate) fn map_stream_err(err: io::Error, row: u32) -> RasterError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        RasterError::TruncatedFragment { row }
    } else {
        RasterError::Storage(err)
    }
}
