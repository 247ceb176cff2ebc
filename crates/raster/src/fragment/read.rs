//! Extracting fragment bitmaps out of a canvas.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom};

use crate::canvas::Canvas;
use crate::constants::BYTES_PER_PIXEL;
use crate::error::RasterError;
use crate::geometry::{file_len, pixel_offset, row_stride};
use crate::header::encode_header;
use crate::rect::FragmentRect;

use super::open_canvas_file;

impl Canvas {
    /// Extract the fragment at `rect` as a self-contained bitmap.
    ///
    /// The result is always exactly `file_len(rect.width, rect.height)` bytes
    /// long: header, then padded rows bottom-up. Pixels whose canvas
    /// coordinate falls outside the canvas come back as zero, so callers never
    /// see a truncated or resized fragment no matter how little of the
    /// requested rectangle actually overlapped.
    pub fn read_fragment(&self, rect: FragmentRect) -> Result<Vec<u8>, RasterError> {
        let mut out = Vec::with_capacity(file_len(rect.width, rect.height) as usize);
        out.extend_from_slice(&encode_header(rect.width, rect.height));

        let mut file = open_canvas_file(self.path(), OpenOptions::new().read(true))?;

        let clip = rect.clip(self.width(), self.height());
        let canvas_stride = self.stride();
        let mut row_buf = vec![0u8; row_stride(rect.width) as usize];

        for i in 0..rect.height {
            row_buf.fill(0);
            if let Some(clip) = clip {
                let row = rect.y + rect.height as i64 - 1 - i as i64;
                if row >= clip.y0 as i64 && row < clip.y1 as i64 {
                    let offset = pixel_offset(self.height(), canvas_stride, row as u32, clip.x0);
                    let dst_start = ((clip.x0 as i64 - rect.x) * BYTES_PER_PIXEL as i64) as usize;
                    let len = (clip.width() * BYTES_PER_PIXEL) as usize;
                    file.seek(SeekFrom::Start(offset))?;
                    file.read_exact(&mut row_buf[dst_start..dst_start + len])?;
                }
            }
            out.extend_from_slice(&row_buf);
        }

        tracing::trace!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "extracted fragment from canvas"
        );
        Ok(out)
    }
}
