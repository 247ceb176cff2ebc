//! Merging fragment bitmaps into a canvas.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::canvas::Canvas;
use crate::constants::{BYTES_PER_PIXEL, HEADER_LEN};
use crate::error::RasterError;
use crate::geometry::{pixel_offset, row_padding};
use crate::rect::FragmentRect;

use super::{map_stream_err, open_canvas_file, skip_exact};

impl Canvas {
    /// Merge a fragment bitmap into the canvas at `rect`.
    ///
    /// The stream must be a self-contained bitmap for `rect.width x
    /// rect.height`: 54-byte header, then padded rows bottom-up. Only bytes
    /// inside the clip rectangle are mutated; source rows and columns that
    /// fall outside the canvas are drained from the stream without being
    /// written. A failed write may leave earlier rows applied - there is no
    /// rollback across rows.
    pub fn write_fragment<R: Read>(
        &self,
        rect: FragmentRect,
        mut fragment: R,
    ) -> Result<(), RasterError> {
        let Some(clip) = rect.clip(self.width(), self.height()) else {
            // nothing to merge; the stream is left untouched
            return Ok(());
        };

        let mut file = open_canvas_file(self.path(), OpenOptions::new().write(true))?;

        let pixel_row_len = rect.width as u64 * BYTES_PER_PIXEL as u64;
        let source_padding = row_padding(rect.width) as u64;
        let canvas_stride = self.stride();
        let src_start = ((clip.x0 as i64 - rect.x) * BYTES_PER_PIXEL as i64) as usize;
        let src_end = ((clip.x1 as i64 - rect.x) * BYTES_PER_PIXEL as i64) as usize;
        let mut row_buf = vec![0u8; pixel_row_len as usize];

        skip_exact(&mut fragment, HEADER_LEN as u64).map_err(|err| map_stream_err(err, 0))?;

        // fragment rows arrive bottom-up: stream row i is canvas row
        // y + height - 1 - i in top-down coordinates
        for i in 0..rect.height {
            let row = rect.y + rect.height as i64 - 1 - i as i64;
            if row >= self.height() as i64 {
                // below the canvas; drain the source row and move on
                skip_exact(&mut fragment, pixel_row_len + source_padding)
                    .map_err(|err| map_stream_err(err, i))?;
                continue;
            }
            if row < 0 {
                // rows only move upward from here, all remaining are outside
                break;
            }

            fragment
                .read_exact(&mut row_buf)
                .map_err(|err| map_stream_err(err, i))?;
            skip_exact(&mut fragment, source_padding).map_err(|err| map_stream_err(err, i))?;

            let offset = pixel_offset(self.height(), canvas_stride, row as u32, clip.x0);
            file.seek(SeekFrom::Start(offset))?;
            file.write_all(&row_buf[src_start..src_end])?;
        }

        tracing::trace!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "merged fragment into canvas"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::super::testutil::{bitmap_pixel, make_bitmap};
    use crate::canvas::Canvas;
    use crate::error::RasterError;
    use crate::rect::FragmentRect;

    fn fragment_color(col: u32, row: u32) -> [u8; 3] {
        [col as u8 + 1, row as u8 + 1, 9]
    }

    /// Write a distinctly-painted fragment at `rect` into a fresh canvas and
    /// verify every canvas pixel: painted inside the clip, zero outside.
    fn check_write(canvas_w: u32, canvas_h: u32, rect: FragmentRect) {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::allocate(dir.path().join("c.bmp"), canvas_w, canvas_h).unwrap();
        let fragment = make_bitmap(rect.width, rect.height, fragment_color);
        canvas.write_fragment(rect, fragment.as_slice()).unwrap();

        let bytes = fs::read(canvas.path()).unwrap();
        for row in 0..canvas_h {
            for col in 0..canvas_w {
                let fc = col as i64 - rect.x;
                let fr = row as i64 - rect.y;
                let inside = fc >= 0 && fc < rect.width as i64 && fr >= 0 && fr < rect.height as i64;
                let expected = if inside {
                    fragment_color(fc as u32, fr as u32)
                } else {
                    [0, 0, 0]
                };
                assert_eq!(
                    bitmap_pixel(&bytes, canvas_w, canvas_h, col, row),
                    expected,
                    "canvas pixel ({col}, {row}) for rect {rect:?}"
                );
            }
        }
    }

    #[test]
    fn test_write_fully_inside() {
        check_write(10, 10, FragmentRect::new(2, 3, 5, 4));
        check_write(10, 10, FragmentRect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_write_clips_single_edges() {
        check_write(10, 10, FragmentRect::new(-3, 4, 6, 3)); // left
        check_write(10, 10, FragmentRect::new(7, 4, 6, 3)); // right
        check_write(10, 10, FragmentRect::new(4, -3, 3, 6)); // top
        check_write(10, 10, FragmentRect::new(4, 7, 3, 6)); // bottom
    }

    #[test]
    fn test_write_clips_corners() {
        check_write(10, 10, FragmentRect::new(-2, -2, 5, 5));
        check_write(10, 10, FragmentRect::new(8, -2, 5, 5));
        check_write(10, 10, FragmentRect::new(-2, 8, 5, 5));
        check_write(10, 10, FragmentRect::new(8, 8, 5, 5));
    }

    #[test]
    fn test_write_fragment_larger_than_canvas() {
        check_write(6, 5, FragmentRect::new(-2, -3, 11, 12));
    }

    #[test]
    fn test_write_edge_pixel() {
        // last accepted offset per the boundary convention
        check_write(10, 10, FragmentRect::new(9, 9, 4, 4));
    }

    #[test]
    fn test_write_preserves_unrelated_rows() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::allocate(dir.path().join("c.bmp"), 8, 8).unwrap();

        let first = make_bitmap(8, 8, |c, r| [0xAA, c as u8, r as u8]);
        canvas
            .write_fragment(FragmentRect::new(0, 0, 8, 8), first.as_slice())
            .unwrap();
        let second = make_bitmap(2, 2, |_, _| [1, 2, 3]);
        canvas
            .write_fragment(FragmentRect::new(3, 3, 2, 2), second.as_slice())
            .unwrap();

        let bytes = fs::read(canvas.path()).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                let overwritten = (3..5).contains(&col) && (3..5).contains(&row);
                let expected = if overwritten {
                    [1, 2, 3]
                } else {
                    [0xAA, col as u8, row as u8]
                };
                assert_eq!(bitmap_pixel(&bytes, 8, 8, col, row), expected);
            }
        }
    }

    #[test]
    fn test_write_empty_clip_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::allocate(dir.path().join("c.bmp"), 4, 4).unwrap();
        let before = fs::read(canvas.path()).unwrap();

        // no overlap at all; no bytes are consumed from the stream either
        let empty: &[u8] = &[];
        canvas
            .write_fragment(FragmentRect::new(10, 10, 3, 3), empty)
            .unwrap();

        assert_eq!(fs::read(canvas.path()).unwrap(), before);
    }

    #[test]
    fn test_write_truncated_stream() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::allocate(dir.path().join("c.bmp"), 8, 8).unwrap();

        let mut fragment = make_bitmap(4, 4, |_, _| [5, 5, 5]);
        fragment.truncate(fragment.len() - 10);
        let err = canvas
            .write_fragment(FragmentRect::new(0, 0, 4, 4), fragment.as_slice())
            .unwrap_err();
        assert!(matches!(err, RasterError::TruncatedFragment { .. }));
    }

    #[test]
    fn test_write_missing_canvas_file() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::open(dir.path().join("gone.bmp"), 8, 8);
        let fragment = make_bitmap(2, 2, |_, _| [5, 5, 5]);
        let err = canvas
            .write_fragment(FragmentRect::new(0, 0, 2, 2), fragment.as_slice())
            .unwrap_err();
        assert!(matches!(err, RasterError::Missing { .. }));
    }
}
