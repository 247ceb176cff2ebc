//! Row geometry - pure byte arithmetic for padded bottom-up bitmaps.

use crate::constants::{BYTES_PER_PIXEL, HEADER_LEN, ROW_ALIGN};

/// Padding bytes appended to each stored row so its length is a multiple of 4.
#[inline]
pub fn row_padding(width: u32) -> u32 {
    ((ROW_ALIGN as u64 - (width as u64 * BYTES_PER_PIXEL as u64) % ROW_ALIGN as u64)
        % ROW_ALIGN as u64) as u32
}

/// Bytes per stored row, padding included.
#[inline]
pub fn row_stride(width: u32) -> u64 {
    width as u64 * BYTES_PER_PIXEL as u64 + row_padding(width) as u64
}

/// Total pixel-data length for a `width x height` canvas.
#[inline]
pub fn pixel_data_len(width: u32, height: u32) -> u64 {
    height as u64 * row_stride(width)
}

/// Total file length: header plus pixel data.
#[inline]
pub fn file_len(width: u32, height: u32) -> u64 {
    HEADER_LEN as u64 + pixel_data_len(width, height)
}

/// Byte offset of pixel `(col, row)` inside a canvas file.
///
/// `row` is in top-left-origin, y-downward coordinates; the file stores rows
/// bottom-up, so the visually last row sits first in the pixel data.
#[inline]
pub fn pixel_offset(canvas_height: u32, stride: u64, row: u32, col: u32) -> u64 {
    HEADER_LEN as u64
        + (canvas_height - 1 - row) as u64 * stride
        + col as u64 * BYTES_PER_PIXEL as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_padding() {
        // 3w mod 4 cycles every 4 widths
        assert_eq!(row_padding(1), 1);
        assert_eq!(row_padding(2), 2);
        assert_eq!(row_padding(3), 3);
        assert_eq!(row_padding(4), 0);
        assert_eq!(row_padding(51), 3);
        assert_eq!(row_padding(20_000), 0);
    }

    #[test]
    fn test_row_stride_is_aligned() {
        for width in 1..64 {
            assert_eq!(row_stride(width) % 4, 0);
            assert!(row_stride(width) >= width as u64 * 3);
        }
    }

    #[test]
    fn test_file_len() {
        // 51 px -> 153 + 3 padding = 156 bytes per row
        assert_eq!(row_stride(51), 156);
        assert_eq!(file_len(51, 102), 54 + 156 * 102);
    }

    #[test]
    fn test_file_len_at_limits() {
        // 20000x50000 is ~3 GiB and must not wrap
        assert_eq!(file_len(20_000, 50_000), 54 + 60_000u64 * 50_000);
    }

    #[test]
    fn test_pixel_offset() {
        let stride = row_stride(51);
        // bottom row (row = height-1) is stored first
        assert_eq!(pixel_offset(102, stride, 101, 0), 54);
        assert_eq!(pixel_offset(102, stride, 0, 0), 54 + 101 * stride);
        assert_eq!(pixel_offset(102, stride, 0, 7), 54 + 101 * stride + 21);
    }
}
