//! The fixed 54-byte uncompressed-bitmap header.

use bytemuck::{Pod, Zeroable};

use crate::constants::HEADER_LEN;
use crate::geometry::{file_len, pixel_data_len};

/// Signature bytes at the start of every canvas file.
pub const SIGNATURE: [u8; 2] = *b"BM";

const PIXEL_DATA_OFFSET: u32 = 0x36;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Everything after the two signature bytes, laid out exactly as stored.
///
/// All fields are naturally aligned, so the struct has no padding and can be
/// cast straight to bytes with bytemuck.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct HeaderFields {
    /// Total file length in bytes.
    file_len: u32,
    /// Reserved, must be zero.
    reserved: [u16; 2],
    /// Offset to the start of pixel data.
    pixel_data_offset: u32,
    /// Info-header length, must be 40.
    info_header_len: u32,
    /// Image width in pixels.
    width: i32,
    /// Image height in pixels; positive = bottom-up row order.
    height: i32,
    /// Number of planes, must be 1.
    planes: u16,
    /// Bits per pixel; always 24 here.
    bits_per_pixel: u16,
    /// Compression type; always 0 (none).
    compression: u32,
    /// Pixel-data length in bytes, padding included.
    pixel_data_len: u32,
    /// Horizontal resolution in pixels per meter (unused).
    x_pixels_per_meter: i32,
    /// Vertical resolution in pixels per meter (unused).
    y_pixels_per_meter: i32,
    /// Number of colors in the color table, zero for 24-bit.
    colors_used: u32,
    /// Number of important colors, or zero.
    colors_important: u32,
}

/// Build the header for a `width x height` canvas or fragment.
///
/// Pure function; every call returns a fresh buffer. Heights are always
/// written positive since all storage here is bottom-up.
pub fn encode_header(width: u32, height: u32) -> [u8; HEADER_LEN] {
    let fields = HeaderFields {
        file_len: file_len(width, height) as u32,
        reserved: [0, 0],
        pixel_data_offset: PIXEL_DATA_OFFSET,
        info_header_len: INFO_HEADER_LEN,
        width: width as i32,
        height: height as i32,
        planes: 1,
        bits_per_pixel: BITS_PER_PIXEL,
        compression: 0,
        pixel_data_len: pixel_data_len(width, height) as u32,
        x_pixels_per_meter: 0,
        y_pixels_per_meter: 0,
        colors_used: 0,
        colors_important: 0,
    };

    let mut header = [0u8; HEADER_LEN];
    header[..2].copy_from_slice(&SIGNATURE);
    header[2..].copy_from_slice(bytemuck::bytes_of(&fields));
    header
}
