/// Total bitmap header length (14-byte file header + 40-byte info header).
pub const HEADER_LEN: usize = 54;

/// Bytes per stored pixel (B, G, R).
pub const BYTES_PER_PIXEL: u32 = 3;

/// Stored rows are padded to a multiple of this many bytes.
pub const ROW_ALIGN: u32 = 4;

/// Chunk size for streaming zero fill during allocation.
pub const ZERO_CHUNK_LEN: usize = 1024;
