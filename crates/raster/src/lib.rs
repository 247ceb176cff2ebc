//! Chartis windowed raster codec - streaming access to huge on-disk canvases
//!
//! This crate provides the core types for reading and writing rectangular
//! fragments of very large uncompressed bitmap files:
//! - [`canvas::Canvas`] - A handle to one on-disk canvas (allocate / delete)
//! - [`rect::FragmentRect`] - A fragment rectangle addressed against a canvas
//! - [`geometry`] - Row stride, padding and byte-offset arithmetic
//! - [`header`] - The fixed 54-byte bitmap header
//! - [`fragment`] - Windowed fragment writer and reader
//!
//! A canvas is never held in memory as a whole; every operation streams
//! through the backing file a few rows at a time.

pub mod canvas;
pub mod constants;
pub mod error;
pub mod fragment;
pub mod geometry;
pub mod header;
pub mod rect;

pub use canvas::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use header::*;
pub use rect::*;
