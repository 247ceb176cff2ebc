//! Chartis canvas store - metadata, validation and the service facade
//!
//! This crate wraps the raw codec in [`raster`] with everything a calling
//! transport layer needs:
//! - [`registry::CanvasRegistry`] - Thread-safe id-to-record metadata store
//! - [`validation`] - Request parameter checks performed before any I/O
//! - [`service::CanvasStore`] - Create / write / read / delete over canvas ids

pub mod error;
pub mod registry;
pub mod service;
pub mod validation;

pub use error::*;
pub use registry::*;
pub use service::*;
pub use validation::*;
