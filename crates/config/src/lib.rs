//! Shared configuration for Chartis
//!
//! This crate provides the single source of truth for canvas size limits and
//! the on-disk storage layout shared by the codec and the store layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Largest canvas width a create or write request may declare.
pub const MAX_CANVAS_WIDTH: u32 = 20_000;

/// Largest canvas height a create or write request may declare.
pub const MAX_CANVAS_HEIGHT: u32 = 50_000;

/// Largest fragment width a read request may declare.
pub const MAX_READ_WIDTH: u32 = 5_000;

/// Largest fragment height a read request may declare.
pub const MAX_READ_HEIGHT: u32 = 5_000;

/// Default directory for canvas backing files.
pub const DEFAULT_ROOT: &str = "canvases";

/// File name of the registry snapshot inside the storage root.
pub const REGISTRY_FILE: &str = "canvases.json";

/// Storage configuration for canvas files and request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one backing file per canvas
    pub root: PathBuf,
    /// Maximum canvas / write-fragment width in pixels
    pub max_canvas_width: u32,
    /// Maximum canvas / write-fragment height in pixels
    pub max_canvas_height: u32,
    /// Maximum read-fragment width in pixels
    pub max_read_width: u32,
    /// Maximum read-fragment height in pixels
    pub max_read_height: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            max_canvas_width: MAX_CANVAS_WIDTH,
            max_canvas_height: MAX_CANVAS_HEIGHT,
            max_read_width: MAX_READ_WIDTH,
            max_read_height: MAX_READ_HEIGHT,
        }
    }
}

impl StorageConfig {
    /// Create a config with the given storage root and default limits
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Full path of a canvas backing file inside the storage root
    pub fn canvas_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Full path of the registry snapshot file
    pub fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    /// Storage root as a borrowed path
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.max_canvas_width, MAX_CANVAS_WIDTH);
        assert_eq!(config.max_canvas_height, MAX_CANVAS_HEIGHT);
        assert_eq!(config.max_read_width, MAX_READ_WIDTH);
        assert_eq!(config.max_read_height, MAX_READ_HEIGHT);
    }

    #[test]
    fn test_paths() {
        let config = StorageConfig::new("/tmp/chartis");
        assert_eq!(
            config.canvas_path("a.bmp"),
            PathBuf::from("/tmp/chartis/a.bmp")
        );
        assert_eq!(
            config.registry_path(),
            PathBuf::from("/tmp/chartis/canvases.json")
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = StorageConfig::new("data");
        let json = serde_json::to_string(&config).unwrap();
        let back: StorageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.root, config.root);
        assert_eq!(back.max_read_width, config.max_read_width);
    }
}
