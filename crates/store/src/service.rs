//! The service facade: canvas operations addressed by id.

use std::io::Read;

use config::StorageConfig;
use raster::{Canvas, FragmentRect};
use uuid::Uuid;

use crate::error::StoreError;
use crate::registry::CanvasRegistry;
use crate::validation::{validate_dimensions, validate_fragment};

/// Create, mutate, read and delete canvases by id.
///
/// Owns the metadata registry and the storage configuration; all pixel work
/// is delegated to the codec. Operations on distinct canvases are
/// independent; concurrent writers on the same canvas are not serialized
/// here, so callers with competing clients must add their own per-canvas
/// exclusion.
pub struct CanvasStore {
    config: StorageConfig,
    registry: CanvasRegistry,
}

impl CanvasStore {
    /// Create a store over an empty registry.
    ///
    /// The storage root is created if it does not exist yet.
    pub fn new(config: StorageConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(config.root())?;
        Ok(Self {
            config,
            registry: CanvasRegistry::new(),
        })
    }

    /// Create a store whose registry is rebuilt from its JSON snapshot.
    pub fn restore(config: StorageConfig) -> Result<Self, StoreError> {
        let registry = CanvasRegistry::restore_from(&config.registry_path())?;
        Ok(Self { config, registry })
    }

    /// Write the registry snapshot next to the canvas files.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.registry.snapshot_to(&self.config.registry_path())
    }

    /// Create a new zero-filled canvas and return its id.
    ///
    /// The metadata record is written first; if allocation then fails the
    /// record is rolled back and the storage error surfaces, so a failed
    /// create never leaves a registered canvas behind.
    pub fn create(&self, width: u32, height: u32) -> Result<u64, StoreError> {
        validate_dimensions(
            width,
            height,
            self.config.max_canvas_width,
            self.config.max_canvas_height,
        )?;

        let file_name = format!("{}.bmp", Uuid::new_v4());
        let id = self.registry.insert(file_name.clone(), width, height);
        let path = self.config.canvas_path(&file_name);
        if let Err(err) = Canvas::allocate(&path, width, height) {
            tracing::warn!(id, error = %err, "allocation failed, rolling back canvas record");
            self.registry.remove(id);
            return Err(err.into());
        }

        tracing::debug!(id, width, height, "created canvas");
        Ok(id)
    }

    /// Merge a fragment bitmap stream into a canvas.
    pub fn write_fragment<R: Read>(
        &self,
        id: u64,
        rect: FragmentRect,
        fragment: R,
    ) -> Result<(), StoreError> {
        let canvas = self.canvas(id)?;
        validate_fragment(
            &rect,
            canvas.width(),
            canvas.height(),
            self.config.max_canvas_width,
            self.config.max_canvas_height,
        )?;
        canvas.write_fragment(rect, fragment)?;
        Ok(())
    }

    /// Extract a fragment of a canvas as a self-contained bitmap.
    pub fn read_fragment(&self, id: u64, rect: FragmentRect) -> Result<Vec<u8>, StoreError> {
        let canvas = self.canvas(id)?;
        validate_fragment(
            &rect,
            canvas.width(),
            canvas.height(),
            self.config.max_read_width,
            self.config.max_read_height,
        )?;
        Ok(canvas.read_fragment(rect)?)
    }

    /// Remove a canvas and its backing file.
    ///
    /// Returns whether both the record and the file existed; an unknown id or
    /// an already-deleted file yields `false`, never an error.
    pub fn delete(&self, id: u64) -> bool {
        let Some(record) = self.registry.remove(id) else {
            return false;
        };
        let path = self.config.canvas_path(&record.file_name);
        Canvas::open(path, record.width, record.height).delete()
    }

    /// The metadata registry, for enumeration and snapshotting.
    pub fn registry(&self) -> &CanvasRegistry {
        &self.registry
    }

    fn canvas(&self, id: u64) -> Result<Canvas, StoreError> {
        let record = self.registry.get(id).ok_or(StoreError::NotFound(id))?;
        Ok(Canvas::open(
            self.config.canvas_path(&record.file_name),
            record.width,
            record.height,
        ))
    }
}
