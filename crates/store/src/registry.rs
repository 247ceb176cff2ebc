//! Thread-safe metadata registry for canvases.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Metadata for one canvas: where it lives and its declared geometry.
///
/// Width and height are authoritative here, never re-derived from the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasRecord {
    pub id: u64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Thread-safe id-to-record store.
///
/// Uses interior mutability via RwLock to allow multiple readers or a single
/// writer; ids are allocated sequentially and never reused within a process.
#[derive(Debug, Default)]
pub struct CanvasRegistry {
    records: RwLock<HashMap<u64, CanvasRecord>>,
    next_id: AtomicU64,
}

impl CanvasRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new canvas and return its id.
    pub fn insert(&self, file_name: String, width: u32, height: u32) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = CanvasRecord {
            id,
            file_name,
            width,
            height,
        };
        let mut records = self.records.write().expect("CanvasRegistry lock poisoned");
        records.insert(id, record);
        id
    }

    /// Look up the record for a canvas id.
    pub fn get(&self, id: u64) -> Option<CanvasRecord> {
        let records = self.records.read().expect("CanvasRegistry lock poisoned");
        records.get(&id).cloned()
    }

    /// Remove and return the record for a canvas id.
    pub fn remove(&self, id: u64) -> Option<CanvasRecord> {
        let mut records = self.records.write().expect("CanvasRegistry lock poisoned");
        records.remove(&id)
    }

    /// All registered canvas ids.
    pub fn ids(&self) -> Vec<u64> {
        let records = self.records.read().expect("CanvasRegistry lock poisoned");
        records.keys().copied().collect()
    }

    /// Number of registered canvases.
    pub fn len(&self) -> usize {
        let records = self.records.read().expect("CanvasRegistry lock poisoned");
        records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write all records to a JSON snapshot file.
    pub fn snapshot_to(&self, path: &Path) -> Result<(), StoreError> {
        let records = self.records.read().expect("CanvasRegistry lock poisoned");
        let mut ordered: Vec<&CanvasRecord> = records.values().collect();
        ordered.sort_by_key(|record| record.id);
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &ordered)?;
        Ok(())
    }

    /// Rebuild a registry from a JSON snapshot file.
    ///
    /// Id allocation resumes after the highest id in the snapshot.
    pub fn restore_from(path: &Path) -> Result<Self, StoreError> {
        let file = BufReader::new(File::open(path)?);
        let restored: Vec<CanvasRecord> = serde_json::from_reader(file)?;
        let next_id = restored.iter().map(|record| record.id).max().unwrap_or(0);
        let records = restored
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Ok(Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(next_id),
        })
    }
}
