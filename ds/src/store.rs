//! File-backed document store
//!
//! One JSON file per record under `base_dir/{collection}/{id}.json`.
//! Saves go through a temp file plus atomic rename with an fsync before
//! the rename, so readers only ever observe complete records.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::record::Record;

/// A handle to a document store rooted at a base directory
#[derive(Debug, Clone)]
pub struct Store {
    base_dir: PathBuf,
}

impl Store {
    /// Open a store at the given base directory, creating it if needed
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        debug!(base_dir = %base_dir.display(), "open: called");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// The base directory this store is rooted at
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create a new record; fails with `Conflict` if the id is taken
    pub fn create<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        debug!(collection = T::collection_name(), id = record.id(), "create: called");
        let path = self.record_path::<T>(record.id())?;
        if path.exists() {
            return Err(StoreError::Conflict {
                collection: T::collection_name(),
                id: record.id().to_string(),
            });
        }
        self.write_atomic(&path, record)
    }

    /// Get a record by id; `None` if it does not exist
    pub fn get<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError> {
        debug!(collection = T::collection_name(), %id, "get: called");
        let path = self.record_path::<T>(id)?;
        if !path.exists() {
            debug!(%id, "get: not found");
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let record = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    /// Save a record, creating or replacing it (upsert)
    pub fn save<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        debug!(collection = T::collection_name(), id = record.id(), "save: called");
        let path = self.record_path::<T>(record.id())?;
        self.write_atomic(&path, record)
    }

    /// Delete a record by id; deleting a missing record is a no-op
    pub fn delete<T: Record>(&self, id: &str) -> Result<(), StoreError> {
        debug!(collection = T::collection_name(), %id, "delete: called");
        let path = self.record_path::<T>(id)?;
        if path.exists() {
            fs::remove_file(&path)?;
        } else {
            debug!(%id, "delete: already absent");
        }
        Ok(())
    }

    /// List all records in a collection, newest-first by `updated_at`
    ///
    /// Unparseable files are skipped with a warning rather than failing
    /// the whole listing.
    pub fn list<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        debug!(collection = T::collection_name(), "list: called");
        let dir = self.base_dir.join(T::collection_name());
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<T>(&content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "list: skipping unparseable record");
                }
            }
        }

        crate::record::sort_newest_first(&mut records);
        Ok(records)
    }

    /// Resolve the file path for a record id, rejecting ids that would
    /// escape the collection directory
    fn record_path<T: Record>(&self, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self
            .base_dir
            .join(T::collection_name())
            .join(format!("{id}.json")))
    }

    /// Serialize and write a record via temp file + fsync + atomic rename
    fn write_atomic<T: Record>(&self, path: &Path, record: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut file = File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
