//! JSON-file-backed key-value store with atomic writes
//!
//! The whole namespace lives in a single JSON object file. Every mutation
//! rewrites the file through a temp-file-and-rename sequence so the file is
//! either completely written or not modified at all, preventing corruption
//! on crashes or power failures.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

use super::kv::KeyValueStore;

/// Key-value store persisted to a single JSON file
///
/// A `BTreeMap` keeps the on-disk key order stable across rewrites, which
/// keeps diffs of the store file readable.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store file, failing if an existing file cannot be parsed
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let entries = match read_entries(&path)? {
            Some(entries) => entries,
            None => BTreeMap::new(),
        };
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Open a store file, starting empty if an existing file cannot be parsed
    pub fn open_or_default(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(Some(entries)) => entries,
            Ok(None) => BTreeMap::new(),
            Err(CoreError::CorruptState(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> CoreResult<()> {
        let entries = self.entries.borrow();
        write_entries_atomic(&self.path, &entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            self.persist()?;
        }
        Ok(())
    }
}

/// Read the store file. `Ok(None)` means the file does not exist;
/// `CoreError::CorruptState` means it exists but is not a JSON string map.
fn read_entries(path: &Path) -> CoreResult<Option<BTreeMap<String, String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| CoreError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let entries = serde_json::from_reader(reader)
        .map_err(|e| CoreError::CorruptState(format!("{}: {}", path.display(), e)))?;

    Ok(Some(entries))
}

/// Write the store file atomically (write to temp, fsync, then rename)
fn write_entries_atomic(path: &Path, entries: &BTreeMap<String, String>) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CoreError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (required for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| CoreError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)
        .map_err(|e| CoreError::Storage(format!("Failed to serialize store: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CoreError::Storage(format!("Failed to flush store: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CoreError::Storage(format!("Failed to sync store: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CoreError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
