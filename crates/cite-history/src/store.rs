use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

/// A single named slot holding the serialized history
pub trait HistoryStore: Send + Sync {
    /// Slot contents, `None` if nothing was ever written or it was removed
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot contents
    fn write(&self, contents: &str) -> Result<()>;

    /// Remove the slot
    fn remove(&self) -> Result<()>;
}

/// Slot stored as a file on disk
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }
}

/// In-memory slot
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // The slot is a plain string; a poisoned lock still holds valid data
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HistoryStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.slot() = Some(contents.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}
