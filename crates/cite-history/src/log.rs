use anyhow::{Context, Result};
use cite_types::HistoryEntry;

use crate::store::HistoryStore;

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// Past lookups, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the log from the store.
    ///
    /// A missing slot, unreadable slot or corrupt JSON all yield an empty log.
    pub fn load(store: &dyn HistoryStore) -> Self {
        let data = match store.read() {
            Ok(Some(data)) => data,
            Ok(None) => return Self::new(),
            Err(e) => {
                tracing::warn!("Failed to read history, starting empty: {:#}", e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&data) {
            Ok(mut entries) => {
                entries.truncate(HISTORY_CAPACITY);
                tracing::debug!("Loaded {} history entries", entries.len());
                Self { entries }
            }
            Err(e) => {
                tracing::warn!("Failed to parse history, starting empty: {}", e);
                Self::new()
            }
        }
    }

    /// Write the whole log to the store
    pub fn save(&self, store: &dyn HistoryStore) -> Result<()> {
        let data =
            serde_json::to_string(&self.entries).context("Failed to serialize history")?;
        store.write(&data)
    }

    /// Prepend an entry, evicting the oldest beyond capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Entry by position, 0 being the most recent
    pub fn nth(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
