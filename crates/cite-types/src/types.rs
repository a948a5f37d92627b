use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::BookRecord;

/// One successful lookup as kept in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: String,
    /// Milliseconds since the Unix epoch
    timestamp: i64,
    data: BookRecord,
    language: Language,
}

impl HistoryEntry {
    pub fn new(id: String, timestamp: i64, data: BookRecord, language: Language) -> Self {
        Self {
            id,
            timestamp,
            data,
            language,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn record(&self) -> &BookRecord {
        &self.data
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
