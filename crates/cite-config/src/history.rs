use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const HISTORY_FILE: &str = "isbn_history.json";

/// `<data dir>/isbn-cite/isbn_history.json`, or the working directory if
/// the platform has no data dir
fn default_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("isbn-cite").join(HISTORY_FILE),
        None => PathBuf::from(HISTORY_FILE),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// File holding the serialized history list
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let path = env::var("ISBN_CITE_HISTORY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
