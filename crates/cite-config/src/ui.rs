use std::env;

use cite_types::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Script selected at startup
    #[serde(default)]
    pub default_language: Language,
}

impl UiConfig {
    pub fn new() -> Self {
        let default_language = env::var("ISBN_CITE_LANG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { default_language }
    }
}
