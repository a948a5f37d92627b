use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::lookup::LookupConfig;
use self::ui::UiConfig;

pub mod history;
pub mod lookup;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub history: HistoryConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
            history: HistoryConfig::new(),
            ui: UiConfig::new(),
        }
    }
}
