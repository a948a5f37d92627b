use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Settings for the generative model call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    // Secrets stay in the environment, never in a written profile
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .unwrap_or_default();

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            api_key,
            api_url,
            model,
            timeout_seconds,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
