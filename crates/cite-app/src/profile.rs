use std::fs;
use std::path::Path;

use anyhow::Context;
use cite_config::Config;
use cite_config::lookup::LookupConfig;
use serde::{Deserialize, Serialize};

/// Saved configuration under a name
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Config from a profile file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    read_profile(path, LookupConfig::new().api_key)
}

/// A profile without an API key falls back to `env_api_key`
fn read_profile(path: &Path, env_api_key: String) -> anyhow::Result<Config> {
    tracing::info!("Loading profile from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;

    tracing::info!("Using profile '{}'", profile.name);
    let mut config = profile.value;
    if config.lookup.api_key.is_empty() {
        config.lookup.api_key = env_api_key;
    }
    Ok(config)
}

/// Write the given config as a named profile
pub fn save_profile(path: &Path, name: &str, config: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write profile {}", path.display()))?;
    tracing::info!("Created profile: {name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use cite_types::Language;

    use super::*;

    #[test]
    fn loads_saved_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.json");

        let mut config = Config::default();
        config.lookup.model = "gemini-2.5-pro".to_string();
        config.ui.default_language = Language::TraditionalChinese;
        save_profile(&path, "main", config).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.lookup.model, "gemini-2.5-pro");
        assert_eq!(loaded.ui.default_language, Language::TraditionalChinese);
    }

    #[test]
    fn sparse_profile_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.json");
        fs::write(&path, r#"{"name":"sparse","value":{}}"#).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.lookup.timeout_seconds, 30);
    }

    #[test]
    fn saved_profile_omits_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.json");

        let mut config = Config::default();
        config.lookup.api_key = "sk-secret-123".to_string();
        save_profile(&path, "main", config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("sk-secret-123"));
        assert!(!written.contains("api_key"));
    }

    #[test]
    fn profile_without_key_uses_environment_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.json");
        fs::write(&path, r#"{"name":"sparse","value":{"lookup":{"model":"m"}}}"#).unwrap();

        let loaded = read_profile(&path, "sk-env".to_string()).unwrap();
        assert_eq!(loaded.lookup.api_key, "sk-env");
        assert_eq!(loaded.lookup.model, "m");
    }

    #[test]
    fn profile_key_wins_over_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyed.json");
        fs::write(
            &path,
            r#"{"name":"keyed","value":{"lookup":{"api_key":"sk-profile"}}}"#,
        )
        .unwrap();

        let loaded = read_profile(&path, "sk-env".to_string()).unwrap();
        assert_eq!(loaded.lookup.api_key, "sk-profile");
    }

    #[test]
    fn missing_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.json"))).is_err());
    }
}
