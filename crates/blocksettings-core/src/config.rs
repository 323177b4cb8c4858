use std::fs;
use std::path::{Path, PathBuf};

use flatrecord::Word;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::store::JsonFileStore;

/// Environment variable overriding the settings file location.
pub const STORE_ENV: &str = "BLOCKSETTINGS_STORE";

/// Configuration for the on-disk settings store.
///
/// Loadable from a JSON config file; every field is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON settings document.
    pub path: PathBuf,
    /// Value returned when reading a number that was never written.
    pub default_number: Word,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            default_number: 0,
        }
    }
}

impl StoreConfig {
    /// `<data dir>/blocksettings/settings.json`, or `./settings.json` on
    /// platforms without a data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("blocksettings").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(CoreError::io(path))?;
        serde_json::from_str(&text).map_err(CoreError::json(path))
    }

    /// Apply overrides in precedence order: an explicit path beats
    /// [`STORE_ENV`], which beats the configured path.
    pub fn with_overrides(mut self, store_path: Option<PathBuf>, env_path: Option<PathBuf>) -> Self {
        if let Some(path) = store_path.or(env_path) {
            self.path = path;
        }
        self
    }

    /// Open the configured store.
    pub fn open(&self) -> Result<JsonFileStore> {
        JsonFileStore::open(&self.path, self.default_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_in_settings_json() {
        let config = StoreConfig::default();
        assert!(config.path.ends_with("settings.json"));
        assert_eq!(config.default_number, 0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"default_number": 5}"#).unwrap();
        assert_eq!(config.default_number, 5);
        assert_eq!(config.path, StoreConfig::default_path());
    }

    #[test]
    fn explicit_path_beats_env() {
        let config = StoreConfig::default().with_overrides(
            Some(PathBuf::from("cli.json")),
            Some(PathBuf::from("env.json")),
        );
        assert_eq!(config.path, PathBuf::from("cli.json"));

        let config = StoreConfig::default().with_overrides(None, Some(PathBuf::from("env.json")));
        assert_eq!(config.path, PathBuf::from("env.json"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"path": "/tmp/s.json", "default_number": -1}"#).unwrap();
        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.default_number, -1);
        assert!(matches!(
            StoreConfig::load(&dir.path().join("missing.json")),
            Err(CoreError::Io { .. })
        ));
    }
}
