//! Raw config types matching the JSON config file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_TEMPLATES_DIR: &str = "app/views/api_responser";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Locale used when none is chosen, and the last step of every fallback chain.
    pub default_locale: String,
    /// Extra `<tag>.json` locale files, merged over the bundled tables.
    pub locales_dir: Option<PathBuf>,
    /// Host override directory for `success.json.hbs` / `error.json.hbs`.
    pub templates_dir: PathBuf,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }
}

impl ResponderConfig {
    /// Read config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
