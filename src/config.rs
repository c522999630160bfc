use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "DEBUG_LOG_HELPER_CONFIG";
const CONFIG_DIR: &str = "debug-log-helper";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directories requests may touch. Empty allows any path the process can reach.
    pub allowed_roots: Vec<String>,
    pub create_parent_dirs: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_roots: Vec::new(),
            create_parent_dirs: true,
            log_level: "warn".to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)),
    }
}

/// Loads settings from `path`; a file that does not exist yields the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
