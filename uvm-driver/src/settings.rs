use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uvm::constants::DEFAULT_MEMORY_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// Indent JSON trace and result files
    pub pretty_json: bool,

    /// Memory cells given to the interpreter
    pub memory_size: usize,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            pretty_json: true,
            memory_size: DEFAULT_MEMORY_SIZE,
        }
    }
}

impl DriverSettings {
    /// Get the path to the settings file
    fn settings_path() -> PathBuf {
        if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(config_dir).join("uvm").join("settings.json")
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("uvm").join("settings.json")
        } else {
            PathBuf::from(".uvm_settings.json")
        }
    }

    /// Load settings from `path` (or the default location), falling back to
    /// defaults if the file is missing or unusable.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::settings_path);

        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => return settings,
                Err(e) => warn!("Failed to parse settings {}: {}", path.display(), e),
            },
            Err(e) => warn!("Failed to read settings {}: {}", path.display(), e),
        }

        Self::default()
    }
}
