use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_user_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "environmental_data.json";
const CONFIG_FILE_NAME: &str = "ecotracker.conf";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "=".to_string()
}
fn default_wrap_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            separator_char: default_separator_char(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// `~/.ecotracker`, or `./.ecotracker` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ecotracker")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join(DATA_FILE_NAME)
    }

    /// Resolved path of the activity document.
    pub fn data_path(&self) -> PathBuf {
        resolve_user_path(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load the configuration at `path`; defaults when the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Parse YAML content; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and file (unless `is_test`).
    /// A custom data file, when given, is recorded in the written config.
    pub fn init_all(custom_data_file: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();
        if let Some(custom) = custom_data_file {
            config.data_file = resolve_user_path(custom).to_string_lossy().to_string();
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        Ok(config)
    }
}
