use crate::core::scheduler::Priority;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::app_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub default_priority: Priority,
    #[serde(default = "default_session_minutes")]
    pub default_session_minutes: u32,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_show_colors")]
    pub show_colors: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_session_minutes() -> u32 {
    60
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_show_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_priority: Priority::default(),
            default_session_minutes: default_session_minutes(),
            export_dir: default_export_dir(),
            show_colors: default_show_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rweekplan.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rweekplan.sqlite")
    }

    /// Load configuration from file, or return defaults if missing.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` (from `--db`) replaces the default database path. In test
    /// mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = custom_db
            .map(PathBuf::from)
            .unwrap_or_else(Self::database_file);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::load()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
