use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file must carry.
pub const REQUIRED_KEYS: &[&str] = &["database", "default_department", "separator_char"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_department")]
    pub default_department: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_department() -> String {
    "Other".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_department: default_department(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rweekreport")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rweekreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rweekreport.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rweekreport.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist yet.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "cannot read {}: {e}\nFix the file permissions or run `rweekreport init`.",
                path.display()
            ))
        })?;

        let mut cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!(
                "cannot parse {}: {e}\nRun `rweekreport config --edit` or delete it and run `rweekreport init`.",
                path.display()
            ))
        })?;

        if cfg.database.trim().is_empty() {
            return Err(AppError::Config(format!(
                "`database` is empty in {}; set it to the SQLite file path.",
                path.display()
            )));
        }

        cfg.database = expand_tilde(cfg.database.trim())
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    /// First character of `separator_char`, used for table rules.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Keys from [`REQUIRED_KEYS`] absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        let mapping = value.as_mapping();
        Ok(REQUIRED_KEYS
            .iter()
            .filter(|k| mapping.is_none_or(|m| !m.contains_key(**k)))
            .copied()
            .collect())
    }

    /// Resolve a `--db` value: `~` is expanded and a relative path lives in
    /// the configuration directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name.trim());
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the configuration directory, the configuration file and the
    /// parent directory of `db_path`; returns the database path.
    pub fn init_all(db_path: &Path, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let db_path = db_path.to_path_buf();

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
