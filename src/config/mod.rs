use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Names shown on the kiosk when the config file does not list any.
pub const DEFAULT_EMPLOYEES: [&str; 5] = ["กุ๊ก", "เจี๊ยบ", "บี", "จอย", "ภู"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_employees")]
    pub employees: Vec<String>,
    #[serde(default = "default_recent_entries")]
    pub recent_entries: usize,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_employees() -> Vec<String> {
    DEFAULT_EMPLOYEES.iter().map(|s| s.to_string()).collect()
}
fn default_recent_entries() -> usize {
    10
}
fn default_time_format() -> String {
    "%d/%m/%Y %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            employees: default_employees(),
            recent_entries: default_recent_entries(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rkiosk")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rkiosk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rkiosk.conf")
    }

    /// Return the full path of the store database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rkiosk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Resolve a user-supplied database name: relative names live in the
    /// config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() || name == ":memory:" {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration file and config directory.
    ///
    /// Returns the configuration that was (or, in test mode, would have been)
    /// written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let database = match custom_db {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/k.sqlite\n").unwrap();
        assert_eq!(cfg.employees.len(), 5);
        assert_eq!(cfg.recent_entries, 10);
        assert!(cfg.employees.iter().any(|e| e == "จอย"));
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let path = env::temp_dir().join("rkiosk_no_such_config.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.time_format, default_time_format());
    }

    #[test]
    fn custom_roster_is_read() {
        let path = env::temp_dir().join("rkiosk_custom_roster.conf");
        fs::write(
            &path,
            "database: /tmp/x.sqlite\nemployees:\n  - Ann\n  - Bob\nrecent_entries: 3\n",
        )
        .unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.employees, vec!["Ann".to_string(), "Bob".to_string()]);
        assert_eq!(cfg.recent_entries, 3);
        fs::remove_file(&path).ok();
    }
}
