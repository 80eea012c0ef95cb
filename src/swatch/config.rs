//! # Configuration
//!
//! Settings live in `config.json` inside the swatch home directory. A missing
//! file means defaults.
//!
//! ```json
//! {
//!   "data_file": "colors.csv",
//!   "min_length": 3,
//!   "max_length": 100
//! }
//! ```
//!
//! Keys as seen from the command line: `data-file`, `min-length`,
//! `max-length`.

use crate::error::{Result, SwatchError};
use crate::validate::{ValidationRules, MAX_LENGTH, MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "colors.csv";

pub const KEYS: [&str; 3] = ["data-file", "min-length", "max-length"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchConfig {
    /// Data file location. Relative paths are resolved against the home dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    MIN_LENGTH
}

fn default_max_length() -> usize {
    MAX_LENGTH
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl SwatchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SwatchError::Io)?;
        let config: SwatchConfig =
            serde_json::from_str(&content).map_err(SwatchError::Serialization)?;
        if config.min_length > config.max_length {
            return Err(SwatchError::Store(format!(
                "{}: min_length ({}) cannot exceed max_length ({})",
                config_path.display(),
                config.min_length,
                config.max_length
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SwatchError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SwatchError::Serialization)?;
        fs::write(config_path, content).map_err(SwatchError::Io)?;
        Ok(())
    }

    /// Where the data file lives for a given home directory.
    pub fn data_file_in(&self, home: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => home.join(path),
            None => home.join(DEFAULT_DATA_FILE),
        }
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules::new(self.min_length, self.max_length)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            ),
            "min-length" => Some(self.min_length.to_string()),
            "max-length" => Some(self.max_length.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = Some(PathBuf::from(value));
            }
            "min-length" => {
                let n = parse_length(key, value)?;
                if n > self.max_length {
                    return Err(format!(
                        "min-length ({}) cannot exceed max-length ({})",
                        n, self.max_length
                    ));
                }
                self.min_length = n;
            }
            "max-length" => {
                let n = parse_length(key, value)?;
                if n < self.min_length {
                    return Err(format!(
                        "max-length ({}) cannot be below min-length ({})",
                        n, self.min_length
                    ));
                }
                self.max_length = n;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

fn parse_length(key: &str, value: &str) -> std::result::Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a non-negative integer, got `{}`", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SwatchConfig::default();
        assert_eq!(config.min_length, 3);
        assert_eq!(config.max_length, 100);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = SwatchConfig::load(dir.path()).unwrap();
        assert_eq!(config, SwatchConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");

        let mut config = SwatchConfig::default();
        config.set("max-length", "7").unwrap();
        config.set("data-file", "palette.csv").unwrap();
        config.save(&home).unwrap();

        let loaded = SwatchConfig::load(&home).unwrap();
        assert_eq!(loaded.max_length, 7);
        assert_eq!(loaded.data_file_in(&home), home.join("palette.csv"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max_length": 9}"#).unwrap();
        let config = SwatchConfig::load(dir.path()).unwrap();
        assert_eq!(config.min_length, 3);
        assert_eq!(config.max_length, 9);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            SwatchConfig::load(dir.path()),
            Err(SwatchError::Serialization(_))
        ));
    }

    #[test]
    fn test_crossed_bounds_in_file_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"min_length": 10, "max_length": 4}"#,
        )
        .unwrap();
        assert!(matches!(
            SwatchConfig::load(dir.path()),
            Err(SwatchError::Store(_))
        ));
    }

    #[test]
    fn test_data_file_resolution() {
        let home = Path::new("/home/swatch");
        let mut config = SwatchConfig::default();
        assert_eq!(config.data_file_in(home), home.join("colors.csv"));

        config.data_file = Some(PathBuf::from("/var/lib/colors.csv"));
        assert_eq!(
            config.data_file_in(home),
            PathBuf::from("/var/lib/colors.csv")
        );
    }

    #[test]
    fn test_set_rejects_crossed_bounds() {
        let mut config = SwatchConfig::default();
        assert!(config.set("min-length", "101").is_err());
        assert!(config.set("max-length", "2").is_err());
        assert!(config.set("max-length", "ten").is_err());
        assert!(config.set("colour", "x").is_err());
        assert_eq!(config, SwatchConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = SwatchConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(config.get("data-file").as_deref(), Some("colors.csv"));
        assert_eq!(config.get("nope"), None);
    }
}
