use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

pub const DEFAULT_INPUT: &str = "vocabulary.docx";
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Default paths and format for docx-wordlist
///
/// Command line arguments always take precedence over these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document read when no input is given
    pub input: PathBuf,
    /// Word list written when no output is given
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load config from the config directory
    ///
    /// A missing or unreadable user config falls back to the defaults.
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) if config_path.exists() => Self::load_or_default(&config_path),
            _ => Config::default(),
        }
    }

    /// Load config from `path`, warning and using defaults if it can't be read
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config {}: {e:#}", path.display());
            Config::default()
        })
    }

    /// Load config from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx-wordlist").join("config.toml"))
    }

    /// Initialize default config file, returning where it was written
    pub fn init_default(path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
        };

        Config::default().save_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("vocabulary.docx"));
        assert_eq!(config.output, PathBuf::from("wordlist.txt"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("output = \"words.json\"\nformat = \"json\"\n").unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("words.json"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            input: PathBuf::from("lesson1.docx"),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_init_default_at_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let written = Config::init_default(Some(path.as_path())).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_user_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = [").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
