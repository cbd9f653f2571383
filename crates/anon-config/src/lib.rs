use anon_core::AnonTask;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults for the anonymize command; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Placeholder template, must contain one `{id}` field
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub tasks: Vec<AnonTask>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            lang: None,
            countries: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

fn default_template() -> String {
    "<{id}>".to_string()
}

impl Config {
    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "text-anonymizer", "anonymize")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template, "<{id}>");
        assert!(config.lang.is_none());
        assert!(config.countries.is_empty());
        assert!(config.tasks.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            lang: Some("es".to_string()),
            countries: vec!["es".to_string()],
            tasks: vec![AnonTask::BankAccount, AnonTask::GovId],
            ..Config::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("BANK_ACCOUNT"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lang = \"es\"").unwrap();
        writeln!(file, "tasks = [\"CREDIT_CARD\"]").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.lang.as_deref(), Some("es"));
        assert_eq!(config.tasks, vec![AnonTask::CreditCard]);
        assert_eq!(config.template, "<{id}>");
    }

    #[test]
    fn test_load_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tasks = [\"SHOE_SIZE\"]").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(&dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
