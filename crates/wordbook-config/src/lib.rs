use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not readable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Defaults, overridden by environment variables
    pub fn new() -> Self {
        let log_filter = env::var("WORDBOOK_LOG").unwrap_or_else(|_| default_log_filter());

        Config {
            dictionary: DictionaryConfig::new(),
            log_filter,
        }
    }

    /// Load a JSON config; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dictionary.part_of_speech_marker, "|");
        assert_eq!(config.dictionary.definition_marker, "-=>>");
        assert_eq!(config.dictionary.uppercase_prefix, "csc");
        assert_eq!(config.dictionary.data_path, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "dictionary": {{ "data_path": "data.txt", "definition_marker": "=>" }} }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary.data_path.as_deref(), Some("data.txt"));
        assert_eq!(config.dictionary.definition_marker, "=>");
        assert_eq!(config.dictionary.part_of_speech_marker, "|");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
