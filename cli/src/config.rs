//! Optional TOML configuration file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `--config <file>`. Every field is optional; CLI flags
/// and environment variables override whatever the file provides.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Read and parse the file. Unreadable or malformed config falls back
    /// to defaults with a warning rather than aborting.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}, using CLI defaults", path.display());
                return None;
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_fields() {
        let config: FileConfig =
            toml::from_str("data_dir = \"/tmp/votes\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.data_dir.as_deref(), Some(Path::new("/tmp/votes")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn missing_file_is_none() {
        assert!(FileConfig::load(Path::new("/nonexistent/ballotbox.toml")).is_none());
    }
}
