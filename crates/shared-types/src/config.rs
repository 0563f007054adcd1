use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::labels::HeaderLabels;

/// Top-level UI config file structure (`folio.toml`).
///
/// An empty document is valid and yields the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub labels: HeaderLabels,
}

impl UiConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.labels.back, "Back");
    }

    #[test]
    fn empty_labels_table_keeps_default_back() {
        let config = UiConfig::from_toml_str("[labels]\n").unwrap();
        assert_eq!(config.labels.back, "Back");
    }

    #[test]
    fn labels_table_overrides_back() {
        let config = UiConfig::from_toml_str(
            r#"
            [labels]
            back = "Retour"
            "#,
        )
        .unwrap();
        assert_eq!(config.labels.back, "Retour");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = UiConfig::from_toml_str("[labels\nback = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid UI config"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = UiConfig::load("/nonexistent/folio.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "/nonexistent/folio.toml"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
