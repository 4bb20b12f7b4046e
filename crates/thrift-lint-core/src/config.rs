//! Project configuration for thrift-lint.

use crate::ast::NodeKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level project configuration, read from `thrift-lint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Standard to apply: `default` or a path to a standard file.
    #[serde(default)]
    pub standard: Option<String>,

    /// Check ID prefixes to disable for the whole run.
    #[serde(default)]
    pub disable: Vec<String>,

    /// Report errors only.
    #[serde(default)]
    pub errors_only: bool,

    /// Directories searched for includes before the including file's own.
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Annotations accepted by the `annotations` check.
    #[serde(default)]
    pub annotations: Vec<AnnotationPatternConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// An annotation allowed on some node kinds, with the values it accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationPatternConfig {
    /// Node kinds the annotation may appear on.
    pub nodes: Vec<NodeKind>,
    /// Annotation name.
    pub annotation: String,
    /// Regular expression the whole value must match.
    #[serde(default = "any_value")]
    pub regex: String,
}

fn any_value() -> String {
    ".*".to_string()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.standard.is_none());
        assert!(config.disable.is_empty());
        assert!(!config.errors_only);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
standard = "standards/strict.yaml"
disable = ["naming", "field.order"]
errors_only = true
include_dirs = ["idl", "vendor/idl"]

[[annotations]]
nodes = ["struct", "field"]
annotation = "go.tag"

[[annotations]]
nodes = ["enum.value"]
annotation = "deprecated"
regex = "true|false"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.standard.as_deref(), Some("standards/strict.yaml"));
        assert_eq!(config.disable, vec!["naming", "field.order"]);
        assert!(config.errors_only);
        assert_eq!(
            config.include_dirs,
            vec![PathBuf::from("idl"), PathBuf::from("vendor/idl")]
        );
        assert_eq!(config.annotations.len(), 2);
        assert_eq!(config.annotations[0].nodes, vec![NodeKind::Struct, NodeKind::Field]);
        assert_eq!(config.annotations[0].regex, ".*");
        assert_eq!(config.annotations[1].nodes, vec![NodeKind::EnumValue]);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("disable = 3"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
