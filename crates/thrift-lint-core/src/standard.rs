//! Coding standards: which checks run and how each one is configured.
//!
//! A standard document lists check IDs under `linters`, each mapped to an
//! opaque payload handed to [`Check::configure`](crate::Check::configure):
//!
//! ```yaml
//! linters:
//!   optional:
//!   naming:
//!     matches:
//!       struct: upperCamel
//!     blacklist: [class]
//! ```

use crate::check::ConfigureError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name selecting the built-in default standard.
pub const DEFAULT_STANDARD: &str = "default";

/// Errors raised while loading or applying a standard.
#[derive(Debug, Error)]
pub enum StandardError {
    /// The standard file could not be read.
    #[error("Failed to read standard {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("Failed to parse standard: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid TOML.
    #[error("Failed to parse standard: {0}")]
    Toml(#[from] toml::de::Error),

    /// A check rejected its payload.
    #[error("Failed to configure {id}: {source}")]
    Configure {
        /// ID of the check.
        id: String,
        /// Error returned by the check.
        source: ConfigureError,
    },

    /// A document standard was applied twice to the same registry.
    #[error("Checks are already configured by a standard")]
    AlreadyConfigured,
}

/// The body of a standard file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardDocument {
    /// Enabled check IDs and their payloads.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linters: BTreeMap<String, serde_json::Value>,
}

/// Reads an explicit null (`linters: ~`) as an empty map.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A coding standard.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Standard {
    /// Every registered check, unconfigured.
    #[default]
    Default,
    /// Only the listed checks, each configured with its payload.
    Document(StandardDocument),
}

impl Standard {
    /// Loads a standard by name or path.
    ///
    /// [`DEFAULT_STANDARD`] selects [`Standard::Default`]. Anything else is
    /// read as a file: TOML when it ends in `.toml`, YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(name_or_path: &str) -> Result<Self, StandardError> {
        if name_or_path == DEFAULT_STANDARD {
            return Ok(Self::Default);
        }

        let path = Path::new(name_or_path);
        debug!("Loading standard from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| StandardError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parses a YAML standard document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self, StandardError> {
        Ok(Self::Document(serde_yaml::from_str(content)?))
    }

    /// Parses a TOML standard document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, StandardError> {
        Ok(Self::Document(toml::from_str(content)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_name_needs_no_file() {
        assert_eq!(Standard::load("default").unwrap(), Standard::Default);
    }

    #[test]
    fn yaml_document_keeps_payloads() {
        let standard = Standard::from_yaml(
            r"
linters:
  optional:
  naming:
    blacklist: [class]
",
        )
        .unwrap();

        let Standard::Document(document) = standard else {
            panic!("expected a document");
        };
        assert_eq!(document.linters.len(), 2);
        assert!(document.linters["optional"].is_null());
        assert_eq!(
            document.linters["naming"],
            serde_json::json!({"blacklist": ["class"]})
        );
    }

    #[test]
    fn empty_yaml_document_enables_nothing() {
        let standard = Standard::from_yaml("linters: {}").unwrap();
        assert_eq!(standard, Standard::Document(StandardDocument::default()));
    }

    #[test]
    fn null_linters_enable_nothing() {
        let standard = Standard::from_yaml("linters: ~").unwrap();
        assert_eq!(standard, Standard::Document(StandardDocument::default()));
        let standard = Standard::from_yaml("{}").unwrap();
        assert_eq!(standard, Standard::Document(StandardDocument::default()));
    }

    #[test]
    fn toml_is_chosen_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[linters.enum]\n[linters.naming]\nblacklist = [\"int\"]").unwrap();

        let standard = Standard::load(file.path().to_str().unwrap()).unwrap();
        let Standard::Document(document) = standard else {
            panic!("expected a document");
        };
        assert_eq!(
            document.linters.keys().collect::<Vec<_>>(),
            vec!["enum", "naming"]
        );
        assert_eq!(document.linters["naming"]["blacklist"][0], "int");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Standard::load("/nonexistent/standard.yaml"),
            Err(StandardError::Io { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            Standard::from_yaml("linters: [unclosed"),
            Err(StandardError::Yaml(_))
        ));
    }
}
