//! Loading parsed Thrift files into a [`Forest`].

use crate::ast::{Forest, ThriftFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading sources.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A source could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A source is not a valid AST document.
    #[error("Parse error in {path}: {source}")]
    Json {
        /// Path of the offending source.
        path: PathBuf,
        /// Underlying decode error.
        source: serde_json::Error,
    },
}

/// Turns source paths into a forest of parsed files.
///
/// Parsing is all or nothing: an error for any source fails the whole call.
pub trait Parser {
    /// Parses `sources` and everything they need into one forest.
    ///
    /// # Errors
    ///
    /// Returns the first failure.
    fn parse(&self, sources: &[PathBuf]) -> Result<Forest, ParseError>;
}

/// Reads ASTs already parsed by an external Thrift front end, stored as JSON.
///
/// Each source holds one [`ThriftFile`] object or an array of them. A file
/// with an empty `filename` is named after its source, minus a trailing
/// `.json`.
///
/// Includes are linked through [`Forest::link_imports`], searching the
/// configured include directories first.
#[derive(Debug, Clone, Default)]
pub struct JsonAstParser {
    include_dirs: Vec<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AstDocument {
    Many(Vec<ThriftFile>),
    One(Box<ThriftFile>),
}

impl JsonAstParser {
    /// Creates a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds directories searched for includes, in order.
    #[must_use]
    pub fn include_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    fn read(path: &Path) -> Result<Vec<ThriftFile>, ParseError> {
        debug!("Reading AST {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: AstDocument =
            serde_json::from_str(&content).map_err(|source| ParseError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let mut files = match document {
            AstDocument::Many(files) => files,
            AstDocument::One(file) => vec![*file],
        };
        for file in &mut files {
            if file.filename.as_os_str().is_empty() {
                file.filename = default_filename(path);
            }
        }
        Ok(files)
    }
}

fn default_filename(source: &Path) -> PathBuf {
    if source.extension().is_some_and(|ext| ext == "json") {
        source.with_extension("")
    } else {
        source.to_path_buf()
    }
}

impl Parser for JsonAstParser {
    fn parse(&self, sources: &[PathBuf]) -> Result<Forest, ParseError> {
        let mut forest = Forest::with_include_dirs(self.include_dirs.iter().cloned());
        for source in sources {
            for file in Self::read(source)? {
                forest.insert(file);
            }
        }
        forest.link_imports();
        Ok(forest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_single_and_multi_file_documents() {
        let dir = tempfile::tempdir().unwrap();
        let one = write(
            dir.path(),
            "main.thrift.json",
            r#"{"includes": {"shared": "shared.thrift"}}"#,
        );
        let many = write(
            dir.path(),
            "bundle.json",
            r#"[{"filename": "shared.thrift"}, {"filename": "other.thrift"}]"#,
        );

        let forest = JsonAstParser::new().parse(&[one, many]).unwrap();
        assert_eq!(forest.len(), 3);

        let main = forest.files().next().unwrap();
        assert_eq!(main.filename, dir.path().join("main.thrift"));
        assert_eq!(
            main.import("shared").unwrap().filename,
            PathBuf::from("shared.thrift")
        );
    }

    #[test]
    fn include_dirs_link_includes_from_a_shared_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("idl");
        let main = write(
            dir.path(),
            "main.json",
            &format!(
                r#"{{"filename": "{}", "includes": {{"types": "common/types.thrift"}}}}"#,
                root.join("svc/main.thrift").display()
            ),
        );
        let types = write(
            dir.path(),
            "types.json",
            &format!(
                r#"{{"filename": "{}"}}"#,
                root.join("common/types.thrift").display()
            ),
        );
        let sources = [main, types];

        let unlinked = JsonAstParser::new().parse(&sources).unwrap();
        assert!(unlinked.files().next().unwrap().import("types").is_none());

        let forest = JsonAstParser::new()
            .include_dirs([&root])
            .parse(&sources)
            .unwrap();
        let linked = forest.files().next().unwrap().import("types").unwrap();
        assert_eq!(linked.filename, root.join("common/types.thrift"));
    }

    #[test]
    fn invalid_json_names_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{ not json");

        let err = JsonAstParser::new().parse(&[bad.clone()]).unwrap_err();
        assert!(matches!(err, ParseError::Json { ref path, .. } if *path == bad));
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let err = JsonAstParser::new()
            .parse(&[PathBuf::from("/nonexistent/ast.json")])
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
