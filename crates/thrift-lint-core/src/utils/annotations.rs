//! Reading annotations and `nolint` directives.
//!
//! Suppression is written as an annotation on any declaration:
//! ```text
//! struct Legacy {
//!   1: string name
//! } (nolint = "optional naming")
//! ```
//! An empty `nolint` silences every check for the declaration and
//! everything below it.

use crate::ast::Annotation;

/// Name of the suppression annotation.
pub const NOLINT: &str = "nolint";

/// Returns the value of the first annotation named `key`.
#[must_use]
pub fn annotation<'a>(annotations: &'a [Annotation], key: &str) -> Option<&'a str> {
    annotations
        .iter()
        .find(|a| a.name == key)
        .map(|a| a.value.as_str())
}

/// Returns true if an annotation named `key` is present, whatever its value.
#[must_use]
pub fn has_annotation(annotations: &[Annotation], key: &str) -> bool {
    annotations.iter().any(|a| a.name == key)
}

/// What the `nolint` annotations of a node ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression<'a> {
    /// No `nolint` annotation.
    None,
    /// An empty `nolint`: skip the node and its subtree.
    All,
    /// Disable these check prefixes for the node and its subtree.
    Checks(Vec<&'a str>),
}

/// Reads the `nolint` annotations of a node.
///
/// Values are split on whitespace; tokens from several `nolint`
/// annotations accumulate. Any annotation whose value is exactly empty wins.
#[must_use]
pub fn suppression(annotations: &[Annotation]) -> Suppression<'_> {
    let mut tokens = Vec::new();
    let mut seen = false;
    for a in annotations.iter().filter(|a| a.name == NOLINT) {
        if a.value.is_empty() {
            return Suppression::All;
        }
        seen = true;
        tokens.extend(a.value.split_whitespace());
    }
    if seen {
        Suppression::Checks(tokens)
    } else {
        Suppression::None
    }
}
