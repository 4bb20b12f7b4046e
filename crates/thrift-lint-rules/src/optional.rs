//! Check that struct fields are declared `optional`.
//!
//! Required fields cannot be removed later without breaking old readers.
//! Collection fields (`list`, `set`, `map`) are exempt: they default to
//! empty.

use thrift_lint_core::{Check, Messages, Node, NodeKind, Signature};

/// Check ID for optional.
pub const ID: &str = "optional";

/// Field types exempt from the check.
const COLLECTIONS: &[&str] = &["list", "set", "map"];

/// Warns on struct fields that are not `optional`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl Optional {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for Optional {
    fn id(&self) -> &str {
        ID
    }

    fn signature(&self) -> Signature {
        Signature::Path(&[NodeKind::Struct, NodeKind::Field])
    }

    fn description(&self) -> &str {
        "Struct fields must be optional"
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        let mut messages = Messages::new();
        if let [_, Node::Field(field)] = nodes {
            if !field.optional && !COLLECTIONS.contains(&field.ty.name.as_str()) {
                messages.warning(*field, format_args!("{} must be optional", field.name));
            }
        }
        messages
    }
}
