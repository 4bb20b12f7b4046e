//! The check trait and its dispatch signature.

use crate::ast::{Node, NodeKind};
use crate::types::Messages;

/// Which nodes of the ancestor path a check wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// Called for every node with just that node.
    SelfNode,
    /// Called for every node that has a parent, with `[parent, node]`.
    ParentAndSelf,
    /// Called when the current node has the last kind and every earlier
    /// kind appears, in order, among its ancestors.
    ///
    /// `Path(&[NodeKind::Struct, NodeKind::Field])` fires on each field
    /// nested anywhere below a struct and receives `[struct, field]`.
    Path(&'static [NodeKind]),
}

impl Signature {
    /// Returns the number of nodes handed to the check on a match.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::SelfNode => 1,
            Self::ParentAndSelf => 2,
            Self::Path(kinds) => kinds.len(),
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfNode => f.write_str("(self)"),
            Self::ParentAndSelf => f.write_str("(parent, self)"),
            Self::Path(kinds) => {
                let names: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
                write!(f, "({})", names.join(", "))
            }
        }
    }
}

/// Error returned by [`Check::configure`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ConfigureError {
    message: String,
}

impl ConfigureError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigureError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// A lint check applied to AST nodes.
///
/// The linter walks each file and, at every node, hands the nodes selected
/// by [`Check::signature`] to [`Check::check`].
///
/// # Example
///
/// ```
/// use thrift_lint_core::{Check, Messages, Node, NodeKind, Signature};
///
/// pub struct NoDefaults;
///
/// impl Check for NoDefaults {
///     fn id(&self) -> &str { "defaults" }
///     fn signature(&self) -> Signature { Signature::Path(&[NodeKind::Field]) }
///
///     fn check(&self, nodes: &[Node<'_>]) -> Messages {
///         let mut messages = Messages::new();
///         if let [Node::Field(field)] = nodes {
///             if field.default.is_some() {
///                 messages.warning(*field, "default values are not allowed");
///             }
///         }
///         messages
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the ID of this check, unique across the registry.
    ///
    /// IDs may be hierarchical, separated by a period (`enum`, `enum.values`).
    fn id(&self) -> &str;

    /// Returns the signature selecting the nodes this check receives.
    fn signature(&self) -> Signature;

    /// Returns a brief description of what this check enforces.
    fn description(&self) -> &str {
        ""
    }

    /// Inspects the bound nodes, in signature order.
    ///
    /// Must not depend on anything but its arguments and its configuration.
    fn check(&self, nodes: &[Node<'_>]) -> Messages;

    /// Receives this check's payload from a standard.
    ///
    /// Called at most once, before any traversal.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not understood.
    fn configure(&mut self, payload: &serde_json::Value) -> Result<(), ConfigureError> {
        let _ = payload;
        Ok(())
    }
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;

/// Creates a stateless check from an ID, a signature and a handler.
pub fn make_check<F>(id: impl Into<String>, signature: Signature, handler: F) -> CheckBox
where
    F: Fn(&[Node<'_>]) -> Messages + Send + Sync + 'static,
{
    Box::new(FnCheck {
        id: id.into(),
        signature,
        handler,
    })
}

struct FnCheck<F> {
    id: String,
    signature: Signature,
    handler: F,
}

impl<F> Check for FnCheck<F>
where
    F: Fn(&[Node<'_>]) -> Messages + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn signature(&self) -> Signature {
        self.signature
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        (self.handler)(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Field;

    #[test]
    fn make_check_forwards_to_handler() {
        let mut check = make_check(
            "defaults",
            Signature::Path(&[NodeKind::Field]),
            |nodes| {
                let mut messages = Messages::new();
                if let [Node::Field(f)] = nodes {
                    messages.warning(*f, "seen");
                }
                messages
            },
        );
        assert_eq!(check.id(), "defaults");
        assert_eq!(check.signature().arity(), 1);

        let field = Field::default();
        assert_eq!(check.check(&[Node::Field(&field)]).len(), 1);
        assert!(check.configure(&serde_json::json!({"anything": 1})).is_ok());
    }

    #[test]
    fn signature_display() {
        assert_eq!(Signature::SelfNode.to_string(), "(self)");
        assert_eq!(
            Signature::Path(&[NodeKind::Struct, NodeKind::Field]).to_string(),
            "(struct, field)"
        );
    }
}
