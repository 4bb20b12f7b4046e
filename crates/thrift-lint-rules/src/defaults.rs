//! Check that fields carry no default values.

use thrift_lint_core::{make_check, CheckBox, Messages, Node, NodeKind, Signature};

/// Check ID for defaults.
pub const ID: &str = "defaults";

/// Creates the check: warns on every field with a default value.
#[must_use]
pub fn defaults() -> CheckBox {
    make_check(ID, Signature::Path(&[NodeKind::Field]), |nodes| {
        let mut messages = Messages::new();
        if let [Node::Field(field)] = nodes {
            if field.default.is_some() {
                messages.warning(*field, "default values are not allowed");
            }
        }
        messages
    })
}
