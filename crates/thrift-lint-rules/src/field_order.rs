//! Check that struct fields appear in the source in ID order.

use thrift_lint_core::ast::Field;
use thrift_lint_core::{make_check, CheckBox, Messages, Node, Signature};

/// Check ID for field order.
pub const ID: &str = "field.order";

/// Creates the check: for structs, exceptions and unions, warns on each
/// pair of ID-adjacent fields whose source lines are reversed.
#[must_use]
pub fn field_order() -> CheckBox {
    make_check(ID, Signature::SelfNode, |nodes| {
        let mut messages = Messages::new();
        let [Node::Struct(s) | Node::Union(s)] = nodes else {
            return messages;
        };
        let mut fields: Vec<_> = s.fields.iter().collect();
        fields.sort_by_key(|f| f.id);
        for pair in fields.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if line(a) > line(b) {
                messages.warning(
                    a,
                    format_args!("field {} and {} of {} are out of order", a.id, b.id, s.name),
                );
            }
        }
        messages
    })
}

fn line(field: &Field) -> usize {
    field.pos.map_or(0, |p| p.line)
}
