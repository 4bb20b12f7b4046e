//! Check that enum values form the sequence 0, 1, 2, ...

use thrift_lint_core::{make_check, CheckBox, Messages, Node, NodeKind, Signature};

/// Check ID for enum.
pub const ID: &str = "enum";

/// Creates the check: warns once per enum whose sorted values are not
/// exactly `0..n`.
#[must_use]
pub fn enum_sequence() -> CheckBox {
    make_check(ID, Signature::Path(&[NodeKind::Enum]), |nodes| {
        let mut messages = Messages::new();
        let [Node::Enum(e)] = nodes else {
            return messages;
        };
        let mut values: Vec<i64> = e.values.values().map(|v| v.value).collect();
        values.sort_unstable();
        if !values.iter().zip(0..).all(|(&v, i)| v == i) {
            messages.warning(
                *e,
                format_args!(
                    "enum values for {} do not start at 0 and increase monotonically",
                    e.name
                ),
            );
        }
        messages
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift_lint_core::ast::{Enum, EnumValue};

    fn enumeration(values: &[(&str, i64)]) -> Enum {
        Enum {
            name: "Status".into(),
            values: values
                .iter()
                .map(|&(name, value)| {
                    (
                        name.to_string(),
                        EnumValue {
                            name: name.to_string(),
                            value,
                            ..EnumValue::default()
                        },
                    )
                })
                .collect(),
            ..Enum::default()
        }
    }

    #[test]
    fn test_sequential_values_pass() {
        let check = enum_sequence();
        let e = enumeration(&[("B", 1), ("A", 0), ("C", 2)]);
        assert!(check.check(&[Node::Enum(&e)]).is_empty());
        assert!(check.check(&[Node::Enum(&enumeration(&[]))]).is_empty());
    }

    #[test]
    fn test_gaps_and_offsets_warn_once() {
        let check = enum_sequence();
        for values in [&[("A", 1), ("B", 2)][..], &[("A", 0), ("B", 2), ("C", 5)][..]] {
            let e = enumeration(values);
            let messages: Vec<_> = check.check(&[Node::Enum(&e)]).into_iter().collect();
            assert_eq!(messages.len(), 1);
            assert_eq!(
                messages[0].message,
                "enum values for Status do not start at 0 and increase monotonically"
            );
        }
    }
}
