//! Check that every referenced type exists.

use thrift_lint_core::{
    is_builtin, make_check, resolve, CheckBox, Messages, Node, NodeKind, Signature,
};

/// Check ID for type references.
pub const ID: &str = "types";

/// Creates the check: errors on type references that are neither builtin
/// nor declared in the file or one of its direct includes.
#[must_use]
pub fn type_references() -> CheckBox {
    make_check(
        ID,
        Signature::Path(&[NodeKind::File, NodeKind::Type]),
        |nodes| {
            let mut messages = Messages::new();
            if let [Node::File(file), Node::Type(ty)] = nodes {
                if !is_builtin(&ty.name) && resolve(&ty.name, *file).is_none() {
                    messages.error(*ty, format_args!("unknown type {:?}", ty.name));
                }
            }
            messages
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift_lint_core::ast::{Forest, Struct, ThriftFile, Type};

    #[test]
    fn test_unknown_types_error() {
        let mut main = ThriftFile::new("main.thrift");
        main.includes.insert("shared".into(), "shared.thrift".into());
        main.structs.insert("Local".into(), Struct::default());
        let mut shared = ThriftFile::new("shared.thrift");
        shared.structs.insert("Remote".into(), Struct::default());
        let forest: Forest = vec![main, shared].into_iter().collect();
        let file = forest.files().next().unwrap();

        let check = type_references();
        for known in ["i64", "binary", "Local", "shared.Remote"] {
            let ty = Type::named(known);
            assert!(
                check.check(&[Node::File(file), Node::Type(&ty)]).is_empty(),
                "{known}"
            );
        }

        let ty = Type::named("shared.Gone");
        let messages: Vec<_> = check
            .check(&[Node::File(file), Node::Type(&ty)])
            .into_iter()
            .collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "unknown type \"shared.Gone\"");
    }
}
