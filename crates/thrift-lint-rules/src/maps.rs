//! Check that map keys have a type every target language can key on.

use thrift_lint_core::ast::{FileRef, Type};
use thrift_lint_core::{resolve, Check, Messages, Node, NodeKind, Signature};

/// Check ID for map keys.
pub const ID: &str = "map";

/// Key types allowed without resolution.
pub const DEFAULT_KEY_TYPES: &[&str] = &["string", "i16", "i32", "i64", "double"];

/// Errors on maps keyed by anything but a string, an integer, a double or
/// an enum.
///
/// Nested maps are reached by the traversal itself, since every type node
/// below a file is visited.
#[derive(Debug, Clone)]
pub struct MapKeys {
    key_types: Vec<String>,
}

impl Default for MapKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl MapKeys {
    /// Creates the check with [`DEFAULT_KEY_TYPES`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_types: DEFAULT_KEY_TYPES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Allows additional key types by name.
    #[must_use]
    pub fn allow(mut self, types: &[&str]) -> Self {
        self.key_types.extend(types.iter().map(|s| (*s).to_string()));
        self
    }

    fn is_valid_key(&self, key: &str, file: FileRef<'_>) -> bool {
        self.key_types.iter().any(|t| t == key)
            || resolve(key, file).is_some_and(|d| d.is_enum())
    }
}

impl Check for MapKeys {
    fn id(&self) -> &str {
        ID
    }

    fn signature(&self) -> Signature {
        Signature::Path(&[NodeKind::File, NodeKind::Type])
    }

    fn description(&self) -> &str {
        "Map keys must be string, enum, integer or double"
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        let mut messages = Messages::new();
        let [Node::File(file), Node::Type(ty)] = nodes else {
            return messages;
        };
        if let Some(key) = map_key(ty) {
            if !self.is_valid_key(&key.name, *file) {
                messages.error(
                    *ty,
                    format_args!(
                        "map keys must be string, enum, integer or double, not {:?}",
                        key.name
                    ),
                );
            }
        }
        messages
    }
}

fn map_key(ty: &Type) -> Option<&Type> {
    if ty.name == "map" {
        ty.key_type.as_deref()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift_lint_core::ast::{Enum, Forest, Struct, ThriftFile};

    fn forest() -> Forest {
        let mut file = ThriftFile::new("test.thrift");
        file.enums.insert("Color".into(), Enum::default());
        file.structs.insert("Point".into(), Struct::default());
        std::iter::once(file).collect()
    }

    fn errors(check: &MapKeys, forest: &Forest, ty: &Type) -> Vec<String> {
        let file = forest.files().next().unwrap();
        check
            .check(&[Node::File(file), Node::Type(ty)])
            .into_iter()
            .map(|m| m.message)
            .collect()
    }

    #[test]
    fn test_scalar_and_enum_keys_pass() {
        let forest = forest();
        let check = MapKeys::new();
        for key in ["string", "i32", "double", "Color"] {
            let ty = Type::map(Type::named(key), Type::named("string"));
            assert!(errors(&check, &forest, &ty).is_empty(), "{key}");
        }
        assert!(errors(&check, &forest, &Type::named("Point")).is_empty());
    }

    #[test]
    fn test_struct_and_unknown_keys_fail() {
        let forest = forest();
        let check = MapKeys::new();
        let ty = Type::map(Type::named("Point"), Type::named("string"));
        assert_eq!(
            errors(&check, &forest, &ty),
            vec!["map keys must be string, enum, integer or double, not \"Point\""]
        );

        let ty = Type::map(Type::named("bool"), Type::named("string"));
        assert_eq!(errors(&check, &forest, &ty).len(), 1);
        assert!(errors(&MapKeys::new().allow(&["bool"]), &forest, &ty).is_empty());
    }
}
