//! Check that declarations start at a fixed column for their context.
//!
//! The column depends on the parent and the node itself: top-level
//! `service`, `enum`, `typedef` and `const` start at column 1, struct names
//! at column 8 (after `struct `), and members two spaces in at column 3.
//!
//! Nodes without a known position are skipped.

use thrift_lint_core::{Check, Messages, Node, NodeKind, Signature};

/// Check ID for indentation.
pub const ID: &str = "indentation";

/// Expected column for each (parent, node) pair.
pub const EXPECTED_COLUMNS: &[(NodeKind, NodeKind, usize)] = &[
    (NodeKind::File, NodeKind::Service, 1),
    (NodeKind::Service, NodeKind::Method, 3),
    (NodeKind::File, NodeKind::Enum, 1),
    (NodeKind::Enum, NodeKind::EnumValue, 3),
    (NodeKind::File, NodeKind::Struct, 8),
    (NodeKind::Struct, NodeKind::Field, 3),
    (NodeKind::File, NodeKind::Typedef, 1),
    (NodeKind::File, NodeKind::Constant, 1),
];

/// Warns when a declaration does not start at its expected column.
#[derive(Debug, Clone)]
pub struct Indentation {
    columns: Vec<(NodeKind, NodeKind, usize)>,
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Indentation {
    /// Creates the check with [`EXPECTED_COLUMNS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: EXPECTED_COLUMNS.to_vec(),
        }
    }

    /// Sets the expected column of `node` under `parent`.
    #[must_use]
    pub fn column(mut self, parent: NodeKind, node: NodeKind, column: usize) -> Self {
        self.columns.retain(|&(p, n, _)| (p, n) != (parent, node));
        self.columns.push((parent, node, column));
        self
    }

    fn expected(&self, parent: NodeKind, node: NodeKind) -> Option<usize> {
        self.columns
            .iter()
            .find(|&&(p, n, _)| p == parent && n == node)
            .map(|&(_, _, column)| column)
    }
}

impl Check for Indentation {
    fn id(&self) -> &str {
        ID
    }

    fn signature(&self) -> Signature {
        Signature::ParentAndSelf
    }

    fn description(&self) -> &str {
        "Declarations start at the expected column"
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        let mut messages = Messages::new();
        let [parent, node] = nodes else {
            return messages;
        };
        let (Some(expected), Some(pos)) = (self.expected(parent.kind(), node.kind()), node.pos())
        else {
            return messages;
        };
        if pos.col != expected {
            messages.warning(
                *node,
                format_args!("should be indented to column {expected} not {}", pos.col),
            );
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift_lint_core::ast::{Field, Forest, Method, Pos, Service, Struct, ThriftFile};

    fn file_forest() -> Forest {
        std::iter::once(ThriftFile::new("test.thrift")).collect()
    }

    #[test]
    fn test_struct_column() {
        let forest = file_forest();
        let file = forest.files().next().unwrap();
        let check = Indentation::new();

        let good = Struct {
            name: "User".into(),
            pos: Some(Pos::new(1, 8)),
            ..Struct::default()
        };
        assert!(check.check(&[Node::File(file), Node::Struct(&good)]).is_empty());

        let bad = Struct {
            pos: Some(Pos::new(1, 10)),
            ..good
        };
        let messages: Vec<_> = check
            .check(&[Node::File(file), Node::Struct(&bad)])
            .into_iter()
            .collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "should be indented to column 8 not 10");
    }

    #[test]
    fn test_member_columns() {
        let check = Indentation::new();
        let service = Service::default();
        let method = Method {
            pos: Some(Pos::new(2, 5)),
            ..Method::default()
        };
        assert_eq!(
            check
                .check(&[Node::Service(&service), Node::Method(&method)])
                .len(),
            1
        );

        let s = Struct::default();
        let field = Field {
            pos: Some(Pos::new(2, 3)),
            ..Field::default()
        };
        assert!(check.check(&[Node::Struct(&s), Node::Field(&field)]).is_empty());
    }

    #[test]
    fn test_unlisted_pairs_and_missing_positions_are_ignored() {
        let check = Indentation::new();
        let s = Struct::default();
        let unpositioned = Field::default();
        assert!(check
            .check(&[Node::Struct(&s), Node::Field(&unpositioned)])
            .is_empty());

        let method = Method::default();
        let argument = Field {
            pos: Some(Pos::new(1, 40)),
            ..Field::default()
        };
        assert!(check
            .check(&[Node::Method(&method), Node::Field(&argument)])
            .is_empty());
    }

    #[test]
    fn test_column_override() {
        let check = Indentation::new().column(NodeKind::Struct, NodeKind::Field, 5);
        let s = Struct::default();
        let field = Field {
            pos: Some(Pos::new(2, 5)),
            ..Field::default()
        };
        assert!(check.check(&[Node::Struct(&s), Node::Field(&field)]).is_empty());
    }
}
