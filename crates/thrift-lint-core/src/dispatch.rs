//! Matching check signatures against the ancestor path.

use crate::ast::Node;
use crate::check::Signature;

/// Binds `signature` against `path`, the nodes from the root down to the
/// node being visited.
///
/// Returns the nodes to hand to the check, in signature order, or `None`
/// when the check does not apply here.
///
/// For a typed signature the last kind must be the current node's kind.
/// The remaining kinds are then matched right to left: each one takes the
/// nearest node toward the root, starting from where the previous kind was
/// bound, whose kind equals it. The search is greedy and never backtracks,
/// and a node may satisfy consecutive equal kinds.
///
/// Given the path `[File, Struct, Field]`, `(Struct, Field)`, `(File, Field)`
/// and `(File, Struct, Field)` match; `(Struct)` and `(Field, Struct)` do not.
#[must_use]
pub fn bind<'a>(signature: Signature, path: &[Node<'a>]) -> Option<Vec<Node<'a>>> {
    let current = *path.last()?;
    match signature {
        Signature::SelfNode => Some(vec![current]),
        Signature::ParentAndSelf => match path {
            [.., parent, _] => Some(vec![*parent, current]),
            _ => None,
        },
        Signature::Path(kinds) => {
            if kinds.last().copied() != Some(current.kind()) {
                return None;
            }
            let mut bound = Vec::with_capacity(kinds.len());
            let mut remaining = path;
            for &kind in kinds.iter().rev() {
                let at = remaining.iter().rposition(|node| node.kind() == kind)?;
                bound.push(remaining[at]);
                remaining = &remaining[..=at];
            }
            bound.reverse();
            Some(bound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Forest, NodeKind, Struct, ThriftFile, Type};

    fn kinds(nodes: &[Node<'_>]) -> Vec<NodeKind> {
        nodes.iter().map(Node::kind).collect()
    }

    #[test]
    fn typed_signatures_match_in_order() {
        let forest: Forest = std::iter::once(ThriftFile::new("t.thrift")).collect();
        let file = forest.files().next().unwrap();
        let s = Struct::default();
        let f = Field::default();
        let path = [Node::File(file), Node::Struct(&s), Node::Field(&f)];

        let ok: [&'static [NodeKind]; 4] = [
            &[NodeKind::File, NodeKind::Struct, NodeKind::Field],
            &[NodeKind::Struct, NodeKind::Field],
            &[NodeKind::File, NodeKind::Field],
            &[NodeKind::Field],
        ];
        for signature in ok {
            let bound = bind(Signature::Path(signature), &path).unwrap();
            assert_eq!(kinds(&bound), signature.to_vec());
        }

        let bad: [&'static [NodeKind]; 3] = [
            &[NodeKind::File],
            &[NodeKind::Struct],
            &[NodeKind::Field, NodeKind::Struct],
        ];
        for signature in bad {
            assert!(bind(Signature::Path(signature), &path).is_none());
        }
    }

    #[test]
    fn wildcards() {
        let f = Field::default();
        let t = Type::named("i32");
        let path = [Node::Field(&f), Node::Type(&t)];

        let bound = bind(Signature::SelfNode, &path).unwrap();
        assert_eq!(kinds(&bound), vec![NodeKind::Type]);

        let bound = bind(Signature::ParentAndSelf, &path).unwrap();
        assert_eq!(kinds(&bound), vec![NodeKind::Field, NodeKind::Type]);

        assert!(bind(Signature::SelfNode, &[]).is_none());
    }

    #[test]
    fn intervening_ancestors_are_skipped() {
        let s = Struct::default();
        let f = Field::default();
        let outer = Type::map(Type::named("string"), Type::named("i32"));
        let inner = Type::named("i32");
        let path = [
            Node::Struct(&s),
            Node::Field(&f),
            Node::Type(&outer),
            Node::Type(&inner),
        ];

        let bound = bind(Signature::Path(&[NodeKind::Struct, NodeKind::Type]), &path).unwrap();
        assert_eq!(kinds(&bound), vec![NodeKind::Struct, NodeKind::Type]);
        assert_eq!(bound[1].name(), Some("i32"));
    }

    #[test]
    fn repeated_kinds_bind_greedily() {
        let f = Field::default();
        let t = Type::named("i32");
        let path = [Node::Field(&f), Node::Type(&t)];

        // The current node satisfies both trailing kinds.
        let bound = bind(Signature::Path(&[NodeKind::Type, NodeKind::Type]), &path).unwrap();
        assert_eq!(bound.len(), 2);
        assert_eq!(bound[0].name(), Some("i32"));
        assert_eq!(bound[1].name(), Some("i32"));
    }

    #[test]
    fn missing_ancestor_does_not_match() {
        let f = Field::default();
        let path = [Node::Field(&f)];
        assert!(bind(Signature::Path(&[NodeKind::Struct, NodeKind::Field]), &path).is_none());
        assert!(bind(Signature::ParentAndSelf, &path).is_none());
    }
}
