//! Borrowed node handles used during traversal.

use super::decl::{
    Annotation, Constant, Enum, EnumValue, Field, Method, Pos, Service, Struct, Type, Typedef,
};
use super::forest::FileRef;
use serde::{Deserialize, Serialize};

/// Closed set of node kinds a check signature can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A whole source file.
    File,
    /// A struct or an exception.
    Struct,
    /// A union.
    Union,
    /// A field or method argument.
    Field,
    /// An enum.
    Enum,
    /// An enum member.
    #[serde(alias = "enum.value")]
    EnumValue,
    /// A service.
    Service,
    /// A service method.
    Method,
    /// A constant.
    Constant,
    /// A typedef.
    Typedef,
    /// A type reference.
    Type,
    /// An annotation.
    Annotation,
}

impl NodeKind {
    /// Returns the lowercase display name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Field => "field",
            Self::Enum => "enum",
            Self::EnumValue => "enum value",
            Self::Service => "service",
            Self::Method => "method",
            Self::Constant => "constant",
            Self::Typedef => "typedef",
            Self::Type => "type",
            Self::Annotation => "annotation",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed reference to any node of the tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A source file.
    File(FileRef<'a>),
    /// A struct or an exception.
    Struct(&'a Struct),
    /// A union.
    Union(&'a Struct),
    /// A field or method argument.
    Field(&'a Field),
    /// An enum.
    Enum(&'a Enum),
    /// An enum member.
    EnumValue(&'a EnumValue),
    /// A service.
    Service(&'a Service),
    /// A service method.
    Method(&'a Method),
    /// A constant.
    Constant(&'a Constant),
    /// A typedef.
    Typedef(&'a Typedef),
    /// A type reference.
    Type(&'a Type),
    /// An annotation.
    Annotation(&'a Annotation),
}

impl<'a> Node<'a> {
    /// Returns the kind tag of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Struct(_) => NodeKind::Struct,
            Self::Union(_) => NodeKind::Union,
            Self::Field(_) => NodeKind::Field,
            Self::Enum(_) => NodeKind::Enum,
            Self::EnumValue(_) => NodeKind::EnumValue,
            Self::Service(_) => NodeKind::Service,
            Self::Method(_) => NodeKind::Method,
            Self::Constant(_) => NodeKind::Constant,
            Self::Typedef(_) => NodeKind::Typedef,
            Self::Type(_) => NodeKind::Type,
            Self::Annotation(_) => NodeKind::Annotation,
        }
    }

    /// Returns the declared name, if the node has one.
    ///
    /// Files are named by their path.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::File(f) => f.file().filename.to_str(),
            Self::Struct(s) | Self::Union(s) => Some(&s.name),
            Self::Field(f) => Some(&f.name),
            Self::Enum(e) => Some(&e.name),
            Self::EnumValue(v) => Some(&v.name),
            Self::Service(s) => Some(&s.name),
            Self::Method(m) => Some(&m.name),
            Self::Constant(c) => Some(&c.name),
            Self::Typedef(t) => Some(&t.name),
            Self::Type(t) => Some(&t.name),
            Self::Annotation(a) => Some(&a.name),
        }
    }

    /// Returns the source position, if known.
    #[must_use]
    pub fn pos(&self) -> Option<Pos> {
        match *self {
            Self::File(_) => None,
            Self::Struct(s) | Self::Union(s) => s.pos,
            Self::Field(f) => f.pos,
            Self::Enum(e) => e.pos,
            Self::EnumValue(v) => v.pos,
            Self::Service(s) => s.pos,
            Self::Method(m) => m.pos,
            Self::Constant(c) => c.pos,
            Self::Typedef(t) => t.pos,
            Self::Type(t) => t.pos,
            Self::Annotation(a) => a.pos,
        }
    }

    /// Returns the annotations attached to this node (possibly empty).
    #[must_use]
    pub fn annotations(&self) -> &'a [Annotation] {
        match *self {
            Self::File(_) | Self::Annotation(_) => &[],
            Self::Struct(s) | Self::Union(s) => &s.annotations,
            Self::Field(f) => &f.annotations,
            Self::Enum(e) => &e.annotations,
            Self::EnumValue(v) => &v.annotations,
            Self::Service(s) => &s.annotations,
            Self::Method(m) => &m.annotations,
            Self::Constant(c) => &c.annotations,
            Self::Typedef(t) => &t.annotations,
            Self::Type(t) => &t.annotations,
        }
    }

    /// Returns the child nodes in traversal order.
    ///
    /// Single children and sequences come in declaration order; keyed
    /// collections in map order. Positions and imports are never children.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        match *self {
            Self::File(file) => {
                let f = file.file();
                out.extend(f.typedefs.values().map(Node::Typedef));
                out.extend(f.constants.values().map(Node::Constant));
                out.extend(f.enums.values().map(Node::Enum));
                out.extend(f.structs.values().map(Node::Struct));
                out.extend(f.exceptions.values().map(Node::Struct));
                out.extend(f.unions.values().map(Node::Union));
                out.extend(f.services.values().map(Node::Service));
            }
            Self::Struct(s) | Self::Union(s) => {
                out.extend(s.fields.iter().map(Node::Field));
            }
            Self::Field(f) => out.push(Node::Type(&f.ty)),
            Self::Enum(e) => out.extend(e.values.values().map(Node::EnumValue)),
            Self::EnumValue(_) | Self::Annotation(_) => {}
            Self::Service(s) => out.extend(s.methods.values().map(Node::Method)),
            Self::Method(m) => {
                out.extend(m.return_type.iter().map(Node::Type));
                out.extend(m.arguments.iter().map(Node::Field));
                out.extend(m.exceptions.iter().map(Node::Field));
            }
            Self::Constant(c) => out.push(Node::Type(&c.ty)),
            Self::Typedef(t) => out.push(Node::Type(&t.ty)),
            Self::Type(t) => {
                out.extend(t.key_type.as_deref().map(Node::Type));
                out.extend(t.value_type.as_deref().map(Node::Type));
            }
        }
        out.extend(self.annotations().iter().map(Node::Annotation));
        out
    }
}

impl<'a> From<FileRef<'a>> for Node<'a> {
    fn from(file: FileRef<'a>) -> Self {
        Self::File(file)
    }
}

macro_rules! impl_from_decl {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_decl! {
    Field => Field,
    Enum => Enum,
    EnumValue => EnumValue,
    Service => Service,
    Method => Method,
    Constant => Constant,
    Typedef => Typedef,
    Type => Type,
    Annotation => Annotation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_children_are_type_then_annotations() {
        let field = Field {
            name: "id".to_string(),
            ty: Type::named("i64"),
            annotations: vec![Annotation::new("deprecated", "")],
            ..Field::default()
        };
        let kinds: Vec<NodeKind> = Node::Field(&field)
            .children()
            .iter()
            .map(Node::kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Type, NodeKind::Annotation]);
    }

    #[test]
    fn map_type_children_are_key_then_value() {
        let ty = Type::map(Type::named("string"), Type::list(Type::named("i32")));
        let names: Vec<&str> = Node::Type(&ty)
            .children()
            .iter()
            .filter_map(Node::name)
            .collect();
        assert_eq!(names, vec!["string", "list"]);
    }

    #[test]
    fn union_is_its_own_kind() {
        let s = Struct::default();
        assert_eq!(Node::Struct(&s).kind(), NodeKind::Struct);
        assert_eq!(Node::Union(&s).kind(), NodeKind::Union);
    }

    #[test]
    fn method_children_skip_void_return() {
        let method = Method {
            name: "ping".to_string(),
            arguments: vec![Field::default()],
            ..Method::default()
        };
        let kinds: Vec<NodeKind> = Node::Method(&method)
            .children()
            .iter()
            .map(Node::kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Field]);
    }

    #[test]
    fn kind_deserializes_dotted_alias() {
        let kind: NodeKind = serde_json::from_str("\"enum.value\"").unwrap();
        assert_eq!(kind, NodeKind::EnumValue);
        let kind: NodeKind = serde_json::from_str("\"enum_value\"").unwrap();
        assert_eq!(kind, NodeKind::EnumValue);
    }
}
