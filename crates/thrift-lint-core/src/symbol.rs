//! Symbol resolution across a file and its direct imports.

use crate::ast::{Constant, Enum, FileRef, Node, Service, Struct, Typedef};

/// Separator between an import alias and a name.
pub const SEPARATOR: char = '.';

/// Base types built into Thrift.
pub const BUILTIN_TYPES: &[&str] = &["bool", "byte", "i16", "i32", "i64", "double", "string"];

/// Collection types built into Thrift. `binary` is listed here as well.
pub const BUILTIN_COLLECTIONS: &[&str] = &["map", "list", "set", "binary"];

/// Returns true if `name` is a builtin base or collection type.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name) || BUILTIN_COLLECTIONS.contains(&name)
}

/// A declaration found by [`resolve`].
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    /// A constant.
    Constant(&'a Constant),
    /// An enum.
    Enum(&'a Enum),
    /// An exception.
    Exception(&'a Struct),
    /// A service.
    Service(&'a Service),
    /// A struct.
    Struct(&'a Struct),
    /// A typedef.
    Typedef(&'a Typedef),
    /// A union.
    Union(&'a Struct),
}

impl<'a> Declaration<'a> {
    /// Returns true if the declaration is an enum.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the declaration as a node.
    #[must_use]
    pub fn node(&self) -> Node<'a> {
        match *self {
            Self::Constant(c) => Node::Constant(c),
            Self::Enum(e) => Node::Enum(e),
            Self::Exception(s) | Self::Struct(s) => Node::Struct(s),
            Self::Service(s) => Node::Service(s),
            Self::Typedef(t) => Node::Typedef(t),
            Self::Union(u) => Node::Union(u),
        }
    }
}

/// Resolves `symbol` as seen from `file`.
///
/// `alias.Name` follows exactly one import hop; a bare `Name` is looked up
/// in `file` itself. Categories are searched in a fixed order: constants,
/// enums, exceptions, services, structs, typedefs, unions. Returns `None`
/// when the alias or the name is unknown.
#[must_use]
pub fn resolve<'a>(symbol: &str, file: FileRef<'a>) -> Option<Declaration<'a>> {
    let (target, name) = match symbol.split_once(SEPARATOR) {
        Some((alias, name)) => (file.import(alias)?, name),
        None => (file, symbol),
    };
    let target = target.file();

    target
        .constants
        .get(name)
        .map(Declaration::Constant)
        .or_else(|| target.enums.get(name).map(Declaration::Enum))
        .or_else(|| target.exceptions.get(name).map(Declaration::Exception))
        .or_else(|| target.services.get(name).map(Declaration::Service))
        .or_else(|| target.structs.get(name).map(Declaration::Struct))
        .or_else(|| target.typedefs.get(name).map(Declaration::Typedef))
        .or_else(|| target.unions.get(name).map(Declaration::Union))
}
