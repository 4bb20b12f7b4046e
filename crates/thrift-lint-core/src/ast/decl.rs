//! Owned declaration types, as produced by the parser.

use super::forest::FileId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A constant or default-value literal, kept in its parsed form.
pub type Literal = serde_json::Value;

/// Source position of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl Pos {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A `name = "value"` annotation attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation name.
    pub name: String,
    /// Annotation value; empty when the annotation has no value.
    #[serde(default)]
    pub value: String,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

impl Annotation {
    /// Creates a new annotation without position.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            pos: None,
        }
    }
}

/// A reference to a type, builtin or user-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Type {
    /// Type name (`i32`, `map`, `Struct`, `shared.Struct`, ...).
    pub name: String,
    /// Key type of a map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<Box<Type>>,
    /// Value type of a map, list or set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Box<Type>>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

impl Type {
    /// Creates a named type with no parameters.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a `map<key, value>` type.
    #[must_use]
    pub fn map(key: Type, value: Type) -> Self {
        Self {
            name: "map".to_string(),
            key_type: Some(Box::new(key)),
            value_type: Some(Box::new(value)),
            ..Self::default()
        }
    }

    /// Creates a `list<value>` type.
    #[must_use]
    pub fn list(value: Type) -> Self {
        Self {
            name: "list".to_string(),
            value_type: Some(Box::new(value)),
            ..Self::default()
        }
    }
}

/// A field of a struct, union or exception, or an argument of a method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field ID.
    pub id: i32,
    /// Field name.
    pub name: String,
    /// Whether the field is declared `optional`.
    #[serde(default)]
    pub optional: bool,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Default value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A struct-like declaration: struct, exception or union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    /// Declared name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A single enum member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Member name.
    pub name: String,
    /// Numeric value.
    pub value: i64,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// An enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Declared name.
    pub name: String,
    /// Members keyed by name.
    #[serde(default)]
    pub values: BTreeMap<String, EnumValue>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A service method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Whether the method is `oneway`.
    #[serde(default)]
    pub oneway: bool,
    /// Return type; `None` for `void`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,
    /// Arguments in declaration order.
    #[serde(default)]
    pub arguments: Vec<Field>,
    /// Declared exceptions in declaration order.
    #[serde(default)]
    pub exceptions: Vec<Field>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A service declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Declared name.
    pub name: String,
    /// Name of the extended service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Methods keyed by name.
    #[serde(default)]
    pub methods: BTreeMap<String, Method>,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A `const` declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    /// Declared name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Literal value.
    #[serde(default)]
    pub value: Literal,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A `typedef` declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    /// The alias being declared.
    pub name: String,
    /// Aliased type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

/// A parsed Thrift source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThriftFile {
    /// Path of the source file.
    #[serde(default)]
    pub filename: PathBuf,
    /// Include alias → included path.
    #[serde(default)]
    pub includes: BTreeMap<String, String>,
    /// Language → namespace.
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    /// Typedefs keyed by alias.
    #[serde(default)]
    pub typedefs: BTreeMap<String, Typedef>,
    /// Constants keyed by name.
    #[serde(default)]
    pub constants: BTreeMap<String, Constant>,
    /// Enums keyed by name.
    #[serde(default)]
    pub enums: BTreeMap<String, Enum>,
    /// Structs keyed by name.
    #[serde(default)]
    pub structs: BTreeMap<String, Struct>,
    /// Exceptions keyed by name.
    #[serde(default)]
    pub exceptions: BTreeMap<String, Struct>,
    /// Unions keyed by name.
    #[serde(default)]
    pub unions: BTreeMap<String, Struct>,
    /// Services keyed by name.
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
    /// Resolved includes, alias → file in the same forest.
    #[serde(skip)]
    pub(crate) imports: BTreeMap<String, FileId>,
}

impl ThriftFile {
    /// Creates an empty file with the given name.
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Returns the import aliases that resolved to a file in the forest.
    pub fn import_aliases(&self) -> impl Iterator<Item = &str> {
        self.imports.keys().map(String::as_str)
    }
}
