//! Thrift AST model consumed by the linter.
//!
//! The tree is produced by an external parser and handed over as owned
//! declaration types ([`ThriftFile`], [`Struct`], [`Field`], ...). During a
//! run the linter works with borrowed [`Node`] handles, which expose the
//! node kind, name, position, annotations and children uniformly.
//!
//! ```text
//! Forest
//!   └─ ThriftFile ── imports (alias → FileId, one hop, never traversed)
//!        ├─ typedefs / constants / enums
//!        ├─ structs / exceptions / unions ── fields ── type
//!        └─ services ── methods ── arguments / exceptions / return type
//! ```

mod decl;
mod forest;
mod node;

pub use decl::{
    Annotation, Constant, Enum, EnumValue, Field, Literal, Method, Pos, Service, Struct,
    ThriftFile, Type, Typedef,
};
pub use forest::{normalize, FileId, FileRef, Forest};
pub use node::{Node, NodeKind};
