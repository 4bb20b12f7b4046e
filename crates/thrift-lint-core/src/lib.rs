//! # thrift-lint-core
//!
//! Core framework for linting Thrift IDL files.
//!
//! This crate provides the model and the engine the checks run on:
//!
//! - [`ast`] for the parsed declarations and the [`Node`] handles checks receive
//! - [`Check`] trait and [`Signature`] for declaring which nodes a check wants
//! - [`Checks`] registry with hierarchical IDs and [`Standard`] profiles
//! - [`Linter`] for walking files with `nolint` suppression
//! - [`resolve`] for looking up type names across one import hop
//!
//! ## Example
//!
//! ```
//! use thrift_lint_core::ast::{Field, Forest, Struct, ThriftFile, Type};
//! use thrift_lint_core::{make_check, Linter, Messages, Node, NodeKind, Signature};
//!
//! let optional = make_check(
//!     "optional",
//!     Signature::Path(&[NodeKind::Struct, NodeKind::Field]),
//!     |nodes| {
//!         let mut messages = Messages::new();
//!         if let [_, Node::Field(field)] = nodes {
//!             if !field.optional {
//!                 messages.warning(*field, format_args!("{} must be optional", field.name));
//!             }
//!         }
//!         messages
//!     },
//! );
//!
//! let mut file = ThriftFile::new("user.thrift");
//! file.structs.insert(
//!     "User".into(),
//!     Struct {
//!         name: "User".into(),
//!         fields: vec![Field {
//!             id: 1,
//!             name: "name".into(),
//!             ty: Type::named("string"),
//!             ..Field::default()
//!         }],
//!         ..Struct::default()
//!     },
//! );
//! let forest: Forest = std::iter::once(file).collect();
//!
//! let linter = Linter::builder().check_box(optional).build()?;
//! let result = linter.lint(&forest);
//! assert_eq!(result.messages[0].message, "name must be optional");
//! # Ok::<(), thrift_lint_core::LintError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod check;
mod config;
pub mod dispatch;
mod linter;
mod parse;
mod registry;
mod standard;
mod symbol;
mod types;

/// Utility modules for check implementations.
pub mod utils;

pub use ast::{FileRef, Forest, Node, NodeKind};
pub use check::{make_check, Check, CheckBox, ConfigureError, Signature};
pub use config::{AnnotationPatternConfig, Config, ConfigError};
pub use linter::{LintError, Linter, LinterBuilder, NOLINT};
pub use parse::{JsonAstParser, ParseError, Parser};
pub use registry::{id_matches, CheckSet, Checks, RegistrationError};
pub use standard::{Standard, StandardDocument, StandardError, DEFAULT_STANDARD};
pub use symbol::{is_builtin, resolve, Declaration, BUILTIN_COLLECTIONS, BUILTIN_TYPES};
pub use types::{LintResult, Message, Messages, Severity, Subject};
