//! # thrift-lint-rules
//!
//! Built-in checks for thrift-lint.
//!
//! ## Available Checks
//!
//! | ID | Signature | Description |
//! |----|-----------|-------------|
//! | `indentation` | (parent, self) | Declarations start at the expected column |
//! | `naming` | (self) | Names follow the style of their kind |
//! | `optional` | (struct, field) | Struct fields must be optional |
//! | `defaults` | (field) | Fields carry no default values |
//! | `enum` | (enum) | Enum values run 0, 1, 2, ... |
//! | `map` | (file, type) | Map keys are string, enum, integer or double |
//! | `types` | (file, type) | Referenced types exist |
//! | `field.order` | (self) | Struct fields appear in ID order |
//! | `annotations` | (self) | Annotations are supported and well-formed |
//!
//! ## Usage
//!
//! ```
//! use thrift_lint_core::{Checks, Config, Linter, Standard};
//! use thrift_lint_rules::{all_checks, Annotations};
//!
//! let config = Config::default();
//! let mut checks = Checks::from_checks(all_checks())?.apply_standard(&Standard::Default)?;
//! let annotations = Annotations::new(&config.annotations, checks.ids())?;
//! checks.register(Box::new(annotations))?;
//!
//! let linter = Linter::builder().registry(checks).disable(["naming"]).build()?;
//! assert!(!linter.checks().has("naming"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod annotations;
pub mod defaults;
pub mod enums;
pub mod field_order;
pub mod indentation;
pub mod maps;
pub mod naming;
pub mod optional;
mod presets;
pub mod types;

pub use annotations::Annotations;
pub use defaults::defaults;
pub use enums::enum_sequence;
pub use field_order::field_order;
pub use indentation::Indentation;
pub use maps::MapKeys;
pub use naming::{Naming, NamingStyle};
pub use optional::Optional;
pub use presets::all_checks;
pub use types::type_references;

/// Re-export core types for convenience.
pub use thrift_lint_core::{Check, Messages, Node, Severity};
