//! Utility functions for check implementations.

pub mod annotations;
pub mod case;

#[doc(inline)]
pub use annotations::{annotation, has_annotation, suppression, Suppression};
