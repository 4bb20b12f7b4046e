//! The check registry and its borrowed, narrowable views.

use crate::check::{Check, CheckBox, Signature};
use crate::standard::{Standard, StandardError};
use thiserror::Error;
use tracing::{debug, warn};

/// Separator between the segments of a hierarchical check ID.
pub const ID_SEPARATOR: char = '.';

/// Errors raised while registering checks.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The ID is empty, has an empty segment or contains whitespace.
    #[error("invalid check ID {0:?}")]
    InvalidId(String),

    /// Another check already uses this ID.
    #[error("duplicate check ID {0:?}")]
    Duplicate(String),

    /// A typed signature names no node kinds.
    #[error("check {0:?} has an empty signature")]
    EmptySignature(String),
}

/// Returns true if `id` is `prefix` or lives below it.
///
/// `enum` matches `enum` and `enum.values` but not `enumeration`.
#[must_use]
pub fn id_matches(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(ID_SEPARATOR))
}

fn matches_any<S: AsRef<str>>(id: &str, prefixes: &[S]) -> bool {
    prefixes.iter().any(|p| id_matches(id, p.as_ref()))
}

fn validate(check: &dyn Check) -> Result<(), RegistrationError> {
    let id = check.id();
    let well_formed = !id.is_empty()
        && id.split(ID_SEPARATOR).all(|segment| !segment.is_empty())
        && !id.chars().any(char::is_whitespace);
    if !well_formed {
        return Err(RegistrationError::InvalidId(id.to_string()));
    }
    if let Signature::Path(kinds) = check.signature() {
        if kinds.is_empty() {
            return Err(RegistrationError::EmptySignature(id.to_string()));
        }
    }
    Ok(())
}

/// The registered checks, in registration order.
#[derive(Default)]
pub struct Checks {
    checks: Vec<CheckBox>,
    configured: bool,
}

impl Checks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `checks`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first registration failure.
    pub fn from_checks<I>(checks: I) -> Result<Self, RegistrationError>
    where
        I: IntoIterator<Item = CheckBox>,
    {
        let mut registry = Self::new();
        for check in checks {
            registry.register(check)?;
        }
        Ok(registry)
    }

    /// Registers a check.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is malformed or taken, or if the check has
    /// an empty typed signature.
    pub fn register(&mut self, check: CheckBox) -> Result<(), RegistrationError> {
        validate(check.as_ref())?;
        if self.checks.iter().any(|c| c.id() == check.id()) {
            return Err(RegistrationError::Duplicate(check.id().to_string()));
        }
        debug!("Registered check {} {}", check.id(), check.signature());
        self.checks.push(check);
        Ok(())
    }

    /// Returns the number of checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Iterates over the checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| check.as_ref() as &dyn Check)
    }

    /// Returns the IDs in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.iter().map(|c| c.id().to_string()).collect()
    }

    /// Borrows every check as a [`CheckSet`].
    #[must_use]
    pub fn view(&self) -> CheckSet<'_> {
        CheckSet {
            checks: self.iter().collect(),
        }
    }

    /// Returns a view without the checks matched by any of `prefixes`.
    #[must_use]
    pub fn clone_and_disable<S: AsRef<str>>(&self, prefixes: &[S]) -> CheckSet<'_> {
        self.view().clone_and_disable(prefixes)
    }

    /// Returns true if some check is `prefix` or lives below it.
    #[must_use]
    pub fn has(&self, prefix: &str) -> bool {
        self.iter().any(|c| id_matches(c.id(), prefix))
    }

    /// Removes the checks matched by any of `prefixes`.
    pub fn disable<S: AsRef<str>>(&mut self, prefixes: &[S]) {
        self.checks.retain(|c| {
            let keep = !matches_any(c.id(), prefixes);
            if !keep {
                debug!("Disabled check {}", c.id());
            }
            keep
        });
    }

    /// Applies a standard.
    ///
    /// The default standard leaves the registry untouched. A document keeps
    /// only the checks it lists, in registration order, and hands each its
    /// payload. IDs the document lists but nothing registered are logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a check rejects its payload, or if a document was
    /// already applied to this registry.
    pub fn apply_standard(mut self, standard: &Standard) -> Result<Self, StandardError> {
        let Standard::Document(document) = standard else {
            return Ok(self);
        };
        if self.configured {
            return Err(StandardError::AlreadyConfigured);
        }

        for id in document.linters.keys() {
            if !self.checks.iter().any(|c| c.id() == id) {
                warn!("Standard names unknown check {id}");
            }
        }

        self.checks.retain(|c| document.linters.contains_key(c.id()));
        for check in &mut self.checks {
            if let Some(payload) = document.linters.get(check.id()) {
                check
                    .configure(payload)
                    .map_err(|source| StandardError::Configure {
                        id: check.id().to_string(),
                        source,
                    })?;
            }
        }
        self.configured = true;
        Ok(self)
    }
}

impl std::fmt::Debug for Checks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checks")
            .field("ids", &self.ids())
            .field("configured", &self.configured)
            .finish()
    }
}

/// A borrowed, ordered selection of registered checks.
///
/// The linter narrows one of these per node while walking a file.
#[derive(Clone, Default)]
pub struct CheckSet<'a> {
    checks: Vec<&'a dyn Check>,
}

impl<'a> CheckSet<'a> {
    /// Iterates over the selected checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Check> + '_ {
        self.checks.iter().copied()
    }

    /// Returns the number of selected checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Returns a copy without the checks matched by any of `prefixes`.
    ///
    /// `self` is left unchanged.
    #[must_use]
    pub fn clone_and_disable<S: AsRef<str>>(&self, prefixes: &[S]) -> Self {
        Self {
            checks: self
                .checks
                .iter()
                .copied()
                .filter(|c| !matches_any(c.id(), prefixes))
                .collect(),
        }
    }

    /// Returns true if some selected check is `prefix` or lives below it.
    #[must_use]
    pub fn has(&self, prefix: &str) -> bool {
        self.checks.iter().any(|c| id_matches(c.id(), prefix))
    }

    /// Returns the IDs in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.checks.iter().map(|&c| c.id()).collect()
    }
}

impl std::fmt::Debug for CheckSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
