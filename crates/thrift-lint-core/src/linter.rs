//! The linter: walks every file and runs the enabled checks at each node.

use crate::ast::{Forest, Node};
use crate::check::{Check, CheckBox};
use crate::dispatch::bind;
use crate::parse::{ParseError, Parser};
use crate::registry::{CheckSet, Checks, RegistrationError};
use crate::standard::{Standard, StandardError};
use crate::types::{LintResult, Message};
use crate::utils::annotations::{suppression, Suppression};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub use crate::utils::annotations::NOLINT;

/// Errors that can occur while setting up or running the linter.
#[derive(Debug, Error)]
pub enum LintError {
    /// A check could not be registered.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// The standard could not be loaded or applied.
    #[error("Standard error: {0}")]
    Standard(#[from] StandardError),

    /// The sources could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    registry: Option<Checks>,
    pending: Vec<CheckBox>,
    disabled: Vec<String>,
    standard: Standard,
}

impl LinterBuilder {
    /// Creates a new builder with no checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing registry.
    #[must_use]
    pub fn registry(mut self, checks: Checks) -> Self {
        self.registry = Some(checks);
        self
    }

    /// Adds a check.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.pending.push(Box::new(check));
        self
    }

    /// Adds a boxed check.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.pending.push(check);
        self
    }

    /// Adds several boxed checks.
    #[must_use]
    pub fn checks<I>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = CheckBox>,
    {
        self.pending.extend(checks);
        self
    }

    /// Disables checks by ID prefix for the whole run.
    #[must_use]
    pub fn disable<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Sets the standard to apply.
    #[must_use]
    pub fn standard(mut self, standard: Standard) -> Self {
        self.standard = standard;
        self
    }

    /// Builds the linter.
    ///
    /// Registers the added checks, applies the standard, then removes the
    /// disabled checks.
    ///
    /// # Errors
    ///
    /// Returns an error if a check cannot be registered or configured.
    pub fn build(self) -> Result<Linter, LintError> {
        let mut checks = self.registry.unwrap_or_default();
        for check in self.pending {
            checks.register(check)?;
        }
        let mut checks = checks.apply_standard(&self.standard)?;
        checks.disable(&self.disabled);

        debug!("Linting with: {}", checks.ids().join(", "));
        Ok(Linter { checks })
    }
}

/// Runs checks over a forest of Thrift files.
///
/// Use [`Linter::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Linter {
    checks: Checks,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the checks this linter runs.
    #[must_use]
    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    /// Parses `sources` with `parser` and lints the result.
    ///
    /// # Errors
    ///
    /// Returns the parser's error; nothing is linted in that case.
    pub fn lint_sources<P>(&self, parser: &P, sources: &[PathBuf]) -> Result<LintResult, LintError>
    where
        P: Parser + ?Sized,
    {
        info!("Parsing {} files", sources.len());
        let forest = parser.parse(sources)?;
        Ok(self.lint(&forest))
    }

    /// Lints every file of `forest`.
    ///
    /// Messages come out in traversal order, file by file.
    #[must_use]
    pub fn lint(&self, forest: &Forest) -> LintResult {
        let mut result = LintResult::new();
        let enabled = self.checks.view();

        for file in forest.files() {
            debug!("Linting {}", file.filename.display());
            let mut walk = Walk {
                filename: &file.file().filename,
                path: Vec::new(),
                messages: &mut result.messages,
            };
            walk.visit(Node::File(file), &enabled);
            result.files_checked += 1;
        }

        info!(
            "Lint complete: {} messages in {} files",
            result.messages.len(),
            result.files_checked
        );
        result
    }
}

/// State of one file's traversal.
struct Walk<'a, 'm> {
    filename: &'a Path,
    path: Vec<Node<'a>>,
    messages: &'m mut Vec<Message>,
}

impl<'a> Walk<'a, '_> {
    fn visit(&mut self, node: Node<'a>, enabled: &CheckSet<'_>) {
        let narrowed;
        let enabled = match suppression(node.annotations()) {
            Suppression::All => return,
            Suppression::Checks(prefixes) => {
                narrowed = enabled.clone_and_disable(&prefixes);
                &narrowed
            }
            Suppression::None => enabled,
        };

        self.path.push(node);
        for check in enabled.iter() {
            let Some(bound) = bind(check.signature(), &self.path) else {
                continue;
            };
            for mut message in check.check(&bound) {
                message.stamp(self.filename, check.id());
                self.messages.push(message);
            }
        }
        for child in node.children() {
            self.visit(child, enabled);
        }
        self.path.pop();
    }
}
