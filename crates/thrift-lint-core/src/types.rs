//! Core types for lint messages and results.

use crate::ast::{Node, NodeKind, Pos};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Severity level for lint messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Owned snapshot of the node a message is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Kind of the node.
    pub kind: NodeKind,
    /// Declared name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source position, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
}

impl From<Node<'_>> for Subject {
    fn from(node: Node<'_>) -> Self {
        Self {
            kind: node.kind(),
            name: node.name().map(str::to_string),
            pos: node.pos(),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// File the message was produced for.
    pub file: PathBuf,
    /// ID of the check that produced the message.
    pub check: String,
    /// Severity of this message.
    pub severity: Severity,
    /// The node the message is about.
    pub subject: Subject,
    /// Human-readable text.
    pub message: String,
}

impl Message {
    /// Creates an unattributed message; file and check are filled in by the linter.
    #[must_use]
    pub fn new(severity: Severity, subject: Subject, message: impl Into<String>) -> Self {
        Self {
            file: PathBuf::new(),
            check: String::new(),
            severity,
            subject,
            message: message.into(),
        }
    }

    /// Attributes this message to a file and a check.
    pub(crate) fn stamp(&mut self, file: &Path, check: &str) {
        self.file = file.to_path_buf();
        self.check = check.to_string();
    }

    /// Returns the (line, column) of the subject, `(0, 0)` when unknown.
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        self.subject.pos.map_or((0, 0), |p| (p.line, p.col))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, col) = self.line_col();
        write!(
            f,
            "{}:{}:{}:{}: {} ({})",
            self.file.display(),
            line,
            col,
            self.severity,
            self.message,
            self.check
        )
    }
}

/// Messages returned by a single check invocation.
///
/// Checks build this with [`Messages::warning`] and [`Messages::error`]:
///
/// ```
/// use thrift_lint_core::{ast::Field, Messages};
///
/// fn check_field(field: &Field) -> Messages {
///     let mut messages = Messages::new();
///     if field.default.is_some() {
///         messages.warning(field, "default values are not allowed");
///     }
///     messages
/// }
/// # assert!(check_field(&Field::default()).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages(Vec<Message>);

impl Messages {
    /// Creates an empty set of messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning about `subject`.
    pub fn warning<'n>(
        &mut self,
        subject: impl Into<Node<'n>>,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.push(Severity::Warning, subject.into(), message)
    }

    /// Appends an error about `subject`.
    pub fn error<'n>(
        &mut self,
        subject: impl Into<Node<'n>>,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.push(Severity::Error, subject.into(), message)
    }

    fn push(&mut self, severity: Severity, subject: Node<'_>, message: impl fmt::Display) -> &mut Self {
        self.0
            .push(Message::new(severity, subject.into(), message.to_string()));
        self
    }

    /// Appends all messages from `other`.
    pub fn append(&mut self, other: Messages) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

impl IntoIterator for Messages {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'m> IntoIterator for &'m Messages {
    type Item = &'m Message;
    type IntoIter = std::slice::Iter<'m, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of a lint run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All messages, in traversal order.
    pub messages: Vec<Message>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    /// Returns messages filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .collect()
    }

    /// Counts messages as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .count();
        (errors, self.messages.len() - errors)
    }

    /// Drops every message below `severity`.
    pub fn retain_at_least(&mut self, severity: Severity) {
        self.messages.retain(|m| m.severity >= severity);
    }

    /// Sorts messages by file, then line, then column.
    ///
    /// The sort is stable, so messages at the same location keep traversal order.
    pub fn sort_by_location(&mut self) {
        self.messages.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.line_col().cmp(&b.line_col()))
        });
    }

    /// Process exit status: bit 0 set for any warning, bit 1 for any error.
    #[must_use]
    pub fn exit_status(&self) -> i32 {
        self.messages.iter().fold(0, |status, m| {
            status
                | match m.severity {
                    Severity::Warning => 1,
                    Severity::Error => 2,
                }
        })
    }

    /// Adds messages from another result.
    pub fn extend(&mut self, other: Self) {
        self.messages.extend(other.messages);
        self.files_checked += other.files_checked;
    }
}
