//! Check that declared names follow a naming style per node kind.
//!
//! # Defaults
//!
//! | Kind | Style |
//! |------|-------|
//! | service, enum, struct, union | title case |
//! | enum value, constant | upper snake case |
//! | field, method | camel case |
//!
//! Names starting with `DEPRECATED_` are skipped. `class` and `int` are
//! never allowed.
//!
//! # Configuration
//!
//! ```yaml
//! naming:
//!   matches:
//!     struct: upperCamel
//!     enum.value: upperSnake
//!     field: lowerSnake
//!   blacklist: [class, type]
//! ```
//!
//! A configured payload replaces the defaults entirely; an empty payload
//! keeps them.

use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;
use thrift_lint_core::{Check, ConfigureError, Messages, Node, NodeKind, Signature};
use tracing::debug;

/// Check ID for naming.
pub const ID: &str = "naming";

/// Prefix exempting a name from style checks.
pub const DEPRECATED_PREFIX: &str = "DEPRECATED_";

/// Names rejected by default.
pub const DEFAULT_BLACKLIST: &[&str] = &["class", "int"];

static UPPER_CAMEL: LazyLock<Regex> = LazyLock::new(|| literal(r"^_?([A-Z][0-9a-z]*)*$"));
static LOWER_CAMEL: LazyLock<Regex> = LazyLock::new(|| literal(r"^_?[a-z][A-Z0-9a-z]*$"));
static UPPER_SNAKE: LazyLock<Regex> = LazyLock::new(|| literal(r"^_?[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$"));
static LOWER_SNAKE: LazyLock<Regex> = LazyLock::new(|| literal(r"^_?[a-z][a-z0-9]*(_[a-z0-9]+)*$"));

#[allow(clippy::expect_used)]
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("naming patterns are valid")
}

/// A naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NamingStyle {
    /// `TitleCase`.
    #[serde(rename = "upperCamel")]
    UpperCamel,
    /// `camelCase`.
    #[serde(rename = "lowerCamel")]
    LowerCamel,
    /// `UPPER_SNAKE_CASE`.
    #[serde(rename = "upperSnake")]
    UpperSnake,
    /// `lower_snake_case`.
    #[serde(rename = "lowerSnake")]
    LowerSnake,
}

impl NamingStyle {
    /// Returns true if `name` follows this style. One leading underscore is allowed.
    #[must_use]
    pub fn is_match(self, name: &str) -> bool {
        let pattern = match self {
            Self::UpperCamel => &UPPER_CAMEL,
            Self::LowerCamel => &LOWER_CAMEL,
            Self::UpperSnake => &UPPER_SNAKE,
            Self::LowerSnake => &LOWER_SNAKE,
        };
        pattern.is_match(name)
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UpperCamel => "title case",
            Self::LowerCamel => "camel case",
            Self::UpperSnake => "upper snake case",
            Self::LowerSnake => "lower snake case",
        })
    }
}

/// Default style for each kind.
pub const DEFAULT_STYLES: &[(NodeKind, NamingStyle)] = &[
    (NodeKind::Service, NamingStyle::UpperCamel),
    (NodeKind::Enum, NamingStyle::UpperCamel),
    (NodeKind::Struct, NamingStyle::UpperCamel),
    (NodeKind::Union, NamingStyle::UpperCamel),
    (NodeKind::EnumValue, NamingStyle::UpperSnake),
    (NodeKind::Constant, NamingStyle::UpperSnake),
    (NodeKind::Field, NamingStyle::LowerCamel),
    (NodeKind::Method, NamingStyle::LowerCamel),
];

#[derive(Debug, Default, Deserialize)]
struct NamingConfig {
    #[serde(default)]
    matches: BTreeMap<NodeKind, NamingStyle>,
    #[serde(default)]
    blacklist: Vec<String>,
}

/// Warns on names that break their kind's style or are blacklisted.
#[derive(Debug, Clone)]
pub struct Naming {
    styles: BTreeMap<NodeKind, NamingStyle>,
    blacklist: BTreeSet<String>,
}

impl Default for Naming {
    fn default() -> Self {
        Self::new()
    }
}

impl Naming {
    /// Creates the check with [`DEFAULT_STYLES`] and [`DEFAULT_BLACKLIST`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(
            DEFAULT_STYLES.iter().copied(),
            DEFAULT_BLACKLIST.iter().copied(),
        )
    }

    /// Creates the check with the given styles and blacklist only.
    #[must_use]
    pub fn with_rules<I, B, S>(styles: I, blacklist: B) -> Self
    where
        I: IntoIterator<Item = (NodeKind, NamingStyle)>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            styles: styles.into_iter().collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
        }
    }
}

impl Check for Naming {
    fn id(&self) -> &str {
        ID
    }

    fn signature(&self) -> Signature {
        Signature::SelfNode
    }

    fn description(&self) -> &str {
        "Names follow the naming style of their kind"
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        let mut messages = Messages::new();
        let [node] = nodes else {
            return messages;
        };
        let (Some(style), Some(name)) = (self.styles.get(&node.kind()), node.name()) else {
            return messages;
        };
        if name.starts_with(DEPRECATED_PREFIX) {
            return messages;
        }
        if self.blacklist.contains(name) {
            messages.warning(*node, format_args!("{name:?} is a disallowed name"));
        }
        if !style.is_match(name) {
            messages.warning(
                *node,
                format_args!("name of {} {name:?} should be {style}", node.kind()),
            );
        }
        messages
    }

    fn configure(&mut self, payload: &serde_json::Value) -> Result<(), ConfigureError> {
        if payload.is_null() {
            debug!("No naming payload, keeping default styles");
            return Ok(());
        }
        let config: NamingConfig = serde_json::from_value(payload.clone())?;
        debug!(
            "Naming styles replaced: {} kinds, {} blacklisted names",
            config.matches.len(),
            config.blacklist.len()
        );
        *self = Self::with_rules(config.matches, config.blacklist);
        Ok(())
    }
}
