//! Check annotations against the set a project supports.
//!
//! Every annotation must be declared for the node kind it appears on, and
//! its value must fully match the declared pattern. `nolint` is always
//! accepted, but each check it names must exist.
//!
//! Add this check after the standard has been applied, seeded with the IDs
//! of the checks that will actually run.

use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;
use thrift_lint_core::{
    id_matches, AnnotationPatternConfig, Check, Messages, Node, NodeKind, Signature, NOLINT,
};

/// Check ID for annotations.
pub const ID: &str = "annotations";

#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

/// Validates annotation names, values and `nolint` check lists.
#[derive(Debug, Clone)]
pub struct Annotations {
    patterns: BTreeMap<NodeKind, BTreeMap<String, Pattern>>,
    known: Vec<String>,
}

impl Annotations {
    /// Creates the check from the supported annotations and the IDs of the
    /// registered checks.
    ///
    /// A later pattern for the same kind and name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid regular expression.
    pub fn new<'p, P, K, S>(patterns: P, known: K) -> Result<Self, regex::Error>
    where
        P: IntoIterator<Item = &'p AnnotationPatternConfig>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table: BTreeMap<NodeKind, BTreeMap<String, Pattern>> = BTreeMap::new();
        for config in patterns {
            let regex = Regex::new(&format!("^(?:{})$", config.regex))?;
            for &kind in &config.nodes {
                table.entry(kind).or_default().insert(
                    config.annotation.clone(),
                    Pattern {
                        source: config.regex.clone(),
                        regex: regex.clone(),
                    },
                );
            }
        }

        let mut known: Vec<String> = known.into_iter().map(Into::into).collect();
        known.push(ID.to_string());
        debug!(
            "Annotation patterns for {} node kinds, {} known checks",
            table.len(),
            known.len()
        );
        Ok(Self {
            patterns: table,
            known,
        })
    }

    fn is_known(&self, prefix: &str) -> bool {
        self.known.iter().any(|id| id_matches(id, prefix))
    }
}

impl Check for Annotations {
    fn id(&self) -> &str {
        ID
    }

    fn signature(&self) -> Signature {
        Signature::SelfNode
    }

    fn description(&self) -> &str {
        "Annotations are supported and well-formed"
    }

    fn check(&self, nodes: &[Node<'_>]) -> Messages {
        let mut messages = Messages::new();
        let [node] = nodes else {
            return messages;
        };
        let supported = self.patterns.get(&node.kind());

        for annotation in node.annotations() {
            match supported.and_then(|s| s.get(&annotation.name)) {
                Some(pattern) => {
                    if !pattern.regex.is_match(&annotation.value) {
                        messages.warning(
                            annotation,
                            format_args!(
                                "invalid value {:?} for annotation {:?} (should match {:?})",
                                annotation.value, annotation.name, pattern.source
                            ),
                        );
                    }
                }
                None if annotation.name != NOLINT => {
                    messages.warning(
                        annotation,
                        format_args!("unsupported annotation {:?}", annotation.name),
                    );
                }
                None => {}
            }
        }

        for annotation in node.annotations().iter().filter(|a| a.name == NOLINT) {
            for token in annotation.value.split_whitespace() {
                if !self.is_known(token) {
                    messages.warning(
                        annotation,
                        format_args!("{token:?} is not a known linter check"),
                    );
                }
            }
        }
        messages
    }
}
