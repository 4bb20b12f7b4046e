//! Integration test: JSON AST fixtures through the parser and the linter.
//!
//! `user.thrift.json` includes `shared.thrift.json` and carries one struct
//! suppressing `optional` and one suppressing everything.

use std::path::PathBuf;
use thrift_lint_core::{
    is_builtin, make_check, resolve, CheckBox, JsonAstParser, LintError, Linter, Messages, Node,
    NodeKind, Severity, Signature,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn sources() -> Vec<PathBuf> {
    vec![fixture("user.thrift.json"), fixture("shared.thrift.json")]
}

fn optional() -> CheckBox {
    make_check(
        "optional",
        Signature::Path(&[NodeKind::Struct, NodeKind::Field]),
        |nodes| {
            let mut messages = Messages::new();
            if let [_, Node::Field(field)] = nodes {
                let collection = matches!(field.ty.name.as_str(), "list" | "set" | "map");
                if !field.optional && !collection {
                    messages.warning(*field, format_args!("{} must be optional", field.name));
                }
            }
            messages
        },
    )
}

fn defaults() -> CheckBox {
    make_check("defaults", Signature::Path(&[NodeKind::Field]), |nodes| {
        let mut messages = Messages::new();
        if let [Node::Field(field)] = nodes {
            if field.default.is_some() {
                messages.warning(*field, "default values are not allowed");
            }
        }
        messages
    })
}

fn types() -> CheckBox {
    make_check(
        "types",
        Signature::Path(&[NodeKind::File, NodeKind::Type]),
        |nodes| {
            let mut messages = Messages::new();
            if let [Node::File(file), Node::Type(ty)] = nodes {
                if !is_builtin(&ty.name) && resolve(&ty.name, *file).is_none() {
                    messages.error(*ty, format_args!("unknown type {:?}", ty.name));
                }
            }
            messages
        },
    )
}

#[test]
fn optional_reports_each_required_scalar_field() {
    let linter = Linter::builder()
        .check_box(optional())
        .build()
        .expect("linter should build");
    let result = linter
        .lint_sources(&JsonAstParser::new(), &sources())
        .expect("fixtures should parse");

    assert_eq!(result.files_checked, 2);
    let texts: Vec<&str> = result.messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(
        texts,
        vec!["id must be optional", "name must be optional"],
        "unexpected messages: {:#?}",
        result.messages
    );
    assert!(result
        .messages
        .iter()
        .all(|m| m.file == fixture("user.thrift") && m.check == "optional"));
}

#[test]
fn partial_nolint_leaves_other_checks_running() {
    let linter = Linter::builder()
        .checks([optional(), defaults()])
        .build()
        .expect("linter should build");
    let result = linter
        .lint_sources(&JsonAstParser::new(), &sources())
        .expect("fixtures should parse");

    let fired: Vec<(&str, Option<&str>)> = result
        .messages
        .iter()
        .map(|m| (m.check.as_str(), m.subject.name.as_deref()))
        .collect();
    // Legacy is visited first and only keeps `defaults`; Generated is silent.
    assert_eq!(
        fired,
        vec![
            ("defaults", Some("count")),
            ("optional", Some("id")),
            ("optional", Some("name")),
        ]
    );
    assert_eq!(result.exit_status(), 1);
}

#[test]
fn types_resolve_through_includes() {
    let linter = Linter::builder()
        .check_box(types())
        .build()
        .expect("linter should build");
    let mut result = linter
        .lint_sources(&JsonAstParser::new(), &sources())
        .expect("fixtures should parse");
    result.sort_by_location();

    assert_eq!(result.messages.len(), 1, "{:#?}", result.messages);
    let message = &result.messages[0];
    assert_eq!(message.severity, Severity::Error);
    assert_eq!(message.message, "unknown type \"shared.Missing\"");
    assert_eq!(message.line_col(), (9, 23));
    assert_eq!(result.exit_status(), 2);
}

#[test]
fn disabling_globally_removes_the_check() {
    let linter = Linter::builder()
        .checks([optional(), defaults(), types()])
        .disable(["optional", "types"])
        .build()
        .expect("linter should build");
    let result = linter
        .lint_sources(&JsonAstParser::new(), &sources())
        .expect("fixtures should parse");

    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].check, "defaults");
}

#[test]
fn parse_failure_produces_no_partial_result() {
    let linter = Linter::builder()
        .check_box(optional())
        .build()
        .expect("linter should build");
    let err = linter
        .lint_sources(
            &JsonAstParser::new(),
            &[fixture("user.thrift.json"), fixture("missing.json")],
        )
        .unwrap_err();
    assert!(matches!(err, LintError::Parse(_)));
}
