//! List command implementation.

use anyhow::{Context, Result};
use thrift_lint_core::{Checks, DEFAULT_STANDARD};
use thrift_lint_rules::{all_checks, Annotations};

/// Runs the list command.
pub fn run() -> Result<()> {
    let mut checks = Checks::from_checks(all_checks()).context("Failed to register checks")?;
    let annotations = Annotations::new(std::iter::empty(), checks.ids())?;
    checks
        .register(Box::new(annotations))
        .context("Failed to register checks")?;

    println!("Available checks:\n");
    println!("{:<15} Description", "ID");
    println!("{}", "-".repeat(72));

    for check in checks.iter() {
        println!("{:<15} {}", check.id(), check.description());
    }

    println!("\nStandards:");
    println!("  {DEFAULT_STANDARD:<13}- every check with its built-in settings");
    println!("  <path>       - YAML or TOML document listing the checks to run");

    println!("\nSilence checks per declaration with a nolint annotation, e.g.:");
    println!("  struct User {{ ... }} (nolint = \"optional naming.field\")");
    Ok(())
}
