//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thrift_lint_core::{
    Checks, Config, JsonAstParser, LintResult, Linter, Severity, Standard, DEFAULT_STANDARD,
};
use thrift_lint_rules::{all_checks, Annotations};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of the `check` subcommand.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// AST files or directories.
    pub paths: Vec<PathBuf>,
    /// Standard name or path, overriding the config.
    pub standard: Option<String>,
    /// Include directories, searched before the config's.
    pub include_dirs: Vec<PathBuf>,
    /// Check ID prefixes to disable, added to the config's.
    pub disable: Vec<String>,
    /// Report errors only.
    pub errors: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// Runs the check command, returning the process exit status.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<i32> {
    let config = load_config(source)?;
    let result = lint(args, &config)?;
    super::output::print(&result, args.format)?;
    Ok(result.exit_status())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Lints every source under `args.paths`; messages come back sorted by location.
pub fn lint(args: &CheckArgs, config: &Config) -> Result<LintResult> {
    let sources = collect_sources(&args.paths)?;
    let linter = build_linter(args, config)?;

    tracing::info!(
        "Linting {} file(s) with {} checks",
        sources.len(),
        linter.checks().len()
    );

    let parser =
        JsonAstParser::new().include_dirs(args.include_dirs.iter().chain(&config.include_dirs));
    let mut result = linter
        .lint_sources(&parser, &sources)
        .context("Lint failed")?;
    if args.errors || config.errors_only {
        result.retain_at_least(Severity::Error);
    }
    result.sort_by_location();
    Ok(result)
}

fn build_linter(args: &CheckArgs, config: &Config) -> Result<Linter> {
    let name = args
        .standard
        .as_deref()
        .or(config.standard.as_deref())
        .unwrap_or(DEFAULT_STANDARD);
    let standard =
        Standard::load(name).with_context(|| format!("Failed to load standard: {name}"))?;

    let mut checks = Checks::from_checks(all_checks())
        .context("Failed to register checks")?
        .apply_standard(&standard)
        .with_context(|| format!("Failed to apply standard: {name}"))?;

    let annotations = Annotations::new(&config.annotations, checks.ids())
        .context("Invalid annotation pattern in config")?;
    checks
        .register(Box::new(annotations))
        .context("Failed to register checks")?;

    Linter::builder()
        .registry(checks)
        .disable(config.disable.iter().chain(&args.disable))
        .build()
        .context("Failed to build linter")
}

/// Expands directories into the `*.json` files below them, honoring ignore files.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        if !path.is_dir() {
            sources.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in ignore::WalkBuilder::new(path).build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            if entry.file_type().is_some_and(|t| t.is_file()) && is_ast(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        sources.extend(found);
    }
    Ok(sources)
}

fn is_ast(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
