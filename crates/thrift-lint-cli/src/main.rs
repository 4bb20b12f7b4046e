//! thrift-lint CLI tool.
//!
//! Usage:
//! ```bash
//! thrift-lint check [OPTIONS] [PATHS]...
//! thrift-lint list
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

use commands::check::CheckArgs;

/// Linter for Thrift IDL files, run over JSON-encoded ASTs
#[derive(Parser)]
#[command(name = "thrift-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint AST files
    Check {
        /// AST files or directories to search for `*.json` (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Standard to apply: `default` or a path to a YAML/TOML document
        #[arg(short, long)]
        standard: Option<String>,

        /// Directory searched for includes (can be specified multiple times)
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        include_dirs: Vec<PathBuf>,

        /// Disable checks by ID prefix (can be specified multiple times)
        #[arg(short, long)]
        disable: Vec<String>,

        /// Report errors only
        #[arg(long)]
        errors: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available checks
    List,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per message.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            standard,
            include_dirs,
            disable,
            errors,
            format,
        } => {
            let source = config_resolver::resolve(project_dir(&paths), cli.config.as_deref());
            let args = CheckArgs {
                paths,
                standard,
                include_dirs,
                disable,
                errors,
                format,
            };
            let status = commands::check::run(&args, &source)?;
            if status != 0 {
                std::process::exit(status);
            }
            Ok(())
        }
        Commands::List => commands::list::run(),
    }
}

/// The directory searched for a project config: the first path if it is a
/// directory, its parent otherwise.
fn project_dir(paths: &[PathBuf]) -> &Path {
    match paths.first() {
        Some(p) if p.is_dir() => p,
        Some(p) => p
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new(".")),
        None => Path::new("."),
    }
}
