//! labinsight CLI tool.
//!
//! Usage:
//! ```bash
//! labinsight check [OPTIONS] [PATH]
//! labinsight list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Naming convention analysis for TypeScript and JavaScript projects
#[derive(Parser)]
#[command(name = "labinsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (default: <PATH>/.labinsight)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check identifier naming conventions
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Do not write the reports/ directory
        #[arg(long)]
        no_report: bool,

        /// JSON findings from an external linter, copied into the reports
        #[arg(long, value_name = "FILE")]
        external_report: Option<PathBuf>,
    },

    /// List available rules
    ListRules,
}

/// Output format for analysis results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
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
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            no_report,
            external_report,
        } => commands::check::run(&commands::check::CheckArgs {
            path: &path,
            format,
            config: cli.config.as_deref(),
            write_reports: !no_report,
            external_report: external_report.as_deref(),
        }),
        Commands::ListRules => commands::list_rules::run(),
    }
}
