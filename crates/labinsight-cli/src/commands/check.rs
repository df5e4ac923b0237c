//! Check command implementation.

use anyhow::{Context, Result};
use labinsight_core::{AnalysisConfig, AnalysisResult, Analyzer, ReportBundle, Reporter};
use labinsight_rules::default_table;
use std::path::Path;

use crate::OutputFormat;

/// Exit code for a run that found violations.
const EXIT_VIOLATIONS: i32 = 1;

/// Exit code for a run whose reports could not be written.
const EXIT_REPORT_FAILED: i32 = 2;

/// Arguments of the check command.
pub struct CheckArgs<'a> {
    /// Root of the analyzed tree.
    pub path: &'a Path,
    /// Output format.
    pub format: OutputFormat,
    /// Explicit configuration file.
    pub config: Option<&'a Path>,
    /// Whether to write the reports/ directory.
    pub write_reports: bool,
    /// External linter output to pass through.
    pub external_report: Option<&'a Path>,
}

/// Runs the check command.
pub fn run(args: &CheckArgs<'_>) -> Result<()> {
    let config = load_config(args.path, args.config)?;
    let external = args.external_report.map(load_external).transpose()?;

    let analyzer = Analyzer::builder()
        .root(args.path)
        .config(config)
        .table(default_table().context("Failed to build rule table")?)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze();

    super::output::print(&result, args.format)?;

    if args.write_reports {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        let reporter = Reporter::in_working_dir(&cwd);
        let mut bundle = ReportBundle::from_result(&result);
        if let Some(external) = &external {
            bundle = bundle.with_external(external);
        }
        if let Err(e) = reporter.write(&bundle) {
            tracing::error!("{e}");
            std::process::exit(EXIT_REPORT_FAILED);
        }
    }

    if failed(&result) {
        std::process::exit(EXIT_VIOLATIONS);
    }

    Ok(())
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AnalysisConfig> {
    match explicit {
        Some(p) => AnalysisConfig::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display())),
        None => AnalysisConfig::load(root)
            .with_context(|| format!("Failed to load config from {}", root.display())),
    }
}

fn load_external(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read external report: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("External report is not valid JSON: {}", path.display()))
}

/// Violations and construct findings both fail the run.
fn failed(result: &AnalysisResult) -> bool {
    result.has_violations() || !result.findings.is_empty()
}
