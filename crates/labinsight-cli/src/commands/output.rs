//! Shared output formatting for analysis results.

use anyhow::Result;
use labinsight_core::AnalysisResult;

use crate::OutputFormat;

/// Print analysis results in the specified format.
pub fn print(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &AnalysisResult) {
    for violation in &result.violations {
        println!("{}-naming at {}", violation.kind, violation.location);
        println!(
            "  \x1b[31merror\x1b[0m: `{}` does not follow {}",
            violation.identifier_name, violation.convention
        );
        println!();
    }

    for finding in &result.findings {
        println!("{} at {}", finding.rule, finding.location);
        println!("  \x1b[31merror\x1b[0m: {}", finding.message);
        println!();
    }

    println!("{}", result.format_summary());

    let summary_color = if result.has_violations() || !result.findings.is_empty() {
        "\x1b[31m"
    } else if result.unimplemented.is_empty() {
        "\x1b[32m"
    } else {
        "\x1b[33m"
    };

    println!(
        "{}Found {} violation(s), {} finding(s) in {} file(s)\x1b[0m",
        summary_color,
        result.violations.len(),
        result.findings.len(),
        result.files_checked
    );
}

fn print_json(result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &AnalysisResult) {
    for violation in &result.violations {
        println!(
            "{}: [{}] {} expected {}",
            violation.location,
            violation.kind,
            violation.identifier_name,
            violation.convention,
        );
    }
    for finding in &result.findings {
        println!("{}: [{}] {}", finding.location, finding.rule, finding.message);
    }
}
