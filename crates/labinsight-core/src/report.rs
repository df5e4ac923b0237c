//! On-disk report artifacts.
//!
//! Each run replaces the report directory and writes one pretty-printed JSON
//! document per finding category.

use crate::types::{AnalysisResult, ConstructFinding, TallySet, Unimplemented, Violation};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the report directory, relative to the working directory.
pub const REPORT_DIR: &str = "reports";

/// Artifact holding convention violations.
pub const CASING_REPORT: &str = "casing-report.json";

/// Artifact holding construct findings.
pub const CONSTRUCT_REPORT: &str = "construct-report.json";

/// Artifact holding the per-kind summary.
pub const SUMMARY_REPORT: &str = "summary.json";

/// Artifact holding external linter output, passed through unchanged.
pub const LINT_REPORT: &str = "lint-report.json";

/// Everything one run writes.
#[derive(Debug, Clone, Copy)]
pub struct ReportBundle<'a> {
    /// Convention violations.
    pub violations: &'a [Violation],
    /// Construct findings.
    pub findings: &'a [ConstructFinding],
    /// Run summary.
    pub summary: Summary<'a>,
    /// Findings produced by an external linter, if any.
    pub external: Option<&'a serde_json::Value>,
}

impl<'a> ReportBundle<'a> {
    /// Builds a bundle from an analysis result.
    #[must_use]
    pub fn from_result(result: &'a AnalysisResult) -> Self {
        Self {
            violations: &result.violations,
            findings: &result.findings,
            summary: Summary::from_result(result),
            external: None,
        }
    }

    /// Attaches external linter output.
    #[must_use]
    pub fn with_external(mut self, external: &'a serde_json::Value) -> Self {
        self.external = Some(external);
        self
    }
}

/// Serialized form of the run summary.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<'a> {
    /// Per-kind counters.
    pub tallies: &'a TallySet,
    /// Files whose checks ran.
    pub files_checked: usize,
    /// Files skipped by suppression.
    pub files_suppressed: usize,
    /// Files that could not be read.
    pub files_errored: usize,
    /// Files rejected by the classifier.
    pub files_ignored: usize,
    /// Configured pairs without a rule.
    pub unimplemented: &'a std::collections::BTreeSet<Unimplemented>,
}

impl<'a> Summary<'a> {
    /// Extracts the summary of an analysis result.
    #[must_use]
    pub fn from_result(result: &'a AnalysisResult) -> Self {
        Self {
            tallies: &result.tallies,
            files_checked: result.files_checked,
            files_suppressed: result.files_suppressed,
            files_errored: result.files_errored,
            files_ignored: result.files_ignored,
            unimplemented: &result.unimplemented,
        }
    }
}

/// Errors writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report directory could not be replaced.
    #[error("Failed to prepare report directory {path}: {source}")]
    Directory {
        /// Directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An artifact could not be written.
    #[error("Failed to write report {path}: {source}")]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An artifact could not be serialized.
    #[error("Failed to serialize report {path}: {source}")]
    Serialize {
        /// Artifact path.
        path: PathBuf,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

/// Writes report artifacts into a directory it owns.
#[derive(Debug, Clone)]
pub struct Reporter {
    dir: PathBuf,
}

impl Reporter {
    /// Creates a reporter writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a reporter writing into `<root>/reports`.
    #[must_use]
    pub fn in_working_dir(root: &Path) -> Self {
        Self::new(root.join(REPORT_DIR))
    }

    /// Returns the report directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Replaces the report directory and writes every artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be recreated or any artifact
    /// cannot be written.
    pub fn write(&self, bundle: &ReportBundle<'_>) -> Result<Vec<PathBuf>, ReportError> {
        self.reset_dir()?;

        let mut written = vec![
            self.write_json(CASING_REPORT, &bundle.violations)?,
            self.write_json(CONSTRUCT_REPORT, &bundle.findings)?,
            self.write_json(SUMMARY_REPORT, &bundle.summary)?,
        ];
        if let Some(external) = bundle.external {
            written.push(self.write_json(LINT_REPORT, external)?);
        }

        info!("Reports generated at: {}", self.dir.display());
        Ok(written)
    }

    fn reset_dir(&self) -> Result<(), ReportError> {
        let to_err = |source| ReportError::Directory {
            path: self.dir.clone(),
            source,
        };
        if self.dir.exists() {
            std::fs::remove_dir_all(&self.dir).map_err(to_err)?;
        }
        std::fs::create_dir_all(&self.dir).map_err(to_err)
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> Result<PathBuf, ReportError> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value).map_err(|source| ReportError::Serialize {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
