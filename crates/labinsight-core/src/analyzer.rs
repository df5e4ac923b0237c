//! Tree walker and per-file analysis.

use crate::classify::{classify, Classification};
use crate::config::{AnalysisConfig, ConfigError};
use crate::context::FileContext;
use crate::rule::{Dispatch, RuleTable};
use crate::types::{
    AnalysisResult, FileReport, FileStatus, IdentifierKind, NamingConvention, Tally,
    Unimplemented,
};
use crate::utils::suppression::{casing_suppressed, check_marker, CASING_MARKER};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Errors that can occur while setting up an analysis.
///
/// Failures while reading individual files or directories are not errors:
/// they are logged and contribute nothing to the result.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the root directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No configuration was supplied.
    #[error("No analysis configuration supplied")]
    MissingConfig,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    config: Option<AnalysisConfig>,
    table: RuleTable,
}

impl AnalyzerBuilder {
    /// Creates a new builder with an empty rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads the configuration from the root directory's config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn config_from_root(self) -> Result<Self, AnalyzerError> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let config = AnalysisConfig::load(&root)?;
        Ok(self.config(config))
    }

    /// Sets the rule table.
    #[must_use]
    pub fn table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration was supplied or the working
    /// directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.ok_or(AnalyzerError::MissingConfig)?;
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else if root == Path::new(".") {
            std::env::current_dir()?
        } else {
            std::env::current_dir()?.join(&root)
        };

        Ok(Analyzer {
            root,
            config,
            table: self.table,
        })
    }
}

/// Drives the rule table over a directory tree.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    config: AnalysisConfig,
    table: RuleTable,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.table.len()
    }

    /// Configured `(kind, convention)` pairs with no registered rule.
    #[must_use]
    pub fn unimplemented(&self) -> Vec<Unimplemented> {
        self.config
            .enabled_kinds()
            .filter(|&(kind, convention)| !self.table.is_implemented(kind, convention))
            .map(|(kind, convention)| Unimplemented { kind, convention })
            .collect()
    }

    /// Analyzes the whole tree under the root.
    #[must_use]
    pub fn analyze(&self) -> AnalysisResult {
        info!("Starting analysis at {}", self.root.display());
        let result = self.analyze_dir(&self.root);
        info!(
            "Analysis complete: {} violation(s) in {} file(s)",
            result.violations.len(),
            result.files_checked
        );
        result
    }

    /// Analyzes every file below `dir`.
    ///
    /// Results for disjoint directories can be combined with
    /// [`AnalysisResult::merge`] and equal the result of analyzing their union.
    #[must_use]
    pub fn analyze_dir(&self, dir: &Path) -> AnalysisResult {
        let mut result = AnalysisResult::new();

        for gap in self.unimplemented() {
            warn!(
                "{} is not implemented for {}; {} identifiers will not be checked",
                gap.convention, gap.kind, gap.kind
            );
            result.unimplemented.insert(gap);
        }

        let walker = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        result.absorb(self.analyze_file(entry.path()));
                    }
                }
                Err(e) => {
                    let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                    warn!("Error reading directory {}: {}", path.display(), e);
                }
            }
        }

        result.sort();
        result
    }

    /// Checks if an entry is on an ignore-list. The walk root never is.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        let pruned = if entry.file_type().is_dir() {
            self.config.is_ignored_directory(name)
        } else {
            self.config.is_ignored_file(name)
        };
        if pruned {
            debug!("Ignoring: {}", entry.path().display());
        }
        pruned
    }

    /// Analyzes a single file.
    ///
    /// Never fails: unreadable files come back as [`FileStatus::Errored`] with
    /// a zero tally.
    #[must_use]
    pub fn analyze_file(&self, path: &Path) -> FileReport {
        let Classification {
            file_type,
            is_source_code,
        } = classify(path);

        if !is_source_code {
            debug!("Not source code ({}): {}", file_type, path.display());
            return FileReport::new(path, file_type, FileStatus::NotSource);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Error analyzing file {}: {}", path.display(), e);
                return FileReport::new(path, file_type, FileStatus::Errored(e.to_string()));
            }
        };

        debug!("Analyzing ({}): {}", file_type, path.display());
        let ctx = FileContext::new(path, &content, file_type, &self.root);

        if casing_suppressed(&ctx.normalized) {
            info!(
                "Skipped {}: {} marker present",
                ctx.relative_path.display(),
                CASING_MARKER
            );
            return FileReport::new(path, file_type, FileStatus::SkippedSuppressed);
        }

        let mut report = FileReport::new(path, file_type, FileStatus::Completed);

        for (kind, convention) in self.config.enabled_kinds() {
            match self.table.lookup(kind, convention) {
                Dispatch::Rule(rule) => {
                    let outcome = rule.check(&ctx);
                    for violation in &outcome.violations {
                        warn!("{violation}");
                    }
                    self.log_tally(&ctx, kind, convention, outcome.tally);
                    report.tallies.add(kind, outcome.tally);
                    report.violations.extend(outcome.violations);
                }
                Dispatch::Unimplemented => {
                    debug!("No rule for {kind} / {convention}, skipping");
                }
            }
        }

        self.run_constructs(&ctx, &mut report);
        report
    }

    fn run_constructs(&self, ctx: &FileContext, report: &mut FileReport) {
        for rule in self.table.constructs() {
            if !rule.enabled(&self.config) {
                continue;
            }
            if let Some(marker) = rule.suppression_marker() {
                if check_marker(&ctx.normalized, marker).is_suppressed() {
                    debug!(
                        "Skipping {} in {}: {} marker present",
                        rule.name(),
                        ctx.relative_path.display(),
                        marker
                    );
                    continue;
                }
            }
            let findings = rule.check(ctx);
            for finding in &findings {
                warn!("{finding}");
            }
            report.findings.extend(findings);
        }
    }

    /// Surfaces a per-file tally. With `silent` only tallies holding
    /// violations reach the info level.
    fn log_tally(
        &self,
        ctx: &FileContext,
        kind: IdentifierKind,
        convention: NamingConvention,
        tally: Tally,
    ) {
        if tally.total() == 0 {
            return;
        }
        if tally.invalid > 0 || !self.config.options.silent {
            info!(
                "[{}][{}] {}: {} valid, {} invalid",
                convention,
                kind,
                ctx.relative_path.display(),
                tally.valid,
                tally.invalid
            );
        } else {
            debug!(
                "[{}][{}] {}: {} valid",
                convention,
                kind,
                ctx.relative_path.display(),
                tally.valid
            );
        }
    }
}
