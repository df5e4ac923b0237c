//! Core types for convention findings, tallies and run results.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Category of named program entity being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// `let` / `const` / `var` bindings.
    Variable,
    /// Named functions, arrow functions bound to a name, and methods.
    Function,
    /// Class declarations.
    Class,
    /// Class fields and `this.x` assignments.
    Property,
    /// Function, arrow and method parameters.
    Parameter,
    /// `type X = ...` aliases.
    Type,
    /// Interface declarations.
    Interface,
    /// Enum declarations.
    Enum,
}

impl IdentifierKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Variable,
        Self::Function,
        Self::Class,
        Self::Property,
        Self::Parameter,
        Self::Type,
        Self::Interface,
        Self::Enum,
    ];

    /// Returns the singular lowercase label (e.g. "variable").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Class => "class",
            Self::Property => "property",
            Self::Parameter => "parameter",
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A casing rule applied to identifiers of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NamingConvention {
    /// `myValue`
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `MyValue`
    #[serde(rename = "pascalCase", alias = "PascalCase")]
    PascalCase,
    /// `my_value` (reserved, no detector ships for it)
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// `my-value` (reserved, no detector ships for it)
    #[serde(rename = "kebab-case")]
    KebabCase,
}

impl NamingConvention {
    /// Every convention, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::CamelCase,
        Self::PascalCase,
        Self::SnakeCase,
        Self::KebabCase,
    ];

    /// Returns the configuration spelling of this convention.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::PascalCase => "pascalCase",
            Self::SnakeCase => "snake_case",
            Self::KebabCase => "kebab-case",
        }
    }
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Absolute path of the file.
    pub file_path: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_path.display(), self.line)
    }
}

/// An identifier that failed its configured naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// The offending identifier.
    pub identifier_name: String,
    /// Kind of the identifier.
    pub kind: IdentifierKind,
    /// Convention it was checked against.
    pub convention: NamingConvention,
    /// Where it was declared.
    pub location: Location,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        identifier_name: impl Into<String>,
        kind: IdentifierKind,
        convention: NamingConvention,
        location: Location,
    ) -> Self {
        Self {
            identifier_name: identifier_name.into(),
            kind,
            convention,
            location,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, expected {}) at {}",
            self.identifier_name, self.kind, self.convention, self.location
        )
    }
}

/// A forbidden construct found in a file (e.g. the `any` type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructFinding {
    /// Name of the construct rule (e.g. "no-any").
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Where the construct appears.
    pub location: Location,
}

impl ConstructFinding {
    /// Creates a new construct finding.
    #[must_use]
    pub fn new(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            location,
        }
    }
}

impl std::fmt::Display for ConstructFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}] {}", self.location, self.rule, self.message)
    }
}

/// Valid/invalid counters for one identifier kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Identifiers that satisfied the convention.
    pub valid: usize,
    /// Identifiers that violated the convention.
    pub invalid: usize,
}

impl Tally {
    /// Creates a tally with explicit counts.
    #[must_use]
    pub fn new(valid: usize, invalid: usize) -> Self {
        Self { valid, invalid }
    }

    /// Number of identifiers counted.
    #[must_use]
    pub fn total(self) -> usize {
        self.valid + self.invalid
    }

    /// Pointwise sum of two tallies.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            valid: self.valid + other.valid,
            invalid: self.invalid + other.invalid,
        }
    }

    /// Records one identifier.
    pub fn record(&mut self, valid: bool) {
        if valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

/// One [`Tally`] per identifier kind.
///
/// Every kind is always present, so two sets compare equal exactly when all
/// of their counters do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallySet(BTreeMap<IdentifierKind, Tally>);

impl Default for TallySet {
    fn default() -> Self {
        Self::zero()
    }
}

impl TallySet {
    /// The identity element of [`TallySet::merge`].
    #[must_use]
    pub fn zero() -> Self {
        Self(
            IdentifierKind::ALL
                .iter()
                .map(|&kind| (kind, Tally::default()))
                .collect(),
        )
    }

    /// Returns the tally for `kind`.
    #[must_use]
    pub fn get(&self, kind: IdentifierKind) -> Tally {
        self.0.get(&kind).copied().unwrap_or_default()
    }

    /// Adds `tally` to the counters of `kind`.
    pub fn add(&mut self, kind: IdentifierKind, tally: Tally) {
        let entry = self.0.entry(kind).or_default();
        *entry = entry.merge(tally);
    }

    /// Pointwise sum of two sets. Neither input is modified.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (&kind, &tally) in &other.0 {
            merged.add(kind, tally);
        }
        merged
    }

    /// Returns true if every counter is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.values().all(|t| t.total() == 0)
    }

    /// Sum of invalid counters over all kinds.
    #[must_use]
    pub fn total_invalid(&self) -> usize {
        self.0.values().map(|t| t.invalid).sum()
    }

    /// Sum of valid counters over all kinds.
    #[must_use]
    pub fn total_valid(&self) -> usize {
        self.0.values().map(|t| t.valid).sum()
    }

    /// Iterates kinds in order with their tallies.
    pub fn iter(&self) -> impl Iterator<Item = (IdentifierKind, Tally)> + '_ {
        self.0.iter().map(|(&k, &t)| (k, t))
    }
}

/// File category as determined by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// `.ts`, `.tsx`, `.mts`, `.cts`
    Typescript,
    /// `.js`, `.jsx`, `.mjs`, `.cjs`
    Javascript,
    /// `.html`, `.htm`
    Html,
    /// `.css`
    Css,
    /// `.md`
    Markdown,
    /// `.yaml`, `.yml`
    Yaml,
    /// `.json`
    Json,
    /// Anything else.
    Unknown,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Typescript => "typescript",
            Self::Javascript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Terminal state of one file's analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "error")]
pub enum FileStatus {
    /// All enabled checks ran.
    Completed,
    /// The classifier rejected the file; nothing ran.
    NotSource,
    /// The casing suppression marker was present.
    SkippedSuppressed,
    /// The file could not be read.
    Errored(String),
}

/// Outcome of analyzing a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Classifier result.
    pub file_type: FileType,
    /// Terminal state.
    pub status: FileStatus,
    /// Per-kind counters for this file.
    pub tallies: TallySet,
    /// Casing violations in this file.
    pub violations: Vec<Violation>,
    /// Construct findings in this file.
    pub findings: Vec<ConstructFinding>,
}

impl FileReport {
    /// Creates an empty report in the given state.
    #[must_use]
    pub fn new(path: &Path, file_type: FileType, status: FileStatus) -> Self {
        Self {
            path: path.to_path_buf(),
            file_type,
            status,
            tallies: TallySet::zero(),
            violations: Vec::new(),
            findings: Vec::new(),
        }
    }
}

/// A configured `(kind, convention)` pair with no registered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unimplemented {
    /// Kind that was left unchecked.
    pub kind: IdentifierKind,
    /// Convention that has no detector.
    pub convention: NamingConvention,
}

/// Result of analyzing a tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Project-wide per-kind counters.
    pub tallies: TallySet,
    /// All casing violations, sorted by path then line once finished.
    pub violations: Vec<Violation>,
    /// All construct findings.
    pub findings: Vec<ConstructFinding>,
    /// Files whose checks ran to completion.
    pub files_checked: usize,
    /// Files skipped by the casing suppression marker.
    pub files_suppressed: usize,
    /// Files that could not be read.
    pub files_errored: usize,
    /// Files the classifier rejected.
    pub files_ignored: usize,
    /// Configured pairs that had no rule to run.
    pub unimplemented: BTreeSet<Unimplemented>,
}

impl AnalysisResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one file's outcome into the result.
    pub fn absorb(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Completed => self.files_checked += 1,
            FileStatus::NotSource => self.files_ignored += 1,
            FileStatus::SkippedSuppressed => self.files_suppressed += 1,
            FileStatus::Errored(_) => self.files_errored += 1,
        }
        self.tallies = self.tallies.merge(&report.tallies);
        self.violations.extend(report.violations);
        self.findings.extend(report.findings);
    }

    /// Combines two partial results.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.tallies = self.tallies.merge(&other.tallies);
        self.violations.extend(other.violations);
        self.findings.extend(other.findings);
        self.files_checked += other.files_checked;
        self.files_suppressed += other.files_suppressed;
        self.files_errored += other.files_errored;
        self.files_ignored += other.files_ignored;
        self.unimplemented.extend(other.unimplemented);
        self.sort();
        self
    }

    /// Orders violations and findings by file, then line.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.identifier_name.cmp(&b.identifier_name))
        });
        self.findings
            .sort_by(|a, b| a.location.cmp(&b.location).then_with(|| a.rule.cmp(&b.rule)));
    }

    /// Returns true if any identifier violated its convention.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Formats the per-kind summary table.
    #[must_use]
    pub fn format_summary(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "{:<12} {:>8} {:>8}", "Kind", "Valid", "Invalid");
        for (kind, tally) in self.tallies.iter() {
            let _ = writeln!(
                out,
                "{:<12} {:>8} {:>8}",
                kind.as_str(),
                tally.valid,
                tally.invalid
            );
        }
        let _ = writeln!(
            out,
            "{:<12} {:>8} {:>8}",
            "total",
            self.tallies.total_valid(),
            self.tallies.total_invalid()
        );
        for gap in &self.unimplemented {
            let _ = writeln!(
                out,
                "note: {} is not implemented for {}; no {} identifiers were checked",
                gap.convention, gap.kind, gap.kind
            );
        }
        let _ = write!(
            out,
            "{} file(s) checked, {} suppressed, {} unreadable, {} not source",
            self.files_checked, self.files_suppressed, self.files_errored, self.files_ignored
        );
        out
    }
}
