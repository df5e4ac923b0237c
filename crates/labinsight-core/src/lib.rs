//! # labinsight-core
//!
//! Convention analysis engine: finds identifier declarations with
//! lightweight lexical patterns and checks them against per-kind naming
//! conventions.
//!
//! This crate provides:
//!
//! - [`normalize()`] to strip comments and literals before matching
//! - [`classify()`] to decide which files are source code
//! - [`Detector`] and [`Rule`] traits plus the [`RuleTable`] dispatch table
//! - [`Analyzer`] for walking a tree and aggregating [`TallySet`]s
//! - [`Reporter`] for writing JSON report artifacts
//!
//! ## Example
//!
//! ```ignore
//! use labinsight_core::{AnalysisConfig, Analyzer};
//!
//! let config = AnalysisConfig::load(".".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .root(".")
//!     .config(config)
//!     .table(labinsight_rules::default_table()?)
//!     .build()?;
//!
//! let result = analyzer.analyze();
//! println!("{}", result.format_summary());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classify;
mod config;
mod context;
mod normalize;
mod rule;
mod types;

/// On-disk report artifacts.
pub mod report;
/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use classify::{classify, Classification};
pub use config::{AnalysisConfig, CasingConfig, ConfigError, OptionsConfig, CONFIG_FILE_NAME};
pub use context::FileContext;
pub use normalize::normalize;
pub use report::{ReportBundle, ReportError, Reporter};
pub use rule::{
    ConstructRule, ConstructRuleBox, Declaration, Detector, DetectorBox, Dispatch, Rule, RuleBox,
    RuleOutcome, RuleTable,
};
pub use types::{
    AnalysisResult, ConstructFinding, FileReport, FileStatus, FileType, IdentifierKind, Location,
    NamingConvention, Tally, TallySet, Unimplemented, Violation,
};
