//! # labinsight-rules
//!
//! Built-in naming convention rules for labinsight.
//!
//! Each identifier kind has a [`Detector`](labinsight_core::Detector) that
//! finds its declarations in normalized source text. A [`CasingRule`] pairs a
//! detector with a convention predicate; [`default_table()`] registers the
//! full matrix.
//!
//! ## Available Rules
//!
//! | Name | Kinds | Description |
//! |------|-------|-------------|
//! | `camel-case` | all | `^[a-z][a-zA-Z0-9]*$` |
//! | `pascal-case` | all | `^[A-Z][a-zA-Z0-9]*$` |
//! | `no-any` | - | Forbids the `any` type (`options.noAny`) |
//!
//! ## Detectors
//!
//! | Kind | Detector | Recognizes |
//! |------|----------|------------|
//! | variable | `variables` | `let`/`const`/`var NAME = ...;` |
//! | function | `functions` | `function NAME(`, `const NAME = () =>`, method heads |
//! | class | `classes` | `class NAME` |
//! | property | `properties` | modifier-prefixed fields, `this.NAME =` |
//! | parameter | `parameters` | function, arrow and method parameter lists |
//! | type | `type-aliases` | `type NAME =` |
//! | interface | `interfaces` | `interface NAME` |
//! | enum | `enums` | `enum NAME` |
//!
//! ## Usage
//!
//! ```ignore
//! use labinsight_core::{AnalysisConfig, Analyzer};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .config(AnalysisConfig::load("./web".as_ref())?)
//!     .table(labinsight_rules::default_table()?)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod casing;
mod conventions;
mod declarations;
mod functions;
mod no_any;
mod parameters;
mod patterns;
mod properties;
mod table;
mod variables;

pub use casing::CasingRule;
pub use conventions::{is_camel_case, is_pascal_case, predicate, Predicate};
pub use declarations::KeywordDetector;
pub use functions::FunctionDetector;
pub use no_any::NoAny;
pub use parameters::ParameterDetector;
pub use properties::PropertyDetector;
pub use table::{default_table, detectors, IMPLEMENTED_CONVENTIONS};
pub use variables::VariableDetector;

/// Re-export core types for convenience.
pub use labinsight_core::{Detector, Rule, RuleTable, Violation};
