//! Detector for `let`, `const` and `var` declarations.
//!
//! Matches single-line declarations with an initializer:
//!
//! ```text
//! const NAME = ...;
//! let NAME: Type = ...;
//! ```
//!
//! Multiple declarators in one statement only report the first name.

use crate::patterns::{capture_names, compile, Found};
use labinsight_core::{Declaration, Detector, IdentifierKind};
use regex::Regex;

/// Detects variable declarations.
pub struct VariableDetector {
    pattern: Regex,
}

impl VariableDetector {
    /// Creates the detector.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: compile(r"\b(?:let|const|var)\s+({ident})\s*(?::[^=;\n]*)?=[^;\n]*;")?,
        })
    }
}

impl Detector for VariableDetector {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Variable
    }

    fn detect(&self, text: &str) -> Vec<Declaration> {
        let mut found = Found::new();
        capture_names(&self.pattern, text, &mut found);
        found.into_values().collect()
    }
}
