//! Detector for function and method declarations.
//!
//! Three shapes are recognized:
//!
//! ```text
//! function NAME(          (also `function* NAME(` and `async function`)
//! const NAME = (...) =>   (also `async`, a bare parameter, or `function`)
//! NAME(...) {             (method heads at the start of a line)
//! ```
//!
//! Method heads exclude control-flow keywords and `constructor`. A name
//! matched by more than one shape is counted once.

use crate::patterns::{capture_names, compile, Found, NOT_CALLABLE};
use labinsight_core::{Declaration, Detector, IdentifierKind};
use regex::Regex;

/// Modifiers that may precede a method name.
pub(crate) const METHOD_MODIFIERS: &str =
    r"(?:(?:public|private|protected|static|async|override|abstract|get|set)\s+)*";

/// Detects functions, function-valued bindings and methods.
pub struct FunctionDetector {
    named: Regex,
    bound: Regex,
    method: Regex,
}

impl FunctionDetector {
    /// Creates the detector.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            named: compile(r"\bfunction\b\s*\*?\s*({ident})\s*(?:<[^>\n]*>)?\s*\(")?,
            bound: compile(
                r"\b(?:const|let|var)\s+({ident})\s*(?::[^=\n]*)?=\s*(?:async\s+)?(?:\([^)\n]*\)\s*(?::[^=\n]*)?=>|{ident}\s*=>|function\b)",
            )?,
            method: compile(&format!(
                r"(?m)^[ \t]*{METHOD_MODIFIERS}({{ident}})\s*(?:<[^>\n]*>)?\s*\([^()\n]*\)\s*(?::[^{{;\n]*)?\{{"
            ))?,
        })
    }
}

impl Detector for FunctionDetector {
    fn name(&self) -> &'static str {
        "functions"
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Function
    }

    fn detect(&self, text: &str) -> Vec<Declaration> {
        let mut found = Found::new();
        capture_names(&self.named, text, &mut found);
        capture_names(&self.bound, text, &mut found);

        let mut methods = Found::new();
        capture_names(&self.method, text, &mut methods);
        for (offset, decl) in methods {
            if decl.name != "constructor" && !NOT_CALLABLE.contains(&decl.name.as_str()) {
                found.entry(offset).or_insert(decl);
            }
        }

        found.into_values().collect()
    }
}
