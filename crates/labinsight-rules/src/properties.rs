//! Detector for class properties.
//!
//! Two shapes are recognized:
//!
//! ```text
//! private readonly NAME[?!]: Type = ...;   (at least one modifier)
//! this.NAME = ...
//! ```
//!
//! Each property name is counted once per file, at its first occurrence,
//! so repeated `this.x = ...` assignments do not inflate the tally.

use crate::patterns::{capture_names, compile, Found};
use labinsight_core::{Declaration, Detector, IdentifierKind};
use regex::Regex;
use std::collections::BTreeSet;

/// Detects class fields and `this` assignments.
pub struct PropertyDetector {
    field: Regex,
    assignment: Regex,
}

impl PropertyDetector {
    /// Creates the detector.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            field: compile(
                r"(?m)^[ \t]*(?:(?:public|private|protected|static|readonly|declare|override)\s+)+({ident})\s*[?!]?\s*(?::[^=;(\n]*)?(?:=[^;\n]*)?;",
            )?,
            assignment: compile(r"\bthis\.({ident})\s*=[^=>]")?,
        })
    }
}

impl Detector for PropertyDetector {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Property
    }

    fn detect(&self, text: &str) -> Vec<Declaration> {
        let mut found = Found::new();
        capture_names(&self.field, text, &mut found);
        capture_names(&self.assignment, text, &mut found);

        let mut seen = BTreeSet::new();
        found
            .into_values()
            .filter(|decl| seen.insert(decl.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        PropertyDetector::new()
            .unwrap()
            .detect(text)
            .into_iter()
            .map(|d| d.name)
            .collect()
    }

    #[test]
    fn test_modifier_fields() {
        let text = "class A {\n  private userName: string;\n  public static readonly Max_Size = 10;\n  protected cache?: Map<string, number>;\n  declare ready!: boolean;\n}\n";
        assert_eq!(names(text), vec!["userName", "Max_Size", "cache", "ready"]);
    }

    #[test]
    fn test_this_assignments() {
        let text = "constructor() {\n  this.itemCount = 0;\n  this.Total_Price = 1;\n}\n";
        assert_eq!(names(text), vec!["itemCount", "Total_Price"]);
    }

    #[test]
    fn test_comparisons_are_not_assignments() {
        assert!(names("if (this.ready == true) {}\nif (this.done === x) {}\n").is_empty());
    }

    #[test]
    fn test_repeated_assignment_counted_once() {
        let text = "  private count = 0;\n  reset() {\n    this.count = 0;\n    this.count = 1;\n  }\n";
        assert_eq!(names(text), vec!["count"]);
    }

    #[test]
    fn test_methods_are_not_fields() {
        assert!(names("  private load(): void {\n  }\n").is_empty());
    }
}
