//! Detectors for keyword-introduced type declarations.
//!
//! Classes, interfaces, enums and type aliases all start with a keyword
//! followed by the declared name, so one detector shape covers them:
//!
//! ```text
//! class NAME
//! interface NAME
//! enum NAME            (also `const enum NAME`)
//! type NAME [<...>] =
//! ```

use crate::patterns::{capture_names, compile, Found};
use labinsight_core::{Declaration, Detector, IdentifierKind};
use regex::Regex;

/// Detects declarations introduced by a single keyword.
pub struct KeywordDetector {
    name: &'static str,
    kind: IdentifierKind,
    pattern: Regex,
}

impl KeywordDetector {
    fn new(name: &'static str, kind: IdentifierKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            kind,
            pattern: compile(pattern)?,
        })
    }

    /// `class NAME`, including `abstract class` and `export default class`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn classes() -> Result<Self, regex::Error> {
        Self::new("classes", IdentifierKind::Class, r"\bclass\s+({ident})")
    }

    /// `interface NAME`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn interfaces() -> Result<Self, regex::Error> {
        Self::new(
            "interfaces",
            IdentifierKind::Interface,
            r"\binterface\s+({ident})",
        )
    }

    /// `enum NAME` and `const enum NAME`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn enums() -> Result<Self, regex::Error> {
        Self::new("enums", IdentifierKind::Enum, r"\benum\s+({ident})")
    }

    /// `type NAME =` with optional generic parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn type_aliases() -> Result<Self, regex::Error> {
        Self::new(
            "type-aliases",
            IdentifierKind::Type,
            r"\btype\s+({ident})\s*(?:<[^=\n]*>)?\s*=",
        )
    }
}

impl Detector for KeywordDetector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> IdentifierKind {
        self.kind
    }

    fn detect(&self, text: &str) -> Vec<Declaration> {
        let mut found = Found::new();
        capture_names(&self.pattern, text, &mut found);
        found.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(detector: &KeywordDetector, text: &str) -> Vec<String> {
        detector.detect(text).into_iter().map(|d| d.name).collect()
    }

    #[test]
    fn test_classes() {
        let d = KeywordDetector::classes().unwrap();
        let text = "export class UserService {}\nabstract class base_repo {}\n";
        assert_eq!(names(&d, text), vec!["UserService", "base_repo"]);
    }

    #[test]
    fn test_class_keyword_inside_identifier_is_ignored() {
        let d = KeywordDetector::classes().unwrap();
        assert!(names(&d, "const subclass = 1;\nel.classList.add();\n").is_empty());
    }

    #[test]
    fn test_interfaces_and_enums() {
        let i = KeywordDetector::interfaces().unwrap();
        let e = KeywordDetector::enums().unwrap();
        let text = "interface Props { a: string }\nconst enum color_mode { Dark }\nenum Level {}\n";
        assert_eq!(names(&i, text), vec!["Props"]);
        assert_eq!(names(&e, text), vec!["color_mode", "Level"]);
    }

    #[test]
    fn test_type_aliases() {
        let d = KeywordDetector::type_aliases().unwrap();
        let text = "type UserId = string;\ntype result_map<T> = Map<string, T>;\nlet type = 1;\n";
        assert_eq!(names(&d, text), vec!["UserId", "result_map"]);
    }

    #[test]
    fn test_offsets_point_at_name() {
        let d = KeywordDetector::classes().unwrap();
        let text = "\nclass Foo {}";
        let decl = &d.detect(text)[0];
        assert_eq!(&text[decl.offset..decl.offset + 3], "Foo");
        assert_eq!(decl.matched, "class Foo");
    }
}
