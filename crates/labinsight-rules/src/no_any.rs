//! Rule to forbid the `any` type in TypeScript and JavaScript sources.
//!
//! # Rationale
//!
//! `any` silently disables type checking for everything it touches. A
//! specific type or `unknown` keeps the checker involved.
//!
//! # Configuration
//!
//! Off unless `options.noAny` is set. A file containing `@ignoreAny`
//! outside comments and string literals is skipped.
//!
//! Matching runs on normalized text, so `any` inside comments and string
//! literals is never reported. Identifiers such as `anyValue` or `company`
//! do not match.

use labinsight_core::utils::ANY_MARKER;
use labinsight_core::{
    AnalysisConfig, ConstructFinding, ConstructRule, FileContext, FileType, Location,
};
use regex::Regex;

/// Rule name.
pub const NAME: &str = "no-any";

/// Reports every use of the `any` keyword.
pub struct NoAny {
    pattern: Regex,
}

impl NoAny {
    /// Creates the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(r"(?:^|[^A-Za-z0-9_$.])(any)\b")?,
        })
    }
}

impl ConstructRule for NoAny {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids the `any` type"
    }

    fn enabled(&self, config: &AnalysisConfig) -> bool {
        config.options.no_any
    }

    fn suppression_marker(&self) -> Option<&'static str> {
        Some(ANY_MARKER)
    }

    fn check(&self, ctx: &FileContext) -> Vec<ConstructFinding> {
        if !matches!(ctx.file_type, FileType::Typescript | FileType::Javascript) {
            return Vec::new();
        }

        self.pattern
            .captures_iter(&ctx.normalized)
            .filter_map(|caps| caps.get(1))
            .map(|m| {
                ConstructFinding::new(
                    NAME,
                    "Unexpected `any`; use a specific type or `unknown`",
                    Location::new(ctx.path, ctx.line_at(m.start())),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check_code(code: &str, file_type: FileType) -> Vec<ConstructFinding> {
        let ctx = FileContext::new(Path::new("/p/a.ts"), code, file_type, Path::new("/p"));
        NoAny::new().unwrap().check(&ctx)
    }

    #[test]
    fn test_detects_any() {
        let code = "let a: any = 1;\nfunction f(x: Array<any>): void {}\nconst y = z as any;\n";
        let lines: Vec<usize> = check_code(code, FileType::Typescript)
            .iter()
            .map(|f| f.location.line)
            .collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_ignores_identifiers_containing_any() {
        let code = "const company = anyValue + many;\nobj.any = 1;\n";
        assert!(check_code(code, FileType::Typescript).is_empty());
    }

    #[test]
    fn test_ignores_comments_and_strings() {
        let code = "// any\nconst s = \"any\";\n";
        assert!(check_code(code, FileType::Typescript).is_empty());
    }

    #[test]
    fn test_only_script_files() {
        assert!(check_code("p { any: thing }", FileType::Css).is_empty());
        assert_eq!(check_code("let a: any;", FileType::Javascript).len(), 1);
    }

    #[test]
    fn test_finding_shape() {
        let findings = check_code("let a: any;", FileType::Typescript);
        assert_eq!(findings[0].rule, "no-any");
        assert_eq!(findings[0].location.file_path, Path::new("/p/a.ts"));
    }

    #[test]
    fn test_toggle_and_marker() {
        let rule = NoAny::new().unwrap();
        let mut config = AnalysisConfig::default();
        assert!(!rule.enabled(&config));
        config.options.no_any = true;
        assert!(rule.enabled(&config));
        assert_eq!(rule.suppression_marker(), Some("@ignoreAny"));
    }
}
