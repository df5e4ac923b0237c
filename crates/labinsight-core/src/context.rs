//! Context types for rule execution.

use crate::normalize::normalize;
use crate::types::{FileType, Location};
use std::path::{Path, PathBuf};

/// Context provided to rules for one file.
///
/// Holds both the original text (for locating lines) and the normalized text
/// (for pattern matching). Both have identical line boundaries.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// Original file contents.
    pub content: &'a str,
    /// Contents with comments and literal bodies stripped.
    pub normalized: String,
    /// Classifier result for the file.
    pub file_type: FileType,
    /// Path relative to the analysis root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context, normalizing `content`.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, file_type: FileType, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            normalized: normalize(content),
            file_type,
            relative_path,
        }
    }

    /// Returns the 1-indexed line of the first original line containing
    /// `matched`.
    ///
    /// Falls back to the line holding byte `offset` of the normalized text
    /// when no original line contains the match (e.g. a string literal inside
    /// the match was emptied by normalization).
    #[must_use]
    pub fn locate(&self, matched: &str, offset: usize) -> usize {
        let needle = matched.lines().next().unwrap_or(matched);
        if !needle.is_empty() {
            if let Some(index) = self.content.lines().position(|l| l.contains(needle)) {
                return index + 1;
            }
        }
        self.line_at(offset)
    }

    /// Returns the 1-indexed line holding byte `offset` of the normalized text.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> usize {
        let end = offset.min(self.normalized.len());
        self.normalized.as_bytes()[..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }

    /// Builds a [`Location`] for a match in this file.
    #[must_use]
    pub fn location(&self, matched: &str, offset: usize) -> Location {
        Location::new(self.path, self.locate(matched, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &str) -> FileContext<'_> {
        FileContext::new(
            Path::new("/proj/src/app.ts"),
            content,
            FileType::Typescript,
            Path::new("/proj"),
        )
    }

    #[test]
    fn test_relative_path() {
        let c = ctx("");
        assert_eq!(c.relative_path, PathBuf::from("src/app.ts"));
    }

    #[test]
    fn test_locate_by_containment() {
        let c = ctx("let a = 1;\nconst My_Var = 2;\n");
        assert_eq!(c.locate("const My_Var = 2;", 0), 2);
    }

    #[test]
    fn test_locate_reports_first_containing_line() {
        let c = ctx("const Bad = 1;\nconst Bad = 1;\n");
        let second = c.normalized.rfind("const").unwrap();
        assert_eq!(c.locate("const Bad = 1;", second), 1);
    }

    #[test]
    fn test_locate_falls_back_to_offset() {
        let content = "let a = 1;\nconst My_Var = \"x\";\n";
        let c = ctx(content);
        let offset = c.normalized.find("My_Var").unwrap();
        // normalized match text no longer appears verbatim in the original
        assert_eq!(c.locate("const My_Var = \"\";", offset), 2);
    }

    #[test]
    fn test_line_at() {
        let c = ctx("a\nb\nc");
        assert_eq!(c.line_at(0), 1);
        assert_eq!(c.line_at(2), 2);
        assert_eq!(c.line_at(4), 3);
        assert_eq!(c.line_at(999), 3);
    }
}
