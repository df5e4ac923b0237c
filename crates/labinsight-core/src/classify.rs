//! File classification by extension.

use crate::types::FileType;
use std::path::Path;

/// Result of classifying a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Detected file type.
    pub file_type: FileType,
    /// Whether convention checks apply to the file.
    pub is_source_code: bool,
}

/// Classifies a file by its extension. Never fails.
#[must_use]
pub fn classify(path: &Path) -> Classification {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let (file_type, is_source_code) = match ext.as_str() {
        "ts" | "tsx" | "mts" | "cts" => (FileType::Typescript, true),
        "js" | "jsx" | "mjs" | "cjs" => (FileType::Javascript, true),
        "html" | "htm" => (FileType::Html, true),
        "css" => (FileType::Css, true),
        "md" => (FileType::Markdown, false),
        "yaml" | "yml" => (FileType::Yaml, false),
        "json" => (FileType::Json, false),
        _ => (FileType::Unknown, false),
    };

    Classification {
        file_type,
        is_source_code,
    }
}
