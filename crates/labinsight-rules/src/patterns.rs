//! Shared helpers for regex-based detectors.

use labinsight_core::Declaration;
use regex::Regex;
use std::collections::BTreeMap;

/// Characters allowed in a captured identifier.
pub(crate) const IDENT: &str = "[A-Za-z0-9_$]+";

/// Declarations keyed by the byte offset of their name, so overlapping
/// patterns count each identifier once.
pub(crate) type Found = BTreeMap<usize, Declaration>;

/// Records capture group 1 of every match of `re` in `text`.
pub(crate) fn capture_names(re: &Regex, text: &str, found: &mut Found) {
    for caps in re.captures_iter(text) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            found
                .entry(name.start())
                .or_insert_with(|| Declaration::new(name.as_str(), whole.as_str(), name.start()));
        }
    }
}

/// Builds a regex from a template where `{ident}` stands for [`IDENT`].
pub(crate) fn compile(template: &str) -> Result<Regex, regex::Error> {
    Regex::new(&template.replace("{ident}", IDENT))
}

/// Words that can precede `(` at the start of a line without declaring a
/// function.
pub(crate) const NOT_CALLABLE: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "function", "return", "else", "do", "new",
    "typeof", "super", "await", "yield", "throw", "delete", "void", "in", "of",
];
