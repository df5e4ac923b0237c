//! File-wide suppression markers.
//!
//! A marker is a plain token searched for in normalized file text:
//! ```text
//! @ignoreCasing
//! class legacy_widget {}
//! ```
//! Its presence anywhere disables the matching checks for the whole file.
//! Markers written inside comments or strings are removed by normalization
//! and therefore have no effect.

/// Disables every check in a file, construct rules included.
pub const CASING_MARKER: &str = "@ignoreCasing";

/// Disables the `no-any` construct rule in a file.
pub const ANY_MARKER: &str = "@ignoreAny";

/// State of suppression for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// Checks run normally.
    Active,
    /// The marker was found; checks are skipped.
    Suppressed,
}

impl Suppression {
    /// Returns true if suppressed.
    #[must_use]
    pub fn is_suppressed(self) -> bool {
        self == Self::Suppressed
    }
}

/// Checks normalized text for `marker`.
#[must_use]
pub fn check_marker(normalized: &str, marker: &str) -> Suppression {
    if normalized.contains(marker) {
        Suppression::Suppressed
    } else {
        Suppression::Active
    }
}

/// Checks normalized text for the casing marker.
#[must_use]
pub fn casing_suppressed(normalized: &str) -> bool {
    check_marker(normalized, CASING_MARKER).is_suppressed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_decorator_marker() {
        let src = "@ignoreCasing\nclass legacy_widget {}";
        assert!(casing_suppressed(&normalize(src)));
    }

    #[test]
    fn test_call_form_marker() {
        let src = "@ignoreCasing()\nexport class Foo {}";
        assert!(casing_suppressed(&normalize(src)));
    }

    #[test]
    fn test_marker_anywhere() {
        let src = "const a = 1;\n\n\nfunction f() {}\n@ignoreCasing";
        assert!(casing_suppressed(&normalize(src)));
    }

    #[test]
    fn test_marker_in_comment_or_string_is_ignored() {
        assert!(!casing_suppressed(&normalize("// @ignoreCasing\nlet a = 1;")));
        assert!(!casing_suppressed(&normalize("let a = \"@ignoreCasing\";")));
    }

    #[test]
    fn test_markers_are_independent() {
        let text = normalize("@ignoreAny\nlet a: any = 1;");
        assert_eq!(check_marker(&text, ANY_MARKER), Suppression::Suppressed);
        assert_eq!(check_marker(&text, CASING_MARKER), Suppression::Active);
    }
}
