//! Naming convention predicates.
//!
//! Predicates are ASCII-only and exact:
//!
//! | Convention | Pattern |
//! |------------|---------|
//! | camelCase | `^[a-z][a-zA-Z0-9]*$` |
//! | PascalCase | `^[A-Z][a-zA-Z0-9]*$` |
//!
//! Leading underscores, `$`, inner underscores, a leading digit and
//! non-ASCII letters all fail. Consecutive capitals (`parseHTML`,
//! `HTTPServer`) pass.

use labinsight_core::NamingConvention;

/// A total predicate over identifier strings.
pub type Predicate = fn(&str) -> bool;

/// Returns true if `name` is camelCase.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Returns true if `name` is PascalCase.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Returns the predicate for `convention`, or `None` for reserved
/// conventions that have no implementation.
#[must_use]
pub fn predicate(convention: NamingConvention) -> Option<Predicate> {
    match convention {
        NamingConvention::CamelCase => Some(is_camel_case),
        NamingConvention::PascalCase => Some(is_pascal_case),
        NamingConvention::SnakeCase | NamingConvention::KebabCase => None,
    }
}
