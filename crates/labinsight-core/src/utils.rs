//! Utility functions shared by the analyzer and rule implementations.

pub mod suppression;

#[doc(inline)]
pub use suppression::{casing_suppressed, check_marker, Suppression, ANY_MARKER, CASING_MARKER};
