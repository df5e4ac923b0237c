//! The default rule table.

use crate::casing::CasingRule;
use crate::declarations::KeywordDetector;
use crate::functions::FunctionDetector;
use crate::no_any::NoAny;
use crate::parameters::ParameterDetector;
use crate::properties::PropertyDetector;
use crate::variables::VariableDetector;
use labinsight_core::{DetectorBox, NamingConvention, RuleTable};
use tracing::debug;

/// Conventions with a predicate, registered for every kind.
pub const IMPLEMENTED_CONVENTIONS: [NamingConvention; 2] =
    [NamingConvention::CamelCase, NamingConvention::PascalCase];

/// Returns one detector per identifier kind, in kind order.
///
/// # Errors
///
/// Returns an error if a detector pattern fails to compile.
pub fn detectors() -> Result<Vec<DetectorBox>, regex::Error> {
    Ok(vec![
        Box::new(VariableDetector::new()?),
        Box::new(FunctionDetector::new()?),
        Box::new(KeywordDetector::classes()?),
        Box::new(PropertyDetector::new()?),
        Box::new(ParameterDetector::new()?),
        Box::new(KeywordDetector::type_aliases()?),
        Box::new(KeywordDetector::interfaces()?),
        Box::new(KeywordDetector::enums()?),
    ])
}

/// Returns the table used by the `labinsight` binary.
///
/// Includes:
/// - `camel-case` and `pascal-case` for all eight identifier kinds
/// - `no-any` construct rule (active with `options.noAny`)
///
/// `snake_case` and `kebab-case` are accepted in configuration but left
/// unregistered, so lookups for them report the pair as unimplemented.
///
/// # Errors
///
/// Returns an error if a detector pattern fails to compile.
pub fn default_table() -> Result<RuleTable, regex::Error> {
    let mut table = RuleTable::new();

    for convention in IMPLEMENTED_CONVENTIONS {
        for detector in detectors()? {
            if let Some(rule) = CasingRule::new(detector, convention) {
                table.insert(Box::new(rule));
            }
        }
    }

    let table = table.with_construct(Box::new(NoAny::new()?));
    debug!("Default rule table holds {} rules", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labinsight_core::{Detector, Dispatch, IdentifierKind};

    #[test]
    fn test_one_detector_per_kind() {
        let kinds: Vec<IdentifierKind> = detectors().unwrap().iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, IdentifierKind::ALL.to_vec());
    }

    #[test]
    fn test_default_table_coverage() {
        let table = default_table().unwrap();

        for kind in IdentifierKind::ALL {
            assert!(table.is_implemented(kind, NamingConvention::CamelCase));
            assert!(table.is_implemented(kind, NamingConvention::PascalCase));
            assert!(matches!(
                table.lookup(kind, NamingConvention::SnakeCase),
                Dispatch::Unimplemented
            ));
            assert!(matches!(
                table.lookup(kind, NamingConvention::KebabCase),
                Dispatch::Unimplemented
            ));
        }

        assert_eq!(table.len(), 17);
        assert_eq!(
            table.constructs().map(|r| r.name()).collect::<Vec<_>>(),
            vec!["no-any"]
        );
    }

    #[test]
    fn test_lookup_returns_matching_rule() {
        let table = default_table().unwrap();
        match table.lookup(IdentifierKind::Class, NamingConvention::PascalCase) {
            Dispatch::Rule(rule) => {
                assert_eq!(rule.kind(), IdentifierKind::Class);
                assert_eq!(rule.convention(), NamingConvention::PascalCase);
            }
            Dispatch::Unimplemented => panic!("class/pascalCase should be registered"),
        }
    }
}
