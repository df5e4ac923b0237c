//! Rule traits and the convention dispatch table.

use crate::config::AnalysisConfig;
use crate::context::FileContext;
use crate::types::{ConstructFinding, IdentifierKind, NamingConvention, Tally, Violation};
use std::collections::BTreeMap;

/// A declaration found by a [`Detector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier.
    pub name: String,
    /// Full text of the pattern match, used to locate the line.
    pub matched: String,
    /// Byte offset of the name within the normalized text.
    pub offset: usize,
}

impl Declaration {
    /// Creates a new declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, matched: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            matched: matched.into(),
            offset,
        }
    }
}

/// Finds declarations of one identifier kind in normalized text.
///
/// Detectors know nothing about conventions; swapping the heuristic for a
/// real tokenizer only touches implementations of this trait.
pub trait Detector: Send + Sync {
    /// Returns the kebab-case name of this detector (e.g. "variables").
    fn name(&self) -> &'static str;

    /// Returns the identifier kind this detector finds.
    fn kind(&self) -> IdentifierKind;

    /// Returns every declaration in `text`, ordered by offset.
    fn detect(&self, text: &str) -> Vec<Declaration>;
}

/// Type alias for boxed Detector trait objects.
pub type DetectorBox = Box<dyn Detector>;

/// Counts and violations produced by one [`Rule`] on one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Valid/invalid counts.
    pub tally: Tally,
    /// One entry per invalid identifier.
    pub violations: Vec<Violation>,
}

/// Checks identifiers of one kind against one naming convention.
///
/// # Example
///
/// ```ignore
/// use labinsight_core::{FileContext, IdentifierKind, NamingConvention, Rule, RuleOutcome};
///
/// struct NoClasses;
///
/// impl Rule for NoClasses {
///     fn name(&self) -> &'static str { "no-classes" }
///     fn kind(&self) -> IdentifierKind { IdentifierKind::Class }
///     fn convention(&self) -> NamingConvention { NamingConvention::PascalCase }
///     fn check(&self, _ctx: &FileContext) -> RuleOutcome { RuleOutcome::default() }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "camel-case").
    fn name(&self) -> &'static str;

    /// Identifier kind this rule checks.
    fn kind(&self) -> IdentifierKind;

    /// Convention this rule enforces.
    fn convention(&self) -> NamingConvention;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file.
    fn check(&self, ctx: &FileContext) -> RuleOutcome;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A rule reporting forbidden constructs rather than naming.
pub trait ConstructRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "no-any").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether the configuration turns this rule on.
    fn enabled(&self, config: &AnalysisConfig) -> bool;

    /// Marker that disables this rule for a file, if any.
    fn suppression_marker(&self) -> Option<&'static str> {
        None
    }

    /// Checks a single file.
    fn check(&self, ctx: &FileContext) -> Vec<ConstructFinding>;
}

/// Type alias for boxed `ConstructRule` trait objects.
pub type ConstructRuleBox = Box<dyn ConstructRule>;

/// Result of looking up a `(kind, convention)` pair.
pub enum Dispatch<'a> {
    /// A rule is registered for the pair.
    Rule(&'a dyn Rule),
    /// The convention is valid but nothing checks it for this kind.
    Unimplemented,
}

/// Explicit mapping from `(kind, convention)` to the rule that checks it.
#[derive(Default)]
pub struct RuleTable {
    rules: BTreeMap<(IdentifierKind, NamingConvention), RuleBox>,
    constructs: Vec<ConstructRuleBox>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule under its own kind and convention, replacing any
    /// previous entry for that pair.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleBox) -> Self {
        self.insert(rule);
        self
    }

    /// Registers a construct rule.
    #[must_use]
    pub fn with_construct(mut self, rule: ConstructRuleBox) -> Self {
        self.constructs.push(rule);
        self
    }

    /// Registers a rule in place.
    pub fn insert(&mut self, rule: RuleBox) {
        self.rules.insert((rule.kind(), rule.convention()), rule);
    }

    /// Looks up the rule for a pair.
    #[must_use]
    pub fn lookup(&self, kind: IdentifierKind, convention: NamingConvention) -> Dispatch<'_> {
        match self.rules.get(&(kind, convention)) {
            Some(rule) => Dispatch::Rule(rule.as_ref()),
            None => Dispatch::Unimplemented,
        }
    }

    /// Returns true if a rule is registered for the pair.
    #[must_use]
    pub fn is_implemented(&self, kind: IdentifierKind, convention: NamingConvention) -> bool {
        self.rules.contains_key(&(kind, convention))
    }

    /// Iterates registered construct rules.
    pub fn constructs(&self) -> impl Iterator<Item = &dyn ConstructRule> {
        self.constructs.iter().map(|r| r.as_ref())
    }

    /// Number of registered naming and construct rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len() + self.constructs.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn kind(&self) -> IdentifierKind {
            IdentifierKind::Class
        }
        fn convention(&self) -> NamingConvention {
            NamingConvention::PascalCase
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext) -> RuleOutcome {
            RuleOutcome {
                tally: Tally::new(0, 1),
                violations: vec![Violation::new(
                    "bad",
                    self.kind(),
                    self.convention(),
                    Location::new(ctx.path, 1),
                )],
            }
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.kind(), IdentifierKind::Class);
        assert_eq!(rule.description(), "A test rule");
    }

    #[test]
    fn test_table_dispatch() {
        let table = RuleTable::new().with_rule(Box::new(TestRule));

        assert!(matches!(
            table.lookup(IdentifierKind::Class, NamingConvention::PascalCase),
            Dispatch::Rule(r) if r.name() == "test-rule"
        ));
        assert!(matches!(
            table.lookup(IdentifierKind::Class, NamingConvention::SnakeCase),
            Dispatch::Unimplemented
        ));
        assert!(!table.is_implemented(IdentifierKind::Variable, NamingConvention::PascalCase));
        assert_eq!(table.len(), 1);
    }
}
