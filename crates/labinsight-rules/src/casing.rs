//! Rule checking detected identifiers against a naming convention.
//!
//! A [`CasingRule`] pairs one [`Detector`] with one convention predicate.
//! Every declaration the detector finds counts as valid or invalid; each
//! invalid one also yields a [`Violation`] located at the first original
//! line containing the match.

use crate::conventions::{predicate, Predicate};
use labinsight_core::{
    DetectorBox, FileContext, IdentifierKind, NamingConvention, Rule, RuleOutcome, Violation,
};
use tracing::trace;

/// Checks one identifier kind against one convention.
pub struct CasingRule {
    detector: DetectorBox,
    convention: NamingConvention,
    predicate: Predicate,
}

impl CasingRule {
    /// Creates a rule for the detector's kind, or `None` if `convention` has
    /// no predicate.
    #[must_use]
    pub fn new(detector: DetectorBox, convention: NamingConvention) -> Option<Self> {
        let predicate = predicate(convention)?;
        Some(Self {
            detector,
            convention,
            predicate,
        })
    }

    /// Name of the detector backing this rule.
    #[must_use]
    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }
}

impl Rule for CasingRule {
    fn name(&self) -> &'static str {
        match self.convention {
            NamingConvention::CamelCase => "camel-case",
            NamingConvention::PascalCase => "pascal-case",
            NamingConvention::SnakeCase => "snake-case",
            NamingConvention::KebabCase => "kebab-case",
        }
    }

    fn kind(&self) -> IdentifierKind {
        self.detector.kind()
    }

    fn convention(&self) -> NamingConvention {
        self.convention
    }

    fn description(&self) -> &'static str {
        match self.convention {
            NamingConvention::CamelCase => "Names start lowercase and contain only ASCII letters and digits",
            NamingConvention::PascalCase => "Names start uppercase and contain only ASCII letters and digits",
            NamingConvention::SnakeCase | NamingConvention::KebabCase => "",
        }
    }

    fn check(&self, ctx: &FileContext) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();

        for decl in self.detector.detect(&ctx.normalized) {
            let valid = (self.predicate)(&decl.name);
            outcome.tally.record(valid);
            trace!(
                name = %decl.name,
                kind = %self.kind(),
                valid,
                "Checked identifier"
            );
            if !valid {
                outcome.violations.push(Violation::new(
                    decl.name,
                    self.kind(),
                    self.convention,
                    ctx.location(&decl.matched, decl.offset),
                ));
            }
        }

        outcome
    }
}
