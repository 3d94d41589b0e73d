//! Ordered rule-set evaluation.
//!
//! A [`RuleSet`] applies a sequence of rules to one text value and reports
//! the failures. Evaluation is synchronous and allocation-free on the happy
//! path.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{RuleViolation, TextRule};

// ============================================================================
// EVALUATION MODE
// ============================================================================

/// How a rule set reacts to failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationMode {
    /// Run every rule and collect all failures, in rule order.
    #[default]
    CollectAll,
    /// Stop at the first failure.
    FailFast,
}

// ============================================================================
// VIOLATIONS REPORT
// ============================================================================

/// The outcome of evaluating a rule set: the collected failures, in rule
/// order. An empty report means the text satisfied every rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Violations(Vec<RuleViolation>);

impl Violations {
    /// Returns true if no rule failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failed rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &RuleViolation> {
        self.0.iter()
    }

    /// Returns the first violation, if any.
    pub fn first(&self) -> Option<&RuleViolation> {
        self.0.first()
    }

    /// Returns the user-facing messages, in rule order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(RuleViolation::message).collect()
    }

    /// Unwraps the report into the underlying violations.
    pub fn into_inner(self) -> Vec<RuleViolation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl IntoIterator for Violations {
    type Item = RuleViolation;
    type IntoIter = std::vec::IntoIter<RuleViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a RuleViolation;
    type IntoIter = std::slice::Iter<'a, RuleViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered sequence of rules applied to one text value.
///
/// Rules run in insertion order. In [`EvaluationMode::CollectAll`] (the
/// default) every rule runs and all failures are reported; in
/// [`EvaluationMode::FailFast`] evaluation stops at the first failure.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rules = RuleSet::new()
///     .rule(required())
///     .rule(min_length(8))
///     .rule(min_uppercase(1));
///
/// assert!(rules.is_valid("Password"));
///
/// let report = rules.evaluate("ab");
/// assert_eq!(
///     report.messages(),
///     vec![
///         "Must be at least 8 character(s) long",
///         "Must contain at least 1 uppercase letters",
///     ],
/// );
/// ```
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn TextRule>>,
    mode: EvaluationMode,
}

impl RuleSet {
    /// Creates an empty rule set in collect-all mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the evaluation mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Appends a rule, preserving insertion order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl TextRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends an already-boxed rule.
    pub fn push(&mut self, rule: Box<dyn TextRule>) {
        self.rules.push(rule);
    }

    /// Returns the evaluation mode.
    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rules against `text` and reports the failures.
    ///
    /// An empty rule set trivially passes.
    pub fn evaluate(&self, text: &str) -> Violations {
        let mut violations = Vec::new();

        for rule in &self.rules {
            match rule.validate(text) {
                Ok(()) => {
                    trace!(rule = %rule.metadata().name, "rule passed");
                }
                Err(violation) => {
                    trace!(
                        rule = %rule.metadata().name,
                        code = violation.code(),
                        "rule failed"
                    );
                    violations.push(violation);
                    if self.mode == EvaluationMode::FailFast {
                        break;
                    }
                }
            }
        }

        debug!(
            rules = self.rules.len(),
            failed = violations.len(),
            mode = ?self.mode,
            "rule set evaluated"
        );
        Violations(violations)
    }

    /// Returns true if `text` satisfies every rule.
    pub fn is_valid(&self, text: &str) -> bool {
        self.rules.iter().all(|rule| rule.validate(text).is_ok())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .rules
            .iter()
            .map(|rule| rule.metadata().name)
            .collect();
        f.debug_struct("RuleSet")
            .field("rules", &names)
            .field("mode", &self.mode)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
