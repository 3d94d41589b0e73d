//! OR combinator - logical disjunction of rules.

use crate::core::{RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// OR COMBINATOR
// ============================================================================

/// Combines two rules with logical OR.
///
/// At least one rule must pass. Evaluates left-to-right and short-circuits
/// on the first success. When both fail, the reported violation carries the
/// combinator's own combined message, with both underlying messages as
/// params.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// // Either empty or at least 3 characters.
/// let rule = required().not().or(min_length(3));
///
/// assert!(rule.validate("").is_ok());
/// assert!(rule.validate("abc").is_ok());
/// assert!(rule.validate("ab").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
    message: String,
}

impl<L: TextRule, R: TextRule> Or<L, R> {
    /// Creates a new OR combinator.
    pub fn new(left: L, right: R) -> Self {
        let message = format!(
            "{}, or {}",
            left.error_message(),
            right.error_message()
        );
        Self {
            left,
            right,
            message,
        }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Decomposes the combinator into its parts.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: TextRule, R: TextRule> TextRule for Or<L, R> {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        let left_violation = match self.left.validate(text) {
            Ok(()) => return Ok(()),
            Err(violation) => violation,
        };
        match self.right.validate(text) {
            Ok(()) => Ok(()),
            Err(right_violation) => Err(RuleViolation::new("or", self.message.clone())
                .with_param("left", left_violation.message())
                .with_param("right", right_violation.message())),
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> RuleMetadata {
        let left_meta = self.left.metadata();
        let right_meta = self.right.metadata();

        RuleMetadata {
            name: format!("Or({}, {})", left_meta.name, right_meta.name),
            description: Some(format!(
                "Either {} or {} must pass",
                left_meta.name, right_meta.name
            )),
            complexity: left_meta.complexity.combine(right_meta.complexity),
            tags: {
                let mut tags = left_meta.tags;
                tags.extend(right_meta.tags);
                tags.push("combinator".to_string());
                tags
            },
        }
    }
}

/// Creates an OR combinator from two rules.
pub fn or<L: TextRule, R: TextRule>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
