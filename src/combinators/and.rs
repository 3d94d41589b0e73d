//! AND combinator - logical conjunction of rules.

use crate::core::{RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// AND COMBINATOR
// ============================================================================

/// Combines two rules with logical AND.
///
/// Both rules must pass. Evaluates left-to-right and short-circuits on the
/// first failure, so the violation reported is always the leftmost one.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rule = min_length(3).and(min_uppercase(1));
///
/// assert!(rule.validate("Abc").is_ok());
/// assert!(rule.validate("Ab").is_err()); // fails MinLength
/// assert!(rule.validate("abc").is_err()); // fails MinUppercase
/// ```
#[derive(Debug, Clone)]
pub struct And<L, R> {
    left: L,
    right: R,
    message: String,
}

impl<L: TextRule, R: TextRule> And<L, R> {
    /// Creates a new AND combinator.
    pub fn new(left: L, right: R) -> Self {
        let message = format!("{}; {}", left.error_message(), right.error_message());
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

impl<L: TextRule, R: TextRule> TextRule for And<L, R> {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        self.left.validate(text)?;
        self.right.validate(text)?;
        Ok(())
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> RuleMetadata {
        let left_meta = self.left.metadata();
        let right_meta = self.right.metadata();

        RuleMetadata {
            name: format!("And({}, {})", left_meta.name, right_meta.name),
            description: Some(format!(
                "Both {} and {} must pass",
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

/// Creates an AND combinator from two rules.
pub fn and<L: TextRule, R: TextRule>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextRuleExt;
    use crate::rules::{min_length, min_uppercase, required};

    #[test]
    fn both_must_pass() {
        let rule = And::new(min_length(3), min_uppercase(1));
        assert!(rule.validate("Abc").is_ok());
        assert!(rule.validate("abc").is_err());
        assert!(rule.validate("Ab").is_err());
    }

    #[test]
    fn short_circuits_on_left_failure() {
        let rule = And::new(min_length(5), min_uppercase(1));
        let violation = rule.validate("ab").unwrap_err();
        assert_eq!(violation.code(), "min_length");
    }

    #[test]
    fn chains_associatively() {
        let rule = required().and(min_length(3)).and(min_uppercase(1));
        assert!(rule.validate("Abc").is_ok());
        assert!(rule.validate("").is_err());
    }

    #[test]
    fn metadata_combines_names() {
        let meta = And::new(min_length(3), min_uppercase(1)).metadata();
        assert_eq!(meta.name, "And(MinLength, MinUppercase)");
        assert!(meta.tags.contains(&"combinator".to_string()));
    }
}
