//! NOT combinator - rule negation.

use crate::core::{RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// NOT COMBINATOR
// ============================================================================

/// Inverts a rule: passes when the inner rule fails and vice versa.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rule = min_uppercase(1).not();
///
/// assert!(rule.validate("all lowercase").is_ok());
/// assert!(rule.validate("Has Uppercase").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Not<R> {
    inner: R,
    message: String,
}

impl<R: TextRule> Not<R> {
    /// Creates a new NOT combinator.
    pub fn new(inner: R) -> Self {
        let message = format!("Must not satisfy: {}", inner.error_message());
        Self { inner, message }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwraps the combinator, returning the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: TextRule> TextRule for Not<R> {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        match self.inner.validate(text) {
            Ok(()) => Err(RuleViolation::new("not", self.message.clone())),
            Err(_) => Ok(()),
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> RuleMetadata {
        let inner_meta = self.inner.metadata();
        RuleMetadata {
            name: format!("Not({})", inner_meta.name),
            description: Some(format!("{} must not pass", inner_meta.name)),
            complexity: inner_meta.complexity,
            tags: {
                let mut tags = inner_meta.tags;
                tags.push("combinator".to_string());
                tags
            },
        }
    }
}

/// Creates a NOT combinator around a rule.
pub fn not<R: TextRule>(rule: R) -> Not<R> {
    Not::new(rule)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextRuleExt;
    use crate::rules::required;

    #[test]
    fn inverts_inner_rule() {
        let rule = Not::new(required());
        assert!(rule.validate("").is_ok());
        assert!(rule.validate("text").is_err());
    }

    #[test]
    fn double_negation_restores_behavior() {
        let original = required();
        let double = required().not().not();

        for input in ["", "   ", "a", "text"] {
            assert_eq!(
                original.validate(input).is_ok(),
                double.validate(input).is_ok(),
                "mismatch on {input:?}"
            );
        }
    }
}
