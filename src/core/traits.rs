//! The core rule trait and its extension combinators.

use super::{RuleMetadata, RuleViolation};
use crate::combinators::{And, Not, Or};

// ============================================================================
// TEXT RULE
// ============================================================================

/// A pure predicate over a text value.
///
/// Implementations are immutable value objects: configuration and the
/// user-facing error message are captured at construction time, after which
/// the rule is invoked repeatedly against changing input.
///
/// # Contract
///
/// - `validate` must be deterministic for a given input, free of side
///   effects, and must not panic for any `&str` (including the empty
///   string).
/// - A satisfied rule returns `Ok(())`; an unsatisfied rule returns a
///   [`RuleViolation`] whose message equals [`error_message`].
///
/// Rules carry no mutable state, so sharing one instance across threads is
/// safe; the trait requires `Send + Sync` for that reason.
///
/// [`error_message`]: TextRule::error_message
///
/// # Examples
///
/// ```
/// use fieldrule::core::{RuleViolation, TextRule};
///
/// struct Ascii;
///
/// impl TextRule for Ascii {
///     fn validate(&self, text: &str) -> Result<(), RuleViolation> {
///         if text.is_ascii() {
///             Ok(())
///         } else {
///             Err(RuleViolation::new("ascii", self.error_message()))
///         }
///     }
///
///     fn error_message(&self) -> &str {
///         "Must contain only ASCII characters"
///     }
/// }
///
/// assert!(Ascii.validate("hello").is_ok());
/// assert!(Ascii.validate("héllo").is_err());
/// ```
pub trait TextRule: Send + Sync {
    /// Checks the rule against `text`.
    fn validate(&self, text: &str) -> Result<(), RuleViolation>;

    /// Returns the fixed, user-facing failure message.
    fn error_message(&self) -> &str;

    /// Returns metadata about this rule.
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata::default()
    }
}

impl core::fmt::Debug for dyn TextRule + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextRule")
            .field("name", &self.metadata().name)
            .finish()
    }
}

impl TextRule for Box<dyn TextRule> {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        self.as_ref().validate(text)
    }

    fn error_message(&self) -> &str {
        self.as_ref().error_message()
    }

    fn metadata(&self) -> RuleMetadata {
        self.as_ref().metadata()
    }
}

impl<R: TextRule + ?Sized> TextRule for &R {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        (**self).validate(text)
    }

    fn error_message(&self) -> &str {
        (**self).error_message()
    }

    fn metadata(&self) -> RuleMetadata {
        (**self).metadata()
    }
}

// ============================================================================
// EXTENSION COMBINATORS
// ============================================================================

/// Combinator methods available on every rule.
pub trait TextRuleExt: TextRule + Sized {
    /// Requires both this rule and `other` to pass.
    ///
    /// Short-circuits on the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldrule::prelude::*;
    ///
    /// let rule = min_length(3).and(min_uppercase(1));
    /// assert!(rule.validate("Abc").is_ok());
    /// assert!(rule.validate("abc").is_err());
    /// ```
    fn and<R: TextRule>(self, other: R) -> And<Self, R> {
        And::new(self, other)
    }

    /// Requires at least one of this rule and `other` to pass.
    fn or<R: TextRule>(self, other: R) -> Or<Self, R> {
        Or::new(self, other)
    }

    /// Inverts this rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the rule type for storage in a rule set.
    fn boxed(self) -> Box<dyn TextRule>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: TextRule> TextRuleExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::required;

    #[test]
    fn boxed_rule_delegates() {
        let rule: Box<dyn TextRule> = required().boxed();
        assert!(rule.validate("text").is_ok());
        assert!(rule.validate("   ").is_err());
        assert_eq!(rule.error_message(), "The field is required");
        assert_eq!(rule.metadata().name, "Required");
    }

    #[test]
    fn reference_rule_delegates() {
        let rule = required();
        let by_ref = &rule;
        assert!(by_ref.validate("text").is_ok());
        assert_eq!(by_ref.error_message(), rule.error_message());
    }
}
