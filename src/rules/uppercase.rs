//! Minimum-uppercase-letters rule.

use crate::core::{RuleComplexity, RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// UPPERCASE MODE
// ============================================================================

/// Which characters count as "uppercase".
///
/// The default counts true uppercase letters only. Some clients instead
/// compare each character to its own uppercase transform, which also counts
/// caseless characters such as digits and punctuation;
/// [`UppercaseMode::Uncased`] matches that behavior for hosts that need
/// identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UppercaseMode {
    /// Count only characters with the Unicode `Uppercase` property.
    #[default]
    Letters,
    /// Count every character equal to its own uppercase mapping, so
    /// caseless characters (digits, punctuation, spaces) count too.
    Uncased,
}

impl UppercaseMode {
    /// Counts the characters of `input` that qualify under this mode.
    fn count(self, input: &str) -> usize {
        match self {
            UppercaseMode::Letters => input.chars().filter(|c| c.is_uppercase()).count(),
            UppercaseMode::Uncased => input
                .chars()
                .filter(|&c| c.to_uppercase().eq(std::iter::once(c)))
                .count(),
        }
    }
}

// ============================================================================
// MIN UPPERCASE
// ============================================================================

/// Validates that a field contains at least a minimum number of uppercase
/// characters.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rule = MinUppercase::new(2);
/// assert!(rule.validate("AbC").is_ok());
///
/// let violation = rule.validate("abc").unwrap_err();
/// assert_eq!(violation.message(), "Must contain at least 2 uppercase letters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinUppercase {
    min: usize,
    mode: UppercaseMode,
    message: String,
}

impl MinUppercase {
    /// Creates a new uppercase rule that counts uppercase letters only.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            mode: UppercaseMode::Letters,
            message: format!("Must contain at least {min} uppercase letters"),
        }
    }

    /// Creates an uppercase rule with the legacy counting behavior, where
    /// caseless characters also qualify.
    #[must_use]
    pub fn uncased(min: usize) -> Self {
        Self {
            mode: UppercaseMode::Uncased,
            ..Self::new(min)
        }
    }

    /// Returns the minimum required count (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the counting mode.
    pub fn mode(&self) -> UppercaseMode {
        self.mode
    }
}

impl TextRule for MinUppercase {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        let count = self.mode.count(text);
        if count >= self.min {
            Ok(())
        } else {
            Err(RuleViolation::new("min_uppercase", self.message.clone())
                .with_param("min", self.min.to_string())
                .with_param("actual", count.to_string()))
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> RuleMetadata {
        RuleMetadata::with_description(
            "MinUppercase",
            format!("Field must contain at least {} uppercase characters", self.min),
        )
        .with_complexity(RuleComplexity::Linear)
        .with_tag("string")
        .with_tag("case")
    }
}

/// Creates an uppercase rule that counts uppercase letters only.
#[must_use]
pub fn min_uppercase(min: usize) -> MinUppercase {
    MinUppercase::new(min)
}

// ============================================================================
// TESTS
// ============================================================================
