//! Minimum-length rule.
//!
//! By default, length is measured in Unicode scalar values (chars), which
//! is what the error message means by "character". Use the `.bytes()`
//! constructor to count raw bytes when the input is known to be ASCII.

use crate::core::{RuleComplexity, RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a field has at least a minimum length.
///
/// The threshold is captured at construction time, along with the rendered
/// error message. A threshold of 0 always passes.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rule = MinLength::new(3);
/// assert!(rule.validate("abc").is_ok());
///
/// let violation = rule.validate("ab").unwrap_err();
/// assert_eq!(violation.message(), "Must be at least 3 character(s) long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
    mode: LengthMode,
    message: String,
}

impl MinLength {
    /// Creates a new minimum length rule (counts Unicode chars by default).
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Chars,
            message: format!("Must be at least {min} character(s) long"),
        }
    }

    /// Creates a minimum length rule that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            mode: LengthMode::Bytes,
            ..Self::new(min)
        }
    }

    /// Returns the minimum required length (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the counting mode.
    pub fn mode(&self) -> LengthMode {
        self.mode
    }
}

impl TextRule for MinLength {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        let len = self.mode.measure(text);
        if len >= self.min {
            Ok(())
        } else {
            Err(RuleViolation::new("min_length", self.message.clone())
                .with_param("min", self.min.to_string())
                .with_param("actual", len.to_string()))
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> RuleMetadata {
        RuleMetadata::with_description(
            "MinLength",
            format!("Field must be at least {} characters", self.min),
        )
        .with_complexity(RuleComplexity::Linear)
        .with_tag("string")
        .with_tag("length")
    }
}

/// Creates a minimum length rule.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// assert!(min_length(5).validate("hello").is_ok());
/// ```
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_at_and_above_threshold() {
        let rule = MinLength::new(3);
        assert!(rule.validate("abc").is_ok());
        assert!(rule.validate("abcd").is_ok());
    }

    #[test]
    fn fails_below_threshold_with_rendered_message() {
        let violation = MinLength::new(3).validate("ab").unwrap_err();
        assert_eq!(violation.message(), "Must be at least 3 character(s) long");
        assert_eq!(violation.param("min"), Some("3"));
        assert_eq!(violation.param("actual"), Some("2"));
    }

    #[test]
    fn zero_threshold_always_passes() {
        let rule = MinLength::new(0);
        assert!(rule.validate("").is_ok());
        assert!(rule.validate("anything").is_ok());
    }

    #[test]
    fn whitespace_counts_toward_length() {
        // Unlike Required, MinLength does not trim.
        assert!(MinLength::new(3).validate("   ").is_ok());
    }

    #[test]
    fn counts_chars_not_bytes_by_default() {
        let rule = MinLength::new(5);
        assert!(rule.validate("héllo").is_ok()); // 5 chars, 6 bytes
        assert!(rule.validate("日本語").is_err()); // 3 chars, 9 bytes

        let byte_rule = MinLength::bytes(5);
        assert!(byte_rule.validate("日本語").is_ok());
    }

    #[test]
    fn message_is_fixed_per_instance() {
        let rule = min_length(7);
        assert_eq!(rule.error_message(), "Must be at least 7 character(s) long");
        let violation = rule.validate("short").unwrap_err();
        assert_eq!(violation.message(), rule.error_message());
    }
}
