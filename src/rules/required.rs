//! Required-field rule.

use crate::core::{RuleMetadata, RuleViolation, TextRule};

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that a field is not empty after trimming surrounding
/// whitespace.
///
/// Input consisting only of whitespace is treated as empty.
///
/// # Examples
///
/// ```
/// use fieldrule::prelude::*;
///
/// let rule = Required;
/// assert!(rule.validate("a").is_ok());
/// assert!(rule.validate("").is_err());
/// assert!(rule.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Required {
    const MESSAGE: &'static str = "The field is required";
}

impl TextRule for Required {
    fn validate(&self, text: &str) -> Result<(), RuleViolation> {
        if text.trim().is_empty() {
            Err(RuleViolation::new("required", Self::MESSAGE))
        } else {
            Ok(())
        }
    }

    fn error_message(&self) -> &str {
        Self::MESSAGE
    }

    fn metadata(&self) -> RuleMetadata {
        RuleMetadata::with_description("Required", "Field must not be empty or whitespace-only")
            .with_tag("string")
            .with_tag("presence")
    }
}

/// Creates a required-field rule.
#[must_use]
pub const fn required() -> Required {
    Required
}

// ============================================================================
// TESTS
// ============================================================================
