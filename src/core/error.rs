//! Error types for rule evaluation and rule-set construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// RULE VIOLATION
// ============================================================================

/// A failed rule check.
///
/// Violations are plain values, not exceptions: a rule that is satisfied
/// returns `Ok(())`, a rule that is not returns one of these. The `message`
/// is the rule's fixed, user-facing error message; `code` is a stable
/// machine-readable identifier for the kind of failure.
///
/// # Examples
///
/// ```
/// use fieldrule::core::RuleViolation;
///
/// let violation = RuleViolation::new("min_length", "Must be at least 3 character(s) long")
///     .with_param("min", "3")
///     .with_param("actual", "2");
///
/// assert_eq!(violation.code(), "min_length");
/// assert_eq!(violation.param("actual"), Some("2"));
/// assert_eq!(violation.to_string(), "Must be at least 3 character(s) long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RuleViolation {
    /// Stable identifier for the kind of failure.
    code: String,
    /// Human-readable error message, fixed per rule instance.
    message: String,
    /// Structured details about the failure (thresholds, measured values).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    params: Vec<(String, String)>,
}

impl RuleViolation {
    /// Creates a new violation with a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Attaches a structured detail to the violation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the failure code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a structured detail by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while building rules from declarative definitions.
///
/// Rule constructors in the typed API take `usize` thresholds, so a negative
/// threshold is unrepresentable there. Declarative definitions come from the
/// host's form schemas as JSON integers, which is where invalid configuration
/// can actually appear; it is rejected when the rule set is built, never at
/// validation time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule definition carried an out-of-range parameter.
    #[error("invalid configuration for `{rule}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending rule definition.
        rule: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The definition document itself could not be parsed.
    #[error("malformed rule definition: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an invalid-configuration error.
    pub fn invalid(rule: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            rule,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_displays_message() {
        let violation = RuleViolation::new("required", "The field is required");
        assert_eq!(violation.to_string(), "The field is required");
    }

    #[test]
    fn violation_params_are_ordered_and_queryable() {
        let violation = RuleViolation::new("min_length", "too short")
            .with_param("min", "5")
            .with_param("actual", "2");

        assert_eq!(violation.param("min"), Some("5"));
        assert_eq!(violation.param("actual"), Some("2"));
        assert_eq!(violation.param("missing"), None);
    }

    #[test]
    fn violation_serializes_without_empty_params() {
        let violation = RuleViolation::new("required", "The field is required");
        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["code"], "required");
        assert_eq!(json["message"], "The field is required");
        assert!(json.get("params").is_none());
    }

    #[test]
    fn config_error_names_the_rule() {
        let err = ConfigError::invalid("min_length", "`min` must not be negative, got -3");
        assert!(err.to_string().contains("min_length"));
        assert!(err.to_string().contains("-3"));
    }
}
