//! Declarative rule-set definitions.
//!
//! Hosts describe field rules in their form schemas and build a [`RuleSet`]
//! from them at field-setup time. Thresholds arrive as JSON integers, so a
//! negative value is representable on the wire; it is rejected here, at
//! build time, with [`ConfigError::InvalidConfiguration`].
//!
//! ```
//! use fieldrule::config::RuleSetConfig;
//!
//! let config = RuleSetConfig::from_json(
//!     r#"{
//!         "mode": "fail-fast",
//!         "rules": [
//!             { "type": "required" },
//!             { "type": "min_length", "min": 8 },
//!             { "type": "min_uppercase", "min": 1 }
//!         ]
//!     }"#,
//! ).unwrap();
//!
//! let rules = config.build().unwrap();
//! assert!(rules.is_valid("Password"));
//! assert!(!rules.is_valid("pw"));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, TextRule};
use crate::rules::{MinLength, MinUppercase, Required};
use crate::ruleset::{EvaluationMode, RuleSet};

// ============================================================================
// RULE CONFIG
// ============================================================================

/// One rule definition, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Field must not be empty or whitespace-only.
    Required,
    /// Field must have at least `min` characters.
    MinLength {
        /// Minimum length; must not be negative.
        min: i64,
    },
    /// Field must contain at least `min` uppercase letters.
    MinUppercase {
        /// Minimum count; must not be negative.
        min: i64,
    },
}

impl RuleConfig {
    /// Builds the rule this definition describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] when a threshold is
    /// negative.
    pub fn build(&self) -> Result<Box<dyn TextRule>, ConfigError> {
        match *self {
            RuleConfig::Required => Ok(Box::new(Required)),
            RuleConfig::MinLength { min } => {
                let min = check_threshold("min_length", min)?;
                Ok(Box::new(MinLength::new(min)))
            }
            RuleConfig::MinUppercase { min } => {
                let min = check_threshold("min_uppercase", min)?;
                Ok(Box::new(MinUppercase::new(min)))
            }
        }
    }
}

fn check_threshold(rule: &'static str, min: i64) -> Result<usize, ConfigError> {
    usize::try_from(min)
        .map_err(|_| ConfigError::invalid(rule, format!("`min` must not be negative, got {min}")))
}

// ============================================================================
// RULE SET CONFIG
// ============================================================================

/// A full rule-set definition: evaluation mode plus ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// How failures are reported; defaults to collect-all.
    #[serde(default)]
    pub mode: EvaluationMode,
    /// Rule definitions, applied in order.
    pub rules: Vec<RuleConfig>,
}

impl RuleSetConfig {
    /// Parses a definition from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the rule set this definition describes.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid rule definition.
    pub fn build(&self) -> Result<RuleSet, ConfigError> {
        let mut set = RuleSet::new().with_mode(self.mode);
        for rule in &self.rules {
            set.push(rule.build()?);
        }
        Ok(set)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_rules_in_definition_order() {
        let config = RuleSetConfig {
            mode: EvaluationMode::CollectAll,
            rules: vec![
                RuleConfig::Required,
                RuleConfig::MinLength { min: 3 },
                RuleConfig::MinUppercase { min: 1 },
            ],
        };

        let rules = config.build().unwrap();
        assert_eq!(rules.len(), 3);

        let report = rules.evaluate("");
        assert_eq!(report.first().unwrap().code(), "required");
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn negative_threshold_is_invalid_configuration() {
        let err = RuleConfig::MinLength { min: -3 }.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidConfiguration {
                rule: "min_length",
                ..
            }
        ));

        let err = RuleConfig::MinUppercase { min: -1 }.build().unwrap_err();
        assert!(err.to_string().contains("min_uppercase"));
    }

    #[test]
    fn mode_defaults_to_collect_all() {
        let config =
            RuleSetConfig::from_json(r#"{ "rules": [ { "type": "required" } ] }"#).unwrap();
        assert_eq!(config.mode, EvaluationMode::CollectAll);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = RuleSetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn unknown_rule_type_is_rejected_at_parse_time() {
        let err = RuleSetConfig::from_json(
            r#"{ "rules": [ { "type": "max_length", "max": 3 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RuleSetConfig {
            mode: EvaluationMode::FailFast,
            rules: vec![RuleConfig::MinLength { min: 8 }],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RuleSetConfig::from_json(&json).unwrap(), config);
    }
}
