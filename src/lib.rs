//! Text-field validation rules for collaborative editing clients.
//!
//! The crate centers on one contract, [`TextRule`]: a pure predicate over
//! input text that either passes or returns its fixed, user-facing error
//! message as a [`RuleViolation`]. Concrete rules live in [`rules`],
//! composition in [`combinators`], ordered evaluation in [`ruleset`], and
//! declarative (JSON) definitions in [`config`]. The [`presence`] module
//! holds the plain data shapes hosts broadcast while editing together;
//! no transport is provided.
//!
//! # Examples
//!
//! ```
//! use fieldrule::prelude::*;
//!
//! let rules = RuleSet::new()
//!     .rule(required())
//!     .rule(min_length(8))
//!     .rule(min_uppercase(1));
//!
//! let report = rules.evaluate("secret");
//! assert_eq!(
//!     report.messages(),
//!     vec![
//!         "Must be at least 8 character(s) long",
//!         "Must contain at least 1 uppercase letters",
//!     ],
//! );
//! ```

pub mod combinators;
pub mod config;
pub mod core;
pub mod presence;
pub mod rules;
pub mod ruleset;

pub use crate::core::{ConfigError, RuleMetadata, RuleViolation, TextRule, TextRuleExt};
pub use crate::ruleset::{EvaluationMode, RuleSet, Violations};

/// Common imports for working with rules.
pub mod prelude {
    pub use crate::core::{RuleViolation, TextRule, TextRuleExt};
    pub use crate::rules::{
        MinLength, MinUppercase, Required, min_length, min_uppercase, required,
    };
    pub use crate::ruleset::{EvaluationMode, RuleSet, Violations};
}
