//! Core types for text validation:
//! - [`TextRule`], the contract every rule implements
//! - [`RuleViolation`], the value-level failure a rule returns
//! - [`RuleMetadata`] for introspection

mod error;
mod metadata;
mod traits;

pub use error::{ConfigError, RuleViolation};
pub use metadata::{RuleComplexity, RuleMetadata};
pub use traits::{TextRule, TextRuleExt};
