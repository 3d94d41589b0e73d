//! Rule combinators for composition.
//!
//! Combinators build compound rules out of simple ones:
//!
//! - [`And`] - both rules must pass (short-circuits on first failure)
//! - [`Or`] - at least one rule must pass
//! - [`Not`] - the inner rule must fail
//!
//! They are usually reached through the [`TextRuleExt`] methods rather than
//! constructed directly:
//!
//! ```
//! use fieldrule::prelude::*;
//!
//! let rule = required().and(min_length(8)).and(min_uppercase(1));
//!
//! assert!(rule.validate("Password").is_ok());
//! assert!(rule.validate("password").is_err());
//! ```
//!
//! [`TextRuleExt`]: crate::core::TextRuleExt

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
