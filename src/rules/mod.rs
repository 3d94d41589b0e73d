//! Concrete validation rules.
//!
//! Each rule is an immutable value object: configuration and the rendered
//! error message are captured at construction, after which the rule is a
//! pure predicate over input text.

pub mod length;
pub mod required;
pub mod uppercase;

pub use length::{LengthMode, MinLength, min_length};
pub use required::{Required, required};
pub use uppercase::{MinUppercase, UppercaseMode, min_uppercase};
