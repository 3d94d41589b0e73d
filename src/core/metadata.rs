//! Rule metadata for introspection.
//!
//! Hosts use this to generate field documentation, order cheap rules first,
//! and label failures in diagnostics.

use std::fmt;

// ============================================================================
// RULE METADATA
// ============================================================================

/// Metadata a rule exposes about itself.
#[derive(Debug, Clone)]
pub struct RuleMetadata {
    /// Human-readable name of the rule.
    pub name: String,
    /// Optional description of what the rule checks.
    pub description: Option<String>,
    /// Computational complexity of one validation pass.
    pub complexity: RuleComplexity,
    /// Tags for categorization.
    pub tags: Vec<String>,
}

impl Default for RuleMetadata {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            description: None,
            complexity: RuleComplexity::Constant,
            tags: Vec::new(),
        }
    }
}

impl RuleMetadata {
    /// Creates metadata with just a name.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates metadata with a name and description.
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Sets the complexity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_complexity(mut self, complexity: RuleComplexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Adds a tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

// ============================================================================
// RULE COMPLEXITY
// ============================================================================

/// Cost classification for a single validation pass.
///
/// All rules shipped by this crate are `Constant` or `Linear`; the
/// classification exists so hosts can order rule sets cheapest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RuleComplexity {
    /// O(1) in the input length.
    #[default]
    Constant,
    /// O(n) in the input length.
    Linear,
    /// Worse than linear, or dependent on external state.
    Expensive,
}

impl RuleComplexity {
    /// Numeric score for ordering (lower is cheaper).
    #[must_use]
    pub fn score(&self) -> u8 {
        match self {
            Self::Constant => 1,
            Self::Linear => 2,
            Self::Expensive => 3,
        }
    }

    /// Combines two complexities, keeping the more expensive one.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }
}

impl fmt::Display for RuleComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "O(1)"),
            Self::Linear => write!(f, "O(n)"),
            Self::Expensive => write!(f, "expensive"),
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
    fn complexity_ordering() {
        assert!(RuleComplexity::Constant < RuleComplexity::Linear);
        assert!(RuleComplexity::Linear < RuleComplexity::Expensive);
        assert_eq!(
            RuleComplexity::Constant.combine(RuleComplexity::Linear),
            RuleComplexity::Linear
        );
    }

    #[test]
    fn metadata_builder_chain() {
        let meta = RuleMetadata::with_description("MinLength", "Checks minimum length")
            .with_complexity(RuleComplexity::Linear)
            .with_tag("string")
            .with_tag("length");

        assert_eq!(meta.name, "MinLength");
        assert_eq!(meta.complexity, RuleComplexity::Linear);
        assert_eq!(meta.tags, vec!["string", "length"]);
    }
}
