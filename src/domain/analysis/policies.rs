//! Policies for the two numeric edge cases of the pipeline.

use serde::{Deserialize, Serialize};

/// What to do with a criterion whose column is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroColumnPolicy {
    /// Fail with `AnalysisError::ZeroColumn`.
    #[default]
    Reject,
    /// Normalize every value in the column to 0.
    TreatAsZero,
}

/// What similarity to assign when an alternative is at zero distance from
/// both the best and the worst ideal point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// The alternative coincides with the ideal point, so it scores 1.0.
    #[default]
    Ideal,
    /// Score 0.5, halfway between ideal and anti-ideal.
    Midpoint,
    /// Fail with `AnalysisError::DegenerateCase`.
    Reject,
}

impl DegeneratePolicy {
    /// The substituted similarity, or `None` when the policy rejects.
    pub fn similarity(&self) -> Option<f64> {
        match self {
            DegeneratePolicy::Ideal => Some(1.0),
            DegeneratePolicy::Midpoint => Some(0.5),
            DegeneratePolicy::Reject => None,
        }
    }
}

/// Options for a single evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    #[serde(default)]
    pub zero_column_policy: ZeroColumnPolicy,
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
    /// Skip the non-negative weight precondition.
    #[serde(default)]
    pub allow_negative_weights: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_except_degenerate() {
        let options = EvaluationOptions::default();
        assert_eq!(options.zero_column_policy, ZeroColumnPolicy::Reject);
        assert_eq!(options.degenerate_policy, DegeneratePolicy::Ideal);
        assert!(!options.allow_negative_weights);
    }

    #[test]
    fn degenerate_policy_similarity() {
        assert_eq!(DegeneratePolicy::Ideal.similarity(), Some(1.0));
        assert_eq!(DegeneratePolicy::Midpoint.similarity(), Some(0.5));
        assert_eq!(DegeneratePolicy::Reject.similarity(), None);
    }

    #[test]
    fn policies_deserialize_from_snake_case() {
        let policy: ZeroColumnPolicy = serde_json::from_str("\"treat_as_zero\"").unwrap();
        assert_eq!(policy, ZeroColumnPolicy::TreatAsZero);

        let policy: DegeneratePolicy = serde_json::from_str("\"midpoint\"").unwrap();
        assert_eq!(policy, DegeneratePolicy::Midpoint);
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: EvaluationOptions =
            serde_json::from_str(r#"{"degenerate_policy": "reject"}"#).unwrap();
        assert_eq!(options.degenerate_policy, DegeneratePolicy::Reject);
        assert_eq!(options.zero_column_policy, ZeroColumnPolicy::Reject);
        assert!(!options.allow_negative_weights);
    }
}
