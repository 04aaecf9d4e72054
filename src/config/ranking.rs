//! Ranking configuration

use serde::Deserialize;

use crate::domain::analysis::{DegeneratePolicy, EvaluationOptions, ZeroColumnPolicy};

/// Edge-case policies applied to every evaluation
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct RankingConfig {
    /// All-zero criterion column handling (`reject` or `treat_as_zero`)
    #[serde(default)]
    pub zero_column_policy: ZeroColumnPolicy,

    /// Similarity for alternatives at zero distance from both ideal points
    /// (`ideal`, `midpoint` or `reject`)
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Accept negative criterion weights
    #[serde(default)]
    pub allow_negative_weights: bool,
}

impl RankingConfig {
    /// Get the evaluation options for the domain evaluator
    pub fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            zero_column_policy: self.zero_column_policy,
            degenerate_policy: self.degenerate_policy,
            allow_negative_weights: self.allow_negative_weights,
        }
    }
}
