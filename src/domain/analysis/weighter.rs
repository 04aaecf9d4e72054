//! Weighter - Scales normalized scores by criterion weight.

use crate::domain::foundation::{column_count, AnalysisError, Matrix};

/// Elementwise weighting of a normalized matrix.
pub struct Weighter;

impl Weighter {
    /// Multiplies every column by its weight.
    ///
    /// Weights are not required to sum to 1 and their sign is not checked.
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &[f64]) -> Result<Matrix, AnalysisError> {
        let columns = column_count(normalized)?;
        if weights.len() != columns {
            return Err(AnalysisError::dimension_mismatch(
                "weights",
                columns,
                weights.len(),
            ));
        }

        Ok(normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect())
    }
}
