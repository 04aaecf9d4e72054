//! Normalizer - Column-wise vector normalization.

use tracing::warn;

use super::ZeroColumnPolicy;
use crate::domain::foundation::{column, column_count, AnalysisError, Matrix};

/// Vector normalization of a decision matrix.
pub struct Normalizer;

impl Normalizer {
    /// Computes the Euclidean norm of every column.
    ///
    /// # Errors
    /// - `EmptyInput` for an empty matrix
    /// - `DimensionMismatch` for ragged rows
    pub fn column_norms(matrix: &[Vec<f64>]) -> Result<Vec<f64>, AnalysisError> {
        let columns = column_count(matrix)?;

        Ok((0..columns)
            .map(|j| {
                let (scale, length) = Self::scaled_norm(matrix, j);
                scale * length
            })
            .collect())
    }

    /// Divides every value by the norm of its column.
    ///
    /// # Algorithm
    /// `out[i][j] = matrix[i][j] / sqrt(Σ_k matrix[k][j]²)`, evaluated as
    /// `(v / m) / sqrt(Σ_k (matrix[k][j] / m)²)` with `m = max_k |matrix[k][j]|`
    /// so that no intermediate square leaves the f64 range.
    ///
    /// # Edge Cases
    /// - All-zero column: rejected or zeroed according to `policy`
    /// - Single alternative: every non-zero value normalizes to ±1
    /// - Magnitudes near the f64 limits normalize like any other column
    pub fn normalize(
        matrix: &[Vec<f64>],
        policy: ZeroColumnPolicy,
    ) -> Result<Matrix, AnalysisError> {
        let columns = column_count(matrix)?;
        let norms: Vec<(f64, f64)> = (0..columns).map(|j| Self::scaled_norm(matrix, j)).collect();

        for criterion in (0..columns).filter(|&j| norms[j].0 == 0.0) {
            match policy {
                ZeroColumnPolicy::Reject => return Err(AnalysisError::ZeroColumn { criterion }),
                ZeroColumnPolicy::TreatAsZero => warn!(criterion, "Zero column normalized to 0"),
            }
        }

        Ok(matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&norms)
                    .map(|(&value, &(scale, length))| {
                        if scale == 0.0 {
                            0.0
                        } else {
                            (value / scale) / length
                        }
                    })
                    .collect()
            })
            .collect())
    }

    /// Returns `(m, s)` with `m = max|v|` over column `j` and
    /// `s = sqrt(Σ (v / m)²)`. The column norm is `m * s`; `m` is zero only
    /// for an all-zero column.
    fn scaled_norm(matrix: &[Vec<f64>], j: usize) -> (f64, f64) {
        let scale = column(matrix, j).fold(0.0_f64, |m, v| m.max(v.abs()));
        if scale == 0.0 {
            return (0.0, 0.0);
        }

        let sum: f64 = column(matrix, j)
            .map(|v| {
                let ratio = v / scale;
                ratio * ratio
            })
            .sum();
        (scale, sum.sqrt())
    }
}
