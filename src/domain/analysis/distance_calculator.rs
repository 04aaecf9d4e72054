//! Distance Calculator - Euclidean separation from the ideal points.

use serde::{Deserialize, Serialize};

use super::IdealPoints;
use crate::domain::foundation::{column_count, AnalysisError};

/// Per-alternative distances, parallel-indexed to the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

impl Distances {
    /// Returns the number of alternatives covered.
    pub fn len(&self) -> usize {
        self.to_best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_best.is_empty()
    }
}

/// Computes L2 distances between weighted rows and ideal points.
pub struct DistanceCalculator;

impl DistanceCalculator {
    /// Computes the distance of every row to J+ and to J-.
    ///
    /// Both distances are non-negative and zero only when the row equals the
    /// corresponding ideal point on every criterion.
    pub fn compute(weighted: &[Vec<f64>], ideal: &IdealPoints) -> Result<Distances, AnalysisError> {
        let columns = column_count(weighted)?;
        if ideal.best.len() != columns || ideal.worst.len() != columns {
            return Err(AnalysisError::dimension_mismatch(
                "ideal points",
                columns,
                ideal.best.len().min(ideal.worst.len()),
            ));
        }

        let (to_best, to_worst): (Vec<f64>, Vec<f64>) = weighted
            .iter()
            .map(|row| {
                (
                    Self::euclidean(row, &ideal.best),
                    Self::euclidean(row, &ideal.worst),
                )
            })
            .unzip();

        Ok(Distances { to_best, to_worst })
    }

    /// Euclidean distance over halved differences, rescaled by the largest
    /// one. Halving keeps `x - y` finite for any pair of finite inputs; the
    /// result is infinite only when the true distance exceeds `f64::MAX`.
    fn euclidean(a: &[f64], b: &[f64]) -> f64 {
        let halves: Vec<f64> = a.iter().zip(b).map(|(x, y)| 0.5 * x - 0.5 * y).collect();
        let scale = halves.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
        if scale == 0.0 {
            return 0.0;
        }

        let sum: f64 = halves
            .iter()
            .map(|d| {
                let ratio = d / scale;
                ratio * ratio
            })
            .sum();
        2.0 * scale * sum.sqrt()
    }
}
