//! Ideal Point Extractor - Best (J+) and worst (J-) value per criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{column, column_count, AnalysisError};

/// The ideal and anti-ideal rows of a weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    /// J+: the best weighted value on every criterion.
    pub best: Vec<f64>,
    /// J-: the worst weighted value on every criterion.
    pub worst: Vec<f64>,
}

impl IdealPoints {
    /// Returns the number of criteria covered.
    pub fn criterion_count(&self) -> usize {
        self.best.len()
    }
}

/// Selects ideal points from a weighted matrix.
pub struct IdealPointExtractor;

impl IdealPointExtractor {
    /// Extracts J+ and J-.
    ///
    /// # Algorithm
    /// For each criterion take the column max and min. A beneficial criterion
    /// uses max as best and min as worst; a non-beneficial one swaps them.
    ///
    /// # Edge Cases
    /// - Empty matrix: `EmptyInput`
    /// - Single alternative: best and worst are both that alternative's row
    pub fn extract(weighted: &[Vec<f64>], beneficial: &[bool]) -> Result<IdealPoints, AnalysisError> {
        let columns = column_count(weighted)?;
        if beneficial.len() != columns {
            return Err(AnalysisError::dimension_mismatch(
                "beneficial flags",
                columns,
                beneficial.len(),
            ));
        }

        let mut best = Vec::with_capacity(columns);
        let mut worst = Vec::with_capacity(columns);

        for (j, &is_beneficial) in beneficial.iter().enumerate() {
            let max = column(weighted, j).fold(f64::NEG_INFINITY, f64::max);
            let min = column(weighted, j).fold(f64::INFINITY, f64::min);

            if is_beneficial {
                best.push(max);
                worst.push(min);
            } else {
                best.push(min);
                worst.push(max);
            }
        }

        Ok(IdealPoints { best, worst })
    }
}
