//! TOPSIS Evaluator - Validates inputs and runs the five-stage pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    DecisionProblem, DistanceCalculator, Distances, EvaluationOptions, IdealPointExtractor,
    IdealPoints, Normalizer, RankedResult, SimilarityRanker, Weighter,
};
use crate::domain::foundation::{AnalysisError, Matrix};

/// Every intermediate result of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    pub normalized: Matrix,
    pub weighted: Matrix,
    pub ideal: IdealPoints,
    pub distances: Distances,
    /// Similarity per alternative, in input order.
    pub similarities: Vec<f64>,
    pub ranking: RankedResult,
}

/// Entry point of the analysis pipeline.
///
/// Holds only immutable options, so one evaluator can serve any number of
/// independent problems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopsisEvaluator {
    options: EvaluationOptions,
}

impl TopsisEvaluator {
    /// Creates an evaluator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given options.
    pub fn with_options(options: EvaluationOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Ranks alternatives by similarity to the ideal solution.
    pub fn evaluate(
        &self,
        alternatives: &[String],
        criteria: &[String],
        matrix: &[Vec<f64>],
        weights: &[f64],
        beneficial: &[bool],
    ) -> Result<RankedResult, AnalysisError> {
        self.analyze(alternatives, criteria, matrix, weights, beneficial)
            .map(|analysis| analysis.ranking)
    }

    /// Ranks the alternatives of a decision problem.
    pub fn evaluate_problem(&self, problem: &DecisionProblem) -> Result<RankedResult, AnalysisError> {
        self.evaluate(
            &problem.alternatives,
            &problem.criteria,
            &problem.matrix,
            &problem.weights,
            &problem.beneficial,
        )
    }

    /// Runs the pipeline on a decision problem and keeps every stage output.
    pub fn analyze_problem(&self, problem: &DecisionProblem) -> Result<TopsisAnalysis, AnalysisError> {
        self.analyze(
            &problem.alternatives,
            &problem.criteria,
            &problem.matrix,
            &problem.weights,
            &problem.beneficial,
        )
    }

    /// Runs the pipeline and keeps every stage output.
    ///
    /// # Errors
    /// Preconditions are checked before any arithmetic, in this order:
    /// `EmptyInput`, `DimensionMismatch`, `NonFiniteValue`, `NegativeWeight`.
    /// The stages can then fail with `ZeroColumn` or `DegenerateCase`
    /// depending on the configured policies, or with `NonFiniteValue` when a
    /// distance exceeds the f64 range.
    pub fn analyze(
        &self,
        alternatives: &[String],
        criteria: &[String],
        matrix: &[Vec<f64>],
        weights: &[f64],
        beneficial: &[bool],
    ) -> Result<TopsisAnalysis, AnalysisError> {
        self.validate(alternatives, criteria, matrix, weights, beneficial)?;

        debug!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            "Running TOPSIS analysis"
        );

        let normalized = Normalizer::normalize(matrix, self.options.zero_column_policy)?;
        let weighted = Weighter::apply_weights(&normalized, weights)?;
        let ideal = IdealPointExtractor::extract(&weighted, beneficial)?;
        let distances = DistanceCalculator::compute(&weighted, &ideal)?;
        let similarities = SimilarityRanker::similarities(&distances, self.options.degenerate_policy)?;
        let ranking = SimilarityRanker::rank_scores(alternatives, &similarities)?;

        debug!(
            best = ranking.best().map(|r| r.name.as_str()).unwrap_or_default(),
            "TOPSIS analysis complete"
        );

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            ideal,
            distances,
            similarities,
            ranking,
        })
    }

    fn validate(
        &self,
        alternatives: &[String],
        criteria: &[String],
        matrix: &[Vec<f64>],
        weights: &[f64],
        beneficial: &[bool],
    ) -> Result<(), AnalysisError> {
        if alternatives.is_empty() || criteria.is_empty() || matrix.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let criterion_count = criteria.len();
        Self::check_len("matrix rows", alternatives.len(), matrix.len())?;
        for row in matrix {
            Self::check_len("matrix row", criterion_count, row.len())?;
        }
        Self::check_len("weights", criterion_count, weights.len())?;
        Self::check_len("beneficial flags", criterion_count, beneficial.len())?;

        if let Some(index) = matrix.iter().flatten().position(|v| !v.is_finite()) {
            return Err(AnalysisError::non_finite("matrix", index));
        }
        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(AnalysisError::non_finite("weights", index));
        }

        if !self.options.allow_negative_weights {
            if let Some((criterion, &value)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
                return Err(AnalysisError::NegativeWeight { criterion, value });
            }
        }

        Ok(())
    }

    fn check_len(what: &str, expected: usize, actual: usize) -> Result<(), AnalysisError> {
        if expected != actual {
            return Err(AnalysisError::dimension_mismatch(what, expected, actual));
        }
        Ok(())
    }
}
