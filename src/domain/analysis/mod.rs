//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! This module contains stateless functions that take a decision matrix,
//! criterion weights and beneficial flags, and rank alternatives by their
//! relative closeness to an ideal solution.
//!
//! # Components
//!
//! - `Normalizer` - Column-wise vector normalization
//! - `Weighter` - Elementwise scaling by criterion weight
//! - `IdealPointExtractor` - Best (J+) and worst (J-) value per criterion
//! - `DistanceCalculator` - Euclidean distance to both ideal points
//! - `SimilarityRanker` - Similarity score and stable descending sort
//! - `TopsisEvaluator` - Input validation and the full pipeline
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Each stage takes
//! the previous stage's output by reference and returns a new value, so
//! independent evaluations never share state.

mod decision_problem;
mod distance_calculator;
mod evaluator;
mod ideal_points;
mod normalizer;
mod policies;
mod similarity_ranker;
mod weighter;

// Re-export all public types
pub use decision_problem::{DecisionProblem, DecisionProblemBuilder};
pub use distance_calculator::{DistanceCalculator, Distances};
pub use evaluator::{TopsisAnalysis, TopsisEvaluator};
pub use ideal_points::{IdealPointExtractor, IdealPoints};
pub use normalizer::Normalizer;
pub use policies::{DegeneratePolicy, EvaluationOptions, ZeroColumnPolicy};
pub use similarity_ranker::{RankedAlternative, RankedResult, SimilarityRanker};
pub use weighter::Weighter;
