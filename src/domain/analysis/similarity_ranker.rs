//! Similarity Ranker - Relative closeness to the ideal solution and ordering.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DegeneratePolicy, Distances};
use crate::domain::foundation::AnalysisError;

/// One entry of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    /// Similarity to the ideal solution, in [0, 1].
    pub score: f64,
}

/// Alternatives ordered by descending similarity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    pub rankings: Vec<RankedAlternative>,
}

impl RankedResult {
    /// Returns the top-ranked alternative, if any.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.rankings.first()
    }

    /// Returns the alternative names in ranking order.
    pub fn names(&self) -> Vec<&str> {
        self.rankings.iter().map(|r| r.name.as_str()).collect()
    }

    /// Finds the entry for a named alternative.
    pub fn get(&self, name: &str) -> Option<&RankedAlternative> {
        self.rankings.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

/// Similarity scoring and ranking.
pub struct SimilarityRanker;

impl SimilarityRanker {
    /// Computes `to_worst / (to_best + to_worst)` for every alternative.
    ///
    /// # Edge Cases
    /// - Zero denominator: resolved by `policy`
    /// - Infinite distance: `NonFiniteValue`, never a NaN score
    pub fn similarities(distances: &Distances, policy: DegeneratePolicy) -> Result<Vec<f64>, AnalysisError> {
        if distances.to_worst.len() != distances.to_best.len() {
            return Err(AnalysisError::dimension_mismatch(
                "distances to worst",
                distances.to_best.len(),
                distances.to_worst.len(),
            ));
        }

        distances
            .to_best
            .iter()
            .zip(&distances.to_worst)
            .enumerate()
            .map(|(alternative, (&to_best, &to_worst))| -> Result<f64, AnalysisError> {
                if !to_best.is_finite() || !to_worst.is_finite() {
                    return Err(AnalysisError::non_finite("distances", alternative));
                }

                let total = to_best + to_worst;
                if total.is_infinite() {
                    return Ok((0.5 * to_worst) / (0.5 * to_best + 0.5 * to_worst));
                }
                if total > 0.0 {
                    return Ok(to_worst / total);
                }

                let score = policy
                    .similarity()
                    .ok_or(AnalysisError::DegenerateCase { alternative })?;
                warn!(alternative, score, "Degenerate alternative assigned fixed similarity");
                Ok(score)
            })
            .collect()
    }

    /// Scores and sorts alternatives by descending similarity.
    ///
    /// The sort is stable: exact ties keep their input order.
    pub fn rank(
        names: &[String],
        distances: &Distances,
        policy: DegeneratePolicy,
    ) -> Result<RankedResult, AnalysisError> {
        let scores = Self::similarities(distances, policy)?;
        Self::rank_scores(names, &scores)
    }

    /// Sorts precomputed similarity scores.
    pub fn rank_scores(names: &[String], scores: &[f64]) -> Result<RankedResult, AnalysisError> {
        if names.len() != scores.len() {
            return Err(AnalysisError::dimension_mismatch(
                "alternative names",
                scores.len(),
                names.len(),
            ));
        }

        let mut pairs: Vec<(&String, f64)> = names.iter().zip(scores.iter().copied()).collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));

        let rankings = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, score))| RankedAlternative {
                rank: i + 1,
                name: name.clone(),
                score,
            })
            .collect();

        Ok(RankedResult { rankings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn similarity_is_relative_closeness() {
        let distances = Distances {
            to_best: vec![1.0, 3.0],
            to_worst: vec![3.0, 1.0],
        };
        let scores = SimilarityRanker::similarities(&distances, DegeneratePolicy::Reject).unwrap();
        assert_eq!(scores, vec![0.75, 0.25]);
    }

    #[test]
    fn alternative_at_ideal_scores_one() {
        let distances = Distances {
            to_best: vec![0.0],
            to_worst: vec![2.0],
        };
        let scores = SimilarityRanker::similarities(&distances, DegeneratePolicy::Reject).unwrap();
        assert_eq!(scores, vec![1.0]);
    }

    #[test]
    fn degenerate_policy_ideal() {
        let distances = Distances {
            to_best: vec![0.0],
            to_worst: vec![0.0],
        };
        let scores = SimilarityRanker::similarities(&distances, DegeneratePolicy::Ideal).unwrap();
        assert_eq!(scores, vec![1.0]);
    }

    #[test]
    fn degenerate_policy_midpoint() {
        let distances = Distances {
            to_best: vec![0.0, 1.0],
            to_worst: vec![0.0, 1.0],
        };
        let scores = SimilarityRanker::similarities(&distances, DegeneratePolicy::Midpoint).unwrap();
        assert_eq!(scores, vec![0.5, 0.5]);
    }

    #[test]
    fn degenerate_policy_reject() {
        let distances = Distances {
            to_best: vec![1.0, 0.0],
            to_worst: vec![1.0, 0.0],
        };
        let result = SimilarityRanker::similarities(&distances, DegeneratePolicy::Reject);
        assert_eq!(result, Err(AnalysisError::DegenerateCase { alternative: 1 }));
    }

    #[test]
    fn infinite_distance_is_rejected() {
        let distances = Distances {
            to_best: vec![1.0, 0.0],
            to_worst: vec![1.0, f64::INFINITY],
        };
        let result = SimilarityRanker::similarities(&distances, DegeneratePolicy::Ideal);
        assert_eq!(result, Err(AnalysisError::non_finite("distances", 1)));
    }

    #[test]
    fn distance_sum_beyond_f64_range_still_scores() {
        let distances = Distances {
            to_best: vec![f64::MAX],
            to_worst: vec![f64::MAX],
        };
        let scores = SimilarityRanker::similarities(&distances, DegeneratePolicy::Reject).unwrap();
        assert_eq!(scores, vec![0.5]);
    }

    #[test]
    fn rank_sorts_descending() {
        let distances = Distances {
            to_best: vec![3.0, 1.0, 2.0],
            to_worst: vec![1.0, 3.0, 2.0],
        };
        let result =
            SimilarityRanker::rank(&names(&["A", "B", "C"]), &distances, DegeneratePolicy::Ideal)
                .unwrap();

        assert_eq!(result.names(), vec!["B", "C", "A"]);
        assert_eq!(result.rankings[0].rank, 1);
        assert_eq!(result.rankings[2].rank, 3);
        assert_eq!(result.best().map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn ties_keep_input_order() {
        let result =
            SimilarityRanker::rank_scores(&names(&["X", "Y", "Z", "W"]), &[0.4, 0.9, 0.4, 0.9])
                .unwrap();
        assert_eq!(result.names(), vec!["Y", "W", "X", "Z"]);
    }

    #[test]
    fn name_count_must_match_scores() {
        let result = SimilarityRanker::rank_scores(&names(&["A"]), &[0.1, 0.2]);
        assert_eq!(
            result,
            Err(AnalysisError::dimension_mismatch("alternative names", 2, 1))
        );
    }

    #[test]
    fn get_finds_entry_by_name() {
        let result = SimilarityRanker::rank_scores(&names(&["A", "B"]), &[0.2, 0.8]).unwrap();
        assert_eq!(result.get("A").map(|r| r.rank), Some(2));
        assert!(result.get("missing").is_none());
    }

    #[test]
    fn ranked_result_serializes_as_list() {
        let result = SimilarityRanker::rank_scores(&names(&["A"]), &[1.0]).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"rank":1,"name":"A","score":1.0}]"#);
    }
}
