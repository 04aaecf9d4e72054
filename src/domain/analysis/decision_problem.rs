//! Decision Problem - The five inputs of a TOPSIS run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Matrix;

/// Alternatives scored against weighted criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    /// Ordered alternative names, one per matrix row.
    pub alternatives: Vec<String>,
    /// Ordered criterion names, one per matrix column.
    pub criteria: Vec<String>,
    /// Scores, rows = alternatives, columns = criteria.
    pub matrix: Matrix,
    /// Criterion weights.
    pub weights: Vec<f64>,
    /// `true` when higher values of the criterion are better.
    pub beneficial: Vec<bool>,
}

impl DecisionProblem {
    /// Creates a builder for constructing a decision problem.
    pub fn builder() -> DecisionProblemBuilder {
        DecisionProblemBuilder::new()
    }

    /// Returns true if the problem has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Builder for constructing DecisionProblem instances.
///
/// Criteria are declared with their weight and direction together so the
/// three criterion vectors cannot drift apart.
#[derive(Debug, Default)]
pub struct DecisionProblemBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    weights: Vec<f64>,
    beneficial: Vec<bool>,
    matrix: Matrix,
}

impl DecisionProblemBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion where higher is better.
    pub fn beneficial(self, name: impl Into<String>, weight: f64) -> Self {
        self.criterion(name, weight, true)
    }

    /// Adds a criterion where lower is better.
    pub fn non_beneficial(self, name: impl Into<String>, weight: f64) -> Self {
        self.criterion(name, weight, false)
    }

    /// Adds a criterion.
    pub fn criterion(mut self, name: impl Into<String>, weight: f64, beneficial: bool) -> Self {
        self.criteria.push(name.into());
        self.weights.push(weight);
        self.beneficial.push(beneficial);
        self
    }

    /// Adds an alternative with one score per criterion.
    pub fn alternative(mut self, name: impl Into<String>, scores: Vec<f64>) -> Self {
        self.alternatives.push(name.into());
        self.matrix.push(scores);
        self
    }

    /// Builds the decision problem.
    pub fn build(self) -> DecisionProblem {
        DecisionProblem {
            alternatives: self.alternatives,
            criteria: self.criteria,
            matrix: self.matrix,
            weights: self.weights,
            beneficial: self.beneficial,
        }
    }
}
