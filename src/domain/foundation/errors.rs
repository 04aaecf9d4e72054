//! Error types for the analysis pipeline.

use std::fmt;
use thiserror::Error;

/// Errors raised while validating inputs or running the TOPSIS pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Decision problem has no alternatives or no criteria")]
    EmptyInput,

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion {criterion} has a zero sum of squares and cannot be normalized")]
    ZeroColumn { criterion: usize },

    #[error("Alternative {alternative} is at zero distance from both ideal points")]
    DegenerateCase { alternative: usize },

    #[error("Non-finite value in {what} at index {index}")]
    NonFiniteValue { what: String, index: usize },

    #[error("Weight for criterion {criterion} is negative ({value})")]
    NegativeWeight { criterion: usize, value: f64 },
}

impl AnalysisError {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AnalysisError::DimensionMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates a non-finite value error.
    pub fn non_finite(what: impl Into<String>, index: usize) -> Self {
        AnalysisError::NonFiniteValue {
            what: what.into(),
            index,
        }
    }

    /// Returns the category code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::EmptyInput => ErrorCode::EmptyInput,
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AnalysisError::ZeroColumn { .. } => ErrorCode::DomainError,
            AnalysisError::DegenerateCase { .. } => ErrorCode::DegenerateCase,
            AnalysisError::NonFiniteValue { .. } | AnalysisError::NegativeWeight { .. } => {
                ErrorCode::InvalidValue
            }
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyInput,
    DimensionMismatch,
    DomainError,
    DegenerateCase,
    InvalidValue,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::DomainError => "DOMAIN_ERROR",
            ErrorCode::DegenerateCase => "DEGENERATE_CASE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
        };
        write!(f, "{}", s)
    }
}
