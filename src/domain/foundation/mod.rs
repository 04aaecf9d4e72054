//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy and matrix helpers that form the
//! vocabulary of the analysis pipeline.

mod errors;
mod matrix;

pub use errors::{AnalysisError, ErrorCode};
pub use matrix::{column, column_count, Matrix};
