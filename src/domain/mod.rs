//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, matrix helpers)
//! - `analysis` - Pure domain services for TOPSIS ranking

pub mod analysis;
pub mod foundation;
