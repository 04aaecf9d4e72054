//! TOPSIS Ranker - Multi-criteria decision ranking
//!
//! This crate ranks alternatives scored against weighted criteria by their
//! relative closeness to an ideal solution (TOPSIS).

pub mod adapters;
pub mod config;
pub mod domain;
