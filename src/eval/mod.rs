//! Evaluation module for morris positions
//!
//! The evaluation considers:
//! - Three in a row (terminal win/loss)
//! - Open twos on each of the 8 lines

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_score, PatternScore};
