//! Scoring: similarity ratio plus token penalty.
//!
//! Pure and deterministic. Given the same normalized inputs and the
//! same policy, the breakdown never changes.

pub mod scorer;
pub mod similarity;

pub use scorer::{PenaltyPolicy, ScoreBreakdown, Scorer};
pub use similarity::{match_score, similarity_ratio};
