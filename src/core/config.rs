//! Game configuration.
//!
//! Hosts configure the engine at startup by providing a `GameConfig`.
//! The engine never hardcodes round counts or generation budgets.

use serde::{Deserialize, Serialize};

use crate::scoring::PenaltyPolicy;

/// Engine configuration, fixed for the lifetime of a `GameEngine`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds per game. A session reaching `total_rounds` completed
    /// rounds transitions to the terminal game-over state.
    pub total_rounds: u32,

    /// Generation budget passed to the text backend on every submission.
    pub max_new_tokens: usize,

    /// Which token-penalty policy the scorer applies.
    pub penalty_policy: PenaltyPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            max_new_tokens: 15,
            penalty_policy: PenaltyPolicy::PromptLength,
        }
    }
}

impl GameConfig {
    /// Create a config with the given round count, defaults elsewhere.
    #[must_use]
    pub fn with_rounds(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            ..Self::default()
        }
    }
}
