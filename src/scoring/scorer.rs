//! Prompt scoring.
//!
//! The scorer is a pure function from (prompt, output, target) to a
//! `ScoreBreakdown`. Output and target are trimmed and lower-cased
//! before comparison; the prompt only feeds the token penalty.
//!
//! ## Penalty policies
//!
//! Two policies exist and the host picks one at configuration time:
//!
//! - `PromptLength` (default): every prompt word costs 2 points, capped
//!   at 30. Rewards terse prompts regardless of what comes back.
//! - `OutputOverrun`: one point per word the output runs past the
//!   target's length; free when the output is no longer than the target.

use serde::{Deserialize, Serialize};

use super::similarity::match_score;
use crate::core::GameError;

/// Points charged per prompt word under `PenaltyPolicy::PromptLength`.
const PROMPT_PENALTY_PER_WORD: i64 = 2;

/// Penalty cap under `PenaltyPolicy::PromptLength`.
const PROMPT_PENALTY_CAP: i64 = 30;

/// Token-penalty policy applied by the scorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyPolicy {
    /// Penalize verbose prompts: `-min(word_count(prompt) * 2, 30)`.
    PromptLength,
    /// Penalize verbose generations: `-(word_count(output) -
    /// word_count(target))` when the output is longer, else 0.
    OutputOverrun,
}

/// The three parts of a round score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Similarity between normalized output and target, in [0, 100].
    pub match_score: i64,
    /// Token penalty, always <= 0.
    pub token_penalty: i64,
    /// `match_score + token_penalty` clamped to [0, 100].
    pub final_score: i64,
}

/// Pure scoring function with a fixed penalty policy.
#[derive(Clone, Copy, Debug)]
pub struct Scorer {
    policy: PenaltyPolicy,
}

impl Scorer {
    #[must_use]
    pub fn new(policy: PenaltyPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> PenaltyPolicy {
        self.policy
    }

    /// Score a generated output against a target.
    ///
    /// Deterministic: identical normalized inputs always produce the
    /// same breakdown. Fails with `EmptyTarget` when the target is
    /// empty after trimming; challenge loading guarantees this never
    /// happens for stored challenges.
    pub fn score(
        &self,
        prompt: &str,
        output: &str,
        target: &str,
    ) -> Result<ScoreBreakdown, GameError> {
        let target_norm = normalize(target);
        if target_norm.is_empty() {
            return Err(GameError::EmptyTarget);
        }
        let output_norm = normalize(output);

        let match_score = match_score(&output_norm, &target_norm);

        let token_penalty = match self.policy {
            PenaltyPolicy::PromptLength => {
                -(word_count(prompt) * PROMPT_PENALTY_PER_WORD).min(PROMPT_PENALTY_CAP)
            }
            PenaltyPolicy::OutputOverrun => {
                let overrun = word_count(&output_norm) - word_count(&target_norm);
                -overrun.max(0)
            }
        };

        let final_score = (match_score + token_penalty).clamp(0, 100);

        Ok(ScoreBreakdown {
            match_score,
            token_penalty,
            final_score,
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(PenaltyPolicy::PromptLength)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn word_count(s: &str) -> i64 {
    s.split_whitespace().count() as i64
}
