//! Engine error types.
//!
//! Errors split into three groups:
//! - Load-time: challenge data that fails validation aborts startup
//! - Play-time: rejected transitions that leave the session untouched
//! - Boundary: generator failures, propagated verbatim (no local retry,
//!   retries could alter match outcomes non-deterministically)

use thiserror::Error;

/// All errors the engine can produce.
#[derive(Debug, Error)]
pub enum GameError {
    /// Submitted prompt is empty after trimming. Round state unchanged.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// Player name is empty after trimming; a session needs a name.
    #[error("player name is empty")]
    EmptyPlayerName,

    /// Scoring target is empty after normalization; the ratio is undefined.
    #[error("target string is empty")]
    EmptyTarget,

    /// A challenge failed load-time validation.
    #[error("challenge {index} has an empty target")]
    InvalidChallenge { index: usize },

    /// The challenge file parsed to zero entries.
    #[error("challenge store is empty")]
    NoChallenges,

    /// Aggregation was requested over zero completed rounds.
    #[error("no results to aggregate")]
    EmptyResults,

    /// A prompt was already submitted for the current round.
    #[error("round {round} already has a submission")]
    AlreadySubmitted { round: u32 },

    /// Advance was requested before the current round's prompt was submitted.
    #[error("round {round} has no submission yet")]
    PromptNotSubmitted { round: u32 },

    /// The game is over; no further transitions are accepted.
    #[error("game is over")]
    GameOver,

    /// The text generation backend failed.
    #[error("text generation failed: {0}")]
    Generator(anyhow::Error),

    /// Challenge file is not valid JSON.
    #[error("failed to parse challenge data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Challenge file could not be read.
    #[error("failed to read challenge data: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidChallenge { index: 3 };
        assert_eq!(err.to_string(), "challenge 3 has an empty target");

        let err = GameError::AlreadySubmitted { round: 2 };
        assert_eq!(err.to_string(), "round 2 already has a submission");
    }
}
