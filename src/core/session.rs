//! Game sessions and per-round results.
//!
//! ## GameSession
//!
//! All mutable game state lives in a `GameSession` value:
//! - Current round number and round phase
//! - The accumulated, append-only list of round results
//!
//! Sessions are explicit values passed to engine operations; there is no
//! hidden process-wide state. Results use an `im` persistent vector, so
//! cloning a session is O(1) and a host can snapshot state freely.
//!
//! ## Invariants
//!
//! - `results.len() == current_round - 1` while awaiting a prompt
//! - `results.len() == current_round` while showing a result
//! - `current_round` never exceeds `total_rounds + 1` (game over)
//!
//! Only the engine mutates sessions; hosts read them.

use im::Vector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::GameError;

/// Opaque session identifier, unique per game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh short identifier from a v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        let full = Uuid::new_v4().simple().to_string();
        Self(full[..8].to_string())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a session is within its current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the player to submit a prompt.
    AwaitingPrompt,
    /// A prompt was submitted and scored; waiting for advance.
    ShowingResult,
    /// All rounds completed. Terminal.
    GameOver,
}

/// The outcome of one completed round. Created exactly once per
/// submission and immutable afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number.
    pub round: u32,
    /// Player who submitted the prompt.
    pub player: String,
    /// The submitted prompt, as typed.
    pub prompt: String,
    /// Generated output after echo stripping.
    pub output: String,
    /// Target the output was scored against.
    pub target: String,
    /// Similarity score in [0, 100].
    pub match_score: i64,
    /// Token penalty, always <= 0.
    pub token_penalty: i64,
    /// Final score in [0, 100].
    pub final_score: i64,
}

/// One player's game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    session_id: SessionId,
    player_name: String,
    current_round: u32,
    phase: RoundPhase,
    results: Vector<RoundResult>,
}

impl GameSession {
    /// Start a session for the named player at round 1.
    ///
    /// Fails with `EmptyPlayerName` when the name is empty after
    /// trimming.
    pub fn new(player_name: impl Into<String>) -> Result<Self, GameError> {
        let player_name = player_name.into();
        if player_name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self {
            session_id: SessionId::generate(),
            player_name,
            current_round: 1,
            phase: RoundPhase::AwaitingPrompt,
            results: Vector::new(),
        })
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Current 1-based round number. In the terminal state this is
    /// `total_rounds + 1`.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the current round's prompt has been submitted.
    #[must_use]
    pub fn prompt_submitted(&self) -> bool {
        self.phase == RoundPhase::ShowingResult
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Results of all completed rounds, in submission order.
    #[must_use]
    pub fn results(&self) -> &Vector<RoundResult> {
        &self.results
    }

    /// Record the current round's result and move to `ShowingResult`.
    pub(crate) fn record_result(&mut self, result: RoundResult) {
        debug_assert_eq!(self.phase, RoundPhase::AwaitingPrompt);
        debug_assert_eq!(result.round, self.current_round);
        self.results.push_back(result);
        self.phase = RoundPhase::ShowingResult;
    }

    /// Move past a shown result, either into the next round or into the
    /// terminal state.
    pub(crate) fn advance(&mut self, total_rounds: u32) {
        debug_assert_eq!(self.phase, RoundPhase::ShowingResult);
        self.current_round += 1;
        self.phase = if self.current_round <= total_rounds {
            RoundPhase::AwaitingPrompt
        } else {
            RoundPhase::GameOver
        };
    }
}
