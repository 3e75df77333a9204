//! The game engine: round progression as a small state machine.
//!
//! ## States
//!
//! Per session: `AwaitingPrompt(n)` -> `ShowingResult(n)` ->
//! `AwaitingPrompt(n+1)` | `GameOver`.
//!
//! ## Transitions
//!
//! - `submit_prompt`: only from `AwaitingPrompt`. Validates the prompt,
//!   calls the generator, scores the output, appends exactly one
//!   `RoundResult`, moves to `ShowingResult`. A rejected submission
//!   leaves the session untouched.
//! - `advance_round`: only from `ShowingResult`. Steps to the next
//!   round, or to `GameOver` past the last one.
//!
//! Side effects are confined to the passed-in session; the engine holds
//! only immutable handles (store, config) plus the generator.

use tracing::{debug, info};

use crate::core::{
    Challenge, ChallengeStore, GameConfig, GameError, GameSession, RoundPhase, RoundResult,
};
use crate::generator::{strip_prompt_echo, TextGenerator};
use crate::scoring::{ScoreBreakdown, Scorer};

/// Round-progression engine. One engine can drive any number of
/// independent sessions; all mutable state lives in the sessions.
#[derive(Clone, Debug)]
pub struct GameEngine<G: TextGenerator> {
    store: ChallengeStore,
    generator: G,
    config: GameConfig,
    scorer: Scorer,
}

impl<G: TextGenerator> GameEngine<G> {
    /// Assemble an engine from its immutable parts and a generator.
    #[must_use]
    pub fn new(store: ChallengeStore, generator: G, config: GameConfig) -> Self {
        let scorer = Scorer::new(config.penalty_policy);
        Self {
            store,
            generator,
            config,
            scorer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &ChallengeStore {
        &self.store
    }

    /// Start a fresh session for the named player.
    pub fn new_session(&self, player_name: impl Into<String>) -> Result<GameSession, GameError> {
        let session = GameSession::new(player_name)?;
        info!(
            session_id = %session.session_id(),
            player = session.player_name(),
            total_rounds = self.config.total_rounds,
            "session started"
        );
        Ok(session)
    }

    /// The challenge the session's current round plays against.
    ///
    /// Fails with `GameOver` once the session is terminal; there is no
    /// current challenge to show.
    pub fn current_challenge(&self, session: &GameSession) -> Result<&Challenge, GameError> {
        if session.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(self.store.for_round(session.current_round()))
    }

    /// Submit a prompt for the session's current round.
    ///
    /// On success the session moves to `ShowingResult` and the returned
    /// breakdown matches the appended `RoundResult`. On any failure the
    /// session is unchanged: results are not touched and the round does
    /// not advance.
    pub fn submit_prompt(
        &mut self,
        session: &mut GameSession,
        prompt: &str,
    ) -> Result<ScoreBreakdown, GameError> {
        match session.phase() {
            RoundPhase::AwaitingPrompt => {}
            RoundPhase::ShowingResult => {
                return Err(GameError::AlreadySubmitted {
                    round: session.current_round(),
                })
            }
            RoundPhase::GameOver => return Err(GameError::GameOver),
        }

        if prompt.trim().is_empty() {
            return Err(GameError::EmptyPrompt);
        }

        let round = session.current_round();
        let challenge = self.store.for_round(round).clone();

        debug!(
            session_id = %session.session_id(),
            round,
            max_new_tokens = self.config.max_new_tokens,
            "calling text generator"
        );
        let raw = self
            .generator
            .generate(prompt, self.config.max_new_tokens)
            .map_err(GameError::Generator)?;
        let output = strip_prompt_echo(prompt, &raw).to_string();

        let breakdown = self.scorer.score(prompt, &output, &challenge.target)?;

        info!(
            session_id = %session.session_id(),
            round,
            match_score = breakdown.match_score,
            token_penalty = breakdown.token_penalty,
            final_score = breakdown.final_score,
            "round scored"
        );

        session.record_result(RoundResult {
            round,
            player: session.player_name().to_string(),
            prompt: prompt.to_string(),
            output,
            target: challenge.target,
            match_score: breakdown.match_score,
            token_penalty: breakdown.token_penalty,
            final_score: breakdown.final_score,
        });

        Ok(breakdown)
    }

    /// Move a session past its shown result.
    ///
    /// Enters `AwaitingPrompt` for the next round, or `GameOver` after
    /// the final round.
    pub fn advance_round(&self, session: &mut GameSession) -> Result<(), GameError> {
        match session.phase() {
            RoundPhase::ShowingResult => {}
            RoundPhase::AwaitingPrompt => {
                return Err(GameError::PromptNotSubmitted {
                    round: session.current_round(),
                })
            }
            RoundPhase::GameOver => return Err(GameError::GameOver),
        }

        session.advance(self.config.total_rounds);

        if session.is_over() {
            info!(session_id = %session.session_id(), "game over");
        } else {
            debug!(
                session_id = %session.session_id(),
                round = session.current_round(),
                "round advanced"
            );
        }
        Ok(())
    }
}
