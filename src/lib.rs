//! # prompt-arena
//!
//! A round-based prompt-writing game engine. A player sees a task,
//! writes a prompt, a text generation backend produces an output, and
//! the output is scored against a target string: fuzzy similarity in
//! [0, 100] minus a token penalty.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: rendering and hosting are external. The
//!    crate exposes request/response operations a front end calls.
//!
//! 2. **Explicit state**: all mutable state lives in `GameSession`
//!    values passed to every operation. No globals, no hidden caches.
//!    Sessions clone in O(1) via `im`, so hosts can snapshot freely.
//!
//! 3. **Deterministic scoring**: same normalized inputs, same policy,
//!    same breakdown. The similarity algorithm is fixed so scores are
//!    reproducible across runs and hosts.
//!
//! ## Architecture
//!
//! - The **generator** is a black box behind the `TextGenerator`
//!   trait: blocking, unretried, failures propagate to the caller.
//!
//! - The **round controller** is a three-state machine per session:
//!   `AwaitingPrompt` -> `ShowingResult` -> next round or `GameOver`.
//!
//! ## Modules
//!
//! - `core`: configuration, challenges, sessions, errors
//! - `scoring`: similarity ratio and token-penalty policies
//! - `generator`: the backend trait plus offline backends
//! - `game`: the engine state machine, aggregation, session registry
//! - `export`: CSV rendering of results

pub mod core;
pub mod export;
pub mod game;
pub mod generator;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Challenge, ChallengeStore, GameConfig, GameError, GameSession, RoundPhase, RoundResult,
    SessionId,
};

pub use crate::scoring::{PenaltyPolicy, ScoreBreakdown, Scorer};

pub use crate::generator::{strip_prompt_echo, BabbleGenerator, ScriptedGenerator, TextGenerator};

pub use crate::game::{aggregate, GameEngine, SessionRegistry, Summary};

pub use crate::export::render_csv;
