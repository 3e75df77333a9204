//! Core engine types: configuration, challenges, sessions, errors.
//!
//! These are the building blocks the rest of the engine is assembled
//! from. Hosts construct them at startup and hand them to `GameEngine`.

pub mod challenge;
pub mod config;
pub mod error;
pub mod session;

pub use challenge::{Challenge, ChallengeStore};
pub use config::GameConfig;
pub use error::GameError;
pub use session::{GameSession, RoundPhase, RoundResult, SessionId};
