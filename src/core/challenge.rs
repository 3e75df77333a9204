//! Challenges and the challenge store.
//!
//! A challenge pairs a task description shown to the player with the
//! target string their generated output is scored against. The store is
//! an ordered sequence, loaded once at startup and read-only afterward.
//!
//! Validation happens at load time: every target must be non-empty after
//! trimming, because the similarity ratio is undefined for an empty
//! target. A store that fails validation never reaches the engine.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A single challenge. Immutable once loaded; identified by its position
/// in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Task description shown to the player.
    pub task: String,

    /// Target string the generated output is scored against.
    pub target: String,
}

impl Challenge {
    pub fn new(task: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            target: target.into(),
        }
    }
}

/// Ordered, immutable sequence of challenges.
///
/// Rounds map onto challenges by modulo, so a game with more rounds than
/// challenges cycles through the sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChallengeStore {
    challenges: Vec<Challenge>,
}

impl ChallengeStore {
    /// Build a store from already-constructed challenges.
    ///
    /// Fails with `NoChallenges` on an empty sequence and
    /// `InvalidChallenge` on the first entry whose target is empty
    /// after trimming.
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, GameError> {
        if challenges.is_empty() {
            return Err(GameError::NoChallenges);
        }
        for (index, challenge) in challenges.iter().enumerate() {
            if challenge.target.trim().is_empty() {
                return Err(GameError::InvalidChallenge { index });
            }
        }
        Ok(Self { challenges })
    }

    /// Parse a store from a JSON array of `{ "task": ..., "target": ... }`
    /// objects.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let challenges: Vec<Challenge> = serde_json::from_str(json)?;
        Self::new(challenges)
    }

    /// Parse a store from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GameError> {
        let challenges: Vec<Challenge> = serde_json::from_reader(reader)?;
        Self::new(challenges)
    }

    /// Load a store from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of challenges in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Get a challenge by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    /// Challenge for a 1-based round number, cycling through the store
    /// when the round count exceeds the store length.
    #[must_use]
    pub fn for_round(&self, round: u32) -> &Challenge {
        debug_assert!(round >= 1, "rounds are 1-based");
        let index = (round as usize - 1) % self.challenges.len();
        &self.challenges[index]
    }

    /// Iterate over all challenges in order.
    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ChallengeStore {
        ChallengeStore::new(vec![
            Challenge::new("write a greeting", "hello world"),
            Challenge::new("count to three", "one two three"),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_store() {
        assert!(matches!(
            ChallengeStore::new(vec![]),
            Err(GameError::NoChallenges)
        ));
    }

    #[test]
    fn test_rejects_empty_target() {
        let result = ChallengeStore::new(vec![
            Challenge::new("fine", "target"),
            Challenge::new("bad", "   "),
        ]);
        assert!(matches!(
            result,
            Err(GameError::InvalidChallenge { index: 1 })
        ));
    }

    #[test]
    fn test_from_json() {
        let store = ChallengeStore::from_json(
            r#"[{"task": "write a greeting", "target": "hello world"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().target, "hello world");
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            ChallengeStore::from_json("not json"),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn test_round_cycling() {
        let store = store();
        assert_eq!(store.for_round(1).task, "write a greeting");
        assert_eq!(store.for_round(2).task, "count to three");
        assert_eq!(store.for_round(3).task, "write a greeting");
        assert_eq!(store.for_round(5).task, "write a greeting");
    }
}
