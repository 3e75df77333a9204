//! Seeded offline backend.
//!
//! Samples words uniformly from a fixed vocabulary, usually the words of
//! the challenge targets. Useless as a language model, useful for
//! playable offline demos and for exercising the full engine loop with
//! reproducible output: the same seed always babbles the same words.

use anyhow::{ensure, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::TextGenerator;
use crate::core::ChallengeStore;

/// Deterministic word-salad generator.
///
/// Uses ChaCha8, the same deterministic RNG the rest of the crate's
/// ecosystem favors for reproducible sequences.
#[derive(Clone, Debug)]
pub struct BabbleGenerator {
    vocabulary: Vec<String>,
    rng: ChaCha8Rng,
}

impl BabbleGenerator {
    /// Build from an explicit vocabulary.
    #[must_use]
    pub fn new<I, S>(vocabulary: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build the vocabulary from the words of every target in the store.
    #[must_use]
    pub fn from_store(store: &ChallengeStore, seed: u64) -> Self {
        let vocabulary = store
            .iter()
            .flat_map(|challenge| challenge.target.split_whitespace())
            .map(str::to_lowercase)
            .collect();
        Self {
            vocabulary,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl TextGenerator for BabbleGenerator {
    fn generate(&mut self, _prompt: &str, max_new_tokens: usize) -> Result<String> {
        ensure!(!self.vocabulary.is_empty(), "babble vocabulary is empty");

        let words: Vec<&str> = (0..max_new_tokens)
            .map(|_| {
                let index = self.rng.gen_range(0..self.vocabulary.len());
                self.vocabulary[index].as_str()
            })
            .collect();

        Ok(words.join(" "))
    }
}
