//! Canned-output backend for tests and demos.

use std::collections::VecDeque;

use anyhow::bail;

use super::TextGenerator;

/// Returns pre-scripted outputs in order, one per `generate` call.
///
/// Fails once the script runs dry, which doubles as a test that the
/// engine makes exactly the expected number of generator calls.
#[derive(Clone, Debug, Default)]
pub struct ScriptedGenerator {
    outputs: VecDeque<String>,
}

impl ScriptedGenerator {
    #[must_use]
    pub fn new<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Outputs not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.outputs.len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&mut self, _prompt: &str, _max_new_tokens: usize) -> anyhow::Result<String> {
        match self.outputs.pop_front() {
            Some(output) => Ok(output),
            None => bail!("scripted generator has no outputs left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_outputs_in_order() {
        let mut gen = ScriptedGenerator::new(["first", "second"]);
        assert_eq!(gen.generate("p", 15).unwrap(), "first");
        assert_eq!(gen.generate("p", 15).unwrap(), "second");
        assert_eq!(gen.remaining(), 0);
    }

    #[test]
    fn test_fails_when_dry() {
        let mut gen = ScriptedGenerator::new(Vec::<String>::new());
        assert!(gen.generate("p", 15).is_err());
    }
}
