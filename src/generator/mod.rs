//! Text generation backends.
//!
//! The engine treats generation as a black box behind `TextGenerator`.
//! Hosts plug in whatever backend they have: an HTTP call to a hosted
//! model, a local inference runtime, or one of the built-in offline
//! backends below. Calls are blocking; hosts embedding the engine in a
//! responsive front end impose their own timeouts.
//!
//! Generator failures are not retried by the engine. They propagate to
//! the caller, which decides on retry or abort.

pub mod babble;
pub mod scripted;

pub use babble::BabbleGenerator;
pub use scripted::ScriptedGenerator;

/// A text generation backend.
///
/// `generate` returns the continuation of `prompt`, at most
/// `max_new_tokens` tokens long by the backend's own tokenization.
/// Backends that echo the prompt prefix may return it; the engine
/// strips it before scoring.
pub trait TextGenerator {
    fn generate(&mut self, prompt: &str, max_new_tokens: usize) -> anyhow::Result<String>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &mut G {
    fn generate(&mut self, prompt: &str, max_new_tokens: usize) -> anyhow::Result<String> {
        (**self).generate(prompt, max_new_tokens)
    }
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn generate(&mut self, prompt: &str, max_new_tokens: usize) -> anyhow::Result<String> {
        (**self).generate(prompt, max_new_tokens)
    }
}

/// Drop the echoed prompt prefix from a backend's raw return value.
///
/// Backends differ on whether the prompt comes back prepended to the
/// continuation. The result is trimmed either way.
#[must_use]
pub fn strip_prompt_echo<'a>(prompt: &str, raw: &'a str) -> &'a str {
    raw.strip_prefix(prompt).unwrap_or(raw).trim()
}
