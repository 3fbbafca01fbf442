pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;
use std::time::Duration;

/// Upper bound on a single provider call. The upstream APIs enforce no
/// deadline of their own; without this a hung call would hang the whole
/// analysis.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for sending a single-turn prompt to
/// different text-generation backends (e.g., Gemini, an OpenAI-compatible
/// local endpoint) and getting the raw model text back.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the model's raw text output; callers are responsible
    /// for decoding any structure out of it.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
