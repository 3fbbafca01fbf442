//! # Environment Configuration
//!
//! Provider settings are sourced from the environment, with a local `.env`
//! file loaded first via `dotenvy`. There is no startup validation of the
//! credential: an absent key surfaces as
//! [`crate::PromptError::MissingApiKey`] on the first generate call.

use crate::types::ProviderConfig;
use std::env;

/// The Gemini model used when `AI_MODEL` is unset.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Reads the AI provider configuration from the environment.
///
/// Recognized variables: `AI_PROVIDER` ("gemini" or "local", default
/// "gemini"), `AI_API_URL`, `AI_API_KEY`, `AI_MODEL`.
pub fn provider_config_from_env() -> ProviderConfig {
    dotenvy::dotenv().ok();
    ProviderConfig {
        provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        api_url: env::var("AI_API_URL").ok(),
        api_key: env::var("AI_API_KEY").ok(),
        model_name: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
    }
}
