//! # AI Provider Factory
//!
//! Centralizes the logic for creating AI provider instances from a
//! [`ProviderConfig`]. By placing this in the core crate, any consumer gets
//! the same construction rules (notably the derived Gemini URL).

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// Creates an AI provider instance from its configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    match config.provider.as_str() {
        "gemini" => {
            // If api_url is not provided, construct it from the model name.
            let api_url = config.api_url.clone().unwrap_or_else(|| {
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                    config.model_name
                )
            });
            info!("Configuring Gemini provider with URL: {api_url}");
            Ok(Box::new(GeminiProvider::new(
                api_url,
                config.api_key.clone().unwrap_or_default(),
            )?))
        }
        "local" => {
            // For local providers the URL is always required.
            let api_url = config.api_url.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_url is required for the local provider. Set AI_API_URL.".to_string(),
                )
            })?;
            info!("Configuring local AI provider with URL: {api_url}");
            Ok(Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                Some(config.model_name.clone()),
            )?))
        }
        other => Err(PromptError::MissingAiProvider(format!(
            "unknown provider type: {other}"
        ))),
    }
}
