use thiserror::Error;

/// Errors surfaced by the AI provider clients.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("AI provider returned status {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("AI response envelope was malformed: {0}")]
    MalformedEnvelope(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
}
