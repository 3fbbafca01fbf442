use async_trait::async_trait;
use linkstash::{
    catalog::{CatalogError, CategoryCatalog},
    parse::{parse_analysis, ParseError},
    prompts::analysis::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT},
    providers::ai::AiProvider,
    types::AnalysisResult,
    PromptError,
};
use linkstash_html::{extract_metadata, fetch_page, FetchError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the analysis pipeline, tagged with the stage that failed.
///
/// No stage failure is recovered locally; the first one aborts the analysis
/// and reaches the caller as-is. There are no partial results.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("category catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("AI analysis failed: {0}")]
    Llm(#[from] PromptError),
    #[error("could not parse the AI analysis: {0}")]
    Parse(#[from] ParseError),
}

/// The entry point callers use to derive bookmark metadata from a URL.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// The production pipeline: fetch, extract, build the prompt against the
/// current category catalog, call the model, parse the reply.
///
/// Each call is independent and stateless apart from reading the injected
/// catalog, so one instance can serve concurrent analyses of different URLs.
pub struct UrlAnalyzer {
    provider: Box<dyn AiProvider>,
    categories: Arc<dyn CategoryCatalog>,
}

impl UrlAnalyzer {
    pub fn new(provider: Box<dyn AiProvider>, categories: Arc<dyn CategoryCatalog>) -> Self {
        Self {
            provider,
            categories,
        }
    }
}

#[async_trait]
impl Analyzer for UrlAnalyzer {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        info!("Starting URL analysis: {url}");

        let html = fetch_page(url).await?;
        let metadata = extract_metadata(&html);
        debug!("Extracted metadata, title: {:?}", metadata.title);

        let categories = self.categories.list_all().await?;
        let user_prompt = build_analysis_prompt(&metadata, url, &categories);

        let raw = self
            .provider
            .generate(ANALYSIS_SYSTEM_PROMPT, &user_prompt)
            .await?;
        debug!("Model returned {} chars", raw.len());

        let result = parse_analysis(&raw)?;
        info!("URL analysis complete: {url}");
        Ok(result)
    }
}
