use serde::{Deserialize, Serialize};

/// The structured proposal produced by analyzing a URL.
///
/// This is never authoritative: every field may be overridden by
/// caller-supplied values before anything is persisted. It is constructed by
/// [`crate::parse::parse_analysis`], consumed once by the merge step, and
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// AI-suggested title. The prompt asks for 50 characters or less, but
    /// the bound is a prompt contract, not enforced here.
    pub title: Option<String>,
    /// A 2-3 sentence summary of the page.
    pub description: Option<String>,
    /// Suggested tag names, reconciled against the tag catalog by exact name.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Id of a category from the supplied catalog. May reference a
    /// nonexistent id; callers must validate before use.
    pub suggested_category_id: Option<i64>,
}

/// One entry of the caller-owned category catalog. Read-only from the
/// pipeline's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Metadata scraped from one webpage; the input to the prompt builder.
/// Missing tags yield empty strings. Lives only for the duration of one
/// analyze call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Visible body text, hard-truncated to the first 1000 characters.
    pub body_excerpt: String,
}

/// Configuration for a single AI provider instance.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Optional for Gemini, where it can be derived from the
    /// model name.
    pub api_url: Option<String>,
    /// The API key. May be absent; the provider fails at call time, not here.
    pub api_key: Option<String>,
    pub model_name: String,
}
