//! # URL Analysis Prompts
//!
//! Templates for the bookmark analysis call. The system prompt pins the
//! output contract (a single JSON object with a fixed set of keys); the user
//! prompt carries the scraped page metadata, the source URL and the caller's
//! category catalog.

use crate::types::{Category, PageMetadata};

/// The system prompt for the bookmark analysis call.
///
/// It demands a JSON object with exactly the keys `title`, `description`,
/// `tags` and `suggestedCategory`, and no prose outside the JSON. Models do
/// not always comply with the last rule, which is why the parser tolerates
/// wrapped output.
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert bookmark curator. Analyze the webpage information provided by the user and return the result as a single JSON object.

# JSON Output Schema:
{
  "title": "The core title of the webpage (50 characters or less)",
  "description": "A summary of the page content in 2-3 sentences",
  "tags": ["three", "to", "five", "relevant", "tags"],
  "suggestedCategory": category_id
}

# Instructions:
- Keep the title clear and concise.
- The description must capture the core content of the page.
- Prefer tags that name technologies or topics.
- suggestedCategory must be the id of the best match from the available category list.
- Respond with the JSON object only. Do not include any other explanation.
"#;

/// The user prompt for the analysis call.
/// Placeholders: `{page_info}`, `{url}`, `{category_list}`
pub const ANALYSIS_USER_PROMPT: &str = r#"# Webpage Information
{page_info}

# URL
{url}

# Available Categories
{category_list}
"#;

/// Serializes the category catalog as a flat `id: name, id: name` list,
/// preserving catalog order.
pub fn format_category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{}: {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the user prompt for one analysis call.
///
/// Metadata values are inserted verbatim. The prompt is plain natural
/// language, not executable, so no escaping is applied.
pub fn build_analysis_prompt(metadata: &PageMetadata, url: &str, categories: &[Category]) -> String {
    let page_info = format!(
        "Title: {}\nDescription: {}\nKeywords: {}\nContent: {}",
        metadata.title, metadata.description, metadata.keywords, metadata.body_excerpt
    );
    ANALYSIS_USER_PROMPT
        .replace("{page_info}", &page_info)
        .replace("{url}", url)
        .replace("{category_list}", &format_category_list(categories))
}
