//! # Model Response Parsing
//!
//! The model is asked for a bare JSON object, but replies routinely arrive
//! wrapped in prose or markdown fences. Extraction takes everything between
//! the first `{` and the last `}` instead of insisting on a clean document.
//! Do not tighten this into a strict single-document parser; the wrapping
//! tolerance is load-bearing.

use crate::types::AnalysisResult;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors from decoding the model's analysis reply.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON object found in the model output")]
    NoJsonFound,
    #[error("model output contained invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("model output did not match the expected schema: {0}")]
    SchemaMismatch(String),
}

/// Decodes the analysis JSON embedded in raw model output.
///
/// Missing fields map to their empty defaults; unknown fields are ignored.
/// Only a syntactically broken payload or an unusable `suggestedCategory`
/// fails.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, ParseError> {
    let payload = extract_json(raw)?;
    debug!("Extracted JSON payload of {} chars", payload.len());
    let value: Value = serde_json::from_str(payload)?;

    let tags = value
        .get("tags")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(AnalysisResult {
        title: non_empty_string(value.get("title")),
        description: non_empty_string(value.get("description")),
        tags,
        suggested_category_id: decode_category_id(value.get("suggestedCategory"))?,
    })
}

/// Returns the substring between the first `{` and the last `}`, inclusive.
fn extract_json(raw: &str) -> Result<&str, ParseError> {
    let start = raw.find('{').ok_or(ParseError::NoJsonFound)?;
    let end = raw.rfind('}').ok_or(ParseError::NoJsonFound)?;
    if end < start {
        return Err(ParseError::NoJsonFound);
    }
    Ok(&raw[start..=end])
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `suggestedCategory` must be usable as an integer id. Models sometimes
/// quote the id, so numeric strings are accepted too.
fn decode_category_id(value: Option<&Value>) -> Result<Option<i64>, ParseError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| {
            ParseError::SchemaMismatch(format!("suggestedCategory is not an integer: {n}"))
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| {
            ParseError::SchemaMismatch(format!("suggestedCategory is not numeric: {s:?}"))
        }),
        Some(other) => Err(ParseError::SchemaMismatch(format!(
            "suggestedCategory has an unexpected type: {other}"
        ))),
    }
}
