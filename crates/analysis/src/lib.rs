//! # linkstash-analysis: The URL Analysis Pipeline
//!
//! Sequences webpage retrieval, metadata extraction, prompt construction,
//! the LLM call and response parsing into a single `analyze` entry point,
//! and implements the merge policy applied when a bookmark edit requests
//! re-analysis alongside explicit field values.

mod analyzer;
mod curator;

pub use analyzer::{AnalysisError, Analyzer, UrlAnalyzer};
pub use curator::{
    BookmarkCurator, BookmarkPatch, BookmarkUpdate, TagAttachment, TagOutcome, UpdateOutcome,
};
