//! # linkstash-html: Webpage Retrieval and Metadata Extraction
//!
//! The first two stages of the analysis pipeline: fetching a page over HTTP
//! with a bounded timeout, and pulling the title, meta tags and a capped
//! excerpt of visible body text out of the HTML.
//!
//! Fetching returns the raw HTML string rather than a parsed document:
//! `scraper::Html` is not `Send`, so parsing happens inside the synchronous
//! extraction step to keep the surrounding analyze future spawnable.

mod extract;
mod fetch;

pub use extract::extract_metadata;
pub use fetch::{fetch_page, FetchError};
