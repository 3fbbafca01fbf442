//! # Metadata Extraction
//!
//! Pure extraction of the title, meta tags and a visible-text excerpt from
//! parsed HTML. There is no failure mode: missing tags yield empty strings.

use linkstash::types::PageMetadata;
use scraper::{Html, Selector};

/// Hard cap on the visible-body excerpt handed to the model.
const BODY_EXCERPT_CHARS: usize = 1000;

/// Elements whose text is never visible on the page.
const NON_VISIBLE_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Extracts the metadata bundle from raw HTML.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);
    PageMetadata {
        title: select_text(&document, "title"),
        description: select_meta_content(&document, "meta[name=\"description\"]"),
        keywords: select_meta_content(&document, "meta[name=\"keywords\"]"),
        body_excerpt: body_excerpt(&document),
    }
}

fn select_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn select_meta_content(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Visible body text with whitespace collapsed to single spaces, hard-cut at
/// the first 1000 characters. The cut is by character count, not word
/// boundaries; downstream consumers rely on that exact semantic.
fn body_excerpt(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    for node in body.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_VISIBLE_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                parts.push(text);
            }
        }
    }

    let collapsed = parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed.chars().take(BODY_EXCERPT_CHARS).collect()
}
