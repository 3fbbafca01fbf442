//! # Webpage Retrieval
//!
//! Fetches user-supplied URLs. The input is attacker-controlled, so the
//! scheme is validated up front and both the timeout and the redirect chain
//! are bounded. Loopback/link-local address blocking is not handled here; it
//! belongs to a deployment-level egress policy.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Browser user-agent sent with every fetch; some sites reject obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Total time budget for one page fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect chain cap, so a redirect loop cannot stall an analysis.
const MAX_REDIRECTS: usize = 5;

/// Errors from retrieving a webpage.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("URL is not valid: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL scheme {0:?} is not supported; only http and https are fetched")]
    UnsupportedScheme(String),
    #[error("page fetch timed out after 10 seconds")]
    Timeout,
    #[error("network error while fetching the page: {0}")]
    Network(reqwest::Error),
    #[error("page request failed with status {status}")]
    HttpStatus { status: u16 },
    #[error("page response body was empty")]
    EmptyBody,
}

/// Retrieves a URL and returns the raw HTML body.
pub async fn fetch_page(url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(FetchError::UnsupportedScheme(other.to_string())),
    }

    debug!("Fetching webpage: {url}");
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(FetchError::Network)?;

    let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(map_reqwest_error)?;
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }

    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e)
    }
}
