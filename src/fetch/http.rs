// src/fetch/http.rs
// =============================================================================
// The real fetcher: downloads pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling) with a per-request timeout
// - Follows up to 5 redirects
// - Any non-2xx status is an error, not a page
// - reqwest errors are sorted into FetchError variants so the crawl log
//   says "request timed out" rather than a wall of text
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Trait impls: HttpFetcher is one implementation of Fetcher
// =============================================================================

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

use super::{FetchedPage, Fetcher};
use crate::config::CrawlConfig;
use crate::error::FetchError;

const MAX_REDIRECTS: usize = 5;

/// Fetcher backed by a reqwest Client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the crawl configuration
    //
    // We reuse this client for every request of the crawl
    pub fn new(config: &CrawlConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        // reqwest would reject mailto:, tel: and friends too, but with a
        // generic "builder error". Checking first gives a clear reason.
        let parsed = Url::parse(url).map_err(|_| FetchError::UnsupportedUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedUrl(url.to_string()));
        }

        let response = self
            .client
            .get(parsed)
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // A body can still fail mid-download (connection reset, timeout)
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        Ok(FetchedPage {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

// Categorizes the error types reqwest can return before a response arrives
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure or refused connection
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::Redirect
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Transport(error.to_string())
    }
}
