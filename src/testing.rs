// src/testing.rs
// =============================================================================
// Test helpers: an in-memory Fetcher, an observer that remembers what it
// saw, and a small HTML page builder.
//
// Only compiled for `cargo test`.
// =============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::crawl::observer::CrawlObserver;
use crate::crawl::record::{CrawlResult, PageRecord};
use crate::error::{FetchError, LinkFetchError};
use crate::fetch::{FetchedPage, Fetcher};

enum StaticResponse {
    Page(String),
    Status(u16),
}

/// Serves canned responses by exact URL and remembers every request.
///
/// URLs without a registered response fail with a connection error.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, StaticResponse>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.responses.insert(url.into(), StaticResponse::Page(html.into()));
        self
    }

    /// Makes `url` answer with a non-2xx status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), StaticResponse::Status(status));
        self
    }

    /// Every URL fetched so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.responses.get(url) {
            Some(StaticResponse::Page(html)) => Ok(FetchedPage {
                status: 200,
                body: html.as_bytes().to_vec(),
            }),
            Some(StaticResponse::Status(status)) => Err(FetchError::Status { status: *status }),
            None => Err(FetchError::Connect(format!("no page registered for {url}"))),
        }
    }
}

/// One observed crawl event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Seed(String, usize),
    Recorded(String),
    Duplicate(String),
    /// URL of a failed fetch, or the raw href of an unresolvable link
    Failed(String),
    Finished(usize),
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| predicate(e)).count()
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Recorded(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn failed_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failed(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl CrawlObserver for RecordingObserver {
    fn seed_fetched(&self, url: &str, link_count: usize) {
        self.push(Event::Seed(url.to_string(), link_count));
    }

    fn page_recorded(&self, record: &PageRecord) {
        self.push(Event::Recorded(record.url.clone()));
    }

    fn duplicate_skipped(&self, url: &str) {
        self.push(Event::Duplicate(url.to_string()));
    }

    fn link_failed(&self, error: &LinkFetchError) {
        let url = match error {
            LinkFetchError::Resolve(e) => e.reference.clone(),
            LinkFetchError::Fetch { url, .. } => url.clone(),
        };
        self.push(Event::Failed(url));
    }

    fn finished(&self, result: &CrawlResult) {
        self.push(Event::Finished(result.len()));
    }
}

/// Builds a page with a title, some body markup and one anchor per href.
pub fn page_html(title: &str, body: &str, hrefs: &[String]) -> String {
    let anchors: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| format!("<a href=\"{href}\">link {i}</a>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
    <nav>
    {anchors}
    </nav>
</body>
</html>"#
    )
}
