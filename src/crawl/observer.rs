// src/crawl/observer.rs
// =============================================================================
// Hooks for watching a crawl as it runs.
//
// The orchestrator reports what happens (seed fetched, page recorded, link
// skipped, link failed) to a CrawlObserver instead of printing. Per-link
// failures in particular only ever leave the crawl through link_failed().
//
// LogObserver is the default and writes everything through the `log` crate.
// Tests plug in testing::RecordingObserver to assert on the events.
// =============================================================================

use super::record::{CrawlResult, PageRecord};
use crate::error::LinkFetchError;

/// Receives crawl events. Every method defaults to doing nothing.
pub trait CrawlObserver {
    /// The seed page was fetched and has `link_count` <a href> elements
    fn seed_fetched(&self, _url: &str, _link_count: usize) {}

    fn page_recorded(&self, _record: &PageRecord) {}

    /// A link resolved to a URL that was already visited
    fn duplicate_skipped(&self, _url: &str) {}

    fn link_failed(&self, _error: &LinkFetchError) {}

    fn finished(&self, _result: &CrawlResult) {}
}

/// Reports crawl events as log records.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CrawlObserver for LogObserver {
    fn seed_fetched(&self, url: &str, link_count: usize) {
        log::info!("fetched seed page {} ({} links)", url, link_count);
    }

    fn page_recorded(&self, record: &PageRecord) {
        log::debug!("{}", describe_record(record));
    }

    fn duplicate_skipped(&self, url: &str) {
        log::debug!("skipping already visited {}", url);
    }

    fn link_failed(&self, error: &LinkFetchError) {
        log::warn!("{}", error);
    }

    fn finished(&self, result: &CrawlResult) {
        log::info!("crawl finished with {} page(s)", result.len());
    }
}

fn describe_record(record: &PageRecord) -> String {
    format!(
        "recorded {} ({:?}, {} chars of content)",
        record.url,
        record.title,
        record.content.chars().count()
    )
}
