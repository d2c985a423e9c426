// src/crawl/mod.rs
// =============================================================================
// This module handles crawling.
//
// Features:
// - Fetches the seed page and every page it links to, one level deep
// - Refuses seed pages with too few links
// - Never fetches the same URL twice in a run
// - A broken link is reported and skipped, it never stops the crawl
//
// Submodules:
// - orchestrator: the Crawler itself
// - visited: the per-run set of URLs already fetched or scheduled
// - record: PageRecord and CrawlResult, what a crawl produces
// - observer: hooks for logging (or testing) crawl events
// =============================================================================

pub mod observer;
mod orchestrator;
pub mod record;
mod visited;

pub use orchestrator::Crawler;
pub use record::CrawlResult;
