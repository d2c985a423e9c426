// src/crawl/orchestrator.rs
// =============================================================================
// This module drives a crawl: the seed page, then every page it links to.
//
// How it works:
// 1. Mark the seed visited, fetch it, extract its title and content
// 2. Count its <a href> elements; fewer than min_links aborts the crawl
// 3. Keep the seed record
// 4. For each link, in page order:
//    - resolve it against the seed URL
//    - skip it if that URL was already visited (the seed included)
//    - mark it visited, fetch it, extract it, keep the record
//    - if anything fails, report it and move on to the next link
//
// Only one level deep: links found on the linked pages are ignored.
// Requests are made one at a time, in order.
//
// Rust concepts:
// - Generics: Crawler works with any Fetcher and any CrawlObserver
// - Result<T, E>: seed failures are returned, link failures are reported
// - Scopes: the parsed document is dropped before the next .await
// =============================================================================

use super::observer::{CrawlObserver, LogObserver};
use super::record::{CrawlResult, PageRecord};
use super::visited::VisitedSet;
use crate::config::DEFAULT_MIN_LINKS;
use crate::error::{CrawlError, FetchError, LinkFetchError};
use crate::extract::{self, PageSummary};
use crate::fetch::Fetcher;

/// Crawls a seed page and its direct links.
pub struct Crawler<F, O = LogObserver> {
    fetcher: F,
    observer: O,
    min_links: usize,
}

impl<F: Fetcher> Crawler<F> {
    // Creates a crawler that logs its progress and requires
    // DEFAULT_MIN_LINKS links on the seed page
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            observer: LogObserver,
            min_links: DEFAULT_MIN_LINKS,
        }
    }
}

impl<F: Fetcher, O: CrawlObserver> Crawler<F, O> {
    /// Replaces the observer that receives crawl events.
    #[cfg(test)]
    pub fn with_observer<P: CrawlObserver>(self, observer: P) -> Crawler<F, P> {
        Crawler {
            fetcher: self.fetcher,
            observer,
            min_links: self.min_links,
        }
    }

    /// Sets how many <a href> elements the seed page needs.
    pub fn with_min_links(mut self, min_links: usize) -> Self {
        self.min_links = min_links;
        self
    }

    #[cfg(test)]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    // Runs one crawl
    //
    // Returns: every page fetched successfully, seed first, then the linked
    // pages in the order their links appear on the seed page
    //
    // Errors (no partial result in any case):
    //   InvalidSeedUrl    - seed_url does not parse
    //   SeedFetch         - the seed page could not be downloaded
    //   InsufficientLinks - the seed page has fewer than min_links <a href>
    pub async fn crawl(&self, seed_url: &str) -> Result<CrawlResult, CrawlError> {
        let seed = extract::canonicalize(seed_url).map_err(|source| CrawlError::InvalidSeedUrl {
            url: seed_url.to_string(),
            source,
        })?;
        let seed_key = seed.to_string();

        // Both are fresh for every run
        let mut visited = VisitedSet::new();
        let mut result = CrawlResult::new();

        visited.add(seed_key.as_str());

        let page = self
            .fetcher
            .fetch(&seed_key)
            .await
            .map_err(|source| CrawlError::SeedFetch {
                url: seed_key.clone(),
                source,
            })?;
        log::debug!("{} answered HTTP {}", seed_key, page.status);

        let (summary, links) = {
            let document = extract::parse(&page.body);
            (extract::extract(&document), extract::link_refs(&document))
        };

        self.observer.seed_fetched(&seed_key, links.len());

        // The gate counts raw anchors, before resolution or deduplication,
        // and runs before the seed record is kept
        if links.len() < self.min_links {
            return Err(CrawlError::InsufficientLinks {
                found: links.len(),
                required: self.min_links,
            });
        }

        self.record(&mut result, seed_key, summary);

        for href in &links {
            let url = match extract::resolve(&seed, href) {
                Ok(url) => url,
                Err(e) => {
                    self.observer.link_failed(&LinkFetchError::from(e));
                    continue;
                }
            };

            if visited.contains(&url) {
                self.observer.duplicate_skipped(&url);
                continue;
            }

            // Marked before fetching: a link that fails is not tried again
            visited.add(url.as_str());

            match self.fetch_summary(&url).await {
                Ok(summary) => self.record(&mut result, url, summary),
                Err(source) => {
                    self.observer.link_failed(&LinkFetchError::Fetch { url, source });
                }
            }
        }

        self.observer.finished(&result);
        Ok(result)
    }

    // Fetches one linked page and extracts its summary
    async fn fetch_summary(&self, url: &str) -> Result<PageSummary, FetchError> {
        let page = self.fetcher.fetch(url).await?;
        log::debug!("{} answered HTTP {}", url, page.status);
        let document = extract::parse(&page.body);
        Ok(extract::extract(&document))
    }

    fn record(&self, result: &mut CrawlResult, url: String, summary: PageSummary) {
        let record = PageRecord {
            title: summary.title,
            url,
            content: summary.content,
        };
        self.observer.page_recorded(&record);
        result.push(record);
    }
}
