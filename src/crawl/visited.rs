// src/crawl/visited.rs
// =============================================================================
// The per-run ledger of URLs already scheduled or fetched.
//
// A URL goes in before it is fetched, and never comes out, so a page that
// failed to download is not tried a second time in the same run. Each
// crawl() call builds a fresh VisitedSet; nothing is shared between runs.
//
// URLs are compared as strings, so callers must insert the resolved,
// canonical form (see extract::resolve).
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    // Adding a URL that is already present does nothing
    pub fn add(&mut self, url: impl Into<String>) {
        self.urls.insert(url.into());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
