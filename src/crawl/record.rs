// src/crawl/record.rs
// =============================================================================
// The rows a crawl produces.
//
// One PageRecord per page that was fetched successfully. A CrawlResult is
// the ordered list of them: seed first, then the linked pages in the order
// their links appeared on the seed page.
// =============================================================================

use serde::Serialize;

/// Title, URL and text summary of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Records produced by one crawl run, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CrawlResult {
    records: Vec<PageRecord>,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    // Only the orchestrator adds records; callers get a read-only view
    pub(crate) fn push(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageRecord> {
        self.records.iter()
    }
}

impl From<Vec<PageRecord>> for CrawlResult {
    fn from(records: Vec<PageRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a CrawlResult {
    type Item = &'a PageRecord;
    type IntoIter = std::slice::Iter<'a, PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_array() {
        let result = CrawlResult::from(vec![PageRecord {
            title: "Home".to_string(),
            url: "https://example.com/".to_string(),
            content: "Hello".to_string(),
        }]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "title": "Home", "url": "https://example.com/", "content": "Hello" }
            ])
        );
    }
}
