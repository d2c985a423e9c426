// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only door to the network.
//
// The orchestrator never talks to reqwest directly. It asks a Fetcher for
// the bytes behind a URL, which lets tests run whole crawls against an
// in-memory set of pages.
//
// Submodules:
// - http: HttpFetcher, the reqwest-backed implementation
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// A successfully downloaded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Downloads the body behind a URL.
///
/// Implementations must return an error (not a page) for network failures,
/// non-2xx statuses and bodies that cannot be read.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
