// src/error.rs
// =============================================================================
// Typed errors for the crawler.
//
// The crawl core never returns anyhow errors: callers need to tell apart a
// seed page that could not be fetched from a seed page that simply has too
// few links, so each failure mode is its own variant. main.rs is the only
// place that flattens these into anyhow::Error.
//
// Error taxonomy:
// - FetchError:   one HTTP request failed (used for the seed and every link)
// - CrawlError:   fatal, crawl() produced no result
// - ResolveError: a link reference could not be made absolute
// - LinkFetchError: one linked page was skipped (reported, never returned)
// - ExportError:  writing the spreadsheet failed
// - ConfigError:  the config file could not be read or parsed
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered, but not with a 2xx status
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("too many redirects")]
    Redirect,

    /// The body could not be read off the wire
    #[error("could not read response body: {0}")]
    Body(String),

    /// The URL has a scheme the HTTP client cannot fetch (mailto:, javascript:, ...)
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("request failed: {0}")]
    Transport(String),
}

/// Fatal crawl failures. None of these leave a partial CrawlResult behind.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch seed page {url}: {source}")]
    SeedFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("not enough links found on the seed page: found {found}, need at least {required}")]
    InsufficientLinks { found: usize, required: usize },
}

#[derive(Debug, Error)]
#[error("cannot resolve '{reference}' against {base}: {source}")]
pub struct ResolveError {
    pub base: String,
    pub reference: String,
    #[source]
    pub source: url::ParseError,
}

/// Why a linked page was skipped. Reported to the crawl observer, never
/// returned from crawl().
#[derive(Debug, Error)]
pub enum LinkFetchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to crawl {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not replace existing file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
