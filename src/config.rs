// src/config.rs
// =============================================================================
// Crawl settings.
//
// Values come from three places, later ones winning:
// 1. Built-in defaults (CrawlConfig::default())
// 2. An optional JSON file passed with --config
// 3. Command-line flags
//
// Example config file (every field is optional):
//   {
//     "seed_url": "https://www.rust-lang.org/",
//     "min_links": 10,
//     "timeout_secs": 10,
//     "user_agent": "my-crawler/1.0",
//     "output": "rust_lang.xlsx"
//   }
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_SEED_URL: &str = "https://www.bbc.com/";
pub const DEFAULT_OUTPUT: &str = "web_crawl_data.xlsx";
pub const DEFAULT_MIN_LINKS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything a crawl run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlConfig {
    /// Page the crawl starts from
    pub seed_url: String,

    /// Minimum number of <a href> elements the seed page must have
    pub min_links: usize,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Where the spreadsheet is written
    pub output: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            min_links: DEFAULT_MIN_LINKS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CrawlConfig {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
