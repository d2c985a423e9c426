// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every option is optional: anything not given on the command line comes
// from the --config file, and anything not in the file from the defaults
// in config.rs.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::CrawlConfig;

#[derive(Parser, Debug)]
#[command(
    name = "seed-crawler",
    version,
    about = "Crawl a page and the pages it links to, and save their text to a spreadsheet",
    long_about = "seed-crawler fetches a seed page, then every page it links to (one level deep), \
                  and saves each page's title, URL and text content to an .xlsx file. \
                  The seed page must contain at least --min-links links."
)]
pub struct Cli {
    /// Page to start from (default: https://www.bbc.com/)
    ///
    /// This is a positional argument
    pub seed_url: Option<String>,

    /// Spreadsheet to write (default: web_crawl_data.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with crawl settings; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum number of links the seed page must have (default: 10)
    #[arg(long)]
    pub min_links: Option<usize>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the crawled pages as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    // Applies the flags that were given on top of `config`
    pub fn apply(&self, mut config: CrawlConfig) -> CrawlConfig {
        if let Some(seed_url) = &self.seed_url {
            config.seed_url = seed_url.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(min_links) = self.min_links {
            config.min_links = min_links;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["seed-crawler"]);
        assert_eq!(cli.apply(CrawlConfig::default()), CrawlConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "seed-crawler",
            "https://www.rust-lang.org/",
            "--output",
            "rust.xlsx",
            "--min-links",
            "5",
            "--timeout",
            "30",
            "--json",
        ]);
        let config = cli.apply(CrawlConfig::default());

        assert!(cli.json);
        assert_eq!(config.seed_url, "https://www.rust-lang.org/");
        assert_eq!(config.output, PathBuf::from("rust.xlsx"));
        assert_eq!(config.min_links, 5);
        assert_eq!(config.timeout_secs, 30);
    }
}
