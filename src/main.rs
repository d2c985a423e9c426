// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments and load the config
// 2. Crawl the seed page and the pages it links to
// 3. Print what was crawled (table or JSON)
// 4. Save the rows to a spreadsheet, even when the crawl failed
// 5. Exit with proper code (0 = success, 2 = crawl or export error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod export;
mod extract;
mod fetch;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::CrawlConfig;
use crawl::{CrawlResult, Crawler};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    // RUST_LOG=debug shows every skipped and recorded page
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl and export succeeded
//   Ok(2) = crawl failed, an empty spreadsheet was still written
//   Err   = config, client or export error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CrawlConfig::from_file(path)?,
        None => CrawlConfig::default(),
    };
    let config = cli.apply(config);
    log::debug!("configuration: {:?}", config);

    if !cli.json {
        println!("🔍 Crawling: {}", config.seed_url);
    }

    let fetcher = HttpFetcher::new(&config).context("failed to create HTTP client")?;
    let crawler = Crawler::new(fetcher).with_min_links(config.min_links);

    // A failed crawl leaves nothing to keep, but the spreadsheet is still
    // written so the output file always reflects the latest run
    let (result, exit_code) = match crawler.crawl(&config.seed_url).await {
        Ok(result) => {
            print_results(&result, cli.json)?;
            (result, 0)
        }
        Err(e) => {
            eprintln!("Error during crawling: {}", e);
            (CrawlResult::new(), 2)
        }
    };

    export::save_to_xlsx(&result, &config.output)
        .with_context(|| format!("failed to save {}", config.output.display()))?;

    if !cli.json {
        println!("💾 Data saved to {}", config.output.display());
    }

    Ok(exit_code)
}

// Prints the results either as a table or JSON
fn print_results(result: &CrawlResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(result)?;
        println!("{}", json_output);
    } else {
        print_table(result);
    }
    Ok(())
}

// Prints one line per crawled page
fn print_table(result: &CrawlResult) {
    println!("📄 Crawled {} page(s)\n", result.len());
    println!("{:<40} {:<60} {:>10}", "TITLE", "URL", "CHARS");
    println!("{}", "=".repeat(112));

    for record in result.records() {
        println!(
            "{:<40} {:<60} {:>10}",
            shorten(&record.title, 37),
            shorten(&record.url, 57),
            record.content.chars().count()
        );
    }

    println!();
}

// Cuts a string to `max` characters, adding "..." when it was cut
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}
