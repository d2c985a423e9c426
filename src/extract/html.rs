// src/extract/html.rs
// =============================================================================
// Parses HTML and pulls out what we keep from every page:
// - the title (or "Missing Title")
// - a flat text summary built from <p>, <h1>, <h2> and <h3>
// - the raw href of every <a href> on the page
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses into a tree
//
// Everything here is pure: no network, no state. The orchestrator fetches
// bytes, hands them to parse(), then asks for the summary and links.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Title used when a page has no <title> element.
pub const MISSING_TITLE: &str = "Missing Title";

// The elements whose text makes up a page's content, in one selector so the
// matches come back in document order
const CONTENT_SELECTOR: &str = "p, h1, h2, h3";
const TITLE_SELECTOR: &str = "title";
const LINK_SELECTOR: &str = "a[href]";

/// Title and text summary of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub title: String,
    pub content: String,
}

// Parses a response body into a document.
//
// html5ever never rejects input, so this cannot fail. Bytes that are not
// valid UTF-8 are replaced with U+FFFD rather than dropping the page.
pub fn parse(body: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(body))
}

// Extracts the title and content summary from a parsed document.
//
// Example:
//   <title>Home</title><h1>Welcome</h1><div>skip</div><p>Hello <b>you</b></p>
//   -> title = "Home", content = "Welcome Hello you"
pub fn extract(document: &Html) -> PageSummary {
    PageSummary {
        title: extract_title(document),
        content: extract_content(document),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&selector(TITLE_SELECTOR))
        .next()
        .map(|title| element_text(&title))
        .unwrap_or_else(|| MISSING_TITLE.to_string())
}

fn extract_content(document: &Html) -> String {
    // A matching element nested inside another one (a <p> inside an <h2>
    // for instance) is matched on its own too, like any other match.
    // Elements without text still count as a piece of the join.
    document
        .select(&selector(CONTENT_SELECTOR))
        .map(|element| element_text(&element))
        .collect::<Vec<_>>()
        .join(" ")
}

// Collects every href of every <a href> element, in document order.
//
// No filtering and no deduplication: the link-count gate counts raw anchors,
// so "#", "" and repeated hrefs all count.
pub fn link_refs(document: &Html) -> Vec<String> {
    let links: Vec<String> = document
        .select(&selector(LINK_SELECTOR))
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    log::debug!("found {} link(s)", links.len());
    links
}

// Text of an element and all its descendants, markup stripped, ends trimmed
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

// Selector::parse only fails on malformed CSS, and every selector in this
// file is a constant that is known to be valid
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}
