// src/extract/mod.rs
// =============================================================================
// This module turns fetched bytes into the data we keep.
//
// Submodules:
// - html: parses markup, extracts title/content and raw link hrefs
// - resolve: turns a link href into an absolute URL
// =============================================================================

mod html;
mod resolve;

pub use html::{extract, link_refs, parse, PageSummary};
pub use resolve::{canonicalize, resolve};
