// src/export/mod.rs
// =============================================================================
// This module writes crawl results to disk.
//
// Submodules:
// - xlsx: one-sheet Excel workbook, one row per page
// =============================================================================

mod xlsx;

pub use xlsx::save_to_xlsx;
