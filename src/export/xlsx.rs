// src/export/xlsx.rs
// =============================================================================
// Saves a CrawlResult as an Excel workbook.
//
// Layout (downstream readers depend on the column order):
//
//   | Page Name | Page URL             | Page Content |
//   |-----------|----------------------|--------------|
//   | Home      | https://example.com/ | Hello ...    |
//   | ...       | ...                  | ...          |
//
// - a single sheet named "Sheet1"
// - a bold header row, then one row per record in crawl order
// - every cell is written as a string
// - an existing file at the destination is replaced
//
// We use `rust_xlsxwriter` which writes .xlsx files without needing Excel
// or any native library installed.
// =============================================================================

use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::crawl::CrawlResult;
use crate::error::ExportError;

pub const SHEET_NAME: &str = "Sheet1";
pub const HEADERS: [&str; 3] = ["Page Name", "Page URL", "Page Content"];

// Excel refuses cells longer than this many characters
const MAX_CELL_CHARS: usize = 32_767;

// Writes `result` to `path`, replacing any file already there
pub fn save_to_xlsx(result: &CrawlResult, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();

    match fs::remove_file(path) {
        Ok(()) => log::debug!("removed existing {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ExportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    if result.is_empty() {
        log::warn!("no pages to export, writing the header row only");
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, name, &bold)?;
    }

    // Row 0 is the header
    for (row, record) in (1u32..).zip(result) {
        sheet.write_string(row, 0, cell_text(&record.title))?;
        sheet.write_string(row, 1, cell_text(&record.url))?;
        sheet.write_string(row, 2, cell_text(&record.content))?;
    }

    workbook.save(path)?;

    log::info!("saved {} row(s) to {}", result.len(), path.display());
    Ok(())
}

// Cuts text down to what a cell can hold, on a character boundary
fn cell_text(text: &str) -> String {
    if text.chars().count() > MAX_CELL_CHARS {
        log::warn!("truncating cell text to {} characters", MAX_CELL_CHARS);
        text.chars().take(MAX_CELL_CHARS).collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::record::PageRecord;
    use calamine::{open_workbook, Reader, Xlsx};
    use tempfile::TempDir;

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn record(title: &str, url: &str, content: &str) -> PageRecord {
        PageRecord {
            title: title.to_string(),
            url: url.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_round_trip_keeps_rows_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("web_crawl_data.xlsx");
        let result = CrawlResult::from(vec![
            record("Home", "https://example.com/", "Hello world"),
            record("Missing Title", "https://example.com/b", "B heading B text"),
            record("Ünïcödé ✓", "https://example.com/a?x=1&y=2", "a < b & c > d"),
        ]);

        save_to_xlsx(&result, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[0], HEADERS.map(String::from).to_vec());
        let records: Vec<PageRecord> = rows[1..]
            .iter()
            .map(|r| record(&r[0], &r[1], &r[2]))
            .collect();
        assert_eq!(records, result.records());
    }

    #[test]
    fn test_empty_result_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        save_to_xlsx(&CrawlResult::new(), &path).unwrap();

        assert_eq!(read_rows(&path), vec![HEADERS.map(String::from).to_vec()]);
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.xlsx");
        fs::write(&path, b"not a spreadsheet").unwrap();

        let result = CrawlResult::from(vec![record("Home", "https://example.com/", "")]);
        save_to_xlsx(&result, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "Home");
        assert_eq!(rows[1][2], "");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/out.xlsx");

        let err = save_to_xlsx(&CrawlResult::new(), &path).unwrap_err();

        assert!(matches!(err, ExportError::Xlsx(_)));
    }

    #[test]
    fn test_cell_text_is_truncated() {
        let long = "é".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(cell_text(&long).chars().count(), MAX_CELL_CHARS);
        assert_eq!(cell_text("short"), "short");
    }
}
