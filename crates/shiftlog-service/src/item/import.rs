//! Spreadsheet extraction for bulk item catalog uploads.
//!
//! Accepts `.xlsx` workbooks whose first sheet carries `item_name`,
//! `part_number`, `customer` columns. The header row is skipped, blank
//! item names are dropped, and duplicate triples within the file collapse
//! to one.

use std::collections::HashSet;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_entity::item::ItemTriple;

/// Extracts item triples from uploaded workbooks.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetImporter;

impl SpreadsheetImporter {
    /// Creates a new importer.
    pub fn new() -> Self {
        Self
    }

    /// Rejects filenames that are not `.xlsx`.
    pub fn check_extension(&self, filename: &str) -> AppResult<()> {
        if filename.to_lowercase().ends_with(".xlsx") {
            Ok(())
        } else {
            Err(AppError::validation("Only .xlsx files are supported"))
        }
    }

    /// Parses the first worksheet into deduplicated item triples.
    pub fn extract_rows(&self, data: &[u8]) -> AppResult<Vec<ItemTriple>> {
        let mut workbook = Xlsx::new(Cursor::new(data.to_vec()))
            .map_err(|e| AppError::validation(format!("Could not read workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::validation("Workbook has no sheets"))?
            .map_err(|e| AppError::validation(format!("Could not read sheet: {e}")))?;

        let mut seen = HashSet::new();
        let mut triples = Vec::new();

        for row in range.rows().skip(1) {
            let Some(item_name) = row.first().and_then(cell_text) else {
                continue;
            };
            let triple = ItemTriple {
                item_name,
                part_number: row.get(1).and_then(cell_text),
                customer: row.get(2).and_then(cell_text),
            };
            if seen.insert(triple.clone()) {
                triples.push(triple);
            }
        }

        Ok(triples)
    }
}

/// Trimmed text of a cell, `None` when blank. Numeric part numbers are
/// common in practice, so numbers render without a trailing `.0`.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    };
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check() {
        let importer = SpreadsheetImporter::new();
        assert!(importer.check_extension("items.xlsx").is_ok());
        assert!(importer.check_extension("ITEMS.XLSX").is_ok());
        assert!(importer.check_extension("items.xls").is_err());
        assert!(importer.check_extension("items.csv").is_err());
    }

    #[test]
    fn test_cell_text_normalizes_numbers_and_blanks() {
        assert_eq!(cell_text(&Data::String("  Bolt ".into())), Some("Bolt".into()));
        assert_eq!(cell_text(&Data::String("   ".into())), None);
        assert_eq!(cell_text(&Data::Float(1042.0)), Some("1042".into()));
        assert_eq!(cell_text(&Data::Float(10.5)), Some("10.5".into()));
        assert_eq!(cell_text(&Data::Empty), None);
    }

    #[test]
    fn test_garbage_bytes_are_a_validation_error() {
        let importer = SpreadsheetImporter::new();
        assert!(importer.extract_rows(b"definitely not a zip").is_err());
    }
}
