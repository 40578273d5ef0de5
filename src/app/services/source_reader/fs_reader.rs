//! Filesystem-backed source reader

use super::SourceReader;
use super::cell::Workbook;
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Reads CSV text and spreadsheets from disk
///
/// Spreadsheet decoding (XLS, XLSX, ODS) needs the `excel` feature, which is
/// enabled by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl FsSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for FsSourceReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        debug!("Reading text source {}", path.display());
        std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
    }

    fn read_workbook(&self, path: &Path) -> Result<Workbook> {
        debug!("Reading workbook {}", path.display());
        if !path.exists() {
            return Err(Error::io(
                format!("Failed to read {}", path.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            ));
        }
        decode_workbook(path)
    }
}

#[cfg(feature = "excel")]
fn decode_workbook(path: &Path) -> Result<Workbook> {
    use super::cell::{CellValue, Sheet};
    use calamine::{Data, Reader, open_workbook_auto};

    let file = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| Error::spreadsheet(&file, e.to_string()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| Error::spreadsheet(&file, format!("sheet '{}': {}", name, e)))?;

        // Ranges start at the first used cell; pad so the grid is anchored at A1
        let (row_offset, column_offset) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset as usize];
        for row in range.rows() {
            let mut cells = vec![CellValue::Empty; column_offset as usize];
            cells.extend(row.iter().map(|data| match data {
                Data::Int(value) => CellValue::Number(*value as f64),
                Data::Float(value) => CellValue::Number(*value),
                Data::String(text) => CellValue::Text(text.clone()),
                Data::Bool(flag) => CellValue::Bool(*flag),
                Data::DateTime(value) => CellValue::Number(value.as_f64()),
                Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
                Data::Error(_) | Data::Empty => CellValue::Empty,
            }));
            rows.push(cells);
        }
        sheets.push(Sheet::new(name, rows));
    }

    debug!("Decoded {} sheets from {}", sheets.len(), file);
    Ok(Workbook::new(sheets))
}

#[cfg(not(feature = "excel"))]
fn decode_workbook(path: &Path) -> Result<Workbook> {
    Err(Error::spreadsheet(
        path.display().to_string(),
        "spreadsheet support requires the `excel` feature",
    ))
}
