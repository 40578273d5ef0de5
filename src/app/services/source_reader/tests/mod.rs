//! Shared test utilities and fixtures for source reader tests

use super::cell::{CellValue, Sheet};

pub mod delimited_tests;
pub mod layout_tests;
pub mod reader_tests;

/// Parse a fixture cell: blank is empty, numeric text is a number
pub fn fixture_cell(text: &str) -> CellValue {
    if text.is_empty() {
        CellValue::Empty
    } else if let Ok(number) = text.parse::<f64>() {
        CellValue::Number(number)
    } else {
        CellValue::Text(text.to_string())
    }
}

/// Build a sheet anchored at A1 from rows of fixture cells
pub fn sheet_from_rows(name: &str, rows: &[&[&str]]) -> Sheet {
    Sheet::new(
        name,
        rows.iter()
            .map(|row| row.iter().map(|text| fixture_cell(text)).collect())
            .collect(),
    )
}
