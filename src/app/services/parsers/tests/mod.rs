//! Shared test utilities and fixtures for parser tests

use crate::app::services::source_reader::layout::column_index;
use crate::app::services::source_reader::tests::fixture_cell;
use crate::app::services::source_reader::{CellValue, Sheet};
use std::path::PathBuf;

pub mod cyprus_tests;
pub mod portugal_tests;

/// Build a sheet from `(row number, [(column letters, text)])` entries
///
/// Cells not listed are empty; numeric text becomes a number.
pub fn sparse_sheet(name: &str, rows: &[(u32, &[(&str, &str)])]) -> Sheet {
    let height = rows.iter().map(|(number, _)| *number).max().unwrap_or(0) as usize;
    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); height];

    for (number, cells) in rows {
        let row = &mut grid[*number as usize - 1];
        for (letters, text) in cells.iter() {
            let column = column_index(letters).expect("fixture column letters") as usize;
            if row.len() <= column {
                row.resize(column + 1, CellValue::Empty);
            }
            row[column] = fixture_cell(text);
        }
    }

    Sheet::new(name, grid)
}

/// Source paths as the registry would hand them to a parser
pub fn sources(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}
