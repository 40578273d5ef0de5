//! Sheet layouts: turning raw grids into keyed row objects
//!
//! A [`SheetLayout`] describes how a worksheet export is read: how many header
//! rows to skip, which A1-style range holds the data, and which columns are
//! kept under which key. Keys are either literal names or `{{C2}}` templates
//! that take the text of a header cell. Empty cells are left out of row
//! objects and rows without any cell are dropped, so a row's cell count
//! carries structural meaning for some sources.

use super::cell::{CellValue, Sheet, Workbook};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `{{C2}}` header-cell template
static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{([A-Z]+)([0-9]+)\}\}$").unwrap());

/// `A4:T15` cell range
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)([0-9]+):([A-Z]+)([0-9]+)$").unwrap());

/// Convert column letters (`A`, `T`, `AA`) to a 0-based index
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters
        .chars()
        .try_fold(0u32, |acc, ch| {
            if ch.is_ascii_uppercase() {
                acc.checked_mul(26)?
                    .checked_add(ch as u32 - 'A' as u32 + 1)
            } else {
                None
            }
        })
        .map(|index| index - 1)
}

/// Convert a 0-based column index to its letters
pub fn column_letters(index: u32) -> String {
    let mut letters = Vec::new();
    let mut remaining = u64::from(index) + 1;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push((b'A' + digit as u8) as char);
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Key under which a column's cells appear in row objects
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKey {
    /// Fixed key name
    Literal(String),
    /// Key taken from the text of a header cell
    HeaderCell { column: u32, row: u32 },
}

impl ColumnKey {
    /// Parse a literal key or a `{{C2}}` template
    pub fn parse(text: &str) -> Self {
        TEMPLATE_RE
            .captures(text)
            .and_then(|caps| {
                let column = column_index(&caps[1])?;
                let row = caps[2].parse::<u32>().ok()?;
                Some(ColumnKey::HeaderCell { column, row })
            })
            .unwrap_or_else(|| ColumnKey::Literal(text.to_string()))
    }
}

/// Inclusive A1-style rectangle; rows are 1-based, columns 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_column: u32,
    pub first_row: u32,
    pub last_column: u32,
    pub last_row: u32,
}

impl CellRange {
    /// Parse a range like `A4:T15`
    pub fn parse(text: &str) -> Result<Self> {
        let caps = RANGE_RE
            .captures(text.trim())
            .ok_or_else(|| Error::configuration(format!("Invalid cell range '{}'", text)))?;

        let parse_row = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|e| Error::configuration(format!("Invalid row in range '{}': {}", text, e)))
        };
        let parse_column = |value: &str| {
            column_index(value)
                .ok_or_else(|| Error::configuration(format!("Invalid column in range '{}'", text)))
        };

        let range = Self {
            first_column: parse_column(&caps[1])?,
            first_row: parse_row(&caps[2])?,
            last_column: parse_column(&caps[3])?,
            last_row: parse_row(&caps[4])?,
        };

        if range.first_row == 0
            || range.first_row > range.last_row
            || range.first_column > range.last_column
        {
            return Err(Error::configuration(format!(
                "Cell range '{}' is empty or inverted",
                text
            )));
        }
        Ok(range)
    }

    pub fn contains_row(&self, row: u32) -> bool {
        (self.first_row..=self.last_row).contains(&row)
    }

    pub fn contains_column(&self, column: u32) -> bool {
        (self.first_column..=self.last_column).contains(&column)
    }
}

/// A non-empty cell of a row object
#[derive(Debug, Clone, PartialEq)]
pub struct RowCell {
    /// Column letters in the sheet
    pub column: String,
    /// Key assigned by the layout
    pub key: String,
    pub value: CellValue,
}

/// Row object: the non-empty mapped cells of one sheet row, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number in the sheet
    pub number: u32,
    pub cells: Vec<RowCell>,
}

impl SheetRow {
    /// Value stored under a key
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|cell| cell.key == key)
            .map(|cell| &cell.value)
    }

    /// Value in a given sheet column
    pub fn column(&self, letters: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|cell| cell.column == letters)
            .map(|cell| &cell.value)
    }

    /// Text under a key, if present
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(CellValue::as_text)
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the row holds exactly one cell, in the given column
    pub fn only_in_column(&self, letters: &str) -> bool {
        self.cells.len() == 1 && self.cells[0].column == letters
    }
}

/// Reading instructions for one worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet: String,
    /// Rows at the top of the sheet that never hold data
    pub header_rows: u32,
    pub range: Option<CellRange>,
    /// Kept columns and their keys; empty keeps every column keyed by its letters
    pub columns: Vec<(u32, ColumnKey)>,
}

impl SheetLayout {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            header_rows: 0,
            range: None,
            columns: Vec::new(),
        }
    }

    pub fn with_header_rows(mut self, rows: u32) -> Self {
        self.header_rows = rows;
        self
    }

    pub fn with_range(mut self, range: &str) -> Result<Self> {
        self.range = Some(CellRange::parse(range)?);
        Ok(self)
    }

    /// Keep a column under a literal key or `{{C2}}` template
    pub fn with_column(mut self, letters: &str, key: &str) -> Result<Self> {
        let column = column_index(letters)
            .ok_or_else(|| Error::configuration(format!("Invalid column letters '{}'", letters)))?;
        self.columns.push((column, ColumnKey::parse(key)));
        Ok(self)
    }

    /// Keep several columns, each keyed by the text of the given header row
    pub fn with_header_keyed_columns(mut self, letters: &[&str], key_row: u32) -> Result<Self> {
        for column in letters {
            self = self.with_column(column, &format!("{{{{{}{}}}}}", column, key_row))?;
        }
        Ok(self)
    }

    /// Resolve `(column index, letters, key)` for every kept column of a sheet
    fn resolve_columns(&self, sheet: &Sheet) -> Vec<(u32, String, String)> {
        if self.columns.is_empty() {
            let width = sheet.rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
            return (0..width)
                .map(|column| (column, column_letters(column), column_letters(column)))
                .collect();
        }

        self.columns
            .iter()
            .map(|(column, key)| {
                let letters = column_letters(*column);
                let key = match key {
                    ColumnKey::Literal(name) => name.clone(),
                    ColumnKey::HeaderCell { column, row } => sheet
                        .cell(*row, *column)
                        .map(CellValue::as_text)
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| {
                            debug!(
                                "Header cell {}{} of sheet '{}' is empty, keying column by letters",
                                column_letters(*column),
                                row,
                                self.sheet
                            );
                            letters.clone()
                        }),
                };
                (*column, letters, key)
            })
            .collect()
    }

    /// Resolved `(letters, key)` pairs of the kept columns, in layout order
    pub fn keys(&self, workbook: &Workbook, file: &str) -> Result<Vec<(String, String)>> {
        let sheet = workbook
            .sheet(&self.sheet)
            .ok_or_else(|| Error::sheet_not_found(file, &self.sheet))?;
        Ok(self
            .resolve_columns(sheet)
            .into_iter()
            .map(|(_, letters, key)| (letters, key))
            .collect())
    }

    /// Decode the layout's sheet of a workbook into row objects
    pub fn apply(&self, workbook: &Workbook, file: &str) -> Result<Vec<SheetRow>> {
        let sheet = workbook
            .sheet(&self.sheet)
            .ok_or_else(|| Error::sheet_not_found(file, &self.sheet))?;
        let columns = self.resolve_columns(sheet);

        let mut first_row = self.header_rows + 1;
        let mut last_row = sheet.row_count();
        if let Some(range) = &self.range {
            first_row = first_row.max(range.first_row);
            last_row = last_row.min(range.last_row);
        }

        let mut rows = Vec::new();
        for number in first_row..=last_row {
            let cells: Vec<RowCell> = columns
                .iter()
                .filter(|(column, _, _)| {
                    self.range
                        .as_ref()
                        .is_none_or(|range| range.contains_column(*column))
                })
                .filter_map(|(column, letters, key)| {
                    sheet
                        .cell(number, *column)
                        .filter(|value| !value.is_empty())
                        .map(|value| RowCell {
                            column: letters.clone(),
                            key: key.clone(),
                            value: value.clone(),
                        })
                })
                .collect();

            if !cells.is_empty() {
                rows.push(SheetRow { number, cells });
            }
        }

        debug!(
            "Decoded {} rows from sheet '{}' of {}",
            rows.len(),
            self.sheet,
            file
        );
        Ok(rows)
    }
}
