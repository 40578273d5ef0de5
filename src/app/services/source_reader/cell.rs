//! Cell values and raw sheet grids

use crate::app::services::cleanup::to_number;

/// A decoded spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Whether the cell holds nothing, or only whitespace
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering of the cell, integral numbers without a fraction
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.trim().to_string(),
            CellValue::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
                format!("{}", *number as i64)
            }
            CellValue::Number(number) => number.to_string(),
            CellValue::Bool(flag) => flag.to_string(),
        }
    }

    /// Numeric value, or the invalid sentinel when the cell is not a number
    pub fn to_number(&self) -> f64 {
        match self {
            CellValue::Number(number) if number.is_finite() => *number,
            CellValue::Number(_) | CellValue::Empty => f64::NAN,
            CellValue::Text(text) => to_number(text),
            CellValue::Bool(flag) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        CellValue::Number(number)
    }
}

/// One worksheet as a row-major grid anchored at cell A1
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Cell at a 1-based row number and 0-based column index
    pub fn cell(&self, row_number: u32, column: u32) -> Option<&CellValue> {
        if row_number == 0 {
            return None;
        }
        self.rows
            .get(row_number as usize - 1)
            .and_then(|row| row.get(column as usize))
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// All sheets of a decoded spreadsheet, in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}
