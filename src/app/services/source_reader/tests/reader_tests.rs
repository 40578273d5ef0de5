//! Tests for the filesystem and in-memory readers

use super::*;
use crate::Error;
use crate::app::services::source_reader::cell::{CellValue, Workbook};
use crate::app::services::source_reader::{FsSourceReader, MemorySourceReader, SourceReader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_fs_reader_reads_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("luxembourg.csv");
    fs::write(&path, "Year,2018\nMurder,3\n").unwrap();

    let text = FsSourceReader::new().read_text(&path).unwrap();
    assert!(text.starts_with("Year"));
}

#[test]
fn test_fs_reader_missing_file() {
    let reader = FsSourceReader::new();
    let missing = Path::new("/definitely/not/here.csv");

    assert!(matches!(reader.read_text(missing), Err(Error::Io { .. })));
    assert!(matches!(
        reader.read_workbook(Path::new("/definitely/not/here.xls")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_memory_reader_serves_registered_content() {
    let workbook = Workbook::new(vec![sheet_from_rows("Table", &[&["PT", "12"]])]);
    let reader = MemorySourceReader::new()
        .with_text("a.csv", "x,y")
        .with_workbook("b.xls", workbook);

    assert_eq!(reader.read_text(Path::new("a.csv")).unwrap(), "x,y");
    let decoded = reader.read_workbook(Path::new("b.xls")).unwrap();
    assert_eq!(decoded.sheet_names(), vec!["Table"]);
    assert_eq!(
        decoded.sheet("Table").unwrap().cell(1, 1),
        Some(&CellValue::Number(12.0))
    );
    assert!(reader.read_text(Path::new("b.xls")).is_err());
}

#[test]
fn test_cell_value_coercion() {
    assert_eq!(CellValue::Number(2019.0).as_text(), "2019");
    assert_eq!(CellValue::Number(1.5).as_text(), "1.5");
    assert_eq!(CellValue::Text(" 42 ".to_string()).to_number(), 42.0);
    assert!(CellValue::Text("..".to_string()).to_number().is_nan());
    assert!(CellValue::Empty.to_number().is_nan());
    assert!(CellValue::Text("   ".to_string()).is_empty());
}

#[cfg(feature = "excel")]
#[test]
fn test_fs_reader_anchors_decoded_sheets_at_a1() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/offset_grid.xlsx");
    let workbook = FsSourceReader::new().read_workbook(&path).unwrap();

    assert_eq!(workbook.sheet_names(), vec!["Serious crime"]);
    let sheet = workbook.sheet("Serious crime").unwrap();

    // First used cell is C3
    assert_eq!(sheet.row_count(), 5);
    assert_eq!(sheet.cell(1, 0), None);
    assert_eq!(sheet.cell(3, 0), Some(&CellValue::Empty));
    assert_eq!(sheet.cell(3, 2), Some(&CellValue::Text("Offence".to_string())));
    assert_eq!(sheet.cell(3, 3), Some(&CellValue::Text("Nicosia".to_string())));
    assert_eq!(sheet.cell(4, 2), Some(&CellValue::Text("Homicide".to_string())));
    assert_eq!(sheet.cell(4, 3), Some(&CellValue::Number(3.5)));
    assert_eq!(sheet.cell(4, 4), Some(&CellValue::Number(12.0)));
    assert_eq!(sheet.cell(5, 2), Some(&CellValue::Empty));
    assert_eq!(sheet.cell(5, 4), Some(&CellValue::Bool(true)));
}

#[cfg(feature = "excel")]
#[test]
fn test_fs_reader_rejects_corrupt_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.xlsx");
    fs::write(&path, "not a zip archive").unwrap();

    assert!(matches!(
        FsSourceReader::new().read_workbook(&path),
        Err(Error::Spreadsheet { .. })
    ));
}
