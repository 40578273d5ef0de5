//! Tests for sheet layouts

use super::*;
use crate::Error;
use crate::app::services::source_reader::cell::Workbook;
use crate::app::services::source_reader::layout::{
    CellRange, ColumnKey, SheetLayout, column_index, column_letters,
};

fn district_workbook() -> Workbook {
    Workbook::new(vec![sheet_from_rows(
        "Serious crime",
        &[
            &["Report title", "", ""],
            &["Offences", "Nicosia", "TOTAL"],
            &["", "", ""],
            &["Homicide", "3", "5"],
            &["", "", ""],
            &["Arson", "", "7"],
            &["Ignored", "1", "1"],
        ],
    )])
}

#[test]
fn test_column_letter_conversion() {
    assert_eq!(column_index("A"), Some(0));
    assert_eq!(column_index("T"), Some(19));
    assert_eq!(column_index("AA"), Some(26));
    assert_eq!(column_index("a"), None);
    assert_eq!(column_index(""), None);

    assert_eq!(column_letters(0), "A");
    assert_eq!(column_letters(25), "Z");
    assert_eq!(column_letters(26), "AA");
}

#[test]
fn test_overlong_column_names_are_rejected() {
    assert_eq!(column_index("MWLQKWU"), Some(u32::MAX - 1));
    assert_eq!(column_index("MWLQKWV"), None);
    assert_eq!(column_index("ZZZZZZZZ"), None);
    assert_eq!(column_letters(u32::MAX - 1), "MWLQKWU");

    assert_eq!(
        ColumnKey::parse("{{ZZZZZZZZ2}}"),
        ColumnKey::Literal("{{ZZZZZZZZ2}}".to_string())
    );
    assert!(matches!(
        CellRange::parse("A1:ZZZZZZZZ9"),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_cell_range_parse() {
    let range = CellRange::parse("A4:T15").unwrap();
    assert_eq!(range.first_column, 0);
    assert_eq!(range.first_row, 4);
    assert_eq!(range.last_column, 19);
    assert_eq!(range.last_row, 15);
    assert!(range.contains_row(15));
    assert!(!range.contains_row(16));

    assert!(matches!(
        CellRange::parse("T15:A4"),
        Err(Error::Configuration { .. })
    ));
    assert!(CellRange::parse("not a range").is_err());
}

#[test]
fn test_column_key_templates() {
    assert_eq!(
        ColumnKey::parse("{{C10}}"),
        ColumnKey::HeaderCell { column: 2, row: 10 }
    );
    assert_eq!(
        ColumnKey::parse("Level"),
        ColumnKey::Literal("Level".to_string())
    );
}

#[test]
fn test_apply_skips_headers_and_empty_cells() {
    let layout = SheetLayout::new("Serious crime")
        .with_header_rows(3)
        .with_range("A4:C6")
        .unwrap()
        .with_header_keyed_columns(&["A", "B", "C"], 2)
        .unwrap();

    let rows = layout.apply(&district_workbook(), "cyprus_1.xls").unwrap();

    // Row 5 is blank and row 7 is outside the range
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].number, 4);
    assert_eq!(rows[0].text("Offences").as_deref(), Some("Homicide"));
    assert_eq!(rows[0].get("Nicosia").unwrap().to_number(), 3.0);

    // Empty cells are left out of the row object
    assert_eq!(rows[1].len(), 2);
    assert!(rows[1].get("Nicosia").is_none());
    assert_eq!(rows[1].column("C").unwrap().to_number(), 7.0);
}

#[test]
fn test_apply_literal_keys_and_single_cell_rows() {
    let layout = SheetLayout::new("Serious crime")
        .with_header_rows(2)
        .with_column("A", "Crime_or_location")
        .unwrap()
        .with_column("B", "Level")
        .unwrap();

    let rows = layout.apply(&district_workbook(), "x.xls").unwrap();
    assert_eq!(rows.len(), 3);
    assert!(!rows[0].only_in_column("A"));
    assert!(rows[1].only_in_column("A"));
    assert_eq!(rows[2].text("Level").as_deref(), Some("1"));
}

#[test]
fn test_apply_missing_sheet() {
    let layout = SheetLayout::new("Minor per off");
    let result = layout.apply(&district_workbook(), "cyprus_2.xls");

    match result {
        Err(Error::SheetNotFound { file, sheet }) => {
            assert_eq!(file, "cyprus_2.xls");
            assert_eq!(sheet, "Minor per off");
        }
        other => panic!("expected SheetNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_header_cell_falls_back_to_letters() {
    let layout = SheetLayout::new("Serious crime")
        .with_header_rows(3)
        .with_column("B", "{{B1}}")
        .unwrap();

    let rows = layout.apply(&district_workbook(), "x.xls").unwrap();
    assert_eq!(rows[0].cells[0].key, "B");
}

#[test]
fn test_keys_resolve_header_templates() {
    let layout = SheetLayout::new("Serious crime")
        .with_column("A", "Label")
        .unwrap()
        .with_header_keyed_columns(&["B", "C"], 2)
        .unwrap();

    let keys = layout.keys(&district_workbook(), "x.xls").unwrap();
    assert_eq!(
        keys,
        vec![
            ("A".to_string(), "Label".to_string()),
            ("B".to_string(), "Nicosia".to_string()),
            ("C".to_string(), "TOTAL".to_string()),
        ]
    );
}
