//! Tests for the Cyprus two-workbook parser

use super::*;
use crate::Error;
use crate::app::services::parsers::{CountryParser, CyprusParser};
use crate::app::services::source_reader::{MemorySourceReader, Workbook};

const HEADER: &[(&str, &str)] = &[
    ("A", "Offences"),
    ("B", "Nicosia"),
    ("E", "Limasol"),
    ("H", "Larnaca"),
    ("K", "Ammochostos"),
    ("N", "Pafos"),
    ("Q", "Morfou"),
    ("T", "TOTAL"),
];

fn offence_workbook(
    sheet: &str,
    header: &[(&str, &str)],
    rows: &[(u32, &[(&str, &str)])],
) -> Workbook {
    let title: &[(&str, &str)] = &[("A", "Police statistics")];
    let mut entries = vec![(1, title), (2, header)];
    entries.extend_from_slice(rows);
    Workbook::new(vec![sparse_sheet(sheet, &entries)])
}

fn reader_with(serious_header: &[(&str, &str)]) -> MemorySourceReader {
    let serious = offence_workbook(
        "Serious crime",
        serious_header,
        &[
            (
                4,
                &[
                    ("A", "Homicide"),
                    ("B", "2"),
                    ("E", "1"),
                    ("H", "0"),
                    ("K", "1"),
                    ("N", "0"),
                    ("Q", "0"),
                    ("T", "4"),
                ],
            ),
            (5, &[("A", "Robbery"), ("B", "10"), ("E", "6"), ("T", "16")]),
            // Outside the A4:T15 range
            (20, &[("A", "Notes"), ("B", "99")]),
        ],
    );
    let minor = offence_workbook(
        "Minor per off",
        HEADER,
        &[(4, &[("A", "Traffic offences"), ("B", "300"), ("Q", "12"), ("T", "312")])],
    );

    MemorySourceReader::new()
        .with_workbook("cyprus_1.xls", serious)
        .with_workbook("cyprus_2.xls", minor)
}

fn parse(reader: &MemorySourceReader) -> crate::Result<crate::Country> {
    CyprusParser.parse(reader, &sources(&["cyprus_1.xls", "cyprus_2.xls"]))
}

#[test]
fn test_districts_become_renamed_flat_regions() {
    let country = parse(&reader_with(HEADER)).expect("parse");

    assert_eq!(country.name, "Cyprus");
    assert_eq!(country.years.len(), 1);
    let year = &country.years[0];
    assert_eq!(year.label, "2019");

    let names: Vec<&str> = year.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Nicosia", "Limassol", "Larnaca", "Famagusta", "Pafos", "Kyrenia"]
    );
    for region in &year.regions {
        assert_eq!(region.provinces[0].name, region.name);
        assert_eq!(region.provinces[0].counties[0].name, region.name);
    }
}

#[test]
fn test_serious_and_minor_rows_are_concatenated() {
    let country = parse(&reader_with(HEADER)).expect("parse");
    let year = &country.years[0];

    let national: Vec<(&str, f64)> = year
        .data
        .iter()
        .map(|crime| (crime.label.as_str(), crime.value))
        .collect();
    assert_eq!(
        national,
        vec![("Homicide", 4.0), ("Robbery", 16.0), ("Traffic offences", 312.0)]
    );

    let nicosia = &year.regions[0].provinces[0].counties[0].data;
    assert_eq!(nicosia.len(), 3);
    assert_eq!(nicosia[2].label, "Traffic offences");
    assert_eq!(nicosia[2].value, 300.0);

    let kyrenia = &year.regions[5].provinces[0].counties[0].data;
    assert_eq!(kyrenia[2].value, 12.0);
}

#[test]
fn test_missing_district_cells_stay_invalid() {
    let country = parse(&reader_with(HEADER)).expect("parse");
    let larnaca = &country.years[0].regions[2].provinces[0].counties[0].data;

    assert_eq!(larnaca[0].value, 0.0);
    assert!(larnaca[1].is_invalid());
}

#[test]
fn test_tables_naming_different_districts_are_rejected() {
    let mut header = HEADER.to_vec();
    header[1] = ("B", "Lefkosia");
    let result = parse(&reader_with(&header));

    assert!(matches!(result, Err(Error::LayoutViolation { .. })));
}

#[test]
fn test_missing_sheet_is_reported() {
    let reader = MemorySourceReader::new()
        .with_workbook("cyprus_1.xls", Workbook::default())
        .with_workbook("cyprus_2.xls", Workbook::default());
    let result = parse(&reader);

    assert!(matches!(result, Err(Error::SheetNotFound { .. })));
}

#[test]
fn test_expects_two_sources() {
    let reader = reader_with(HEADER);
    let result = CyprusParser.parse(&reader, &sources(&["cyprus_1.xls"]));

    assert!(matches!(result, Err(Error::Configuration { .. })));
}
