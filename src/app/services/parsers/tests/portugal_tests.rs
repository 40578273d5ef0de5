//! Tests for the Portugal NUTS-level parser

use super::*;
use crate::Error;
use crate::app::services::parsers::{CountryParser, PortugalParser};
use crate::app::services::source_reader::{MemorySourceReader, Workbook};

type Rows = &'static [(u32, &'static [(&'static str, &'static str)])];

const HEADER: Rows = &[
    (1, &[("A", "Crimes recorded by the police")]),
    (
        10,
        &[
            ("C", "Total"),
            ("E", "Homicide"),
            ("G", "Theft"),
            ("I", "Robbery"),
            ("K", "Fraud"),
            ("M", "Arson"),
            ("O", "Vandalism"),
            ("Q", "Drugs"),
            ("S", "Other"),
        ],
    ),
];

const NESTED: Rows = &[
    (12, &[("A", "Portugal"), ("B", "PT"), ("C", "900"), ("E", "10"), ("G", "500")]),
    (13, &[("A", "Continente"), ("B", "1"), ("C", "850"), ("E", "9")]),
    (14, &[("A", "Norte"), ("B", "11"), ("C", "300"), ("E", "4"), ("G", "200")]),
    (15, &[("A", "Alto Minho"), ("B", "111"), ("C", "30"), ("E", "1")]),
    (16, &[("A", "Arcos de Valdevez"), ("B", "1111601"), ("E", "0"), ("G", "3")]),
    (17, &[("A", "Viana do Castelo"), ("B", "1111609"), ("E", "1"), ("G", "12")]),
    (18, &[("A", "Centro"), ("B", "16"), ("E", "2")]),
];

fn parse(rows: &[(u32, &[(&str, &str)])]) -> crate::Result<crate::Country> {
    let mut entries = HEADER.to_vec();
    entries.extend_from_slice(rows);
    let workbook = Workbook::new(vec![sparse_sheet("Table", &entries)]);
    let reader = MemorySourceReader::new().with_workbook("portugal.xls", workbook);
    PortugalParser.parse(&reader, &sources(&["portugal.xls"]))
}

#[test]
fn test_every_row_reports_all_categories_except_total() {
    let country = parse(NESTED).expect("parse");
    let year = &country.years[0];

    assert_eq!(country.name, "Portugal");
    assert_eq!(year.label, "2018");

    let labels: Vec<&str> = year.data.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Homicide", "Theft", "Robbery", "Fraud", "Arson", "Vandalism", "Drugs", "Other"]
    );
    assert_eq!(year.data[0].value, 10.0);
    assert_eq!(year.data[1].value, 500.0);
    assert!(year.data[2].is_invalid());
}

#[test]
fn test_level_code_length_gives_depth() {
    let country = parse(NESTED).expect("parse");
    let year = &country.years[0];

    let regions: Vec<&str> = year.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(regions, vec!["Norte", "Centro"]);

    let norte = &year.regions[0];
    assert_eq!(norte.data[0].value, 4.0);
    assert_eq!(norte.provinces.len(), 1);

    let alto_minho = &norte.provinces[0];
    assert_eq!(alto_minho.name, "Alto Minho");
    assert_eq!(alto_minho.data[0].value, 1.0);

    let counties: Vec<(&str, f64)> = alto_minho
        .counties
        .iter()
        .map(|c| (c.name.as_str(), c.data[1].value))
        .collect();
    assert_eq!(
        counties,
        vec![("Arcos de Valdevez", 3.0), ("Viana do Castelo", 12.0)]
    );
}

#[test]
fn test_continental_grouping_is_skipped() {
    let country = parse(NESTED).expect("parse");

    assert!(
        country.years[0]
            .regions
            .iter()
            .all(|region| region.name != "Continente")
    );
}

#[test]
fn test_province_before_region_is_a_layout_violation() {
    let result = parse(&[(12, &[("A", "Alto Minho"), ("B", "111"), ("E", "1")])]);

    assert!(matches!(result, Err(Error::LayoutViolation { .. })));
}

#[test]
fn test_county_before_province_is_a_layout_violation() {
    let result = parse(&[
        (12, &[("A", "Norte"), ("B", "11"), ("E", "4")]),
        (13, &[("A", "Viana do Castelo"), ("B", "1111609"), ("E", "1")]),
    ]);

    assert!(matches!(result, Err(Error::LayoutViolation { .. })));
}
