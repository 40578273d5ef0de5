//! Tests for CSV record reading

use crate::app::services::source_reader::delimited::{DelimitedOptions, read_delimited};

#[test]
fn test_read_delimited_trims_and_tracks_lines() {
    let text = "Year, 2018 ,2019\nMurder , 3, 4\n\nTheft,10,11\n";
    let rows = read_delimited(text, "lux.csv", &DelimitedOptions::default()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].fields, vec!["Year", "2018", "2019"]);
    assert_eq!(rows[1].field(0), "Murder");
    assert_eq!(rows[2].line, 4);
}

#[test]
fn test_read_delimited_skips_preamble_lines() {
    let text = "title\nsubtitle\nunit\n\"Category\"\n,All Denmark,5\n";
    let options = DelimitedOptions::default().with_skip_lines(3).flexible();
    let rows = read_delimited(text, "dk.csv", &options).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].fields, vec!["Category"]);
    assert_eq!(rows[1].field(1), "All Denmark");
    assert_eq!(rows[1].filled_count(), 2);
    assert_eq!(rows[1].field(7), "");
}

#[test]
fn test_read_delimited_skips_malformed_records() {
    let text = "Year,2018,2019\nMurder,3,4\nbroken,1\nTheft,10,11\n";
    let options = DelimitedOptions::default().skipping_malformed();
    let rows = read_delimited(text, "lux.csv", &options).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].field(0), "Theft");
}

#[test]
fn test_read_delimited_strict_rejects_ragged_records() {
    let text = "a,b,c\nd,e\n";
    let result = read_delimited(text, "bad.csv", &DelimitedOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_preamble_skip_counts_blank_lines() {
    let text = "title\n\nunit\nTheft\n,All Denmark,5\n";
    let options = DelimitedOptions::default().with_skip_lines(3).flexible();
    let rows = read_delimited(text, "dk.csv", &options).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].fields, vec!["Theft"]);
    assert_eq!(rows[0].line, 4);
    assert_eq!(rows[1].line, 5);
}

#[test]
fn test_lines_after_several_blank_lines() {
    let text = "Year,2018\r\n\r\n\r\nMurder,3\r\n\nTheft,4\n";
    let rows = read_delimited(text, "lux.csv", &DelimitedOptions::default()).unwrap();

    let lines: Vec<u64> = rows.iter().map(|row| row.line).collect();
    assert_eq!(lines, vec![1, 4, 6]);
}
