//! Hungary: category rows interleaved with level-marked location rows
//!
//! The sheet lists a crime category on a row of its own (only column A filled),
//! followed by one row per location with a level marker in column B and one
//! column per year. Region rows (`capital`, `county`) repeat in the same order
//! under every category; the `country` row carries the national total.

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, Crime, Region, Year};
use crate::app::services::cleanup::to_number;
use crate::app::services::source_reader::{SheetLayout, SheetRow, SourceReader};
use crate::constants::hungary::{
    COUNTRY_MARKER, COUNTRY_NAME, FOOTNOTE_MARKER, HEADER_ROWS, KEY_ROW, LEVEL_COLUMN, LEVEL_KEY,
    LOCATION_COLUMN, LOCATION_KEY, REGION_MARKERS, SHEET, YEAR_COLUMNS,
};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct HungaryParser;

/// Position in the category/location row sequence
enum State {
    AwaitingCategory,
    InCategory {
        label: String,
        ordinal: usize,
        next_region: usize,
    },
}

fn violation(message: String) -> Error {
    Error::layout_violation(COUNTRY_NAME, message)
}

impl HungaryParser {
    fn layout() -> Result<SheetLayout> {
        SheetLayout::new(SHEET)
            .with_header_rows(HEADER_ROWS)
            .with_column(LOCATION_COLUMN, LOCATION_KEY)?
            .with_column(LEVEL_COLUMN, LEVEL_KEY)?
            .with_header_keyed_columns(YEAR_COLUMNS, KEY_ROW)
    }

    /// Build the tree from decoded rows
    ///
    /// `year_columns` holds `(column letters, year label)` pairs in output order.
    pub fn parse_rows(year_columns: &[(String, String)], rows: &[SheetRow]) -> Result<Country> {
        if year_columns.is_empty() {
            return Err(violation("no year columns in the header".to_string()));
        }

        let mut years: Vec<Year> = year_columns
            .iter()
            .map(|(_, label)| Year::new(label.as_str()))
            .collect();
        let mut region_names: Vec<String> = Vec::new();
        let mut state = State::AwaitingCategory;

        for row in rows {
            if row.only_in_column(LOCATION_COLUMN) {
                let ordinal = match &state {
                    State::AwaitingCategory => 0,
                    State::InCategory {
                        label,
                        ordinal,
                        next_region,
                    } => {
                        check_complete(label, *ordinal, *next_region, &region_names)?;
                        ordinal + 1
                    }
                };
                let label = row
                    .text(LOCATION_KEY)
                    .unwrap_or_default()
                    .replacen(FOOTNOTE_MARKER, "", 1)
                    .trim()
                    .to_string();
                state = State::InCategory {
                    label,
                    ordinal,
                    next_region: 0,
                };
                continue;
            }

            let State::InCategory {
                label,
                ordinal,
                next_region,
            } = &mut state
            else {
                return Err(violation(format!(
                    "location row {} appears before any crime category",
                    row.number
                )));
            };

            let location = row
                .text(LOCATION_KEY)
                .ok_or_else(|| violation(format!("row {} has no location", row.number)))?;
            let level = row
                .text(LEVEL_KEY)
                .ok_or_else(|| violation(format!("row {} has no level marker", row.number)))?;

            let values: Vec<f64> = year_columns
                .iter()
                .map(|(letters, _)| row.column(letters).map_or(f64::NAN, |cell| cell.to_number()))
                .collect();

            if REGION_MARKERS.iter().any(|marker| level.contains(marker)) {
                if *ordinal == 0 {
                    region_names.push(location.clone());
                    for (year, value) in years.iter_mut().zip(&values) {
                        let crime = Crime::new(label.as_str(), *value);
                        year.regions.push(Region::flat(location.as_str(), vec![crime]));
                    }
                } else {
                    let expected = region_names.get(*next_region).ok_or_else(|| {
                        violation(format!(
                            "category '{}' lists more regions than the first category",
                            label
                        ))
                    })?;
                    if *expected != location {
                        return Err(violation(format!(
                            "category '{}' lists region '{}' where '{}' was expected",
                            label, location, expected
                        )));
                    }
                    for (year, value) in years.iter_mut().zip(&values) {
                        if let Some(data) = year.regions[*next_region].flat_data_mut() {
                            data.push(Crime::new(label.as_str(), *value));
                        }
                    }
                }
                *next_region += 1;
            } else if level == COUNTRY_MARKER {
                for (year, value) in years.iter_mut().zip(&values) {
                    year.data.push(Crime::new(label.as_str(), *value));
                }
            } else {
                debug!(
                    "Skipping row {} ('{}') with level '{}'",
                    row.number, location, level
                );
            }
        }

        match &state {
            State::AwaitingCategory => {
                return Err(violation("no crime categories found".to_string()));
            }
            State::InCategory {
                label,
                ordinal,
                next_region,
            } => check_complete(label, *ordinal, *next_region, &region_names)?,
        }

        debug!(
            "Parsed {} regions across {} years",
            region_names.len(),
            years.len()
        );

        let mut country = Country::new(COUNTRY_NAME);
        country.years = years;
        Ok(country)
    }
}

/// Every category after the first must list all regions of the first
fn check_complete(
    label: &str,
    ordinal: usize,
    visited: usize,
    region_names: &[String],
) -> Result<()> {
    if ordinal > 0 && visited != region_names.len() {
        return Err(violation(format!(
            "category '{}' lists {} regions, expected {}",
            label,
            visited,
            region_names.len()
        )));
    }
    Ok(())
}

impl CountryParser for HungaryParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let file = file_label(&sources[0]);
        let workbook = reader.read_workbook(&sources[0])?;
        let layout = Self::layout()?;

        let year_columns: Vec<(String, String)> = layout
            .keys(&workbook, &file)?
            .into_iter()
            .filter(|(letters, key)| {
                YEAR_COLUMNS.contains(&letters.as_str()) && to_number(key).is_finite()
            })
            .collect();
        let rows = layout.apply(&workbook, &file)?;

        Self::parse_rows(&year_columns, &rows)
    }
}
