//! Portugal: NUTS-coded rows at four depths
//!
//! Each row names a place (column A) with its NUTS level code (column B) and
//! one count per crime category. The code length gives the depth: `PT` is the
//! nation, one character a continental grouping (skipped), two a region, three
//! a province and anything longer a county (municipality).

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, County, Crime, Province, Region, Year};
use crate::app::services::source_reader::{SheetLayout, SheetRow, SourceReader};
use crate::constants::portugal::{
    CATEGORY_COLUMNS, COUNTRY_NAME, HEADER_ROWS, KEY_ROW, LEVEL_KEY, NATIONAL_MARKER, PLACE_KEY,
    RANGE, SHEET, TOTAL_KEY, YEAR,
};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PortugalParser;

fn violation(message: String) -> Error {
    Error::layout_violation(COUNTRY_NAME, message)
}

impl PortugalParser {
    fn layout() -> Result<SheetLayout> {
        SheetLayout::new(SHEET)
            .with_header_rows(HEADER_ROWS)
            .with_range(RANGE)?
            .with_column("A", PLACE_KEY)?
            .with_column("B", LEVEL_KEY)?
            .with_header_keyed_columns(CATEGORY_COLUMNS, KEY_ROW)
    }

    /// Build the tree from decoded rows
    ///
    /// `categories` holds `(column letters, category name)` pairs; every row
    /// contributes one tally per category.
    pub fn parse_rows(categories: &[(String, String)], rows: &[SheetRow]) -> Result<Country> {
        let mut year = Year::new(YEAR);

        for row in rows {
            let level = row
                .text(LEVEL_KEY)
                .ok_or_else(|| violation(format!("row {} has no level code", row.number)))?;
            let place = row
                .text(PLACE_KEY)
                .ok_or_else(|| violation(format!("row {} has no place name", row.number)))?;

            let data: Vec<Crime> = categories
                .iter()
                .map(|(letters, name)| {
                    let value = row.column(letters).map_or(f64::NAN, |cell| cell.to_number());
                    Crime::new(name.as_str(), value)
                })
                .collect();

            if level == NATIONAL_MARKER {
                year.data.extend(data);
                continue;
            }

            match level.chars().count() {
                1 => debug!("Skipping grouping row {} ('{}')", row.number, place),
                2 => {
                    let mut region = Region::new(place);
                    region.data = data;
                    year.regions.push(region);
                }
                3 => {
                    let region = year.regions.last_mut().ok_or_else(|| {
                        violation(format!("province '{}' appears before any region", place))
                    })?;
                    let mut province = Province::new(place);
                    province.data = data;
                    region.provinces.push(province);
                }
                _ => {
                    let province = year
                        .regions
                        .last_mut()
                        .and_then(|region| region.provinces.last_mut())
                        .ok_or_else(|| {
                            violation(format!("county '{}' appears before any province", place))
                        })?;
                    province.counties.push(County::with_data(place, data));
                }
            }
        }

        debug!("Parsed {} regions", year.regions.len());

        let mut country = Country::new(COUNTRY_NAME);
        country.years.push(year);
        Ok(country)
    }
}

impl CountryParser for PortugalParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let file = file_label(&sources[0]);
        let workbook = reader.read_workbook(&sources[0])?;
        let layout = Self::layout()?;

        let categories: Vec<(String, String)> = layout
            .keys(&workbook, &file)?
            .into_iter()
            .filter(|(letters, key)| {
                CATEGORY_COLUMNS.contains(&letters.as_str()) && key != TOTAL_KEY
            })
            .collect();
        let rows = layout.apply(&workbook, &file)?;

        Self::parse_rows(&categories, &rows)
    }
}
