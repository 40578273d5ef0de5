//! Luxembourg: crimes as rows, years as columns
//!
//! The export's first header cell names the crime-label column; every other
//! header that reads as a number is a year. Luxembourg has no sub-national
//! breakdown, so each year holds a single region/province/county named after
//! the country.

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, Crime, Region, Year};
use crate::app::services::cleanup::{disentangle_subcategories, to_number};
use crate::app::services::source_reader::{DelimitedOptions, SourceReader, read_delimited};
use crate::constants::luxembourg::{COUNTRY_NAME, DISENTANGLE};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct LuxembourgParser;

impl LuxembourgParser {
    /// Parse the CSV export text
    pub fn parse_text(text: &str, file: &str) -> Result<Country> {
        let options = DelimitedOptions::default().skipping_malformed();
        let rows = read_delimited(text, file, &options)?;

        let (header, records) = rows.split_first().ok_or_else(|| {
            Error::layout_violation(COUNTRY_NAME, format!("{} has no header row", file))
        })?;

        let year_columns: Vec<(usize, &str)> = header
            .fields
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, heading)| to_number(heading).is_finite())
            .map(|(index, heading)| (index, heading.as_str()))
            .collect();

        if year_columns.is_empty() {
            return Err(Error::layout_violation(
                COUNTRY_NAME,
                format!("{} has no year columns in its header", file),
            ));
        }

        let mut tallies: Vec<Vec<Crime>> = vec![Vec::new(); year_columns.len()];
        for record in records {
            let label = record.field(0);
            for (data, (column, _)) in tallies.iter_mut().zip(&year_columns) {
                data.push(Crime::new(label, to_number(record.field(*column))));
            }
        }

        let mut country = Country::new(COUNTRY_NAME);
        country.years = year_columns
            .iter()
            .zip(tallies)
            .map(|((_, label), data)| {
                let mut year = Year::new(*label);
                year.regions.push(Region::flat(COUNTRY_NAME, data));
                year
            })
            .collect();

        debug!(
            "Parsed {} crime rows across {} years from {}",
            records.len(),
            country.years.len(),
            file
        );

        // Theft totals include the vehicle-theft subcategory
        disentangle_subcategories(&mut country, DISENTANGLE);
        Ok(country)
    }
}

impl CountryParser for LuxembourgParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let text = reader.read_text(&sources[0])?;
        Self::parse_text(&text, &file_label(&sources[0]))
    }
}
