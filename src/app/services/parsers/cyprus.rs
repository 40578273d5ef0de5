//! Cyprus: serious and minor offences in two workbooks
//!
//! Both workbooks share one layout: offence labels in column A, one column per
//! police district and a national `TOTAL` column, all named by header row 2.
//! The two row sets are concatenated into one logical table for a single year.

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, Crime, Region, Year};
use crate::app::services::cleanup::{RenameLevel, rename, substitutions};
use crate::app::services::source_reader::{SheetLayout, SheetRow, SourceReader};
use crate::constants::cyprus::{
    COUNTRY_NAME, DISTRICT_COLUMNS, DISTRICT_RENAMES, HEADER_ROWS, KEY_ROW, LABEL_COLUMN,
    MINOR_RANGE, MINOR_SHEET, SERIOUS_RANGE, SERIOUS_SHEET, TOTAL_COLUMN, YEAR,
};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One decoded offence table
#[derive(Debug, Clone)]
pub struct OffenceTable {
    /// `(column letters, district name)` in column order
    pub districts: Vec<(String, String)>,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CyprusParser;

impl CyprusParser {
    fn layout(sheet: &str, range: &str) -> Result<SheetLayout> {
        let mut columns = vec![LABEL_COLUMN];
        columns.extend_from_slice(DISTRICT_COLUMNS);
        columns.push(TOTAL_COLUMN);

        SheetLayout::new(sheet)
            .with_header_rows(HEADER_ROWS)
            .with_range(range)?
            .with_header_keyed_columns(&columns, KEY_ROW)
    }

    fn read_table(
        reader: &dyn SourceReader,
        source: &Path,
        sheet: &str,
        range: &str,
    ) -> Result<OffenceTable> {
        let file = file_label(source);
        let workbook = reader.read_workbook(source)?;
        let layout = Self::layout(sheet, range)?;

        let districts = layout
            .keys(&workbook, &file)?
            .into_iter()
            .filter(|(letters, _)| DISTRICT_COLUMNS.contains(&letters.as_str()))
            .collect();
        let rows = layout.apply(&workbook, &file)?;

        Ok(OffenceTable { districts, rows })
    }

    /// Build the tree from offence tables, concatenated in order
    ///
    /// Every table must name the same districts in the same columns.
    pub fn parse_tables(tables: &[OffenceTable]) -> Result<Country> {
        let first = tables.first().ok_or_else(|| {
            Error::layout_violation(COUNTRY_NAME, "no offence tables to combine")
        })?;

        if let Some(other) = tables.iter().find(|table| table.districts != first.districts) {
            return Err(Error::layout_violation(
                COUNTRY_NAME,
                format!(
                    "offence tables disagree on districts: {:?} vs {:?}",
                    first.districts, other.districts
                ),
            ));
        }

        let mut year = Year::new(YEAR);
        year.regions = first
            .districts
            .iter()
            .map(|(_, name)| Region::flat(name.as_str(), Vec::new()))
            .collect();

        for row in tables.iter().flat_map(|table| &table.rows) {
            let Some(label) = row.column(LABEL_COLUMN).map(|cell| cell.as_text()) else {
                warn!("Skipping row {} without an offence label", row.number);
                continue;
            };

            let total = row
                .column(TOTAL_COLUMN)
                .map_or(f64::NAN, |cell| cell.to_number());
            year.data.push(Crime::new(label.as_str(), total));

            for ((letters, _), region) in first.districts.iter().zip(year.regions.iter_mut()) {
                let value = row.column(letters).map_or(f64::NAN, |cell| cell.to_number());
                if let Some(data) = region.flat_data_mut() {
                    data.push(Crime::new(label.as_str(), value));
                }
            }
        }

        debug!(
            "Parsed {} offences across {} districts",
            year.data.len(),
            year.regions.len()
        );

        let mut country = Country::new(COUNTRY_NAME);
        country.years.push(year);

        // The export uses local or historical district names
        rename(
            &mut country,
            RenameLevel::RegionCascade,
            &substitutions(DISTRICT_RENAMES),
        );
        Ok(country)
    }
}

impl CountryParser for CyprusParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn source_count(&self) -> usize {
        2
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let serious = Self::read_table(reader, &sources[0], SERIOUS_SHEET, SERIOUS_RANGE)?;
        let minor = Self::read_table(reader, &sources[1], MINOR_SHEET, MINOR_RANGE)?;
        Self::parse_tables(&[serious, minor])
    }
}
