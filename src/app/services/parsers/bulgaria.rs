//! Bulgaria: one sheet per year, fixed-size location blocks
//!
//! Each year sheet stacks blocks of [`BLOCK_ROWS`] rows: a location row
//! followed by its crime rows. The first block holds national totals and the
//! second an aggregate without a geographic counterpart.

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, Crime, Region, Year};
use crate::app::services::source_reader::{SheetLayout, SheetRow, SourceReader};
use crate::constants::bulgaria::{
    BLOCK_ROWS, COUNTRY_NAME, LABEL_KEY, NATIONAL_BLOCK, RANGE, SKIPPED_BLOCKS, VALUE_KEY,
    YEAR_SHEETS,
};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct BulgariaParser;

impl BulgariaParser {
    fn layout(sheet: &str) -> Result<SheetLayout> {
        SheetLayout::new(sheet)
            .with_range(RANGE)?
            .with_column("A", LABEL_KEY)?
            .with_column("B", VALUE_KEY)
    }

    /// Build the tree from decoded year sheets, in output order
    pub fn parse_sheets(sheets: &[(String, Vec<SheetRow>)]) -> Result<Country> {
        let mut country = Country::new(COUNTRY_NAME);
        for (label, rows) in sheets {
            country.years.push(Self::parse_year(label, rows)?);
        }
        Ok(country)
    }

    fn parse_year(label: &str, rows: &[SheetRow]) -> Result<Year> {
        if rows.len() % BLOCK_ROWS != 0 {
            return Err(Error::layout_violation(
                COUNTRY_NAME,
                format!(
                    "sheet '{}' has {} rows, not a multiple of the {}-row block",
                    label,
                    rows.len(),
                    BLOCK_ROWS
                ),
            ));
        }

        let mut year = Year::new(label);
        for (index, block) in rows.chunks(BLOCK_ROWS).enumerate() {
            if SKIPPED_BLOCKS.contains(&index) {
                continue;
            }

            let location = block[0].text(LABEL_KEY).ok_or_else(|| {
                Error::layout_violation(
                    COUNTRY_NAME,
                    format!(
                        "sheet '{}' row {} starts a block without a location",
                        label, block[0].number
                    ),
                )
            })?;

            let data: Vec<Crime> = block[1..]
                .iter()
                .map(|row| {
                    let crime = row.text(LABEL_KEY).unwrap_or_else(|| {
                        warn!("Sheet '{}' row {} has no crime label", label, row.number);
                        String::new()
                    });
                    let value = row.get(VALUE_KEY).map_or(f64::NAN, |cell| cell.to_number());
                    Crime::new(crime, value)
                })
                .collect();

            if index == NATIONAL_BLOCK {
                year.data = data;
            } else {
                year.regions.push(Region::flat(location, data));
            }
        }

        debug!("Parsed {} regions for {}", year.regions.len(), label);
        Ok(year)
    }
}

impl CountryParser for BulgariaParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let file = file_label(&sources[0]);
        let workbook = reader.read_workbook(&sources[0])?;

        let sheets = YEAR_SHEETS
            .iter()
            .map(|sheet| {
                let rows = Self::layout(sheet)?.apply(&workbook, &file)?;
                Ok((sheet.to_string(), rows))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::parse_sheets(&sheets)
    }
}
