//! Denmark: blocks of place rows under each crime category
//!
//! After a short preamble, the CSV lists a category on a row whose only
//! content is its first cell, followed by one row per place with the place in
//! the second column and the count in the third. Every category revisits the
//! same places in the same order: the nation, then each region followed by its
//! provinces (municipalities).

use super::{CountryParser, expect_sources, file_label};
use crate::app::models::{Country, County, Crime, Province, Region, Year};
use crate::app::services::cleanup::to_number;
use crate::app::services::source_reader::{
    DelimitedOptions, SourceReader, TextRow, read_delimited,
};
use crate::constants::denmark::{
    COUNTRY_NAME, NATIONAL_MARKER, PREAMBLE_LINES, REGION_MARKER, YEAR,
};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct DenmarkParser;

/// A classified CSV record
enum Line<'a> {
    Category(&'a str),
    Place { name: &'a str, value: f64 },
    Other,
}

impl<'a> Line<'a> {
    fn classify(row: &'a TextRow) -> Self {
        if !row.field(1).is_empty() {
            Line::Place {
                name: row.field(1),
                value: to_number(row.field(2)),
            }
        } else if !row.field(0).is_empty() && row.filled_count() == 1 {
            Line::Category(row.field(0))
        } else {
            Line::Other
        }
    }
}

/// Where a place's tallies land in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    National,
    Region(usize),
    Province(usize, usize),
}

/// A category with its `(place, value)` rows
struct CategoryBlock<'a> {
    label: &'a str,
    places: Vec<(&'a str, f64)>,
}

fn violation(message: String) -> Error {
    Error::layout_violation(COUNTRY_NAME, message)
}

impl DenmarkParser {
    /// Parse the CSV export text
    pub fn parse_text(text: &str, file: &str) -> Result<Country> {
        let options = DelimitedOptions::default()
            .with_skip_lines(PREAMBLE_LINES)
            .flexible();
        let rows = read_delimited(text, file, &options)?;

        let blocks = group_categories(&rows)?;
        let (first, rest) = blocks
            .split_first()
            .ok_or_else(|| violation(format!("{} has no crime categories", file)))?;

        let mut year = Year::new(YEAR);
        let mut slots: Vec<(Slot, &str)> = Vec::with_capacity(first.places.len());

        for &(name, value) in &first.places {
            let crime = Crime::new(first.label, value);
            let slot = if is_national(name) {
                year.data.push(crime);
                Slot::National
            } else if name.contains(REGION_MARKER) {
                let mut region = Region::new(name.replace(REGION_MARKER, "").trim());
                region.data.push(crime);
                year.regions.push(region);
                Slot::Region(year.regions.len() - 1)
            } else {
                let region_index = year.regions.len().checked_sub(1).ok_or_else(|| {
                    violation(format!("place '{}' appears before any region", name))
                })?;
                let region = &mut year.regions[region_index];
                let mut province = Province::new(name);
                province.counties.push(County::with_data(name, vec![crime]));
                region.provinces.push(province);
                Slot::Province(region_index, region.provinces.len() - 1)
            };
            slots.push((slot, name));
        }

        for block in rest {
            if block.places.len() != slots.len() {
                return Err(violation(format!(
                    "category '{}' lists {} places, expected {}",
                    block.label,
                    block.places.len(),
                    slots.len()
                )));
            }

            for (&(name, value), &(slot, expected)) in block.places.iter().zip(&slots) {
                if name != expected {
                    return Err(violation(format!(
                        "category '{}' lists '{}' where '{}' was expected",
                        block.label, name, expected
                    )));
                }

                let crime = Crime::new(block.label, value);
                match slot {
                    Slot::National => year.data.push(crime),
                    Slot::Region(r) => year.regions[r].data.push(crime),
                    Slot::Province(r, p) => {
                        if let Some(county) = year.regions[r].provinces[p].counties.first_mut() {
                            county.data.push(crime);
                        }
                    }
                }
            }
        }

        debug!(
            "Parsed {} categories over {} places from {}",
            blocks.len(),
            slots.len(),
            file
        );

        let mut country = Country::new(COUNTRY_NAME);
        country.years.push(year);
        Ok(country)
    }
}

/// `All Denmark`; a bare substring test would also catch `Allerød`
fn is_national(place: &str) -> bool {
    place.split_whitespace().next() == Some(NATIONAL_MARKER)
}

/// Group place rows under the category row preceding them
fn group_categories(rows: &[TextRow]) -> Result<Vec<CategoryBlock<'_>>> {
    let mut blocks: Vec<CategoryBlock<'_>> = Vec::new();

    for row in rows {
        match Line::classify(row) {
            Line::Category(label) => blocks.push(CategoryBlock {
                label,
                places: Vec::new(),
            }),
            Line::Place { name, value } => {
                let block = blocks.last_mut().ok_or_else(|| {
                    violation(format!(
                        "place '{}' on line {} appears before any category",
                        name, row.line
                    ))
                })?;
                block.places.push((name, value));
            }
            Line::Other => debug!("Skipping line {}", row.line),
        }
    }

    // Trailing notes look like categories without places
    let before = blocks.len();
    blocks.retain(|block| !block.places.is_empty());
    if blocks.len() < before {
        warn!(
            "Ignoring {} category rows without place rows",
            before - blocks.len()
        );
    }
    Ok(blocks)
}

impl CountryParser for DenmarkParser {
    fn country_name(&self) -> &'static str {
        COUNTRY_NAME
    }

    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country> {
        let sources = expect_sources(self, sources)?;
        let text = reader.read_text(&sources[0])?;
        Self::parse_text(&text, &file_label(&sources[0]))
    }
}
