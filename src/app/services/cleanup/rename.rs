//! Geographic name substitutions

use crate::Error;
use crate::app::models::Country;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which geographic level a substitution table applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameLevel {
    Region,
    Province,
    County,
    /// Regions, then provinces, then counties (`region+`)
    RegionCascade,
    /// Provinces, then counties (`province+`)
    ProvinceCascade,
}

impl FromStr for RenameLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "region" => Ok(RenameLevel::Region),
            "province" => Ok(RenameLevel::Province),
            "county" => Ok(RenameLevel::County),
            "region+" => Ok(RenameLevel::RegionCascade),
            "province+" => Ok(RenameLevel::ProvinceCascade),
            other => Err(Error::configuration(format!(
                "Unknown rename level '{}' (expected region, province, county, region+ or province+)",
                other
            ))),
        }
    }
}

impl fmt::Display for RenameLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenameLevel::Region => "region",
            RenameLevel::Province => "province",
            RenameLevel::County => "county",
            RenameLevel::RegionCascade => "region+",
            RenameLevel::ProvinceCascade => "province+",
        };
        write!(f, "{}", name)
    }
}

/// Build a substitution table from (old, new) pairs
pub fn substitutions(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn substitute(name: &mut String, table: &HashMap<String, String>) {
    if let Some(replacement) = table.get(name.as_str()) {
        *name = replacement.clone();
    }
}

/// Rename geographic entities whose current name is a key of `table`
pub fn rename(country: &mut Country, level: RenameLevel, table: &HashMap<String, String>) {
    match level {
        RenameLevel::Region => {
            for region in country.years.iter_mut().flat_map(|year| &mut year.regions) {
                substitute(&mut region.name, table);
            }
        }
        RenameLevel::Province => {
            for province in country
                .years
                .iter_mut()
                .flat_map(|year| &mut year.regions)
                .flat_map(|region| &mut region.provinces)
            {
                substitute(&mut province.name, table);
            }
        }
        RenameLevel::County => {
            for county in country
                .years
                .iter_mut()
                .flat_map(|year| &mut year.regions)
                .flat_map(|region| &mut region.provinces)
                .flat_map(|province| &mut province.counties)
            {
                substitute(&mut county.name, table);
            }
        }
        RenameLevel::RegionCascade => {
            rename(country, RenameLevel::Region, table);
            rename(country, RenameLevel::ProvinceCascade, table);
        }
        RenameLevel::ProvinceCascade => {
            rename(country, RenameLevel::Province, table);
            rename(country, RenameLevel::County, table);
        }
    }
}
