//! Shared test utilities and fixtures for category mapper tests

use crate::app::models::{Country, Crime, Region, Year};
use std::fs;
use std::path::Path;


pub const LUXEMBOURG_TABLE: &str = r#"{
    "Murder": ["0101", "Intentional homicide"],
    "Manslaughter": ["0101", "Intentional homicide"],
    "Burglary": ["0501", "Burglary"]
}"#;

/// Write a matching table under `root` following the path convention
pub fn write_table(root: &Path, country: &str, content: &str) {
    let dir = root.join(country);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}-matching.txt", country)), content).unwrap();
}

/// Luxembourg-shaped tree with national and county data
pub fn luxembourg_country() -> Country {
    let crimes = vec![
        Crime::new("Murder", 2.0),
        Crime::new("Burglary", 40.0),
        Crime::new("Manslaughter", 1.0),
        Crime::new("Littering", 9.0),
    ];
    let mut year = Year::new("2018");
    year.data = crimes.clone();
    year.regions.push(Region::flat("Luxembourg", crimes));

    let mut country = Country::new("Luxembourg");
    country.years.push(year);
    country
}
