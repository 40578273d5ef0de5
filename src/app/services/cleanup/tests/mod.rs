//! Shared test utilities and fixtures for cleanup tests

use crate::app::models::{Country, County, Crime, Province, Region, Year};


/// Tally carrying a standardized code, as left by the category mapper
pub fn coded(code: &str, label: &str, value: f64) -> Crime {
    let mut crime = Crime::new(label, value);
    crime.standardized_code = Some(code.to_string());
    crime.standardized_name = Some(format!("ICCS {}", code));
    crime
}

/// Country with a single year whose national data is `data`
pub fn country_with_year_data(data: Vec<Crime>) -> Country {
    let mut year = Year::new("2019");
    year.data = data;
    let mut country = Country::new("Testland");
    country.years.push(year);
    country
}

/// Country exercising every level: year, region, province and two counties
pub fn nested_country(data: Vec<Crime>) -> Country {
    let mut province = Province::new("Province");
    province.data = data.clone();
    province
        .counties
        .push(County::with_data("County A", data.clone()));
    province
        .counties
        .push(County::with_data("County B", data.clone()));

    let mut region = Region::new("Region");
    region.data = data.clone();
    region.provinces.push(province);

    let mut year = Year::new("2018");
    year.data = data;
    year.regions.push(region);

    let mut country = Country::new("Testland");
    country.years.push(year);
    country
}

/// Country with region, province and county all named `name`
pub fn same_name_country(name: &str) -> Country {
    let mut year = Year::new("2019");
    year.regions.push(Region::flat(name, vec![Crime::new("Theft", 1.0)]));
    let mut country = Country::new("Cyprus");
    country.years.push(year);
    country
}
