//! Data models for normalized crime statistics
//!
//! This module contains the nested record types every country parser produces:
//! country → year → region → province → county, with crime tallies attached at
//! each level. Containers keep the order in which entries appear in the source.
//!
//! The serialized field names follow the wire format consumed by the HTTP
//! layer (`country`, `year`, `region`, `province`, `county`, `data`, `crime`,
//! `value`, `ICCS_code`, `ICCS_crime`).

use serde::{Deserialize, Serialize};

// =============================================================================
// Crime Tally
// =============================================================================

/// A single crime tally
///
/// `label` is the raw category text from the source. The standardized code and
/// name are only attached by the category mapper. Between parsing and cleanup
/// `value` may hold the invalid sentinel (`f64::NAN`) for unparseable cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crime {
    /// Standardized ICCS code, present after category mapping
    #[serde(rename = "ICCS_code", default, skip_serializing_if = "Option::is_none")]
    pub standardized_code: Option<String>,

    /// Standardized ICCS category name, present after category mapping
    #[serde(rename = "ICCS_crime", default, skip_serializing_if = "Option::is_none")]
    pub standardized_name: Option<String>,

    /// Raw crime-category label from the source
    #[serde(rename = "crime")]
    pub label: String,

    /// Tally value
    pub value: f64,
}

impl Crime {
    /// Create an unmapped tally
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            standardized_code: None,
            standardized_name: None,
            label: label.into(),
            value,
        }
    }

    /// Whether the value is the invalid sentinel left by numeric coercion
    pub fn is_invalid(&self) -> bool {
        !self.value.is_finite()
    }

    /// Whether a standardized code has been attached
    pub fn is_mapped(&self) -> bool {
        self.standardized_code.is_some()
    }
}

// =============================================================================
// Geographic Hierarchy
// =============================================================================

/// Finest geographic level; always carries data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    #[serde(rename = "county")]
    pub name: String,
    pub data: Vec<Crime>,
}

impl County {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_data(name, Vec::new())
    }

    pub fn with_data(name: impl Into<String>, data: Vec<Crime>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Province within a region
///
/// An empty `data` sequence means the source reports no province aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "province")]
    pub name: String,
    #[serde(rename = "county")]
    pub counties: Vec<County>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Crime>,
}

impl Province {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counties: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Whether the source reported totals at province level
    pub fn has_aggregate(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Region within a year
///
/// An empty `data` sequence means the source reports no region aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "region")]
    pub name: String,
    #[serde(rename = "province")]
    pub provinces: Vec<Province>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Crime>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provinces: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Synthesize a region whose single province and single county share its name
    ///
    /// Used by sources without sub-national nesting below the reported area;
    /// the tallies live on the county.
    pub fn flat(name: impl Into<String>, data: Vec<Crime>) -> Self {
        let name = name.into();
        let mut province = Province::new(name.clone());
        province.counties.push(County::with_data(name.clone(), data));

        let mut region = Region::new(name);
        region.provinces.push(province);
        region
    }

    /// County data of a region built with [`Region::flat`]
    pub fn flat_data_mut(&mut self) -> Option<&mut Vec<Crime>> {
        self.provinces
            .first_mut()
            .and_then(|province| province.counties.first_mut())
            .map(|county| &mut county.data)
    }

    /// Whether the source reported totals at region level
    pub fn has_aggregate(&self) -> bool {
        !self.data.is_empty()
    }
}

/// One reporting year
///
/// `data` holds the national totals for the year when the source reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Year {
    #[serde(rename = "year")]
    pub label: String,
    #[serde(rename = "region")]
    pub regions: Vec<Region>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Crime>,
}

impl Year {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            regions: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Whether the source reported national totals for this year
    pub fn has_aggregate(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Root of a parsed source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "country")]
    pub name: String,
    #[serde(rename = "year")]
    pub years: Vec<Year>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            years: Vec::new(),
        }
    }

    /// Find a year by label
    pub fn year(&self, label: &str) -> Option<&Year> {
        self.years.iter().find(|year| year.label == label)
    }

    /// Every `data` sequence in document order: year, then each region,
    /// its provinces and their counties
    pub fn data_sequences(&self) -> Vec<&Vec<Crime>> {
        let mut sequences = Vec::new();
        for year in &self.years {
            sequences.push(&year.data);
            for region in &year.regions {
                sequences.push(&region.data);
                for province in &region.provinces {
                    sequences.push(&province.data);
                    for county in &province.counties {
                        sequences.push(&county.data);
                    }
                }
            }
        }
        sequences
    }

    /// Mutable counterpart of [`Country::data_sequences`]
    pub fn data_sequences_mut(&mut self) -> Vec<&mut Vec<Crime>> {
        let mut sequences = Vec::new();
        for year in &mut self.years {
            sequences.push(&mut year.data);
            for region in &mut year.regions {
                sequences.push(&mut region.data);
                for province in &mut region.provinces {
                    sequences.push(&mut province.data);
                    for county in &mut province.counties {
                        sequences.push(&mut county.data);
                    }
                }
            }
        }
        sequences
    }

    /// Total number of tallies across all levels
    pub fn crime_count(&self) -> usize {
        self.data_sequences().iter().map(|data| data.len()).sum()
    }

    /// Whether every tally holds a finite value
    pub fn is_clean(&self) -> bool {
        self.data_sequences()
            .iter()
            .all(|data| data.iter().all(|crime| !crime.is_invalid()))
    }
}
