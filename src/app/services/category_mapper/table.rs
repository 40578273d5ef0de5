//! Category lookup tables

use crate::constants::MATCHING_FILE_SUFFIX;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Standardized code and name for a raw label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardCategory {
    pub code: String,
    pub name: String,
}

/// Raw label → standardized category lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingTable {
    entries: HashMap<String, StandardCategory>,
}

impl MatchingTable {
    /// Location of a country's table under the matching root
    pub fn path_for(matching_root: &Path, country: &str) -> PathBuf {
        matching_root
            .join(country)
            .join(format!("{}{}", country, MATCHING_FILE_SUFFIX))
    }

    /// Parse the `{"label": ["code", "name"]}` text format
    pub fn from_json(text: &str, origin: &str) -> Result<Self> {
        let raw: HashMap<String, (String, String)> =
            serde_json::from_str(text).map_err(|e| Error::mapping_table_format(origin, e))?;

        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(label, (code, name))| (label, StandardCategory { code, name }))
                .collect(),
        })
    }

    /// Load a country's table; any read failure means the table is missing
    pub fn load(matching_root: &Path, country: &str) -> Result<Self> {
        let path = Self::path_for(matching_root, country);
        let origin = path.display().to_string();

        let text = std::fs::read_to_string(&path).map_err(|e| {
            debug!("Could not read mapping table {}: {}", origin, e);
            Error::mapping_table_not_found(country, &origin)
        })?;

        let table = Self::from_json(&text, &origin)?;
        debug!("Loaded {} label mappings from {}", table.len(), origin);
        Ok(table)
    }

    pub fn insert(
        &mut self,
        label: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.entries.insert(
            label.into(),
            StandardCategory {
                code: code.into(),
                name: name.into(),
            },
        );
    }

    pub fn get(&self, label: &str) -> Option<&StandardCategory> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
