//! Configuration management and validation.
//!
//! Provides the locations the loader reads from: the root of the per-country
//! source exports, the root of the category lookup tables, and optional
//! per-country overrides of the source file list.

use crate::constants::{COUNTRY_IDS, DEFAULT_MATCHING_ROOT, DEFAULT_SOURCES_ROOT};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration for loading crime statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrimeStatsConfig {
    /// Root holding `<country>/<file>` source exports
    pub sources_root: PathBuf,

    /// Root holding `<country>/<country>-matching.txt` lookup tables
    pub matching_root: PathBuf,

    /// Source files replacing a country's defaults, relative to `sources_root`
    /// unless absolute
    #[serde(default)]
    pub source_overrides: HashMap<String, Vec<PathBuf>>,
}

impl Default for CrimeStatsConfig {
    fn default() -> Self {
        Self {
            sources_root: PathBuf::from(DEFAULT_SOURCES_ROOT),
            matching_root: PathBuf::from(DEFAULT_MATCHING_ROOT),
            source_overrides: HashMap::new(),
        }
    }
}

impl CrimeStatsConfig {
    /// Use a data directory laid out as `source_files/` and `matching/`
    pub fn with_data_dir(self, data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        self.with_sources_root(data_dir.join("source_files"))
            .with_matching_root(data_dir.join("matching"))
    }

    pub fn with_sources_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sources_root = root.into();
        self
    }

    pub fn with_matching_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.matching_root = root.into();
        self
    }

    /// Replace the source files of one country
    pub fn with_source_override(
        mut self,
        country: impl Into<String>,
        files: Vec<PathBuf>,
    ) -> Self {
        self.source_overrides.insert(country.into(), files);
        self
    }

    /// Check that overrides name known countries and list at least one file
    pub fn validate(&self) -> Result<()> {
        if self.sources_root.as_os_str().is_empty() {
            return Err(Error::configuration("sources root must not be empty"));
        }
        if self.matching_root.as_os_str().is_empty() {
            return Err(Error::configuration("matching root must not be empty"));
        }

        for (country, files) in &self.source_overrides {
            if !COUNTRY_IDS.contains(&country.as_str()) {
                return Err(Error::configuration(format!(
                    "source override for unknown country '{}'",
                    country
                )));
            }
            if files.is_empty() {
                return Err(Error::configuration(format!(
                    "source override for '{}' lists no files",
                    country
                )));
            }
        }

        debug!(
            "Configuration valid: sources at {}, matching tables at {}",
            self.sources_root.display(),
            self.matching_root.display()
        );
        Ok(())
    }

    /// Resolve a country's source files, preferring an override
    pub fn sources_for(&self, country: &str, defaults: &[&str]) -> Vec<PathBuf> {
        match self.source_overrides.get(country) {
            Some(files) => files.iter().map(|file| self.sources_root.join(file)).collect(),
            None => defaults
                .iter()
                .map(|file| self.sources_root.join(file))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roots() {
        let config = CrimeStatsConfig::default();
        assert_eq!(config.sources_root, PathBuf::from("data/source_files"));
        assert_eq!(config.matching_root, PathBuf::from("data/matching"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_data_dir_sets_both_roots() {
        let config = CrimeStatsConfig::default().with_data_dir("/srv/crime");
        assert_eq!(config.sources_root, PathBuf::from("/srv/crime/source_files"));
        assert_eq!(config.matching_root, PathBuf::from("/srv/crime/matching"));
    }

    #[test]
    fn test_sources_resolve_against_root() {
        let config = CrimeStatsConfig::default().with_sources_root("/data");
        let sources = config.sources_for("denmark", &["denmark/denmark.csv"]);
        assert_eq!(sources, vec![PathBuf::from("/data/denmark/denmark.csv")]);
    }

    #[test]
    fn test_override_replaces_defaults() {
        let config = CrimeStatsConfig::default()
            .with_sources_root("/data")
            .with_source_override("denmark", vec![PathBuf::from("/tmp/dk.csv")]);
        let sources = config.sources_for("denmark", &["denmark/denmark.csv"]);
        // Joining an absolute path keeps it as is
        assert_eq!(sources, vec![PathBuf::from("/tmp/dk.csv")]);
    }

    #[test]
    fn test_validate_rejects_unknown_override() {
        let config = CrimeStatsConfig::default()
            .with_source_override("atlantis", vec![PathBuf::from("a.csv")]);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_override() {
        let config = CrimeStatsConfig::default().with_source_override("cyprus", Vec::new());
        assert!(config.validate().is_err());
    }
}
