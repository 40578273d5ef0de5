//! Data access facade: country identifier in, clean tree out
//!
//! [`DataAccess`] ties the registry, a [`SourceReader`] and the configuration
//! together. Every call parses the sources afresh and normalizes invalid
//! values, so callers always receive a tree with finite tallies.

use crate::app::models::Country;
use crate::app::services::category_mapper::map_country_categories;
use crate::app::services::cleanup::normalize_missing;
use crate::app::services::registry::CountryRegistry;
use crate::app::services::source_reader::{FsSourceReader, SourceReader};
use crate::config::CrimeStatsConfig;
use crate::Result;
use std::time::Instant;
use tracing::info;

/// Facade returning normalized country trees
pub struct DataAccess {
    registry: CountryRegistry,
    reader: Box<dyn SourceReader>,
    config: CrimeStatsConfig,
}

impl DataAccess {
    /// Build a facade over a validated configuration and a source reader
    pub fn new(config: CrimeStatsConfig, reader: Box<dyn SourceReader>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: CountryRegistry::from_config(&config),
            reader,
            config,
        })
    }

    /// Default locations read from the filesystem
    pub fn with_defaults() -> Result<Self> {
        Self::new(CrimeStatsConfig::default(), Box::new(FsSourceReader::new()))
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CrimeStatsConfig {
        &self.config
    }

    /// Parse a country's sources and normalize invalid tallies to zero
    pub fn get_data(&self, country: &str) -> Result<Country> {
        let start = Instant::now();
        let entry = self.registry.lookup(country)?;

        let mut data = entry.parser.parse(self.reader.as_ref(), &entry.sources)?;
        normalize_missing(&mut data);

        info!(
            "Loaded {} ({} years, {} tallies) in {:.2?}",
            data.name,
            data.years.len(),
            data.crime_count(),
            start.elapsed()
        );
        Ok(data)
    }

    /// [`DataAccess::get_data`] followed by category mapping
    pub fn get_mapped_data(
        &self,
        country: &str,
        remove_unmatched: bool,
        merge_after_mapping: bool,
    ) -> Result<Country> {
        let mut data = self.get_data(country)?;
        map_country_categories(
            &mut data,
            &self.config.matching_root,
            country,
            remove_unmatched,
            merge_after_mapping,
        )?;
        Ok(data)
    }
}

/// Load a country with the default locations from the filesystem
pub fn get_data(country: &str) -> Result<Country> {
    DataAccess::with_defaults()?.get_data(country)
}
