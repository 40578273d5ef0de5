//! Country registry for identifier → parser and source lookups
//!
//! The set of supported countries is closed: [`CountryId`] enumerates them and
//! knows each one's parser and default source files. A [`CountryRegistry`]
//! resolves those files against a [`CrimeStatsConfig`] once, so lookups by
//! identifier are cheap and the registry is immutable afterwards.

#[cfg(test)]
pub mod tests;

use crate::app::services::parsers::{
    BulgariaParser, CountryParser, CyprusParser, DenmarkParser, HungaryParser, LuxembourgParser,
    PortugalParser,
};
use crate::config::CrimeStatsConfig;
use crate::constants::source_files;
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Supported country identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CountryId {
    Luxembourg,
    Cyprus,
    Hungary,
    Bulgaria,
    Portugal,
    Denmark,
}

impl CountryId {
    /// Every supported country, in registry order
    pub fn all() -> &'static [CountryId] {
        &[
            CountryId::Luxembourg,
            CountryId::Cyprus,
            CountryId::Hungary,
            CountryId::Bulgaria,
            CountryId::Portugal,
            CountryId::Denmark,
        ]
    }

    /// Lowercase identifier used on the command line and in file paths
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryId::Luxembourg => "luxembourg",
            CountryId::Cyprus => "cyprus",
            CountryId::Hungary => "hungary",
            CountryId::Bulgaria => "bulgaria",
            CountryId::Portugal => "portugal",
            CountryId::Denmark => "denmark",
        }
    }

    /// Parser for the country's source layout
    pub fn parser(&self) -> &'static dyn CountryParser {
        match self {
            CountryId::Luxembourg => &LuxembourgParser,
            CountryId::Cyprus => &CyprusParser,
            CountryId::Hungary => &HungaryParser,
            CountryId::Bulgaria => &BulgariaParser,
            CountryId::Portugal => &PortugalParser,
            CountryId::Denmark => &DenmarkParser,
        }
    }

    /// Default source files, relative to the sources root
    pub fn default_sources(&self) -> &'static [&'static str] {
        match self {
            CountryId::Luxembourg => source_files::LUXEMBOURG,
            CountryId::Cyprus => source_files::CYPRUS,
            CountryId::Hungary => source_files::HUNGARY,
            CountryId::Bulgaria => source_files::BULGARIA,
            CountryId::Portugal => source_files::PORTUGAL,
            CountryId::Denmark => source_files::DENMARK,
        }
    }
}

impl FromStr for CountryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CountryId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::unknown_country(s))
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country's parser together with its resolved source files
pub struct RegistryEntry {
    pub id: CountryId,
    pub parser: &'static dyn CountryParser,
    pub sources: Vec<PathBuf>,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("id", &self.id)
            .field("country", &self.parser.country_name())
            .field("sources", &self.sources)
            .finish()
    }
}

/// Static mapping from country identifier to parser and source files
#[derive(Debug)]
pub struct CountryRegistry {
    entries: Vec<RegistryEntry>,
}

impl CountryRegistry {
    /// Resolve every country's sources against the configuration
    pub fn from_config(config: &CrimeStatsConfig) -> Self {
        let entries = CountryId::all()
            .iter()
            .map(|&id| RegistryEntry {
                id,
                parser: id.parser(),
                sources: config.sources_for(id.as_str(), id.default_sources()),
            })
            .collect::<Vec<_>>();

        debug!("Registered {} countries", entries.len());
        Self { entries }
    }

    /// Look up a country by its lowercase identifier
    pub fn lookup(&self, country: &str) -> Result<&RegistryEntry> {
        let id = CountryId::from_str(country)?;
        self.get(id)
            .ok_or_else(|| Error::unknown_country(country))
    }

    pub fn get(&self, id: CountryId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::from_config(&CrimeStatsConfig::default())
    }
}
