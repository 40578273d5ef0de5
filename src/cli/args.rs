//! Command-line argument definitions for the crime statistics loader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::registry::CountryId;
use crate::config::CrimeStatsConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the crime statistics loader
///
/// Reads national crime-statistics exports and prints them as a single
/// country/year/region/province/county tree in JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crimestats",
    version,
    about = "Normalize national crime-statistics exports into one JSON tree",
    long_about = "Reads the CSV and spreadsheet exports published by national statistics \
                  offices, rebuilds their geographic hierarchy, cleans the tallies and \
                  optionally maps raw crime labels onto ICCS categories."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load one country and print its tree as JSON
    Load(LoadArgs),
    /// List supported countries and their source files
    Countries(CountriesArgs),
}

/// Arguments for the load command
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Country identifier, e.g. `cyprus`
    #[arg(value_name = "COUNTRY", value_parser = parse_country)]
    pub country: CountryId,

    /// Data directory holding `source_files/` and `matching/`
    ///
    /// Defaults to `./data`.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Data directory holding source_files/ and matching/"
    )]
    pub data_dir: Option<PathBuf>,

    /// Attach ICCS codes and names from the country's matching table
    #[arg(long = "map-categories", help = "Map crime labels onto ICCS categories")]
    pub map_categories: bool,

    /// Drop tallies without a matching table entry (requires --map-categories)
    #[arg(long = "remove-unmatched", requires = "map_categories")]
    pub remove_unmatched: bool,

    /// Sum tallies that map to the same ICCS code (requires --map-categories)
    #[arg(long = "merge-categories", requires = "map_categories")]
    pub merge_categories: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the countries command
#[derive(Debug, Clone, Parser)]
pub struct CountriesArgs {
    /// Data directory used to resolve source paths
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

fn parse_country(value: &str) -> Result<CountryId> {
    CountryId::from_str(value.trim())
}

/// Map a `-v` count to a tracing level
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Configuration for an optional data directory
fn config_for(data_dir: Option<&PathBuf>) -> Result<CrimeStatsConfig> {
    let config = match data_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    dir.display()
                )));
            }
            CrimeStatsConfig::default().with_data_dir(dir)
        }
        None => CrimeStatsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

impl Commands {
    pub fn get_log_level(&self) -> &'static str {
        match self {
            Commands::Load(args) => log_level(args.verbose),
            Commands::Countries(args) => log_level(args.verbose),
        }
    }
}

impl LoadArgs {
    /// Build the loader configuration from the arguments
    pub fn to_config(&self) -> Result<CrimeStatsConfig> {
        config_for(self.data_dir.as_ref())
    }
}

impl CountriesArgs {
    pub fn to_config(&self) -> Result<CrimeStatsConfig> {
        config_for(self.data_dir.as_ref())
    }
}
