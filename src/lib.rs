//! Crime Statistics Library
//!
//! A Rust library for normalizing national crime-statistics exports into a
//! single hierarchical data model (country → year → region → province →
//! county → crime tally).
//!
//! This library provides tools for:
//! - Decoding CSV and spreadsheet sources into row objects with configurable layouts
//! - Parsing six country-specific source layouts into the shared tree
//! - Cleaning parsed trees (missing-value normalization, coalescing, renaming)
//! - Mapping raw crime labels onto standardized ICCS codes
//! - A registry and facade that return clean trees per country identifier

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod category_mapper;
        pub mod cleanup;
        pub mod data_access;
        pub mod parsers;
        pub mod registry;
        pub mod source_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Country, County, Crime, Province, Region, Year};
pub use app::services::data_access::{DataAccess, get_data};
pub use app::services::registry::CountryId;
pub use config::CrimeStatsConfig;

/// Result type alias for crime statistics processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, parsing and mapping crime statistics
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Spreadsheet could not be decoded
    #[error("Spreadsheet error in file '{file}': {message}")]
    Spreadsheet { file: String, message: String },

    /// Expected worksheet is missing from a workbook
    #[error("Sheet '{sheet}' not found in file '{file}'")]
    SheetNotFound { file: String, sheet: String },

    /// Requested country is not in the registry
    #[error("Unknown country: '{country}'")]
    UnknownCountry { country: String },

    /// No category lookup table exists for the country
    #[error("Mapping table not found for '{country}' at {path}")]
    MappingTableNotFound { country: String, path: String },

    /// Category lookup table exists but is not a label → [code, name] object
    #[error("Mapping table format error in {path}: {source}")]
    MappingTableFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Source file layout drifted from what the country parser expects
    #[error("Layout assumption violated for {country}: {message}")]
    LayoutViolation { country: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a spreadsheet decoding error
    pub fn spreadsheet(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Spreadsheet {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing sheet error
    pub fn sheet_not_found(file: impl Into<String>, sheet: impl Into<String>) -> Self {
        Self::SheetNotFound {
            file: file.into(),
            sheet: sheet.into(),
        }
    }

    /// Create an unknown country error
    pub fn unknown_country(country: impl Into<String>) -> Self {
        Self::UnknownCountry {
            country: country.into(),
        }
    }

    /// Create a missing mapping table error
    pub fn mapping_table_not_found(country: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MappingTableNotFound {
            country: country.into(),
            path: path.into(),
        }
    }

    /// Create a mapping table format error
    pub fn mapping_table_format(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MappingTableFormat {
            path: path.into(),
            source,
        }
    }

    /// Create a layout violation error
    pub fn layout_violation(country: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LayoutViolation {
            country: country.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
