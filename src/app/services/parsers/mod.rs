//! Per-country source parsers
//!
//! Each supported country publishes its statistics in its own layout. A parser
//! turns that layout into the shared [`Country`] tree and applies the fix-ups
//! specific to the country's data quirks. Parsers may leave invalid values in
//! the tree; cleanup belongs to the data access facade.
//!
//! ## Parsers
//!
//! - [`luxembourg`] - CSV, crimes as rows and years as columns
//! - [`cyprus`] - Two workbooks (serious and minor offences), districts as columns
//! - [`hungary`] - Workbook with category rows followed by level-marked location rows
//! - [`bulgaria`] - Workbook with one sheet per year of fixed-size location blocks
//! - [`portugal`] - Workbook with NUTS-coded rows at four depths
//! - [`denmark`] - CSV with blocks of place rows under each category
//!
//! Every parser exposes a pure entry point over decoded content besides the
//! [`CountryParser::parse`] implementation that reads through a
//! [`SourceReader`].

pub mod bulgaria;
pub mod cyprus;
pub mod denmark;
pub mod hungary;
pub mod luxembourg;
pub mod portugal;

#[cfg(test)]
pub mod tests;

use crate::app::models::Country;
use crate::app::services::source_reader::SourceReader;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

// Re-export main types for easy access
pub use bulgaria::BulgariaParser;
pub use cyprus::CyprusParser;
pub use denmark::DenmarkParser;
pub use hungary::HungaryParser;
pub use luxembourg::LuxembourgParser;
pub use portugal::PortugalParser;

/// Parser for one country's source layout
pub trait CountryParser: Send + Sync {
    /// Country name written at the root of the tree
    fn country_name(&self) -> &'static str;

    /// Number of source files the layout is split across
    fn source_count(&self) -> usize {
        1
    }

    /// Read the sources and build the raw tree
    fn parse(&self, reader: &dyn SourceReader, sources: &[PathBuf]) -> Result<Country>;
}

/// Check that a parser received the number of files its layout needs
pub(crate) fn expect_sources<'a>(
    parser: &dyn CountryParser,
    sources: &'a [PathBuf],
) -> Result<&'a [PathBuf]> {
    if sources.len() != parser.source_count() {
        return Err(Error::configuration(format!(
            "{} expects {} source file(s), got {}",
            parser.country_name(),
            parser.source_count(),
            sources.len()
        )));
    }
    Ok(sources)
}

/// Display form of a source path for error messages
pub(crate) fn file_label(path: &Path) -> String {
    path.display().to_string()
}
