//! Tabular source decoding for the country parsers
//!
//! Country parsers never touch the filesystem directly. They receive source
//! content through the [`SourceReader`] seam, either as full CSV text or as a
//! [`Workbook`] of raw cell grids, and turn grids into row objects with a
//! [`SheetLayout`].
//!
//! ## Architecture
//!
//! - [`cell`] - Cell values, sheets and workbooks
//! - [`layout`] - Header skipping, column-to-key mapping and cell ranges
//! - [`delimited`] - CSV records with line positions
//! - [`fs_reader`] - Filesystem-backed reader (spreadsheets via the `excel` feature)
//! - [`memory`] - In-memory reader for pre-decoded content

pub mod cell;
pub mod delimited;
pub mod fs_reader;
pub mod layout;
pub mod memory;

#[cfg(test)]
pub mod tests;

use crate::Result;
use std::path::Path;

// Re-export main types for easy access
pub use cell::{CellValue, Sheet, Workbook};
pub use delimited::{DelimitedOptions, TextRow, read_delimited};
pub use fs_reader::FsSourceReader;
pub use layout::{CellRange, ColumnKey, RowCell, SheetLayout, SheetRow};
pub use memory::MemorySourceReader;

/// Supplier of raw source content
///
/// Implementations own all I/O; everything downstream is a pure function of
/// the returned content.
pub trait SourceReader: Send + Sync {
    /// Read a text source (CSV) in full
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Read a spreadsheet into raw cell grids, one per sheet
    fn read_workbook(&self, path: &Path) -> Result<Workbook>;
}
