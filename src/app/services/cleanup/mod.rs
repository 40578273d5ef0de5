//! Tree-wide cleanup and reconciliation of parsed crime data
//!
//! Every transform here walks all `data` sequences of a [`Country`]
//! (year, region, province, county) and works the same whichever parser
//! produced the tree.
//!
//! - [`numeric`] - Numeric coercion and missing-value normalization
//! - [`coalesce`] - Merging duplicate categories by summation
//! - [`disentangle`] - Recovering exclusive parent totals
//! - [`rename`] - Geographic name substitutions
//!
//! [`Country`]: crate::app::models::Country

pub mod coalesce;
pub mod disentangle;
pub mod numeric;
pub mod rename;

#[cfg(test)]
pub mod tests;

pub use coalesce::{coalesce, coalesce_crimes};
pub use disentangle::{disentangle_subcategories, disentangle_subcategory};
pub use numeric::{normalize_missing, to_number};
pub use rename::{RenameLevel, rename, substitutions};
