//! Mapping raw crime labels onto standardized ICCS categories
//!
//! Each country that needs mapping ships a lookup table at
//! `<matching_root>/<country>/<country>-matching.txt`, a JSON object from raw
//! label to a `[code, name]` pair. Mapping attaches the pair to matching
//! tallies and can then coalesce tallies that landed on the same code.

pub mod mapper;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use mapper::{MappingStats, map_categories, map_country_categories};
pub use table::{MatchingTable, StandardCategory};
