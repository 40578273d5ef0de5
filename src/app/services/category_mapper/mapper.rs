//! Attaching standardized categories to a parsed tree

use super::table::MatchingTable;
use crate::Result;
use crate::app::models::{Country, Crime};
use crate::app::services::cleanup::coalesce;
use std::path::Path;
use tracing::{debug, info};

/// Outcome counts of a mapping run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingStats {
    pub matched: usize,
    pub unmatched: usize,
    pub removed: usize,
}

fn map_crimes(
    data: &mut Vec<Crime>,
    table: &MatchingTable,
    remove_unmatched: bool,
    stats: &mut MappingStats,
) {
    for crime in data.iter_mut() {
        match table.get(&crime.label) {
            Some(category) => {
                crime.standardized_code = Some(category.code.clone());
                crime.standardized_name = Some(category.name.clone());
                stats.matched += 1;
            }
            None => stats.unmatched += 1,
        }
    }

    if remove_unmatched {
        let before = data.len();
        data.retain(Crime::is_mapped);
        stats.removed += before - data.len();
    }
}

/// Attach standardized categories to every tally in the tree
///
/// Unmatched tallies are kept label-only, or removed when `remove_unmatched`
/// is set. With `merge_after_mapping`, tallies sharing a code are then
/// coalesced.
pub fn map_categories(
    country: &mut Country,
    table: &MatchingTable,
    remove_unmatched: bool,
    merge_after_mapping: bool,
) -> MappingStats {
    let mut stats = MappingStats::default();
    for data in country.data_sequences_mut() {
        map_crimes(data, table, remove_unmatched, &mut stats);
    }

    debug!(
        "Mapped {}: {} matched, {} unmatched, {} removed",
        country.name, stats.matched, stats.unmatched, stats.removed
    );

    if merge_after_mapping {
        coalesce(country);
    }
    stats
}

/// Load the country's lookup table and map the tree with it
pub fn map_country_categories(
    country: &mut Country,
    matching_root: &Path,
    country_id: &str,
    remove_unmatched: bool,
    merge_after_mapping: bool,
) -> Result<MappingStats> {
    let table = MatchingTable::load(matching_root, country_id)?;
    let stats = map_categories(country, &table, remove_unmatched, merge_after_mapping);

    info!(
        "Mapped {} categories for '{}' ({} unmatched)",
        stats.matched, country_id, stats.unmatched
    );
    Ok(stats)
}
