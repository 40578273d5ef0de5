//! Merging duplicate categories within each data sequence

use super::numeric::zero_invalid;
use crate::app::models::{Country, Crime};
use tracing::debug;

/// What two entries must share to be merged
///
/// Mapped entries merge on their standardized code, unmapped ones on their
/// raw label. The two kinds never match each other.
#[derive(Debug, PartialEq, Eq)]
enum CoalesceKey<'a> {
    Code(&'a str),
    Label(&'a str),
}

fn coalesce_key(crime: &Crime) -> CoalesceKey<'_> {
    match &crime.standardized_code {
        Some(code) => CoalesceKey::Code(code),
        None => CoalesceKey::Label(&crime.label),
    }
}

/// Merge entries sharing a key, summing into the last occurrence
///
/// Merge pass: each entry, newest first, absorbs every older live entry with
/// the same key, which is tombstoned. Prune pass: tombstoned entries are
/// dropped. Survivors keep their relative order. Invalid values count as zero.
pub fn coalesce_crimes(data: &mut Vec<Crime>) -> usize {
    zero_invalid(data);

    let mut tombstoned = vec![false; data.len()];
    for newer in (1..data.len()).rev() {
        if tombstoned[newer] {
            continue;
        }
        for older in (0..newer).rev() {
            if tombstoned[older] || coalesce_key(&data[older]) != coalesce_key(&data[newer]) {
                continue;
            }
            let absorbed = data[older].value;
            data[newer].value += absorbed;
            tombstoned[older] = true;
        }
    }

    let merged = tombstoned.iter().filter(|&&dead| dead).count();
    let mut flags = tombstoned.into_iter();
    data.retain(|_| !flags.next().unwrap_or(false));
    merged
}

/// Coalesce every data sequence of the tree
pub fn coalesce(country: &mut Country) {
    let merged: usize = country
        .data_sequences_mut()
        .into_iter()
        .map(coalesce_crimes)
        .sum();

    debug!("Coalesced {} duplicate entries in {}", merged, country.name);
}
