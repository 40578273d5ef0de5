//! Recovering exclusive parent-category totals

use crate::app::models::{Country, Crime};
use tracing::debug;

/// Subtract `sub` from `top` in one sequence when both are present
fn disentangle_crimes(data: &mut [Crime], top: &str, sub: &str) -> bool {
    let top_index = data.iter().position(|crime| crime.label == top);
    let sub_value = data
        .iter()
        .find(|crime| crime.label == sub)
        .map(|crime| crime.value);

    match (top_index, sub_value) {
        (Some(index), Some(value)) => {
            data[index].value -= value;
            true
        }
        _ => false,
    }
}

/// Make a parent category exclusive of a subcategory it includes
///
/// Applies to every data sequence holding both labels; sequences missing
/// either are left alone. Run before category mapping and coalescing.
pub fn disentangle_subcategory(country: &mut Country, top: &str, sub: &str) {
    let adjusted = country
        .data_sequences_mut()
        .into_iter()
        .map(|data| disentangle_crimes(data, top, sub))
        .filter(|&adjusted| adjusted)
        .count();

    debug!(
        "Disentangled '{}' from '{}' in {} sequences",
        sub, top, adjusted
    );
}

/// Apply several (parent, subcategory) pairs in order
pub fn disentangle_subcategories(country: &mut Country, pairs: &[(&str, &str)]) {
    for (top, sub) in pairs {
        disentangle_subcategory(country, top, sub);
    }
}
