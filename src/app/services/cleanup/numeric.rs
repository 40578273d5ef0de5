//! Numeric coercion and missing-value normalization

use crate::app::models::{Country, Crime};
use tracing::debug;

/// Coerce source text to a number, or the invalid sentinel
///
/// Empty and non-numeric cells become `f64::NAN`, never zero; zeroing is
/// left to [`normalize_missing`].
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Zero every invalid value in one sequence, returning how many were zeroed
pub(crate) fn zero_invalid(data: &mut [Crime]) -> usize {
    let mut zeroed = 0;
    for crime in data.iter_mut().filter(|crime| crime.is_invalid()) {
        crime.value = 0.0;
        zeroed += 1;
    }
    zeroed
}

/// Rewrite every invalid value in the tree to zero
pub fn normalize_missing(country: &mut Country) {
    let zeroed: usize = country
        .data_sequences_mut()
        .into_iter()
        .map(|data| zero_invalid(data))
        .sum();

    debug!("Normalized {} missing values in {}", zeroed, country.name);
}
