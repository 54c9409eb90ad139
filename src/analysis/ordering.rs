//! Deterministic row order for every report table
//!
//! All orders put larger counts first. Equal counts fall back to the key so
//! repeated runs over the same corpus write byte-identical reports.

use crate::analysis::classifier::SignProfile;
use crate::analysis::table::{FrequencyTable, PositionKey};
use std::hash::Hash;

/// Rows of a single-key table by descending count, then ascending key
pub fn rank_counts<K: Ord + Eq + Hash>(table: &FrequencyTable<K>) -> Vec<(&K, usize)> {
    let mut rows: Vec<(&K, usize)> = table.iter().collect();
    rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Positional rows `(position, sign, count)` by descending count
///
/// Equal counts order by ascending position, then ascending sign.
pub fn rank_positional(table: &FrequencyTable<PositionKey>) -> Vec<(usize, &str, usize)> {
    let mut rows: Vec<(usize, &str, usize)> = table
        .iter()
        .map(|((position, sign), count)| (*position, sign.as_str(), count))
        .collect();
    rows.sort_unstable_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| a.0.cmp(&b.0))
            .then_with(|| a.1.cmp(b.1))
    });
    rows
}

/// Sort sign profiles by descending total, then ascending sign
pub fn rank_profiles(profiles: &mut [SignProfile]) {
    profiles.sort_unstable_by(|a, b| b.total.cmp(&a.total).then_with(|| a.sign.cmp(&b.sign)));
}
