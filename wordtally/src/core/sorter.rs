// src/core/sorter.rs
use std::cmp::Ordering;

use crate::models::{FrequencyTable, RankedEntry};

/// The two orderings of a frequency table that make up a report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RankedTables {
    pub alphabetical: Vec<RankedEntry>,
    pub by_occurrence: Vec<RankedEntry>,
}

/// Orders entries by ascending word, then by descending count.
#[inline]
#[must_use]
pub fn alphabetical(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    a.word.cmp(&b.word).then_with(|| b.count.cmp(&a.count))
}

/// Orders entries by descending count, then by ascending word.
#[inline]
#[must_use]
pub fn by_occurrence(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

fn entries(table: &FrequencyTable) -> Vec<RankedEntry> {
    table
        .iter()
        .map(|(word, count)| RankedEntry::new(word.as_str(), *count))
        .collect()
}

#[inline]
#[must_use]
pub fn order_alphabetically(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut sorted = entries(table);
    sorted.sort_unstable_by(alphabetical);
    sorted
}

#[inline]
#[must_use]
pub fn order_by_occurrence(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut sorted = entries(table);
    sorted.sort_unstable_by(by_occurrence);
    sorted
}

/// Produces both orderings of `table` and drops it.
///
/// Each ordering is its own copy of the entries, so consuming one while
/// rendering leaves the other untouched.
#[inline]
#[must_use]
pub fn rank(table: FrequencyTable) -> RankedTables {
    RankedTables {
        alphabetical: order_alphabetically(&table),
        by_occurrence: order_by_occurrence(&table),
    }
}
