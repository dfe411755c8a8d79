// src/models/frequency_table.rs
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Word occurrence counts collected in a single pass over the input.
///
/// Every stored count is at least one: a word only enters the table when it
/// is first recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`, inserting it with a count of one if it
    /// has not been seen before.
    #[inline]
    pub fn record(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count = count.saturating_add(1);
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of word tokens read.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |total, count| total.saturating_add(*count))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'table> IntoIterator for &'table FrequencyTable {
    type Item = (&'table String, &'table u64);
    type IntoIter = Iter<'table, String, u64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
