// src/models/ranked_entry.rs

/// A word together with the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
