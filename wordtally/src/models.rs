// src/models.rs
pub mod frequency_table;
pub mod ranked_entry;

pub use frequency_table::FrequencyTable;
pub use ranked_entry::RankedEntry;
