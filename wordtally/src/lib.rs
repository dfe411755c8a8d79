// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_with};
pub use crate::core::config::{ReportConfig, load_config, parse_config};
pub use crate::core::counter::{count_file, count_lines, count_reader};
pub use crate::core::report::{Side, render_report};
pub use crate::core::sorter::{RankedTables, order_alphabetically, order_by_occurrence, rank};
pub use crate::core::tokenizer::{DEFAULT_SEPARATORS, Separators, Token, next_word_or_separator, tokens};
pub use models::{FrequencyTable, RankedEntry};
