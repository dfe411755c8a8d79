// src/core.rs
pub mod config;
pub mod counter;
pub mod report;
pub mod sorter;
pub mod tokenizer;
