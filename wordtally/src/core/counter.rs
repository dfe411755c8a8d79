// src/core/counter.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::tokenizer::{Separators, Token, tokens};
use crate::models::FrequencyTable;

/// Adds the words of a single line to `table`.
///
/// The line is lower-cased before tokenizing; separator runs are skipped.
#[inline]
pub fn count_line(table: &mut FrequencyTable, line: &str, separators: &Separators) {
    let line = line.to_lowercase();
    for token in tokens(&line, separators) {
        if let Token::Word(word) = token {
            table.record(word);
        }
    }
}

/// Builds a frequency table from a sequence of lines.
///
/// Each line is tokenized on its own, so a word is never joined across a
/// line break.
#[inline]
pub fn count_lines<I>(lines: I, separators: &Separators) -> FrequencyTable
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    for line in lines {
        count_line(&mut table, line.as_ref(), separators);
    }
    table
}

/// Builds a frequency table by reading `reader` line by line.
///
/// # Arguments
///
/// * `reader` - The buffered source to read; line terminators are stripped
/// * `separators` - The characters that delimit words
///
/// # Returns
///
/// * `Ok(FrequencyTable)` - Every word of the input with its occurrence count
///
/// # Errors
///
/// This function may return an error if:
/// * Reading from `reader` fails
/// * The input is not valid UTF-8
#[inline]
pub fn count_reader<R: BufRead>(reader: R, separators: &Separators) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index.saturating_add(1)))?;
        count_line(&mut table, &line, separators);
    }
    Ok(table)
}

/// Builds a frequency table from the file at `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be opened
/// * The file cannot be read as UTF-8 text
#[inline]
pub fn count_file(path: &Path, separators: &Separators) -> Result<FrequencyTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    count_reader(BufReader::new(file), separators)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
