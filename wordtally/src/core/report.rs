// src/core/report.rs
use anyhow::Result;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::core::config::ReportConfig;
use crate::core::sorter::RankedTables;
use crate::models::RankedEntry;

/// Which side of the page a table floats to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Escapes the characters that would otherwise be read as markup.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len().saturating_add(8));
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Writes the opening tags, page title and heading.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_header<W: Write>(out: &mut W, title: &str, config: &ReportConfig) -> Result<()> {
    write!(
        out,
        "<html> <head><title>Words Counted in {title}</title> </head>"
    )?;
    writeln!(
        out,
        "<body style = \"background-color: {}\" ><h2>Words Counted in {title}</h2><hr />",
        config.background_color
    )?;
    Ok(())
}

/// Writes one captioned table, taking the entries in order.
///
/// The entries are consumed; at most `config.top` rows are written when a
/// limit is set.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_table<W: Write>(
    out: &mut W,
    entries: Vec<RankedEntry>,
    caption: &str,
    side: Side,
    config: &ReportConfig,
) -> Result<()> {
    writeln!(
        out,
        "<div><table style = \"float: {side} \" border=\"{}\"><caption><b>{caption}</b></caption><tr><th>Words</th><th>Counts</th></tr>",
        config.border
    )?;

    let limit = config.top.unwrap_or(usize::MAX);
    for entry in entries.into_iter().take(limit) {
        let word = if config.escape_words {
            escape_html(&entry.word)
        } else {
            Cow::Borrowed(entry.word.as_str())
        };
        writeln!(out, "<tr><td>{word}</td><td>{}</td></tr>", entry.count)?;
    }

    writeln!(out, "</table></div>")?;
    Ok(())
}

/// Writes the closing tags.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_footer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "</body></html>")?;
    Ok(())
}

/// Writes the complete report: the alphabetical table on the left and the
/// occurrence table on the right.
///
/// # Arguments
///
/// * `out` - Destination of the HTML text
/// * `title` - Name shown in the page title and heading
/// * `tables` - Both orderings; they are consumed while writing
/// * `config` - Presentation settings
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn render_report<W: Write>(
    out: &mut W,
    title: &str,
    tables: RankedTables,
    config: &ReportConfig,
) -> Result<()> {
    let RankedTables {
        alphabetical,
        by_occurrence,
    } = tables;

    write_header(out, title, config)?;
    write_table(
        out,
        alphabetical,
        &config.alphabetical_caption,
        Side::Left,
        config,
    )?;
    write_table(
        out,
        by_occurrence,
        &config.occurrence_caption,
        Side::Right,
        config,
    )?;
    write_footer(out)?;
    Ok(())
}
