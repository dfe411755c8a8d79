// src/core/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::tokenizer::Separators;

/// Presentation settings for a report, optionally read from a TOML file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Replaces the built-in separator characters when set.
    pub separators: Option<String>,
    pub background_color: String,
    pub border: u32,
    pub alphabetical_caption: String,
    pub occurrence_caption: String,
    /// Escape `& < > "` in words before writing them.
    pub escape_words: bool,
    /// Maximum number of rows per table.
    pub top: Option<usize>,
}

impl Default for ReportConfig {
    #[inline]
    fn default() -> Self {
        Self {
            separators: None,
            background_color: String::from("#FFFF99"),
            border: 4,
            alphabetical_caption: String::from("Ordered Alphabetically"),
            occurrence_caption: String::from("Ordered by Occurrence"),
            escape_words: false,
            top: None,
        }
    }
}

impl ReportConfig {
    #[inline]
    #[must_use]
    pub fn separators(&self) -> Separators {
        self.separators
            .as_deref()
            .map_or_else(Separators::default, Separators::from_chars)
    }
}

/// Parses a report configuration from TOML text.
///
/// # Errors
///
/// This function may return an error if:
/// * The text is not valid TOML or contains unknown keys
/// * `separators` is set to an empty string
#[inline]
pub fn parse_config(content: &str) -> Result<ReportConfig> {
    let config: ReportConfig =
        toml::from_str(content).context("Failed to parse report configuration")?;

    if config.separators.as_deref().is_some_and(str::is_empty) {
        bail!("The separators setting must contain at least one character");
    }

    Ok(config)
}

/// Loads a report configuration from the TOML file at `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The content is rejected by [`parse_config`]
#[inline]
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}
