// src/core/tokenizer.rs
use std::collections::HashSet;

/// Characters that split words apart and are never counted.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,-.![];:/()\"”“`'*1234567890‘–&—…";

/// The set of characters that delimit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    chars: HashSet<char>,
}

impl Separators {
    #[inline]
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Separators {
    #[inline]
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

/// A maximal run of either word characters or separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'line> {
    Word(&'line str),
    Separator(&'line str),
}

impl<'line> Token<'line> {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'line str {
        match *self {
            Self::Word(text) | Self::Separator(text) => text,
        }
    }
}

/// Returns the word or separator run of `text` that starts at byte offset
/// `position`.
///
/// The run is maximal: it extends until the next character of the other
/// category or the end of `text`. Whether it is a word or a separator run is
/// decided by the character at `position`.
///
/// # Arguments
///
/// * `text` - The line to read from
/// * `position` - Byte offset of the first character; must lie on a char
///   boundary inside `text`
/// * `separators` - The characters that delimit words
///
/// # Returns
///
/// A non-empty slice of `text` beginning at `position`. An empty slice is
/// only returned when `position` is out of bounds.
#[inline]
#[must_use]
pub fn next_word_or_separator<'a>(text: &'a str, position: usize, separators: &Separators) -> &'a str {
    let rest = text.get(position..).unwrap_or_default();
    debug_assert!(!rest.is_empty(), "position {position} is outside the text");

    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return rest;
    };
    let in_separators = separators.contains(first);

    let end = chars
        .find(|&(_, c)| separators.contains(c) != in_separators)
        .map_or(rest.len(), |(index, _)| index);

    rest.get(..end).unwrap_or(rest)
}

/// Iterator over the tokens of a single line, see [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'line, 'sep> {
    line: &'line str,
    position: usize,
    separators: &'sep Separators,
}

impl<'line> Iterator for Tokens<'line, '_> {
    type Item = Token<'line>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }

        let text = next_word_or_separator(self.line, self.position, self.separators);
        self.position = self.position.saturating_add(text.len());

        let is_separator = text.chars().next().is_some_and(|c| self.separators.contains(c));
        Some(if is_separator {
            Token::Separator(text)
        } else {
            Token::Word(text)
        })
    }
}

/// Splits `line` into alternating word and separator runs.
#[inline]
#[must_use]
pub const fn tokens<'line, 'sep>(line: &'line str, separators: &'sep Separators) -> Tokens<'line, 'sep> {
    Tokens {
        line,
        position: 0,
        separators,
    }
}
