use crate::model::deck::MAX_SEQUENCE_LEN;
use crate::model::symbol::Symbol;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Ordered draw pattern over R, B and X.
///
/// The type itself does not bound the length; the evaluator reports
/// over-long sequences instead of refusing to represent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

/// Per-symbol tallies, derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolCounts {
    pub red: usize,
    pub black: usize,
    pub wildcard: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid symbol '{found}' at position {index}; expected R, B or X")]
pub struct ParseSequenceError {
    /// Char offset into the raw text, skipped whitespace included. Not a
    /// position in the parsed sequence.
    pub index: usize,
    pub found: char,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// All-wildcard sequence of `len` positions.
    pub fn wildcard(len: usize) -> Self {
        Self {
            symbols: vec![Symbol::Wildcard; len],
        }
    }

    /// Cleans raw text input: unknown characters are dropped, letters are
    /// uppercased and the result is cut to the deck size. Never fails.
    pub fn normalize(raw: &str) -> Self {
        let symbols = raw
            .chars()
            .filter_map(Symbol::from_char)
            .take(MAX_SEQUENCE_LEN)
            .collect();
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn counts(&self) -> SymbolCounts {
        let mut counts = SymbolCounts::default();
        for symbol in &self.symbols {
            match symbol {
                Symbol::Red => counts.red += 1,
                Symbol::Black => counts.black += 1,
                Symbol::Wildcard => counts.wildcard += 1,
            }
        }
        counts
    }

    /// Same length, every fixed position replaced by a wildcard.
    pub fn masked(&self) -> Self {
        Self::wildcard(self.len())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            fmt::Display::fmt(symbol, f)?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = ParseSequenceError;

    /// Strict parse: whitespace is skipped, any other non-R/B/X character is
    /// an error, and no truncation happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let symbol = Symbol::from_char(ch).ok_or(ParseSequenceError { index, found: ch })?;
            symbols.push(symbol);
        }
        Ok(Self { symbols })
    }
}

impl FromIterator<Symbol> for Sequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
