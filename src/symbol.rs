//! The rewriting alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic token of the rewriting alphabet.
///
/// One symbol corresponds to one `char` of grammar text. Symbols carry no parameters;
/// two symbols are equal iff their characters are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// The character this symbol was created from.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps every character of `text` to a [`Symbol`], in order. Never fails.
pub fn parse_symbols(text: &str) -> Vec<Symbol> {
    text.chars().map(Symbol).collect()
}

/// Renders a symbol sequence back into text. Inverse of [`parse_symbols`].
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.0).collect()
}
