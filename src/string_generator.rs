//! Text rendering of a generated sequence, for logging.

use crate::symbol::Symbol;
use std::collections::HashMap;

/// Maps symbols to display strings.
#[derive(Clone, Debug, Default)]
pub struct StringGenerator {
    symbol_map: HashMap<Symbol, String>,
}

impl StringGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the representation of `symbol`.
    pub fn define(&mut self, symbol: Symbol, representation: impl Into<String>) {
        self.symbol_map.insert(symbol, representation.into());
    }

    pub fn remove(&mut self, symbol: Symbol) -> bool {
        self.symbol_map.remove(&symbol).is_some()
    }

    pub fn has_definition(&self, symbol: Symbol) -> bool {
        self.symbol_map.contains_key(&symbol)
    }

    /// Concatenates the representations of `symbols` in order.
    /// Symbols without a representation contribute nothing.
    pub fn generate(&self, symbols: &[Symbol]) -> String {
        symbols
            .iter()
            .filter_map(|symbol| self.symbol_map.get(symbol))
            .map(String::as_str)
            .collect()
    }
}
