//! The editable, textual form of an L-System and its parser.

use crate::error::{GrammarError, Result};
use crate::lsystem::{LSystem, RuleMap};
use crate::symbol::{Symbol, parse_symbols, symbols_to_string};
use serde::{Deserialize, Serialize};

/// A single production as the user typed it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRule {
    /// Must decode to exactly one symbol for the grammar to parse.
    pub predecessor: String,
    /// May be empty, which deletes the predecessor on every pass.
    pub successor: String,
}

impl StringRule {
    pub fn new(predecessor: impl Into<String>, successor: impl Into<String>) -> Self {
        Self {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }
}

/// The pre-parse form of an [`LSystem`].
///
/// Rules are kept as an ordered list rather than a map so the display/edit order survives,
/// and a predecessor can be renamed in place without losing its position. Duplicate
/// predecessors are allowed here; the later one wins when parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLSystem {
    pub axiom: String,
    pub rules: Vec<StringRule>,
}

impl StringLSystem {
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule (builder pattern).
    pub fn with_rule(mut self, predecessor: impl Into<String>, successor: impl Into<String>) -> Self {
        self.push_rule(predecessor, successor);
        self
    }

    pub fn push_rule(&mut self, predecessor: impl Into<String>, successor: impl Into<String>) {
        self.rules.push(StringRule::new(predecessor, successor));
    }

    /// Removes and returns the rule at `index`, if any.
    pub fn remove_rule(&mut self, index: usize) -> Option<StringRule> {
        (index < self.rules.len()).then(|| self.rules.remove(index))
    }

    /// Changes the predecessor of the rule at `index`, keeping its position.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn rename_predecessor(&mut self, index: usize, predecessor: impl Into<String>) -> bool {
        match self.rules.get_mut(index) {
            Some(rule) => {
                rule.predecessor = predecessor.into();
                true
            }
            None => false,
        }
    }

    /// Changes the successor of the rule at `index`.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn set_successor(&mut self, index: usize, successor: impl Into<String>) -> bool {
        match self.rules.get_mut(index) {
            Some(rule) => {
                rule.successor = successor.into();
                true
            }
            None => false,
        }
    }

    /// Parses this grammar. See [`parse_lsystem`].
    pub fn parse(&self) -> std::result::Result<LSystem, GrammarError> {
        parse_lsystem(self)
    }

    /// Reads a grammar from JSON, preserving rule order.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes this grammar as pretty-printed JSON, preserving rule order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Renders a parsed system back to text.
///
/// The rule map has no edit order, so rules come out sorted by predecessor.
impl From<&LSystem> for StringLSystem {
    fn from(lsystem: &LSystem) -> Self {
        let mut rules: Vec<(&Symbol, &Vec<Symbol>)> = lsystem.rules.iter().collect();
        rules.sort_by_key(|(symbol, _)| **symbol);
        Self {
            axiom: symbols_to_string(&lsystem.axiom),
            rules: rules
                .into_iter()
                .map(|(symbol, successor)| {
                    StringRule::new(symbol.to_string(), symbols_to_string(successor))
                })
                .collect(),
        }
    }
}

/// Converts a [`StringLSystem`] into a validated [`LSystem`].
///
/// Rules are inserted in list order, so a later duplicate predecessor replaces an earlier
/// one. Fails without producing a partial system if any predecessor is not exactly one
/// symbol.
pub fn parse_lsystem(grammar: &StringLSystem) -> std::result::Result<LSystem, GrammarError> {
    let mut rules = RuleMap::with_capacity(grammar.rules.len());
    for (index, rule) in grammar.rules.iter().enumerate() {
        let predecessor = match parse_symbols(&rule.predecessor).as_slice() {
            [single] => *single,
            other => {
                return Err(GrammarError::InvalidPredecessor {
                    index,
                    predecessor: rule.predecessor.clone(),
                    found: other.len(),
                });
            }
        };
        rules.insert(predecessor, parse_symbols(&rule.successor));
    }

    Ok(LSystem {
        axiom: parse_symbols(&grammar.axiom),
        rules,
    })
}
