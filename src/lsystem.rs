//! The rewriting engine.
//!
//! Rewriting is context-free and parameterless: every symbol is replaced by its
//! successor from the [`RuleMap`], or passes through unchanged when it has no rule.

use crate::symbol::Symbol;
use std::collections::HashMap;

/// Successor sequence for each symbol that has a production.
///
/// A symbol absent from the map is its own identity rule.
pub type RuleMap = HashMap<Symbol, Vec<Symbol>>;

/// A parsed L-System: an axiom and its productions.
///
/// The axiom may be empty, and rules may name symbols the axiom never produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LSystem {
    pub axiom: Vec<Symbol>,
    pub rules: RuleMap,
}

impl LSystem {
    pub fn new(axiom: Vec<Symbol>, rules: RuleMap) -> Self {
        Self { axiom, rules }
    }

    /// Expands the axiom for `iterations` passes. See [`generate`].
    pub fn generate(&self, iterations: usize) -> Vec<Symbol> {
        generate(self, iterations)
    }
}

/// Applies one simultaneous substitution pass over `previous`.
///
/// Every lookup reads the same `previous` sequence and the same `rules`, so output produced
/// earlier in the pass is never rewritten again within it. `previous` is left untouched.
pub fn iterate(previous: &[Symbol], rules: &RuleMap) -> Vec<Symbol> {
    let mut next = Vec::with_capacity(previous.len());
    for symbol in previous {
        match rules.get(symbol) {
            Some(successor) => next.extend_from_slice(successor),
            None => next.push(*symbol),
        }
    }
    next
}

/// Starts from the axiom and applies [`iterate`] exactly `iterations` times.
///
/// `iterations == 0` returns a copy of the axiom. The output length can grow exponentially
/// with `iterations`; bounding it is the caller's job.
pub fn generate(lsystem: &LSystem, iterations: usize) -> Vec<Symbol> {
    let mut current = lsystem.axiom.clone();
    for pass in 0..iterations {
        current = iterate(&current, &lsystem.rules);
        log::trace!("rewriting pass {} produced {} symbols", pass + 1, current.len());
    }
    current
}
