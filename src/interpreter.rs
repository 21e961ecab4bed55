//! Interpreter that converts a generated symbol sequence into instanced [`MeshGroup`]s.
//!
//! The entry point is [`MeshGenerator`]. Configure it with a [`GeneratorConfig`],
//! register symbol-to-action bindings via [`MeshGenerator::define`], then call
//! [`MeshGenerator::generate`] with the output of the rewriting engine.

use crate::geometry::MeshGroup;
use crate::symbol::Symbol;
use crate::turtle::{Action, TurtleState};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for mesh generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Position of the base frame.
    pub base_position: Vec3,
    /// Orientation of the base frame, Euler angles in degrees.
    pub base_rotation: Vec3,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_position: Vec3::ZERO,
            base_rotation: Vec3::ZERO,
        }
    }
}

/// Action registry and turtle interpreter.
///
/// Each symbol is either unregistered, registered with an [`Action`], or registered as a
/// placeholder (`None`): defined, but with no action chosen yet. Unregistered symbols and
/// placeholders are both skipped during generation.
#[derive(Clone, Debug, Default)]
pub struct MeshGenerator {
    actions: HashMap<Symbol, Option<Action>>,
    config: GeneratorConfig,
}

impl MeshGenerator {
    /// Creates a generator with the given configuration and no bindings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            actions: HashMap::new(),
            config,
        }
    }

    /// Replaces the configuration (builder pattern).
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Installs or replaces the binding for `symbol`.
    ///
    /// Pass `None` to register a placeholder.
    pub fn define(&mut self, symbol: Symbol, action: impl Into<Option<Action>>) {
        self.actions.insert(symbol, action.into());
    }

    /// Registers `symbol` as defined but inert.
    pub fn define_placeholder(&mut self, symbol: Symbol) {
        self.actions.insert(symbol, None);
    }

    /// Clears any binding for `symbol`. Returns whether one existed.
    pub fn remove(&mut self, symbol: Symbol) -> bool {
        self.actions.remove(&symbol).is_some()
    }

    /// True for placeholders as well as real actions.
    pub fn has_definition(&self, symbol: Symbol) -> bool {
        self.actions.contains_key(&symbol)
    }

    /// The action bound to `symbol`, if it has a non-placeholder binding.
    pub fn action(&self, symbol: Symbol) -> Option<&Action> {
        self.actions.get(&symbol).and_then(Option::as_ref)
    }

    /// Mutable access to a binding, e.g. to edit a draw action's mesh definition.
    pub fn action_mut(&mut self, symbol: Symbol) -> Option<&mut Action> {
        self.actions.get_mut(&symbol).and_then(Option::as_mut)
    }

    /// All defined symbols, placeholders included, in symbol order.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.actions.keys().copied().collect();
        symbols.sort();
        symbols
    }

    /// Replays `symbols` against a fresh turtle and returns the drawn groups.
    ///
    /// The turtle starts at the configured base frame (origin, zero rotation by default).
    /// Groups are ordered by the first draw of their symbol. Never fails; symbols with no
    /// action are ignored.
    pub fn generate(&self, symbols: &[Symbol]) -> Vec<MeshGroup> {
        let mut state = TurtleState::new(&self.config);

        for &symbol in symbols {
            if let Some(Some(action)) = self.actions.get(&symbol) {
                action.perform(symbol, &mut state);
            }
        }

        if state.depth() > 1 {
            log::debug!(
                "generation ended with {} unmatched saves",
                state.depth() - 1
            );
        }

        let groups = state.into_groups();
        log::debug!(
            "generated {} mesh groups ({} instances) from {} symbols",
            groups.len(),
            groups.iter().map(|g| g.instances.len()).sum::<usize>(),
            symbols.len()
        );
        groups
    }
}
