//! Grammar text in, instanced geometry out.

use crate::error::GrammarError;
use crate::geometry::MeshGroup;
use crate::grammar::{StringLSystem, parse_lsystem};
use crate::interpreter::MeshGenerator;
use crate::lsystem::LSystem;
use crate::presets;
use crate::string_generator::StringGenerator;
use crate::symbol::Symbol;
use glam::Vec3;

/// Result of one [`TreeGenerator::generate`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeOutput {
    /// The rewritten symbol sequence.
    pub symbols: Vec<Symbol>,
    /// One group per drawn symbol, in first-draw order.
    pub groups: Vec<MeshGroup>,
    /// The sequence rendered through the string generator, when tracing is enabled.
    pub trace: Option<String>,
}

/// Owns an editable grammar, its last valid parse, and the interpreters for its output.
#[derive(Clone, Debug)]
pub struct TreeGenerator {
    grammar: StringLSystem,
    lsystem: LSystem,
    pub iterations: usize,
    pub mesh_generator: MeshGenerator,
    pub string_generator: StringGenerator,
    /// Render and log a text trace of every generated sequence.
    pub trace: bool,
}

impl Default for TreeGenerator {
    /// The type B tree, 5 iterations, branching at 22.5 degrees.
    fn default() -> Self {
        Self {
            grammar: presets::tree_type_b(),
            lsystem: presets::tree_type_b().parse().unwrap_or_default(),
            iterations: 5,
            mesh_generator: presets::default_mesh_generator(Vec3::new(
                0.0,
                0.0,
                presets::BRANCH_ANGLE,
            )),
            string_generator: presets::binary_tree_string_generator(),
            trace: false,
        }
    }
}

impl TreeGenerator {
    /// Fails if `grammar` does not parse.
    pub fn new(
        grammar: StringLSystem,
        iterations: usize,
        mesh_generator: MeshGenerator,
        string_generator: StringGenerator,
    ) -> Result<Self, GrammarError> {
        let lsystem = parse_lsystem(&grammar)?;
        Ok(Self {
            grammar,
            lsystem,
            iterations,
            mesh_generator,
            string_generator,
            trace: false,
        })
    }

    /// The grammar text currently in effect.
    pub fn grammar(&self) -> &StringLSystem {
        &self.grammar
    }

    pub fn lsystem(&self) -> &LSystem {
        &self.lsystem
    }

    /// Replaces the grammar.
    ///
    /// If it does not parse, the error is returned and the previous grammar stays in effect.
    pub fn set_grammar(&mut self, grammar: StringLSystem) -> Result<(), GrammarError> {
        match parse_lsystem(&grammar) {
            Ok(lsystem) => {
                self.grammar = grammar;
                self.lsystem = lsystem;
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected grammar edit: {e}");
                Err(e)
            }
        }
    }

    /// Rewrites the axiom and interprets the result.
    pub fn generate(&self) -> TreeOutput {
        let symbols = self.lsystem.generate(self.iterations);
        log::debug!(
            "expanded axiom to {} symbols in {} iterations",
            symbols.len(),
            self.iterations
        );

        let trace = self.trace.then(|| {
            let trace = self.string_generator.generate(&symbols);
            log::info!("generated tree: {trace}");
            trace
        });

        let groups = self.mesh_generator.generate(&symbols);
        TreeOutput {
            symbols,
            groups,
            trace,
        }
    }
}
