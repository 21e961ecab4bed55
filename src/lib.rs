//! # arbor-lsystem
//!
//! Procedural branching structures from a compact rewriting grammar.
//!
//! A textual [`StringLSystem`] is parsed into an [`LSystem`], expanded for a number of
//! passes by the rewriting engine ([`generate`]), and the resulting symbol sequence is
//! replayed by a turtle interpreter ([`MeshGenerator`]) that emits one [`MeshGroup`] per
//! drawn symbol. Each group carries one instance [`Transform`] per occurrence, so a
//! renderer can issue a single instanced draw call per group.
//!
//! Rendering, windowing and UI are left to the caller.

pub mod error;
pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod lsystem;
pub mod mesh_definition;
pub mod pipeline;
pub mod presets;
pub mod string_generator;
pub mod symbol;
pub mod turtle;

pub use error::*;
pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use lsystem::*;
pub use mesh_definition::*;
pub use pipeline::*;
pub use string_generator::*;
pub use symbol::*;
pub use turtle::*;
