//! Ready-made grammar and symbol bindings for a simple branching tree.
//!
//! | Symbol | Mesh action | Trace |
//! |---|---|---|
//! | `F` | trunk cylinder | `1` |
//! | `X` | leaf quad | `0` |
//! | `[` | save | `[` |
//! | `]` | restore | `]` |
//! | `-` | rotate by `-rotation` | `R` |
//! | `+` | rotate by `rotation` | `L` |
//! | `A` | move 0.15 | `A` |

use crate::geometry::Material;
use crate::grammar::StringLSystem;
use crate::interpreter::MeshGenerator;
use crate::mesh_definition::{CylinderDefinition, QuadDefinition};
use crate::string_generator::StringGenerator;
use crate::symbol::Symbol;
use crate::turtle::Action;
use glam::{Vec3, Vec4};

pub const TRUNK: Symbol = Symbol::new('F');
pub const LEAF: Symbol = Symbol::new('X');
pub const PUSH: Symbol = Symbol::new('[');
pub const POP: Symbol = Symbol::new(']');
pub const ROTATE_RIGHT: Symbol = Symbol::new('-');
pub const ROTATE_LEFT: Symbol = Symbol::new('+');
pub const ADVANCE: Symbol = Symbol::new('A');

pub const TRUNK_MATERIAL: Material = Material::new(Vec4::new(0.5, 0.2, 0.0, 1.0));
pub const LEAF_MATERIAL: Material = Material::new(Vec4::new(0.0, 0.5, 0.0, 1.0));

/// Length of one `A` step, matching the trunk segment height.
pub const STEP_LENGTH: f32 = 0.15;

/// Default branching angle around Z, in degrees.
pub const BRANCH_ANGLE: f32 = 22.5;

/// The "type B" bracketed tree.
///
/// The textbook grammar has no explicit advance symbol; `A` is added so every symbol maps
/// to exactly one action.
pub fn tree_type_b() -> StringLSystem {
    StringLSystem::new("X")
        .with_rule("F", "FAF")
        .with_rule("X", "F-[[AX]+AX]+AF[+AFAX]-AX")
}

/// Mesh bindings for [`tree_type_b`], turning by `rotation` degrees at `+`/`-`.
pub fn default_mesh_generator(rotation: Vec3) -> MeshGenerator {
    let mut generator = MeshGenerator::default();
    generator.define(
        TRUNK,
        Action::draw(CylinderDefinition::new(8, STEP_LENGTH, 0.1), TRUNK_MATERIAL),
    );
    generator.define(LEAF, Action::draw(QuadDefinition::default(), LEAF_MATERIAL));
    generator.define(PUSH, Action::Save);
    generator.define(POP, Action::Restore);
    generator.define(ROTATE_RIGHT, Action::Rotate(-rotation));
    generator.define(ROTATE_LEFT, Action::Rotate(rotation));
    generator.define(ADVANCE, Action::Move(STEP_LENGTH));
    generator
}

/// Trace bindings that print the tree as a binary-tree style string.
pub fn binary_tree_string_generator() -> StringGenerator {
    let mut generator = StringGenerator::new();
    generator.define(TRUNK, "1");
    generator.define(LEAF, "0");
    generator.define(PUSH, "[");
    generator.define(POP, "]");
    generator.define(ROTATE_RIGHT, "R");
    generator.define(ROTATE_LEFT, "L");
    generator.define(ADVANCE, "A");
    generator
}
