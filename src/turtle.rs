//! Turtle state and the actions that mutate it.

use crate::error::ConfigError;
use crate::geometry::{Material, MeshData, MeshGroup, Transform, euler_rotation};
use crate::interpreter::GeneratorConfig;
use crate::mesh_definition::MeshDefinition;
use crate::symbol::Symbol;
use glam::Vec3;
use std::collections::HashMap;

/// The state of the mesh-building turtle during one interpretation run.
///
/// Holds a stack of position/rotation frames (always the same height, never below one)
/// and the per-symbol accumulator that batches repeated draws into instanced groups.
#[derive(Clone, Debug)]
pub struct TurtleState {
    position_stack: Vec<Vec3>,
    /// Euler angles in degrees.
    rotation_stack: Vec<Vec3>,

    /// Groups in the order their symbols were first drawn.
    groups: Vec<MeshGroup>,
    group_index: HashMap<Symbol, usize>,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl TurtleState {
    /// A state holding only the base frame described by `config`.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            position_stack: vec![config.base_position],
            rotation_stack: vec![config.base_rotation],
            groups: Vec::new(),
            group_index: HashMap::new(),
        }
    }

    /// Current position of the cursor.
    pub fn position(&self) -> Vec3 {
        *self.position_stack.last().unwrap_or(&Vec3::ZERO)
    }

    /// Current orientation of the cursor, as Euler angles in degrees.
    pub fn rotation(&self) -> Vec3 {
        *self.rotation_stack.last().unwrap_or(&Vec3::ZERO)
    }

    /// Number of frames on the stack, including the base frame.
    pub fn depth(&self) -> usize {
        self.position_stack.len()
    }

    /// The canonical up vector rotated by the current orientation (Z, then Y, then X).
    pub fn heading(&self) -> Vec3 {
        euler_rotation(self.rotation()) * Vec3::Y
    }

    /// The instance transform for a draw at the current pose.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position(),
            rotation: self.rotation(),
            scale: 1.0,
        }
    }

    /// Advances the cursor `distance` units along its heading.
    pub fn move_forward(&mut self, distance: f32) {
        let step = self.heading() * distance;
        if let Some(position) = self.position_stack.last_mut() {
            *position += step;
        }
    }

    /// Adds `delta` degrees to the current orientation. Angles are not wrapped.
    pub fn rotate(&mut self, delta: Vec3) {
        if let Some(rotation) = self.rotation_stack.last_mut() {
            *rotation += delta;
        }
    }

    /// Pushes a copy of the current frame (a branch point).
    ///
    /// The stack is unbounded; nesting depth is bounded by the input sequence.
    pub fn save(&mut self) {
        self.position_stack.push(self.position());
        self.rotation_stack.push(self.rotation());
    }

    /// Returns to the frame of the most recent unmatched save.
    ///
    /// The base frame is never popped: an unmatched restore is ignored.
    pub fn restore(&mut self) {
        if self.depth() <= 1 {
            log::warn!("restore without a matching save; keeping the base frame");
            return;
        }
        self.position_stack.pop();
        self.rotation_stack.pop();
    }

    /// Records an instance of `symbol`'s geometry at the current pose.
    ///
    /// The first draw of a symbol creates its group from `mesh` and `material`; later draws
    /// only append a transform.
    pub fn draw(&mut self, symbol: Symbol, mesh: &MeshData, material: Material) {
        let transform = self.transform();
        match self.group_index.get(&symbol) {
            Some(&index) => self.groups[index].instances.push(transform),
            None => {
                self.group_index.insert(symbol, self.groups.len());
                self.groups.push(MeshGroup {
                    mesh: mesh.clone(),
                    material,
                    instances: vec![transform],
                });
            }
        }
    }

    /// Groups accumulated so far, in first-draw order.
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<MeshGroup> {
        self.groups
    }
}

/// Draws a mesh at the turtle's pose.
///
/// The mesh is generated once from the definition and regenerated only when the
/// definition changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawAction {
    definition: MeshDefinition,
    mesh: MeshData,
    material: Material,
    mesh_revision: u64,
}

impl DrawAction {
    /// Fails with [`ConfigError::MissingMeshDefinition`] when `definition` is `None`.
    pub fn new(definition: Option<MeshDefinition>, material: Material) -> Result<Self, ConfigError> {
        definition
            .map(|definition| Self::from_definition(definition, material))
            .ok_or(ConfigError::MissingMeshDefinition)
    }

    pub fn from_definition(definition: impl Into<MeshDefinition>, material: Material) -> Self {
        let definition = definition.into();
        Self {
            mesh: definition.generate_mesh(),
            definition,
            material,
            mesh_revision: 0,
        }
    }

    pub fn definition(&self) -> &MeshDefinition {
        &self.definition
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Bumped every time the cached mesh is regenerated.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    /// Edits the definition in place and regenerates the mesh if it changed.
    ///
    /// Returns whether the mesh was regenerated.
    pub fn edit_definition(&mut self, edit: impl FnOnce(&mut MeshDefinition)) -> bool {
        let before = self.definition;
        edit(&mut self.definition);
        let changed = self.definition != before;
        if changed {
            self.regenerate();
        }
        changed
    }

    /// Replaces the definition, regenerating the mesh if it differs.
    pub fn set_definition(&mut self, definition: impl Into<MeshDefinition>) -> bool {
        let definition = definition.into();
        self.edit_definition(|current| *current = definition)
    }

    fn regenerate(&mut self) {
        self.mesh = self.definition.generate_mesh();
        self.mesh_revision += 1;
        log::debug!(
            "regenerated {} mesh ({} triangles)",
            self.definition.name(),
            self.mesh.triangle_count()
        );
    }
}

/// Effects a symbol can have on the turtle.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Emit an instance of a mesh at the current pose.
    Draw(DrawAction),
    /// Advance along the heading by the given distance.
    Move(f32),
    /// Add per-axis Euler angles, in degrees, to the orientation.
    Rotate(Vec3),
    /// Push the current frame (`[`).
    Save,
    /// Pop back to the most recently saved frame (`]`).
    Restore,
}

impl Action {
    /// A move of one unit.
    pub fn step() -> Self {
        Action::Move(1.0)
    }

    /// Shorthand for a [`DrawAction`] built from a definition.
    pub fn draw(definition: impl Into<MeshDefinition>, material: Material) -> Self {
        Action::Draw(DrawAction::from_definition(definition, material))
    }

    /// Human-readable label for this action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Draw(draw) => draw.definition().name(),
            Action::Move(_) => "Move forward",
            Action::Rotate(_) => "Rotate",
            Action::Save => "Push state",
            Action::Restore => "Pop state",
        }
    }

    /// Applies this action for one occurrence of `symbol`.
    pub fn perform(&self, symbol: Symbol, state: &mut TurtleState) {
        match self {
            Action::Draw(draw) => state.draw(symbol, draw.mesh(), draw.material()),
            Action::Move(distance) => state.move_forward(*distance),
            Action::Rotate(delta) => state.rotate(*delta),
            Action::Save => state.save(),
            Action::Restore => state.restore(),
        }
    }
}
