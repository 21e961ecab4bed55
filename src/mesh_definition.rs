//! Parametric primitives that a draw action turns into [`MeshData`].
//!
//! Parameters are stored as `bevy_math` primitives. Setters clamp out-of-range input and
//! report whether the definition actually changed, so a caller editing a definition
//! interactively knows when cached geometry is stale.

use crate::geometry::{MeshData, create_cylinder, create_quad};
use bevy_math::primitives::{Cylinder, Rectangle};
use glam::Vec2;

/// Changes smaller than this are treated as no change.
const EPSILON: f32 = 1e-5;

/// The kinds of mesh a draw action can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshType {
    Cylinder,
    Quad,
}

impl MeshType {
    pub const ALL: [MeshType; 2] = [MeshType::Cylinder, MeshType::Quad];

    pub fn name(self) -> &'static str {
        match self {
            MeshType::Cylinder => "Cylinder",
            MeshType::Quad => "Quad",
        }
    }
}

/// Cylinder parameters: side count plus radius/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderDefinition {
    side_count: u32,
    shape: Cylinder,
}

impl Default for CylinderDefinition {
    fn default() -> Self {
        Self::new(8, 1.0, 1.0)
    }
}

impl CylinderDefinition {
    /// Out-of-range values are clamped (at least 3 sides, non-negative extents).
    pub fn new(side_count: u32, height: f32, radius: f32) -> Self {
        Self {
            side_count: side_count.max(3),
            shape: Cylinder::new(radius.max(0.0), height.max(0.0)),
        }
    }

    pub fn side_count(&self) -> u32 {
        self.side_count
    }

    pub fn height(&self) -> f32 {
        self.shape.half_height * 2.0
    }

    pub fn radius(&self) -> f32 {
        self.shape.radius
    }

    pub fn set_side_count(&mut self, side_count: u32) -> bool {
        let side_count = side_count.max(3);
        let changed = side_count != self.side_count;
        self.side_count = side_count;
        changed
    }

    pub fn set_height(&mut self, height: f32) -> bool {
        let height = height.max(0.0);
        let changed = (self.height() - height).abs() > EPSILON;
        self.shape.half_height = height / 2.0;
        changed
    }

    pub fn set_radius(&mut self, radius: f32) -> bool {
        let radius = radius.max(0.0);
        let changed = (self.shape.radius - radius).abs() > EPSILON;
        self.shape.radius = radius;
        changed
    }

    pub fn generate_mesh(&self) -> MeshData {
        create_cylinder(self.side_count, self.height(), self.radius())
    }
}

/// A flat, optionally skewed quad (used for leaves).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadDefinition {
    shape: Rectangle,
    /// Lean of the top edge relative to the bottom, in degrees.
    skew: f32,
}

impl Default for QuadDefinition {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}

impl QuadDefinition {
    /// Negative extents are clamped to zero.
    pub fn new(width: f32, height: f32, skew: f32) -> Self {
        Self {
            shape: Rectangle::new(width.max(0.0), height.max(0.0)),
            skew,
        }
    }

    pub fn width(&self) -> f32 {
        self.shape.half_size.x * 2.0
    }

    pub fn height(&self) -> f32 {
        self.shape.half_size.y * 2.0
    }

    pub fn skew(&self) -> f32 {
        self.skew
    }

    pub fn set_width(&mut self, width: f32) -> bool {
        let width = width.max(0.0);
        let changed = (self.width() - width).abs() > EPSILON;
        self.shape.half_size.x = width / 2.0;
        changed
    }

    pub fn set_height(&mut self, height: f32) -> bool {
        let height = height.max(0.0);
        let changed = (self.height() - height).abs() > EPSILON;
        self.shape.half_size.y = height / 2.0;
        changed
    }

    pub fn set_skew(&mut self, skew: f32) -> bool {
        let changed = (self.skew - skew).abs() > EPSILON;
        self.skew = skew;
        changed
    }

    pub fn generate_mesh(&self) -> MeshData {
        let x = self.shape.half_size.x;
        let half_height = self.shape.half_size.y;
        let (sin, cos) = self.skew.to_radians().sin_cos();
        let skew_x = sin * half_height;
        let skew_y = cos * half_height;

        create_quad(
            Vec2::new(-x - skew_x, -skew_y),
            Vec2::new(-x + skew_x, skew_y),
            Vec2::new(x - skew_x, -skew_y),
            Vec2::new(x + skew_x, skew_y),
        )
    }
}

/// A mesh definition owned by a draw action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshDefinition {
    Cylinder(CylinderDefinition),
    Quad(QuadDefinition),
}

impl MeshDefinition {
    /// A definition of the given type with default parameters.
    pub fn from_mesh_type(mesh_type: MeshType) -> Self {
        match mesh_type {
            MeshType::Cylinder => Self::Cylinder(CylinderDefinition::default()),
            MeshType::Quad => Self::Quad(QuadDefinition::default()),
        }
    }

    pub fn mesh_type(&self) -> MeshType {
        match self {
            Self::Cylinder(_) => MeshType::Cylinder,
            Self::Quad(_) => MeshType::Quad,
        }
    }

    pub fn name(&self) -> &'static str {
        self.mesh_type().name()
    }

    pub fn generate_mesh(&self) -> MeshData {
        match self {
            Self::Cylinder(def) => def.generate_mesh(),
            Self::Quad(def) => def.generate_mesh(),
        }
    }
}

impl From<CylinderDefinition> for MeshDefinition {
    fn from(def: CylinderDefinition) -> Self {
        Self::Cylinder(def)
    }
}

impl From<QuadDefinition> for MeshDefinition {
    fn from(def: QuadDefinition) -> Self {
        Self::Quad(def)
    }
}
