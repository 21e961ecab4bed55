//! Engine-agnostic geometry handed to the renderer.
//!
//! The interpreter's output is a list of [`MeshGroup`]s: one mesh and material each, plus
//! one [`Transform`] per instance. A renderer is expected to issue one instanced draw call
//! per group.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A single mesh vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// Indexed triangle geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Surface appearance of a mesh group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// RGBA color.
    pub color: Vec4,
}

impl Material {
    pub const fn new(color: Vec4) -> Self {
        Self { color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}

/// Pose of one drawn instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees, applied Z, then Y, then X.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Model matrix: translate, then rotate (see [`euler_rotation`]), then scale.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_mat3(&euler_rotation(self.rotation)),
            self.position,
        )
    }
}

/// Rotation matrix for Euler angles in degrees.
///
/// Composed as `Rz * Ry * Rx`: a vector is rotated about X first in its local frame,
/// which is the same as rolling about Z, then yawing about Y, then pitching about X in
/// world space. The order matters for parity with reference output.
pub fn euler_rotation(degrees: Vec3) -> Mat3 {
    Mat3::from_rotation_z(degrees.z.to_radians())
        * Mat3::from_rotation_y(degrees.y.to_radians())
        * Mat3::from_rotation_x(degrees.x.to_radians())
}

/// A batch of identical geometry, one transform per instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshGroup {
    pub mesh: MeshData,
    pub material: Material,
    pub instances: Vec<Transform>,
}

/// A quad in the XY plane facing +Z, from its four corners.
pub fn create_quad(bottom_left: Vec2, top_left: Vec2, bottom_right: Vec2, top_right: Vec2) -> MeshData {
    let corner = |p: Vec2, uv: Vec2| Vertex {
        position: p.extend(0.0),
        normal: Vec3::Z,
        uv,
    };
    MeshData {
        vertices: vec![
            corner(bottom_left, Vec2::new(0.0, 0.0)),
            corner(top_left, Vec2::new(0.0, 1.0)),
            corner(bottom_right, Vec2::new(1.0, 0.0)),
            corner(top_right, Vec2::new(1.0, 1.0)),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// A unit quad centered on the origin.
pub fn create_unit_quad() -> MeshData {
    create_quad(
        Vec2::new(-0.5, -0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
    )
}

/// An open cylinder (side wall only) centered on the origin and aligned along Y.
///
/// Each side contributes a bottom/top vertex pair. Fewer than 3 sides cannot enclose
/// anything; that is logged and an empty mesh is returned.
pub fn create_cylinder(side_count: u32, height: f32, radius: f32) -> MeshData {
    if side_count < 3 {
        log::error!("failed to generate cylinder: must have at least 3 sides, got {side_count}");
        return MeshData::default();
    }

    let half_height = height / 2.0;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(side_count as usize * 2),
        indices: Vec::with_capacity(side_count as usize * 6),
    };

    for i in 0..side_count {
        let t = i as f32 / side_count as f32;
        let (sin, cos) = (t * TAU).sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);
        let rim = normal * radius;

        mesh.vertices.push(Vertex {
            position: rim - Vec3::Y * half_height,
            normal,
            uv: Vec2::new(t, 0.0),
        });
        mesh.vertices.push(Vertex {
            position: rim + Vec3::Y * half_height,
            normal,
            uv: Vec2::new(t, 1.0),
        });

        let bottom = 2 * i;
        let top = bottom + 1;
        let next_bottom = 2 * ((i + 1) % side_count);
        let next_top = next_bottom + 1;
        mesh.indices.extend_from_slice(&[bottom, top, next_bottom, top, next_top, next_bottom]);
    }

    mesh
}
