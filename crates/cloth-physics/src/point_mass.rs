//! Cloth vertex state

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-compatible cloth vertex
///
/// Plain `repr(C)` floats with no padding, so a slice of vertices can be handed to a vertex
/// buffer with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointMass {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Velocity vector
    pub velocity: [f32; 3],
}

impl PointMass {
    /// Create a vertex at rest
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            velocity: [0.0; 3],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::from_array(self.velocity)
    }
}
