//! Axis-aligned containment box

use glam::Vec3;

use crate::constants::*;
use crate::error::{ClothError, Result};

const AXIS_NAMES: [char; 3] = ['x', 'y', 'z'];

/// Axis-aligned box the cloth vertices are constrained to
///
/// Built once at startup and never mutated. `min <= max` holds on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryVolume {
    min: Vec3,
    max: Vec3,
}

impl BoundaryVolume {
    /// Build a box from its six face coordinates.
    ///
    /// Fails with [`ClothError::InvalidBounds`] if any axis has `min > max` or a NaN bound.
    pub fn new(
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        min_z: f32,
        max_z: f32,
    ) -> Result<Self> {
        Self::from_corners(
            Vec3::new(min_x, min_y, min_z),
            Vec3::new(max_x, max_y, max_z),
        )
    }

    /// Build a box from its minimum and maximum corners.
    pub fn from_corners(min: Vec3, max: Vec3) -> Result<Self> {
        for axis in 0..3 {
            // Negated so NaN bounds are rejected too
            if !(min[axis] <= max[axis]) {
                return Err(ClothError::InvalidBounds {
                    axis: AXIS_NAMES[axis],
                    min: min[axis],
                    max: max[axis],
                });
            }
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Inclusive containment: a point lying exactly on a face is inside.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for BoundaryVolume {
    fn default() -> Self {
        Self {
            min: Vec3::new(BOX_MIN_X, BOX_MIN_Y, BOX_MIN_Z),
            max: Vec3::new(BOX_MAX_X, BOX_MAX_Y, BOX_MAX_Z),
        }
    }
}
