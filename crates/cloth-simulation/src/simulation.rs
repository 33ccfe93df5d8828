//! Cloth simulation session
//!
//! One `step` per displayed frame. The renderer reads `vertices()` between steps; `step` takes
//! `&mut self`, so no vertex slice can be held across a pass.

use crate::ClothParams;
use cloth_physics::{BoundaryVolume, ClothError, ClothGrid, PointMass, Result};

/// Outcome of one containment pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 1 for the first step
    pub frame: u64,
    /// Vertices that were outside the box and got corrected
    pub corrected: usize,
}

/// Cloth state plus the box it is constrained to
#[derive(Debug, Clone)]
pub struct ClothSimulation {
    cloth: ClothGrid,
    bounds: BoundaryVolume,
    vertex_radius: f32,
    frame: u64,
}

impl ClothSimulation {
    /// Validate `params` and build the initial grid.
    pub fn new(params: &ClothParams) -> Result<Self> {
        log::info!("Initializing ClothSimulation...");

        if !params.vertex_radius.is_finite() || params.vertex_radius <= 0.0 {
            return Err(ClothError::InvalidParam(
                "vertex_radius must be finite and > 0".into(),
            ));
        }

        let [x, y, z] = params.bounds;
        let bounds = BoundaryVolume::new(x[0], x[1], y[0], y[1], z[0], z[1])?;
        let cloth = ClothGrid::new(params.rows(), params.cols(), params.width(), params.height())?;

        log::info!(
            "✓ Cloth grid {}x{} ({} vertices) over {}x{}",
            cloth.rows(),
            cloth.cols(),
            cloth.len(),
            params.width(),
            params.height()
        );
        log::info!(
            "✓ Containment box min={} max={}",
            bounds.min(),
            bounds.max()
        );

        Ok(Self::from_parts(cloth, bounds, params.vertex_radius))
    }

    /// Assemble a session from already-validated pieces.
    pub fn from_parts(cloth: ClothGrid, bounds: BoundaryVolume, vertex_radius: f32) -> Self {
        Self {
            cloth,
            bounds,
            vertex_radius,
            frame: 0,
        }
    }

    /// Run one containment pass over every vertex.
    pub fn step(&mut self) -> FrameStats {
        let corrected = cloth_physics::step(self.cloth.vertices_mut(), &self.bounds);
        self.frame += 1;

        log::debug!(
            "frame {}: corrected {}/{} vertices",
            self.frame,
            corrected,
            self.cloth.len()
        );

        FrameStats {
            frame: self.frame,
            corrected,
        }
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn cloth(&self) -> &ClothGrid {
        &self.cloth
    }

    pub fn vertices(&self) -> &[PointMass] {
        self.cloth.vertices()
    }

    /// Positions only, in grid order, for vertex buffer upload.
    pub fn vertex_positions(&self) -> Vec<[f32; 3]> {
        self.cloth.vertices().iter().map(|v| v.position).collect()
    }

    /// Raw bytes of the vertex slice.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.cloth.vertices())
    }

    pub fn bounds(&self) -> &BoundaryVolume {
        &self.bounds
    }

    /// Replace the containment box. Intended for tests.
    pub fn set_bounds(&mut self, bounds: BoundaryVolume) {
        self.bounds = bounds;
    }

    pub fn vertex_radius(&self) -> f32 {
        self.vertex_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_starts_at_frame_zero() {
        let sim = ClothSimulation::new(&ClothParams::default()).unwrap();
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.vertices().len(), 100);
        assert_eq!(sim.vertex_radius(), 0.05);
        assert_eq!(*sim.bounds(), BoundaryVolume::default());
    }

    #[test]
    fn inverted_box_fails_fast() {
        let params = ClothParams {
            bounds: [[1.0, -1.0], [-1.0, 1.0], [-1.0, 1.0]],
            ..Default::default()
        };
        let err = ClothSimulation::new(&params).unwrap_err();
        assert!(matches!(err, ClothError::InvalidBounds { axis: 'x', .. }));
    }

    #[test]
    fn bad_vertex_radius_rejected() {
        let params = ClothParams {
            vertex_radius: 0.0,
            ..Default::default()
        };
        let err = ClothSimulation::new(&params).unwrap_err();
        assert!(err.to_string().contains("vertex_radius"));
    }

    #[test]
    fn degenerate_grid_rejected() {
        let params = ClothParams {
            grid: [1, 10],
            ..Default::default()
        };
        assert!(matches!(
            ClothSimulation::new(&params),
            Err(ClothError::InvalidGrid(_))
        ));
    }

    #[test]
    fn step_advances_frame_counter() {
        let mut sim = ClothSimulation::new(&ClothParams::default()).unwrap();
        assert_eq!(sim.step().frame, 1);
        assert_eq!(sim.step().frame, 2);
        assert_eq!(sim.frame(), 2);
    }

    #[test]
    fn vertex_bytes_cover_all_vertices() {
        let sim = ClothSimulation::new(&ClothParams::default()).unwrap();
        assert_eq!(sim.vertex_bytes().len(), 100 * std::mem::size_of::<PointMass>());
        assert_eq!(sim.vertex_positions().len(), 100);
    }
}
