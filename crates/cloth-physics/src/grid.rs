//! Row-major cloth vertex grid

use glam::Vec3;

use crate::error::{ClothError, Result};
use crate::point_mass::PointMass;

/// Fixed-size cloth grid
///
/// Vertex `(row, col)` lives at `row * cols + col`. The vertex count never changes after
/// construction, so the storage is only handed out as slices.
#[derive(Debug, Clone)]
pub struct ClothGrid {
    rows: usize,
    cols: usize,
    vertices: Vec<PointMass>,
}

impl ClothGrid {
    /// Lay out `rows * cols` vertices evenly over `[0, width] x [0, height]` at `z = 0`, at rest.
    ///
    /// Errors:
    /// - `ClothError::InvalidGrid` if `rows` or `cols` is below 2, an extent is not finite, or
    ///   the vertex count does not fit a `u32` index buffer.
    pub fn new(rows: usize, cols: usize, width: f32, height: f32) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(ClothError::InvalidGrid(format!(
                "rows and cols must both be >= 2, got {rows} x {cols}"
            )));
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or_else(|| {
                ClothError::InvalidGrid(format!(
                    "{rows} x {cols} vertices exceed the u32 index range"
                ))
            })?;
        if !width.is_finite() || !height.is_finite() {
            return Err(ClothError::InvalidGrid(
                "width and height must be finite".into(),
            ));
        }

        let dx = width / (cols - 1) as f32;
        let dy = height / (rows - 1) as f32;

        let mut vertices = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                vertices.push(PointMass::new(Vec3::new(j as f32 * dx, i as f32 * dy, 0.0)));
            }
        }

        Ok(Self {
            rows,
            cols,
            vertices,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&PointMass> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.vertices.get(self.index(row, col))
    }

    pub fn vertices(&self) -> &[PointMass] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [PointMass] {
        &mut self.vertices
    }

    /// Triangle-list indices covering the grid, two triangles per cell.
    ///
    /// Cell `(i, j)` emits `(i, j) (i+1, j) (i, j+1)` then `(i+1, j) (i+1, j+1) (i, j+1)`.
    /// Construction caps the vertex count at `u32::MAX`, so every index fits.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(6 * (self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows - 1 {
            for j in 0..self.cols - 1 {
                let top_left = self.index(i, j) as u32;
                let top_right = self.index(i, j + 1) as u32;
                let bottom_left = self.index(i + 1, j) as u32;
                let bottom_right = self.index(i + 1, j + 1) as u32;

                indices.extend_from_slice(&[top_left, bottom_left, top_right]);
                indices.extend_from_slice(&[bottom_left, bottom_right, top_right]);
            }
        }
        indices
    }
}
