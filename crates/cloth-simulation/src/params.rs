//! Cloth and containment parameters for session setup

use cloth_physics::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClothParams {
    // Grid layout, same order as `ClothGrid::new`
    // x: rows, y: cols
    pub grid: [usize; 2],

    // Cloth extent
    // x: width, y: height
    pub extent: [f32; 2],

    // Containment box, one [min, max] pair per axis
    pub bounds: [[f32; 2]; 3],

    // Rendering only, passed through to the renderer
    pub vertex_radius: f32,
}

impl ClothParams {
    pub fn rows(&self) -> usize {
        self.grid[0]
    }

    pub fn cols(&self) -> usize {
        self.grid[1]
    }

    pub fn width(&self) -> f32 {
        self.extent[0]
    }

    pub fn height(&self) -> f32 {
        self.extent[1]
    }
}

impl Default for ClothParams {
    fn default() -> Self {
        Self {
            grid: [
                NUM_ROWS, // rows
                NUM_COLS, // cols
            ],
            extent: [
                CLOTH_WIDTH,  // width
                CLOTH_HEIGHT, // height
            ],
            bounds: [
                [BOX_MIN_X, BOX_MAX_X],
                [BOX_MIN_Y, BOX_MAX_Y],
                [BOX_MIN_Z, BOX_MAX_Z],
            ],
            vertex_radius: CLOTH_VERTEX_RADIUS,
        }
    }
}
