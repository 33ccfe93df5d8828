//! Default cloth and containment-box configuration
//!
//! These are the startup values used when no explicit parameters are supplied.

/// Number of vertex columns in the cloth grid
pub const NUM_COLS: usize = 10;

/// Number of vertex rows in the cloth grid
pub const NUM_ROWS: usize = 10;

/// Cloth extent along x (columns span `[0, CLOTH_WIDTH]`)
pub const CLOTH_WIDTH: f32 = 2.0;

/// Cloth extent along y (rows span `[0, CLOTH_HEIGHT]`)
pub const CLOTH_HEIGHT: f32 = 2.0;

/// Vertex radius for rendering
pub const CLOTH_VERTEX_RADIUS: f32 = 0.05;

// Containment box, unit half-extent around the origin
pub const BOX_MIN_X: f32 = -1.0;
pub const BOX_MAX_X: f32 = 1.0;
pub const BOX_MIN_Y: f32 = -1.0;
pub const BOX_MAX_Y: f32 = 1.0;
pub const BOX_MIN_Z: f32 = -1.0;
pub const BOX_MAX_Z: f32 = 1.0;
