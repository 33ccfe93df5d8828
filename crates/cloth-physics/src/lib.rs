//! # Cloth Physics
//!
//! CPU-side cloth state and the box containment constraint: point masses laid out on a
//! row-major grid, an axis-aligned boundary volume, and the per-frame correction pass that
//! pushes escaped vertices back toward the box.

pub mod bounds;
pub mod collision;
pub mod constants;
pub mod error;
pub mod grid;
pub mod point_mass;

pub use bounds::*;
pub use collision::*;
pub use constants::*;
pub use error::{ClothError, Result};
pub use grid::*;
pub use point_mass::*;
