//! # Cloth Simulation
//!
//! Session object owning the cloth state and running one containment pass per rendered frame.

pub mod params;
pub mod simulation;

pub use params::*;
pub use simulation::*;
