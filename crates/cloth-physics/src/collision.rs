//! Box containment constraint
//!
//! The correction is a cheap "push along the nearest face" approximation, not a closest-point
//! projection onto the box surface. Two quirks are reproduced exactly:
//!
//! - the face normal's sign comes from the sign of the coordinate, not from which face is
//!   nearer, so a vertex already past a face can be pushed further out;
//! - normal components set by an earlier axis are kept when a later axis takes the minimum,
//!   so the displacement can combine several axes scaled by the single smallest distance.
//!
//! Repeated corrections therefore need not converge.

use glam::Vec3;

use crate::bounds::BoundaryVolume;
use crate::point_mass::PointMass;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corrected position for `point` against `bounds`.
///
/// Meant for points that fail [`BoundaryVolume::contains`], but defined for any input.
pub fn correct(point: Vec3, bounds: &BoundaryVolume) -> Vec3 {
    let (min, max) = (bounds.min(), bounds.max());

    let mut normal = Vec3::ZERO;
    let mut min_dist = f32::INFINITY;

    // Axis order X, Y, Z; strict `<` keeps the earlier axis on ties
    for axis in 0..3 {
        let dist = (point[axis] - min[axis])
            .abs()
            .min((point[axis] - max[axis]).abs());
        if dist < min_dist {
            min_dist = dist;
            normal[axis] = if point[axis] < 0.0 { -1.0 } else { 1.0 };
        }
    }

    // No axis produced a usable distance (NaN or infinite coordinates)
    if !min_dist.is_finite() {
        return point;
    }

    point + normal * min_dist
}

/// Apply [`correct`] to a vertex in place. Velocity is left untouched.
pub fn resolve(vertex: &mut PointMass, bounds: &BoundaryVolume) {
    let before = vertex.position();
    let after = correct(before, bounds);
    log::trace!("corrected vertex {before} -> {after}");
    vertex.set_position(after);
}

/// Resolve a vertex if it has left the box. Returns whether it was corrected.
#[inline]
fn constrain(vertex: &mut PointMass, bounds: &BoundaryVolume) -> bool {
    if bounds.contains(vertex.position()) {
        return false;
    }
    resolve(vertex, bounds);
    true
}

/// One containment pass over every vertex. Returns the number of corrected vertices.
///
/// Each vertex is corrected from its own coordinates only, so scan order has no effect.
#[cfg(not(feature = "parallel"))]
pub fn step(vertices: &mut [PointMass], bounds: &BoundaryVolume) -> usize {
    step_sequential(vertices, bounds)
}

/// One containment pass over every vertex. Returns the number of corrected vertices.
///
/// Each vertex is corrected from its own coordinates only, so the slice is split across the
/// rayon pool without synchronization.
#[cfg(feature = "parallel")]
pub fn step(vertices: &mut [PointMass], bounds: &BoundaryVolume) -> usize {
    vertices
        .par_iter_mut()
        .map(|v| usize::from(constrain(v, bounds)))
        .sum()
}

/// Single-threaded containment pass, always available.
pub fn step_sequential(vertices: &mut [PointMass], bounds: &BoundaryVolume) -> usize {
    let mut corrected = 0;
    for vertex in vertices.iter_mut() {
        if constrain(vertex, bounds) {
            corrected += 1;
        }
    }
    corrected
}
