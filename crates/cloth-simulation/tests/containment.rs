use approx::assert_abs_diff_eq;
use cloth_physics::{step_sequential, BoundaryVolume, ClothGrid, PointMass};
use cloth_simulation::{ClothParams, ClothSimulation};
use glam::Vec3;

const EPS: f32 = 1e-5;

fn assert_position(vertex: &PointMass, expected: Vec3) {
    let p = vertex.position();
    assert_abs_diff_eq!(p.x, expected.x, epsilon = EPS);
    assert_abs_diff_eq!(p.y, expected.y, epsilon = EPS);
    assert_abs_diff_eq!(p.z, expected.z, epsilon = EPS);
}

/// The default 2x2 cloth hangs over the +x/+y faces of the unit box: only the 5x5 corner with
/// both coordinates <= 1 is inside.
#[test]
fn default_cloth_first_frame() -> cloth_physics::Result<()> {
    let mut sim = ClothSimulation::new(&ClothParams::default())?;
    let stats = sim.step();
    assert_eq!(stats.frame, 1);
    assert_eq!(stats.corrected, 75);

    let d = 2.0 / 9.0;
    let overshoot = 5.0 * d - 1.0;
    let cloth = sim.cloth();

    // Untouched inside the box
    assert_position(&sim.vertices()[cloth.index(4, 4)], Vec3::new(4.0 * d, 4.0 * d, 0.0));

    // (row 0, col 5): X alone is nearest
    assert_position(
        &sim.vertices()[cloth.index(0, 5)],
        Vec3::new(5.0 * d + overshoot, 0.0, 0.0),
    );

    // (row 5, col 0): X sets its normal at distance 1, Y then wins with the overshoot and the
    // x component is kept
    assert_position(
        &sim.vertices()[cloth.index(5, 0)],
        Vec3::new(overshoot, 5.0 * d + overshoot, 0.0),
    );

    // Far corner: all axes tie at 1.0, X keeps it
    assert_position(&sim.vertices()[99], Vec3::new(3.0, 2.0, 0.0));
    Ok(())
}

#[test]
fn escaped_vertices_keep_drifting() -> cloth_physics::Result<()> {
    let mut sim = ClothSimulation::new(&ClothParams::default())?;
    let d = 2.0 / 9.0;

    let first = sim.step();
    let second = sim.step();
    assert_eq!(first.corrected, 75);
    assert_eq!(second.corrected, 75);

    // 5d -> 5d + (5d - 1) -> that + (that - 1)
    let after_one = 5.0 * d + (5.0 * d - 1.0);
    let after_two = after_one + (after_one - 1.0);
    let idx = sim.cloth().index(0, 5);
    assert_position(&sim.vertices()[idx], Vec3::new(after_two, 0.0, 0.0));
    Ok(())
}

#[test]
fn velocities_are_never_touched() -> cloth_physics::Result<()> {
    let mut sim = ClothSimulation::new(&ClothParams::default())?;
    for _ in 0..5 {
        sim.step();
    }
    assert!(sim.vertices().iter().all(|v| v.velocity == [0.0; 3]));
    Ok(())
}

#[test]
fn scan_order_does_not_matter() -> cloth_physics::Result<()> {
    let bounds = BoundaryVolume::new(-0.5, 0.75, -1.0, 0.3, -0.2, 0.2)?;
    let grid = ClothGrid::new(7, 9, 3.0, 2.5)?;

    let mut forward: Vec<PointMass> = grid.vertices().to_vec();
    let mut reversed: Vec<PointMass> = forward.iter().rev().copied().collect();

    step_sequential(&mut forward, &bounds);
    step_sequential(&mut reversed, &bounds);
    reversed.reverse();

    assert_eq!(forward, reversed);
    Ok(())
}

#[test]
fn parallel_and_sequential_frames_agree() -> cloth_physics::Result<()> {
    let params = ClothParams {
        grid: [24, 32],
        extent: [4.0, 3.0],
        ..Default::default()
    };
    let mut sim = ClothSimulation::new(&params)?;
    let mut reference: Vec<PointMass> = sim.vertices().to_vec();

    for _ in 0..3 {
        let stats = sim.step();
        let expected = step_sequential(&mut reference, sim.bounds());
        assert_eq!(stats.corrected, expected);
    }
    assert_eq!(sim.vertices(), reference.as_slice());
    Ok(())
}

#[test]
fn enclosing_box_leaves_cloth_alone() -> cloth_physics::Result<()> {
    let mut sim = ClothSimulation::new(&ClothParams::default())?;
    sim.set_bounds(BoundaryVolume::new(0.0, 2.0, 0.0, 2.0, 0.0, 0.0)?);
    let before = sim.vertex_positions();

    let stats = sim.step();
    assert_eq!(stats.corrected, 0);
    assert_eq!(sim.vertex_positions(), before);
    assert_eq!(sim.vertices()[99].position, [2.0, 2.0, 0.0]);
    Ok(())
}
