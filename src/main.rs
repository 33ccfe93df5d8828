//! Cloth Box Containment
//!
//! Headless frame loop: builds the cloth session, runs one containment pass per frame and hands
//! the updated vertices to the draw stage.

use cloth_simulation::{ClothParams, ClothSimulation, FrameStats};
use std::collections::VecDeque;
use std::time::Instant;

const FRAME_COUNT: u64 = 120;
const LOG_EVERY: u64 = 30;

/// Stand-in for the mesh renderer: receives the vertex and index buffers once per frame.
struct FrameSink {
    indices: Vec<u32>,
    uploaded_bytes: usize,
}

impl FrameSink {
    fn new(sim: &ClothSimulation) -> Self {
        let indices = sim.cloth().triangle_indices();
        log::info!(
            "✓ Index buffer: {} triangles, vertex radius {:.2}",
            indices.len() / 3,
            sim.vertex_radius()
        );
        Self {
            indices,
            uploaded_bytes: 0,
        }
    }

    /// Runs only after the frame's containment pass has finished.
    fn draw(&mut self, sim: &ClothSimulation) {
        let bytes = sim.vertex_bytes();
        self.uploaded_bytes += bytes.len() + std::mem::size_of_val(self.indices.as_slice());
    }
}

fn log_extent(sim: &ClothSimulation) {
    let (lo, hi) = sim.vertices().iter().fold(
        (glam::Vec3::splat(f32::INFINITY), glam::Vec3::splat(f32::NEG_INFINITY)),
        |(lo, hi), v| (lo.min(v.position()), hi.max(v.position())),
    );
    log::info!("  Cloth extent: min={lo} max={hi}");
}

fn main() -> cloth_physics::Result<()> {
    // Initialize logger (RUST_LOG=debug for per-frame output, trace for every correction)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting cloth box containment...");

    let params = ClothParams::default();
    let mut sim = ClothSimulation::new(&params)?;
    let mut sink = FrameSink::new(&sim);
    log_extent(&sim);

    let mut frame_times: VecDeque<f32> = VecDeque::with_capacity(100);
    let mut last = FrameStats {
        frame: 0,
        corrected: 0,
    };

    for _ in 0..FRAME_COUNT {
        let start = Instant::now();

        last = sim.step();
        sink.draw(&sim);

        frame_times.push_back(start.elapsed().as_secs_f32() * 1000.0);
        if frame_times.len() > 100 {
            frame_times.pop_front();
        }

        if last.frame % LOG_EVERY == 0 {
            let avg_frame_time = frame_times.iter().sum::<f32>() / frame_times.len() as f32;
            log::info!(
                "frame {}: {} corrected, {:.4}ms avg",
                last.frame,
                last.corrected,
                avg_frame_time
            );
        }
    }

    log::info!(
        "✓ Finished {} frames ({} vertices corrected on the last), {} bytes handed to the renderer",
        last.frame,
        last.corrected,
        sink.uploaded_bytes
    );
    log_extent(&sim);

    Ok(())
}
