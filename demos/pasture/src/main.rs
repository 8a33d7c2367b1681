//! pasture — smallest example for the rust_flock herding simulation.
//!
//! A herd of 24 sheep in a 30 × 30 m pen, with a predator circling the fence
//! line.  Writes agent snapshots and tick summaries to `output/pasture/` as
//! CSV.  Scale comment: swap the herd size and pen dimensions for larger
//! scenarios; with the `parallel` feature of `flock-sim` the compute phase
//! spreads across all cores.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_agent::AgentStoreBuilder;
use flock_core::{SimConfig, Vec3, ground};
use flock_output::{CsvWriter, SimOutputObserver};
use flock_rules::{PredatorTracker, RectanglePen};
use flock_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const HERD_SIZE:             usize = 24;
const SEED:                  u64   = 42;
const DT_SECS:               f32   = 0.02; // 50 Hz
const TOTAL_TICKS:           u64   = 2_000; // 40 simulated seconds
const OUTPUT_INTERVAL_TICKS: u64   = 10;
const PROGRESS_EVERY_TICKS:  u64   = 200;

const PEN_HALF_EXTENT: f32 = 15.0;
const PEN_MARGIN:      f32 = 2.0;
const SCATTER_RADIUS:  f32 = 8.0;

// ── Predator path ─────────────────────────────────────────────────────────────

/// A predator pacing a circle around the pen at constant angular speed.
struct CirclingPredator {
    center: Vec3,
    radius: f32,
    angular_speed: f32, // radians per simulated second
    angle: f32,
}

impl CirclingPredator {
    fn new(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            angle: 0.0,
        }
    }

    /// Advance the predator along its path.  Called between ticks.
    fn pace(&mut self, dt_secs: f32) {
        self.angle += self.angular_speed * dt_secs;
    }
}

impl PredatorTracker for CirclingPredator {
    fn position(&self) -> Option<Vec3> {
        Some(self.center + ground(self.radius * self.angle.cos(), self.radius * self.angle.sin()))
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== pasture — rust_flock herding demo ===");
    println!("Herd: {HERD_SIZE}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Herd scattered around the pen center.
    let (store, _rngs) = AgentStoreBuilder::new(HERD_SIZE, SEED)
        .scatter(Vec3::ZERO, SCATTER_RADIUS)
        .build()?;

    // 2. Pen and predator.
    let pen = RectanglePen::new(
        Vec3::ZERO,
        Vec3::new(PEN_HALF_EXTENT, 0.0, PEN_HALF_EXTENT),
        PEN_MARGIN,
    );
    // Circle just outside the fence, one lap every ~30 simulated seconds.
    let predator = CirclingPredator::new(Vec3::ZERO, PEN_HALF_EXTENT + 3.0, 0.2);

    // 3. Sim config.
    let config = SimConfig {
        dt_secs: DT_SECS,
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        num_threads: None,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        record_rules: false,
    };
    println!(
        "Sim: {} ticks at {} Hz, snapshot every {} ticks",
        config.total_ticks,
        (1.0 / DT_SECS) as u32,
        OUTPUT_INTERVAL_TICKS
    );

    let mut sim = SimBuilder::new(config.clone(), store, pen, predator).build()?;

    // 4. Output.
    std::fs::create_dir_all("output/pasture")?;
    let writer = CsvWriter::new(Path::new("output/pasture"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 5. Run, repositioning the predator between ticks.
    let t0 = Instant::now();
    for _ in 0..TOTAL_TICKS {
        sim.predator.pace(DT_SECS);
        sim.step_with(DT_SECS, &mut obs)?;

        let tick = sim.clock.current_tick.0;
        if tick % PROGRESS_EVERY_TICKS == 0 {
            let mean_speed = sim
                .agents
                .velocities
                .iter()
                .map(|v| v.length())
                .sum::<f32>()
                / HERD_SIZE as f32;
            println!(
                "  {:>5}/{} ticks  mean speed {:.2} m/s",
                tick, TOTAL_TICKS, mean_speed
            );
        }
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Output written to output/pasture/");
    println!();

    // 7. Final herd positions table.
    println!("{:<8} {:>8} {:>8} {:>8}", "Sheep", "x", "z", "speed");
    println!("{}", "-".repeat(36));
    for i in 0..HERD_SIZE {
        let p = sim.agents.positions[i];
        let v = sim.agents.velocities[i];
        println!("{:<8} {:>8.2} {:>8.2} {:>8.2}", i, p.x, p.z, v.length());
    }

    Ok(())
}
