//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_agent::AgentStore;
use flock_core::{SimConfig, Tick, Vec3};
use flock_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run finishes, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    dt_secs: f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-seconds conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            dt_secs: config.dt_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn sim_secs(&self, tick: Tick) -> f64 {
        (tick.0 + 1) as f64 * self.dt_secs as f64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, herd: &AgentStore, predator: Vec3) {
        let mean_speed = if herd.is_empty() {
            0.0
        } else {
            herd.velocities.iter().map(|v| v.length()).sum::<f32>() / herd.count as f32
        };
        let row = TickSummaryRow {
            tick: tick.0,
            sim_secs: self.sim_secs(tick),
            herd_size: herd.count as u64,
            mean_speed,
            predator_x: predator.x,
            predator_z: predator.z,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, herd: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = (0..herd.count)
            .map(|i| AgentSnapshotRow {
                agent_id: i as u32,
                tick: tick.0,
                x: herd.positions[i].x,
                z: herd.positions[i].z,
                vx: herd.velocities[i].x,
                vz: herd.velocities[i].z,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
