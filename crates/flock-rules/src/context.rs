//! Read-only simulation state passed to every rule evaluation.

use flock_agent::AgentParams;
use flock_core::{Tick, Vec3};

/// A read-only snapshot of the herd passed to every rule evaluation in a
/// tick's compute phase.
///
/// `TickContext` is built once per tick by flock-sim and shared (immutably)
/// across all agent evaluations.  Because every evaluation in a tick sees the
/// same slices and the same predator position, results are independent of
/// agent iteration order — the core correctness invariant of the two-phase
/// loop.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's compute phase.  flock-sim
/// never allows mutable access to the underlying store while a `TickContext`
/// is live.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds this tick will advance.
    pub dt_secs: f32,

    /// Every agent's position as of the start of the tick.
    pub positions: &'a [Vec3],

    /// Every agent's committed velocity as of the start of the tick.
    pub velocities: &'a [Vec3],

    /// Per-agent rule weights, indexed like the state arrays.
    pub params: &'a [AgentParams],

    /// The predator's position, resolved once per tick by the driver.
    pub predator: Vec3,
}

impl<'a> TickContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick: Tick,
        dt_secs: f32,
        positions: &'a [Vec3],
        velocities: &'a [Vec3],
        params: &'a [AgentParams],
        predator: Vec3,
    ) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        debug_assert_eq!(positions.len(), params.len());
        Self {
            tick,
            dt_secs,
            positions,
            velocities,
            params,
            predator,
        }
    }

    /// Number of agents in the snapshot.
    #[inline]
    pub fn herd_len(&self) -> usize {
        self.positions.len()
    }
}
