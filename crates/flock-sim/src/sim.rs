//! The `Sim` struct and its tick loop.

use flock_agent::AgentStore;
use flock_core::{FlockError, SimClock, SimConfig, Tick, Vec3};
use flock_rules::{EnclosureProvider, PredatorTracker, RuleBreakdown, TickContext, evaluate};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<E, P>` holds all herd state and drives the two-phase tick loop:
///
/// 1. **Compute phase** (optionally parallel with the `parallel` feature):
///    evaluate the flocking rules for every agent against an immutable
///    snapshot of positions, velocities, and the latched predator position.
///    Results are stored in per-agent scratch buffers; no committed state
///    changes.
/// 2. **Commit phase** (per-agent local): clamp each target velocity to the
///    fear-scaled speed ceiling, apply the dead-zone and plane constraint,
///    and advance positions.
///
/// The driver never starts a commit until every agent's compute step has
/// finished, so results do not depend on agent iteration order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<E: EnclosureProvider, P: PredatorTracker> {
    /// Global configuration (total ticks, dt, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Herd state (SoA arrays).  Read-only during the compute phase,
    /// written only by the commit phase.
    pub agents: AgentStore,

    /// Enclosure collaborator, queried once per agent per tick.
    pub enclosure: E,

    /// Predator collaborator.  `pub` so hosts can reposition the predator
    /// between ticks (e.g. along a scripted path or from player input).
    pub predator: P,

    /// Per-agent target velocities produced by the compute phase.
    /// Scratch: valid only between the compute and commit phases of a tick.
    pub(crate) targets: Vec<Vec3>,

    /// Per-agent rule breakdowns from the most recent compute phase,
    /// forwarded to observers when `config.record_rules` is set.
    pub(crate) breakdowns: Vec<RuleBreakdown>,
}

impl<E: EnclosureProvider, P: PredatorTracker> Sim<E, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.step_with(self.config.dt_secs, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_with(self.config.dt_secs, observer)?;
        }
        Ok(())
    }

    /// Advance one tick at the configured `dt` with no observation.
    pub fn step(&mut self) -> SimResult<()> {
        self.step_with(self.config.dt_secs, &mut crate::NoopObserver)
    }

    /// Advance one tick by `dt_secs` simulated seconds.
    ///
    /// The entry point for hosts with variable frame times; `run` and `step`
    /// funnel through here with the configured fixed dt.  On error (missing
    /// predator) the tick is abandoned before any state is committed and the
    /// clock does not advance.
    pub fn step_with<O: SimObserver>(&mut self, dt_secs: f32, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Resolve the predator once for the whole tick ──────────────────
        let predator = self
            .predator
            .position()
            .ok_or(FlockError::MissingPredator)?;

        // ── Phase 1: compute targets against the immutable snapshot ───────
        self.compute_targets(now, dt_secs, predator);
        if self.config.record_rules {
            observer.on_rules(now, &self.breakdowns);
        }

        // ── Phase 2: commit velocities and positions ──────────────────────
        flock_motion::commit_all(&mut self.agents, &self.targets, predator, dt_secs);

        observer.on_tick_end(now, &self.agents, predator);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance();
        Ok(())
    }

    // ── Compute phase ─────────────────────────────────────────────────────

    /// Evaluate the rules for every agent into the scratch buffers.
    ///
    /// With the `parallel` Cargo feature, evaluations run on Rayon's thread
    /// pool; results are bit-identical to the sequential path because each
    /// evaluation is a pure function of the shared snapshot.
    fn compute_targets(&mut self, now: Tick, dt_secs: f32, predator: Vec3) {
        // Explicit field borrows so the borrow checker sees disjoint access:
        // the snapshot reads `agents` while the scratch buffers are written.
        let agents = &self.agents;
        let enclosure = &self.enclosure;
        let targets = &mut self.targets;
        let breakdowns = &mut self.breakdowns;

        let ctx = TickContext::new(
            now,
            dt_secs,
            &agents.positions,
            &agents.velocities,
            &agents.params,
            predator,
        );

        #[cfg(not(feature = "parallel"))]
        {
            for (i, (target, breakdown)) in
                targets.iter_mut().zip(breakdowns.iter_mut()).enumerate()
            {
                let b = evaluate(flock_core::AgentId(i as u32), &ctx, enclosure);
                *target = b.target;
                *breakdown = b;
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            targets
                .par_iter_mut()
                .zip(breakdowns.par_iter_mut())
                .enumerate()
                .for_each(|(i, (target, breakdown))| {
                    let b = evaluate(flock_core::AgentId(i as u32), &ctx, enclosure);
                    *target = b.target;
                    *breakdown = b;
                });
        }
    }
}
