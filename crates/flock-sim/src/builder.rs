//! Fluent builder for constructing a [`Sim`].

use flock_agent::AgentStore;
use flock_core::{SimConfig, Vec3};
use flock_rules::{EnclosureProvider, PredatorTracker, RuleBreakdown};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<E, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — dt, total ticks, seed, …
/// - [`AgentStore`] — from [`flock_agent::AgentStoreBuilder`]
/// - `E: EnclosureProvider` — e.g. [`flock_rules::RectanglePen`], or
///   [`flock_rules::OpenField`] for an unfenced herd
/// - `P: PredatorTracker` — e.g. [`flock_rules::FixedPredator`]
///
/// # Optional inputs
///
/// | Method                    | Default                       |
/// |---------------------------|-------------------------------|
/// | `.initial_positions(v)`   | Keep the store's positions    |
/// | `.initial_velocities(v)`  | Keep the store's velocities   |
///
/// # Example
///
/// ```rust,ignore
/// let (store, _rngs) = AgentStoreBuilder::new(n, seed).scatter(center, 10.0).build()?;
/// let mut sim = SimBuilder::new(config, store, pen, predator).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<E: EnclosureProvider, P: PredatorTracker> {
    config: SimConfig,
    agents: AgentStore,
    enclosure: E,
    predator: P,
    positions: Option<Vec<Vec3>>,
    velocities: Option<Vec<Vec3>>,
}

impl<E: EnclosureProvider, P: PredatorTracker> SimBuilder<E, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, enclosure: E, predator: P) -> Self {
        Self {
            config,
            agents,
            enclosure,
            predator,
            positions: None,
            velocities: None,
        }
    }

    /// Override every agent's starting position (must be length `count`).
    pub fn initial_positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Override every agent's starting velocity (must be length `count`).
    pub fn initial_velocities(mut self, velocities: Vec<Vec3>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate inputs, allocate the per-tick scratch buffers, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<E, P>> {
        let agent_count = self.agents.count;

        if !(self.config.dt_secs.is_finite() && self.config.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "dt_secs must be finite and positive, got {}",
                self.config.dt_secs
            )));
        }

        if let Some(positions) = self.positions {
            if positions.len() != agent_count {
                return Err(SimError::AgentCountMismatch {
                    expected: agent_count,
                    got: positions.len(),
                    what: "initial positions",
                });
            }
            self.agents.positions = positions;
        }

        if let Some(velocities) = self.velocities {
            if velocities.len() != agent_count {
                return Err(SimError::AgentCountMismatch {
                    expected: agent_count,
                    got: velocities.len(),
                    what: "initial velocities",
                });
            }
            self.agents.velocities = velocities;
        }

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agents: self.agents,
            enclosure: self.enclosure,
            predator: self.predator,
            targets: vec![Vec3::ZERO; agent_count],
            breakdowns: vec![RuleBreakdown::default(); agent_count],
        })
    }
}
