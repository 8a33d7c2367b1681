//! Core herd storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Host code occasionally needs `&mut AgentRngs` (exclusive access to each
//! agent's RNG) and `&AgentStore` (shared read access to herd state)
//! simultaneously — e.g. stochastic respawn logic reading current positions.
//! Rust's borrow checker forbids this if both live inside a single struct,
//! so the RNGs are kept in a separate companion.

use flock_core::{AgentId, AgentRng, Vec3};

use crate::AgentParams;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all herd state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.positions[agent.index()];  // O(1), cache-friendly
/// ```
///
/// # Tick discipline
///
/// During the compute phase the store is borrowed immutably (through the
/// rule engine's snapshot); `positions` and `velocities` are only written in
/// the commit phase.  After every committed tick `velocities[i].y == 0.0`
/// holds for all agents.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// World position, `y` pinned to the ground plane.
    pub positions: Vec<Vec3>,

    /// Committed velocity from the most recent tick.
    pub velocities: Vec<Vec3>,

    /// Per-agent rule weights and motion limits.
    pub params: Vec<AgentParams>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn velocity(&self, agent: AgentId) -> Vec3 {
        self.velocities[agent.index()]
    }

    #[inline]
    pub fn params(&self, agent: AgentId) -> &AgentParams {
        &self.params[agent.index()]
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        params: Vec<AgentParams>,
    ) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        debug_assert_eq!(positions.len(), params.len());
        Self {
            count: positions.len(),
            positions,
            velocities,
            params,
        }
    }
}
