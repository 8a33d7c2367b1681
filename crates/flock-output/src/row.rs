//! Plain data row types written by output backends.

/// A snapshot of one agent's committed state at a given tick.
///
/// Only the planar components are recorded; the vertical components are
/// zero by invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick: u64,
    pub x: f32,
    pub z: f32,
    pub vx: f32,
    pub vz: f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    /// Simulated seconds elapsed at the end of this tick.
    pub sim_secs: f64,
    pub herd_size: u64,
    /// Mean committed speed across the herd (0 for an empty herd).
    pub mean_speed: f32,
    pub predator_x: f32,
    pub predator_z: f32,
}
