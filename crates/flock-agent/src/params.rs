//! Per-agent flocking tunables.

/// Rule weights and motion limits for one agent.
///
/// Each rule has a `base` weight (calm herd) and a `fear` weight that is
/// blended in as the predator approaches; see `flock-rules` for the blend
/// function.  The defaults reproduce the reference herding parameterisation:
/// strong enclosure and escape, moderate separation, weak alignment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentParams {
    /// Distance at which threat weighting sits at its midpoint.
    pub flight_zone_radius: f32,

    pub weight_cohesion_base: f32,
    pub weight_cohesion_fear: f32,

    pub weight_separation_base: f32,
    pub weight_separation_fear: f32,

    /// Neighbors within this radius contribute to the alignment average.
    pub alignment_radius: f32,
    pub weight_alignment_base: f32,
    pub weight_alignment_fear: f32,

    /// Flat weight on the escape rule (already distance-scaled internally).
    pub weight_escape: f32,

    /// Flat weight on the enclosure repulsion vector.
    pub weight_enclosure: f32,

    /// Committed velocities below this magnitude are zeroed outright,
    /// suppressing jitter when rule vectors nearly cancel.
    pub min_speed: f32,

    /// Speed ceiling with the predator at or beyond the flight zone.
    pub max_speed_base: f32,

    /// Speed ceiling with the predator on top of the agent.
    pub max_speed_fear: f32,

    /// Whether the agent counts itself in the cohesion centroid and the
    /// alignment average (it is always excluded from separation).
    ///
    /// The reference behavior includes self; excluding it is arguably the
    /// intended boids formulation, so the choice is surfaced here instead of
    /// being hard-coded.
    pub include_self_in_aggregates: bool,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            flight_zone_radius: 7.0,
            weight_cohesion_base: 0.5,
            weight_cohesion_fear: 5.0,
            weight_separation_base: 2.0,
            weight_separation_fear: 0.0,
            alignment_radius: 3.0,
            weight_alignment_base: 0.1,
            weight_alignment_fear: 1.0,
            weight_escape: 6.0,
            weight_enclosure: 10.0,
            min_speed: 0.1,
            max_speed_base: 1.0,
            max_speed_fear: 4.0,
            include_self_in_aggregates: true,
        }
    }
}
