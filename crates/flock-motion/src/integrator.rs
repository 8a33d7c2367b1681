//! Per-agent velocity integration.

use flock_agent::{AgentParams, AgentStore};
use flock_core::{Vec3, flatten};

/// Speed ceiling for an agent at `distance_to_predator`.
///
/// Linear blend from `max_speed_base` (predator at or beyond the flight
/// zone) to `max_speed_fear` (predator on top of the agent), with the blend
/// factor clamped to [0, 1] so distances outside that range saturate.
#[inline]
pub fn speed_ceiling(distance_to_predator: f32, params: &AgentParams) -> f32 {
    let t = (1.0 - distance_to_predator / params.flight_zone_radius).clamp(0.0, 1.0);
    params.max_speed_base + (params.max_speed_fear - params.max_speed_base) * t
}

/// Turn a blended `target` velocity into the velocity to commit.
///
/// Applies the speed ceiling, the minimum-speed dead-zone, and the plane
/// constraint, in that order.  The returned vector always satisfies
/// `v.y == 0.0` and `v.length() <= speed_ceiling(..)`.
pub fn integrate(target: Vec3, distance_to_predator: f32, params: &AgentParams) -> Vec3 {
    let clamped = target.clamp_length_max(speed_ceiling(distance_to_predator, params));
    if clamped.length() < params.min_speed {
        return Vec3::ZERO;
    }
    flatten(clamped)
}

/// Commit phase over the whole herd: write each agent's velocity and advance
/// its position by `dt` seconds.
///
/// `targets[i]` is the target velocity computed for agent `i` during this
/// tick's compute phase.  Touches only per-agent local state; iteration
/// order is irrelevant.
pub fn commit_all(store: &mut AgentStore, targets: &[Vec3], predator: Vec3, dt: f32) {
    debug_assert_eq!(store.count, targets.len());
    for i in 0..store.count {
        let distance = store.positions[i].distance(predator);
        let velocity = integrate(targets[i], distance, &store.params[i]);
        store.velocities[i] = velocity;
        store.positions[i] += velocity * dt;
    }
}
