//! The individual flocking rule vectors.
//!
//! Each rule is a pure function of one agent and the tick snapshot.  The
//! population aggregates (cohesion, separation, alignment) are O(n) per
//! agent; nothing here allocates.
//!
//! Self-handling is asymmetric on purpose: separation always excludes the
//! evaluated agent, while cohesion and alignment include it when
//! `AgentParams::include_self_in_aggregates` is set (the reference
//! behavior).

use flock_core::{AgentId, Vec3};

use crate::TickContext;
use crate::threat::inverse_square;

/// Softness factor for the escape rule's inverse-square falloff.
pub const ESCAPE_SOFTNESS: f32 = 4.0;

/// Unit vector from `agent` toward the herd centroid.
///
/// Zero when the herd snapshot is empty (no centroid exists) or when the
/// agent sits exactly at the centroid.
pub fn cohesion(agent: AgentId, ctx: &TickContext<'_>) -> Vec3 {
    let include_self = ctx.params[agent.index()].include_self_in_aggregates;

    let mut sum = Vec3::ZERO;
    let mut n = 0u32;
    for (i, &pos) in ctx.positions.iter().enumerate() {
        if !include_self && i == agent.index() {
            continue;
        }
        sum += pos;
        n += 1;
    }
    if n == 0 {
        return Vec3::ZERO;
    }

    let centroid = sum / n as f32;
    (centroid - ctx.positions[agent.index()]).normalize_or_zero()
}

/// Crowding pressure away from every *other* agent.
///
/// Each neighbor contributes a unit direction scaled by a simple inverse
/// (not inverse-square) of its distance, so the magnitude is unbounded and
/// grows with crowding density.  Coincident agents contribute zero (the
/// direction is undefined) rather than a non-finite value.
pub fn separation(agent: AgentId, ctx: &TickContext<'_>) -> Vec3 {
    let pa = ctx.positions[agent.index()];

    let mut sep = Vec3::ZERO;
    for (i, &pb) in ctx.positions.iter().enumerate() {
        if i == agent.index() {
            continue;
        }
        let offset = pa - pb;
        sep += offset.normalize_or_zero() * (1.0 / (offset.length() + f32::EPSILON));
    }
    sep
}

/// Mean velocity of all agents within the alignment radius.
///
/// Zero when no agent is in range — the neighbor-count division is guarded
/// rather than allowed to produce NaN.  (With self-inclusion on, the count
/// is at least one.)
pub fn alignment(agent: AgentId, ctx: &TickContext<'_>) -> Vec3 {
    let p = &ctx.params[agent.index()];
    let pa = ctx.positions[agent.index()];

    let mut sum = Vec3::ZERO;
    let mut n = 0u32;
    for (i, &pos) in ctx.positions.iter().enumerate() {
        if !p.include_self_in_aggregates && i == agent.index() {
            continue;
        }
        if pos.distance(pa) <= p.alignment_radius {
            sum += ctx.velocities[i];
            n += 1;
        }
    }
    if n == 0 {
        return Vec3::ZERO;
    }
    sum / n as f32
}

/// Flight directly away from the predator, inverse-square scaled so it
/// dominates at close range and fades to almost nothing across the field.
pub fn escape(agent: AgentId, ctx: &TickContext<'_>) -> Vec3 {
    let offset = ctx.positions[agent.index()] - ctx.predator;
    offset.normalize_or_zero() * inverse_square(offset.length(), ESCAPE_SOFTNESS)
}
