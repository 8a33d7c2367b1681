//! Blending the five rule vectors into one target velocity.

use flock_core::{AgentId, Vec3};

use crate::providers::EnclosureProvider;
use crate::threat::combine_weight;
use crate::{TickContext, rules};

/// The five weighted rule vectors that produced a target velocity.
///
/// Purely a side-channel for observers and visualization (the original
/// renders these as colored debug rays); nothing in the core reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RuleBreakdown {
    pub cohesion: Vec3,
    pub separation: Vec3,
    pub alignment: Vec3,
    pub escape: Vec3,
    pub enclosure: Vec3,
    /// Sum of the five components — the agent's target velocity.
    pub target: Vec3,
}

/// Evaluate every rule for `agent` and blend them into the tick's target
/// velocity.
///
/// Cohesion, separation, and alignment weights are fear-blended from the
/// agent's distance to the predator; escape and enclosure carry flat
/// weights (escape is already distance-scaled internally, enclosure
/// magnitude belongs to the provider).
///
/// Pure with respect to the snapshot: safe to call for all agents in any
/// order or in parallel.
pub fn evaluate<E: EnclosureProvider + ?Sized>(
    agent: AgentId,
    ctx: &TickContext<'_>,
    enclosure: &E,
) -> RuleBreakdown {
    let p = &ctx.params[agent.index()];
    let pos = ctx.positions[agent.index()];
    let x = pos.distance(ctx.predator);
    let r = p.flight_zone_radius;

    let cohesion =
        combine_weight(p.weight_cohesion_base, p.weight_cohesion_fear, x, r) * rules::cohesion(agent, ctx);
    let separation = combine_weight(p.weight_separation_base, p.weight_separation_fear, x, r)
        * rules::separation(agent, ctx);
    let alignment = combine_weight(p.weight_alignment_base, p.weight_alignment_fear, x, r)
        * rules::alignment(agent, ctx);
    let escape = p.weight_escape * rules::escape(agent, ctx);
    let enclosure = p.weight_enclosure * enclosure.repulsion(pos);

    RuleBreakdown {
        cohesion,
        separation,
        alignment,
        escape,
        enclosure,
        target: cohesion + separation + alignment + escape + enclosure,
    }
}
