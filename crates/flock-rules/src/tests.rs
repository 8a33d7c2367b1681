//! Unit tests for flock-rules.

use flock_agent::AgentParams;
use flock_core::{AgentId, Tick, Vec3, ground};

use crate::{
    AbsentPredator, EnclosureProvider, FixedPredator, OpenField, PredatorTracker, RectanglePen,
    TickContext, combine_weight, evaluate, inverse_square, rules, threat_p,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Context over explicit position/velocity slices, predator at `predator`,
/// default params for every agent.
struct Snapshot {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    params: Vec<AgentParams>,
    predator: Vec3,
}

impl Snapshot {
    fn new(positions: Vec<Vec3>, predator: Vec3) -> Self {
        let n = positions.len();
        Self {
            positions,
            velocities: vec![Vec3::ZERO; n],
            params: vec![AgentParams::default(); n],
            predator,
        }
    }

    fn ctx(&self) -> TickContext<'_> {
        TickContext::new(
            Tick::ZERO,
            0.02,
            &self.positions,
            &self.velocities,
            &self.params,
            self.predator,
        )
    }
}

const FAR_PREDATOR: Vec3 = Vec3::new(100.0, 0.0, 0.0);

fn assert_close(a: f32, b: f32, tol: f32) {
    assert!((a - b).abs() <= tol, "{a} !≈ {b} (tol {tol})");
}

// ── Threat model ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod threat {
    use super::*;

    #[test]
    fn midpoint_at_flight_zone_boundary() {
        for r in [1.0, 7.0, 50.0] {
            assert_close(threat_p(r, r), 0.5, 1e-6);
        }
    }

    #[test]
    fn strictly_decreasing_in_distance() {
        let r = 7.0;
        let mut prev = threat_p(0.0, r);
        for i in 1..200 {
            let x = i as f32 * 0.25;
            let p = threat_p(x, r);
            assert!(p < prev, "threat_p not decreasing at x={x}");
            prev = p;
        }
    }

    #[test]
    fn bounded_in_open_unit_interval() {
        let r = 7.0;
        for x in [0.0, 0.5, 6.9, 7.0, 7.1, 100.0, 10_000.0] {
            let p = threat_p(x, r);
            assert!(p > 0.0 && p < 1.0, "threat_p({x}) = {p} out of (0,1)");
        }
    }

    #[test]
    fn combine_weight_is_base_when_fearless() {
        for x in [0.0, 3.0, 7.0, 42.0] {
            assert_eq!(combine_weight(2.0, 0.0, x, 7.0), 2.0);
        }
    }

    #[test]
    fn combine_weight_grows_with_threat() {
        // Closer predator → larger threat → larger combined weight.
        let near = combine_weight(0.5, 5.0, 1.0, 7.0);
        let mid = combine_weight(0.5, 5.0, 7.0, 7.0);
        let far = combine_weight(0.5, 5.0, 100.0, 7.0);
        assert!(near > mid && mid > far);
        // At the boundary P = 0.5 exactly: base * (1 + 0.5 * fear).
        assert_close(mid, 0.5 * (1.0 + 0.5 * 5.0), 1e-5);
    }

    #[test]
    fn inverse_square_positive_and_decreasing() {
        let s = 4.0;
        assert!(inverse_square(0.0, s).is_finite());
        let mut prev = inverse_square(0.0, s);
        assert!(prev > 0.0);
        for i in 1..100 {
            let x = i as f32 * 0.5;
            let v = inverse_square(x, s);
            assert!(v > 0.0);
            assert!(v < prev, "inverse_square not decreasing at x={x}");
            prev = v;
        }
    }

    #[test]
    fn softness_flattens_the_falloff() {
        // Larger softness → slower decay → larger value at the same distance.
        assert!(inverse_square(5.0, 10.0) > inverse_square(5.0, 1.0));
    }
}

// ── Individual rules ──────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_vectors {
    use super::*;

    #[test]
    fn cohesion_is_unit_length_off_centroid() {
        let snap = Snapshot::new(vec![ground(0.0, 0.0), ground(2.0, 0.0)], FAR_PREDATOR);
        let v = rules::cohesion(AgentId(0), &snap.ctx());
        assert_close(v.length(), 1.0, 1e-5);
        // Centroid is at (1, 0, 0): agent 0 looks in +x.
        assert!(v.x > 0.99);
    }

    #[test]
    fn cohesion_zero_at_centroid() {
        // With self included, a lone agent IS the centroid.
        let snap = Snapshot::new(vec![ground(3.0, 3.0)], FAR_PREDATOR);
        assert_eq!(rules::cohesion(AgentId(0), &snap.ctx()), Vec3::ZERO);
    }

    #[test]
    fn cohesion_empty_herd_without_self() {
        let mut snap = Snapshot::new(vec![ground(3.0, 3.0)], FAR_PREDATOR);
        snap.params[0].include_self_in_aggregates = false;
        assert_eq!(rules::cohesion(AgentId(0), &snap.ctx()), Vec3::ZERO);
    }

    #[test]
    fn cohesion_direction_unchanged_by_self_inclusion() {
        // (centroid_with_self − p) and (centroid_without_self − p) are always
        // parallel — both equal (Σpos − n·p) up to a positive scalar — so the
        // normalized cohesion vector is identical either way.  The flag only
        // matters for alignment and for the empty-herd edge case.
        let mut snap = Snapshot::new(
            vec![ground(1.0, 2.0), ground(5.0, 0.0), ground(0.0, 4.0)],
            FAR_PREDATOR,
        );
        let with_self = rules::cohesion(AgentId(0), &snap.ctx());
        snap.params[0].include_self_in_aggregates = false;
        let without_self = rules::cohesion(AgentId(0), &snap.ctx());
        assert!(with_self.distance(without_self) < 1e-5);
    }

    #[test]
    fn self_inclusion_dampens_alignment() {
        // A stationary agent next to one moving neighbor: counting its own
        // zero velocity halves the alignment average.
        let mut snap = Snapshot::new(vec![ground(0.0, 0.0), ground(1.0, 0.0)], FAR_PREDATOR);
        snap.velocities[1] = ground(2.0, 0.0);
        let with_self = rules::alignment(AgentId(0), &snap.ctx());
        assert_close(with_self.x, 1.0, 1e-5);
        for p in &mut snap.params {
            p.include_self_in_aggregates = false;
        }
        let without_self = rules::alignment(AgentId(0), &snap.ctx());
        assert_close(without_self.x, 2.0, 1e-5);
    }

    #[test]
    fn separation_points_away_and_excludes_self() {
        let snap = Snapshot::new(vec![ground(0.0, 0.0), ground(2.0, 0.0)], FAR_PREDATOR);
        let v = rules::separation(AgentId(0), &snap.ctx());
        assert!(v.x < 0.0, "agent 0 should be pushed in -x, got {v}");
        let w = rules::separation(AgentId(1), &snap.ctx());
        assert!(w.x > 0.0);
    }

    #[test]
    fn separation_grows_as_neighbors_close_in() {
        let at = |d: f32| {
            let snap = Snapshot::new(vec![ground(0.0, 0.0), ground(d, 0.0)], FAR_PREDATOR);
            rules::separation(AgentId(0), &snap.ctx()).length()
        };
        let mut prev = at(8.0);
        for d in [4.0, 2.0, 1.0, 0.5, 0.25] {
            let mag = at(d);
            assert!(mag > prev, "separation did not grow at d={d}");
            prev = mag;
        }
    }

    #[test]
    fn separation_survives_coincident_agents() {
        let snap = Snapshot::new(vec![ground(1.0, 1.0), ground(1.0, 1.0)], FAR_PREDATOR);
        let v = rules::separation(AgentId(0), &snap.ctx());
        assert!(v.is_finite());
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn alignment_averages_velocities_in_radius() {
        let mut snap = Snapshot::new(
            vec![ground(0.0, 0.0), ground(1.0, 0.0), ground(100.0, 0.0)],
            FAR_PREDATOR,
        );
        snap.velocities[1] = ground(2.0, 0.0);
        snap.velocities[2] = ground(-50.0, 0.0); // out of radius, must not count
        // Self (zero velocity) + neighbor at 1 unit → mean is (1, 0, 0).
        let v = rules::alignment(AgentId(0), &snap.ctx());
        assert_close(v.x, 1.0, 1e-5);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn alignment_guards_empty_neighborhood() {
        let mut snap = Snapshot::new(vec![ground(0.0, 0.0), ground(100.0, 0.0)], FAR_PREDATOR);
        snap.params[0].include_self_in_aggregates = false;
        let v = rules::alignment(AgentId(0), &snap.ctx());
        assert!(v.is_finite());
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn escape_points_away_from_predator() {
        let snap = Snapshot::new(vec![ground(0.0, 0.0)], ground(1.0, 0.0));
        let v = rules::escape(AgentId(0), &snap.ctx());
        assert!(v.x < 0.0, "escape should point in -x, got {v}");
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn escape_magnitude_explodes_at_close_range() {
        let mag = |d: f32| {
            let snap = Snapshot::new(vec![ground(0.0, 0.0)], ground(d, 0.0));
            rules::escape(AgentId(0), &snap.ctx()).length()
        };
        assert!(mag(1.0) > 100.0 * mag(100.0));
        assert!(mag(0.0).is_finite());
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod evaluator {
    use super::*;

    #[test]
    fn target_is_sum_of_components() {
        let snap = Snapshot::new(vec![ground(0.0, 0.0), ground(2.0, 0.0)], FAR_PREDATOR);
        let b = evaluate(AgentId(0), &snap.ctx(), &OpenField);
        let sum = b.cohesion + b.separation + b.alignment + b.escape + b.enclosure;
        assert!(b.target.distance(sum) < 1e-5);
    }

    #[test]
    fn calm_herd_negligible_fear_terms() {
        // Scenario A: predator 100 units out, P(x) ≈ 0 → weights collapse to
        // their base values and escape is ~zero.
        let snap = Snapshot::new(vec![ground(0.0, 0.0), ground(2.0, 0.0)], FAR_PREDATOR);
        let p = AgentParams::default();

        let b0 = evaluate(AgentId(0), &snap.ctx(), &OpenField);
        assert!(b0.escape.length() < 1e-2);
        // Cohesion ≈ base weight × unit vector toward the midpoint.
        assert_close(b0.cohesion.length(), p.weight_cohesion_base, 1e-2);
        assert!(b0.cohesion.x > 0.0);
        // Separation pushes the pair apart.
        assert!(b0.separation.x < 0.0);
        let b1 = evaluate(AgentId(1), &snap.ctx(), &OpenField);
        assert!(b1.separation.x > 0.0);
        assert!(b1.cohesion.x < 0.0);
    }

    #[test]
    fn threatened_agent_flees_hard() {
        // Scenario B: predator 1 unit out with flight zone 7 → P(1) > 0.5 and
        // the escape term dominates anything a calm herd produces.
        let snap = Snapshot::new(vec![ground(0.0, 0.0)], ground(1.0, 0.0));
        let b = evaluate(AgentId(0), &snap.ctx(), &OpenField);

        assert!(threat_p(1.0, 7.0) > 0.5);
        assert!(b.escape.x < 0.0);
        assert!(b.escape.length() > 10.0);
        assert!(b.target.x < 0.0);
    }

    #[test]
    fn enclosure_contribution_is_weighted_as_is() {
        let pen = RectanglePen::new(Vec3::ZERO, ground(10.0, 10.0), 2.0);
        // Agent one unit past the inner boundary on +x.
        let snap = Snapshot::new(vec![ground(9.0, 0.0)], FAR_PREDATOR);
        let b = evaluate(AgentId(0), &snap.ctx(), &pen);
        let p = AgentParams::default();
        assert_close(b.enclosure.x, p.weight_enclosure * -1.0, 1e-4);
        assert_eq!(b.enclosure.z, 0.0);
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod providers {
    use super::*;

    #[test]
    fn fixed_predator_reports_and_moves() {
        let mut p = FixedPredator::new(ground(1.0, 2.0));
        assert_eq!(p.position(), Some(ground(1.0, 2.0)));
        p.set_position(ground(3.0, 4.0));
        assert_eq!(p.position(), Some(ground(3.0, 4.0)));
    }

    #[test]
    fn absent_predator_reports_none() {
        assert_eq!(AbsentPredator.position(), None);
    }

    #[test]
    fn open_field_never_pushes() {
        assert_eq!(OpenField.repulsion(ground(1e6, -1e6)), Vec3::ZERO);
    }

    #[test]
    fn pen_interior_is_quiet() {
        let pen = RectanglePen::new(Vec3::ZERO, ground(10.0, 10.0), 2.0);
        assert_eq!(pen.repulsion(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(pen.repulsion(ground(7.9, -7.9)), Vec3::ZERO);
    }

    #[test]
    fn pen_pushes_back_toward_interior() {
        let pen = RectanglePen::new(Vec3::ZERO, ground(10.0, 10.0), 2.0);
        // One unit into the +x margin band.
        let v = pen.repulsion(ground(9.0, 0.0));
        assert_close(v.x, -1.0, 1e-6);
        assert_eq!(v.z, 0.0);
        // Fully outside: push keeps growing with penetration.
        let far = pen.repulsion(ground(15.0, 0.0));
        assert!(far.x < v.x);
        // Corners push on both axes.
        let corner = pen.repulsion(ground(-9.5, 9.5));
        assert!(corner.x > 0.0 && corner.z < 0.0);
    }

    #[test]
    fn pen_repulsion_stays_planar() {
        let pen = RectanglePen::new(Vec3::ZERO, ground(10.0, 10.0), 2.0);
        assert_eq!(pen.repulsion(ground(9.5, 9.5)).y, 0.0);
    }
}
