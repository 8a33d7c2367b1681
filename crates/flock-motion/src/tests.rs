//! Unit tests for flock-motion.

use flock_agent::{AgentParams, AgentStoreBuilder};
use flock_core::{Vec3, ground};

use crate::{commit_all, integrate, speed_ceiling};

fn params() -> AgentParams {
    AgentParams::default()
}

// ── Speed ceiling ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod ceiling {
    use super::*;

    #[test]
    fn base_speed_at_flight_zone_boundary() {
        let p = params();
        // d == R → blend factor clamps to 0 → base ceiling.
        assert_eq!(speed_ceiling(p.flight_zone_radius, &p), p.max_speed_base);
    }

    #[test]
    fn fear_speed_with_predator_on_top() {
        let p = params();
        assert_eq!(speed_ceiling(0.0, &p), p.max_speed_fear);
    }

    #[test]
    fn saturates_beyond_the_flight_zone() {
        let p = params();
        assert_eq!(speed_ceiling(100.0, &p), p.max_speed_base);
        assert_eq!(speed_ceiling(p.flight_zone_radius * 2.0, &p), p.max_speed_base);
    }

    #[test]
    fn midway_is_midway() {
        let p = params();
        let mid = speed_ceiling(p.flight_zone_radius / 2.0, &p);
        let expected = (p.max_speed_base + p.max_speed_fear) / 2.0;
        assert!((mid - expected).abs() < 1e-5);
    }
}

// ── Integrate ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod integrate_one {
    use super::*;

    #[test]
    fn clamps_runaway_targets_to_ceiling() {
        // Distance exactly R → ceiling is max_speed_base = 1; a magnitude-15
        // target must come out with magnitude 1.
        let p = params();
        let v = integrate(ground(15.0, 0.0), p.flight_zone_radius, &p);
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!(v.x > 0.0);
    }

    #[test]
    fn dead_zone_zeroes_small_targets() {
        let p = params();
        // Magnitude 0.05 < min_speed 0.1 → exactly zero, any direction.
        let v = integrate(Vec3::new(0.03, 0.0, 0.04), 100.0, &p);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn dead_zone_boundary_is_exclusive() {
        let p = params();
        let v = integrate(ground(p.min_speed, 0.0), 100.0, &p);
        assert_eq!(v.x, p.min_speed);
    }

    #[test]
    fn vertical_component_is_stripped() {
        let p = params();
        let v = integrate(Vec3::new(0.5, 3.0, 0.5), 100.0, &p);
        assert_eq!(v.y, 0.0);
        assert!(v.x > 0.0 && v.z > 0.0);
    }

    #[test]
    fn ceiling_respects_fear_scaling() {
        let p = params();
        // Predator on top: a huge target may run at max_speed_fear.
        let v = integrate(ground(100.0, 0.0), 0.0, &p);
        assert!((v.length() - p.max_speed_fear).abs() < 1e-4);
    }
}

// ── Commit over the herd ──────────────────────────────────────────────────────

#[cfg(test)]
mod commit {
    use super::*;

    #[test]
    fn positions_advance_by_velocity_dt() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build().unwrap();
        let predator = ground(100.0, 0.0);
        commit_all(&mut store, &[ground(0.5, 0.0)], predator, 2.0);
        assert_eq!(store.velocities[0], ground(0.5, 0.0));
        assert_eq!(store.positions[0], ground(1.0, 0.0));
    }

    #[test]
    fn committed_velocities_obey_invariants() {
        let (mut store, _) = AgentStoreBuilder::new(3, 0)
            .positions(vec![ground(0.0, 0.0), ground(3.0, 0.0), ground(0.0, 9.0)])
            .build()
            .unwrap();
        let predator = ground(1.0, 0.0);
        let targets = vec![
            Vec3::new(8.0, 5.0, 0.0),   // fast and off-plane
            Vec3::new(0.02, 0.0, 0.01), // below dead-zone
            ground(-2.0, 2.0),
        ];
        commit_all(&mut store, &targets, predator, 0.02);

        for i in 0..store.count {
            let v = store.velocities[i];
            assert_eq!(v.y, 0.0, "agent {i} left the plane");
            let ceiling = speed_ceiling(store.positions[i].distance(predator), &store.params[i]);
            // Ceiling recomputed from post-commit positions; allow slack for
            // the one-tick displacement.
            assert!(v.length() <= ceiling + 0.05, "agent {i} over ceiling");
        }
        assert_eq!(store.velocities[1], Vec3::ZERO);
    }

    #[test]
    fn commit_order_is_immaterial() {
        // commit_all only reads the committing agent's own row, so two herds
        // with identical state end up identical regardless of how targets
        // were produced or ordered internally.
        let make = || {
            AgentStoreBuilder::new(2, 0)
                .positions(vec![ground(0.0, 0.0), ground(2.0, 0.0)])
                .build()
                .unwrap()
                .0
        };
        let targets = vec![ground(0.5, 0.5), ground(-0.5, 0.2)];
        let predator = ground(5.0, 0.0);

        let mut a = make();
        commit_all(&mut a, &targets, predator, 0.02);
        let mut b = make();
        commit_all(&mut b, &targets, predator, 0.02);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.velocities, b.velocities);
    }
}
