//! Collaborator traits consumed by the rule engine, plus stock impls.
//!
//! The predator and the enclosure are owned by the host, not the core: the
//! core only ever asks "where is the predator?" and "how hard does this
//! position get pushed back inside?".  Both traits are `Send + Sync` so the
//! compute phase can run on a thread pool.

use flock_core::Vec3;

// ── PredatorTracker ───────────────────────────────────────────────────────────

/// Source of the predator's current world position.
///
/// Returning `None` means no predator entity currently exists.  The tick
/// driver treats that as fatal for the tick (every rule weight depends on
/// distance-to-predator) and surfaces it instead of defaulting.
pub trait PredatorTracker: Send + Sync {
    fn position(&self) -> Option<Vec3>;
}

/// A predator at an explicit position, repositioned by the host between
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPredator {
    pos: Vec3,
}

impl FixedPredator {
    pub fn new(pos: Vec3) -> Self {
        Self { pos }
    }

    /// Move the predator.  Call between ticks only; mid-tick the driver has
    /// already latched the position into the snapshot.
    pub fn set_position(&mut self, pos: Vec3) {
        self.pos = pos;
    }
}

impl PredatorTracker for FixedPredator {
    fn position(&self) -> Option<Vec3> {
        Some(self.pos)
    }
}

/// A tracker that never finds a predator.  Exists to exercise the
/// missing-predator error path in tests.
pub struct AbsentPredator;

impl PredatorTracker for AbsentPredator {
    fn position(&self) -> Option<Vec3> {
        None
    }
}

// ── EnclosureProvider ─────────────────────────────────────────────────────────

/// Opaque enclosure geometry, exposed to the core as a single pure function.
///
/// `repulsion` returns a vector pushing `pos` back toward the enclosure
/// interior, or zero when `pos` is comfortably inside.  The rule engine uses
/// the returned vector as-is (scaled only by the agent's enclosure weight) —
/// magnitude semantics belong entirely to the provider.
pub trait EnclosureProvider: Send + Sync {
    fn repulsion(&self, pos: Vec3) -> Vec3;
}

/// No enclosure: repulsion is always zero.
///
/// The default when no enclosure is configured; an unfenced herd is valid,
/// it just drifts.
pub struct OpenField;

impl EnclosureProvider for OpenField {
    fn repulsion(&self, _pos: Vec3) -> Vec3 {
        Vec3::ZERO
    }
}

/// An axis-aligned rectangular pen on the ground plane.
///
/// Repulsion ramps up linearly once a position crosses into the margin band
/// along any wall: the returned vector points back toward the interior with
/// magnitude equal to the penetration depth past the inner boundary, per
/// axis.  Positions fully outside the pen keep being pushed back in.
#[derive(Debug, Clone, Copy)]
pub struct RectanglePen {
    center: Vec3,
    half_extents: Vec3,
    margin: f32,
}

impl RectanglePen {
    /// Pen centered at `center` spanning `±half_extents` in x and z, with a
    /// repulsion band of `margin` units inside each wall.
    pub fn new(center: Vec3, half_extents: Vec3, margin: f32) -> Self {
        Self {
            center,
            half_extents,
            margin,
        }
    }

    fn axis_push(offset: f32, inner: f32) -> f32 {
        if offset > inner {
            inner - offset
        } else if offset < -inner {
            -inner - offset
        } else {
            0.0
        }
    }
}

impl EnclosureProvider for RectanglePen {
    fn repulsion(&self, pos: Vec3) -> Vec3 {
        let offset = pos - self.center;
        let inner_x = self.half_extents.x - self.margin;
        let inner_z = self.half_extents.z - self.margin;
        Vec3::new(
            Self::axis_push(offset.x, inner_x),
            0.0,
            Self::axis_push(offset.z, inner_z),
        )
    }
}
