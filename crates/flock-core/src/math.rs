//! Vector math over the ground plane.
//!
//! Positions and velocities are `glam::Vec3` with `y` as the vertical axis.
//! Motion is constrained to the `y = 0` plane; the third component is kept
//! (rather than using `Vec2`) so enclosure providers and hosts can work in
//! world coordinates directly.

pub use glam::Vec3;

/// Construct a ground-plane point at height zero.
#[inline]
pub fn ground(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

/// Zero the vertical component of `v`.
///
/// Committed velocities must satisfy `v.y == 0.0` exactly; this is the
/// canonical way to enforce it.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
