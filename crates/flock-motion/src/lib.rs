//! `flock-motion` — the commit half of the tick: turn each agent's blended
//! target velocity into bounded, plane-constrained motion.
//!
//! # Integration model
//!
//! 1. The speed ceiling interpolates from `max_speed_base` up to
//!    `max_speed_fear` as the predator penetrates the flight zone.
//! 2. The target velocity is clamped to that ceiling.
//! 3. Velocities below `min_speed` are zeroed outright (dead-zone against
//!    jitter from near-cancelling rule vectors).
//! 4. The vertical component is zeroed, then the position advances by
//!    `velocity · dt`.
//!
//! Every step reads only the committing agent's own state, so commits may
//! run in any order — the cross-agent reads all happened in the compute
//! phase.

pub mod integrator;

#[cfg(test)]
mod tests;

pub use integrator::{commit_all, integrate, speed_ceiling};
