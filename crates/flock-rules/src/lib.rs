//! `flock-rules` — the flocking rule engine for `rust_flock`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`threat`]    | Predator-proximity weighting: sigmoid, weight blend, inv-square  |
//! | [`context`]   | `TickContext<'a>` — read-only tick snapshot shared by all agents |
//! | [`rules`]     | The five rule vectors: cohesion, separation, alignment, escape   |
//! | [`evaluator`] | `evaluate` — blend the rules into one target velocity            |
//! | [`providers`] | `PredatorTracker` / `EnclosureProvider` traits + stock impls     |
//!
//! # Design notes
//!
//! The two-phase tick loop in flock-sim works as follows:
//!
//! 1. **Compute phase** (optionally parallel): for every agent, call
//!    [`evaluate`] against the same [`TickContext`].  All reads go through
//!    the snapshot; no mutation.
//!
//! 2. **Commit phase** (per-agent local): flock-motion turns each target
//!    velocity into a clamped, plane-constrained displacement.
//!
//! This split means rule evaluation only needs `&TickContext` — results are
//! identical for any agent ordering, sequential or parallel.

pub mod context;
pub mod evaluator;
pub mod providers;
pub mod rules;
pub mod threat;

#[cfg(test)]
mod tests;

pub use context::TickContext;
pub use evaluator::{RuleBreakdown, evaluate};
pub use providers::{
    AbsentPredator, EnclosureProvider, FixedPredator, OpenField, PredatorTracker, RectanglePen,
};
pub use threat::{combine_weight, inverse_square, threat_p};
