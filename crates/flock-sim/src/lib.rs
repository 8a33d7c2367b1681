//! `flock-sim` — tick loop orchestrator for the rust_flock simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Resolve  — latch the predator position for this tick
//!                (absent predator → error, nothing committed).
//!   ② Compute  — evaluate the flocking rules for every agent against the
//!                same immutable snapshot (parallel with the `parallel`
//!                feature); results land in a per-agent target buffer.
//!   ③ Commit   — clamp, dead-zone, and plane-constrain each target, then
//!                advance positions.  Per-agent local, any order.
//! ```
//!
//! No committed state changes until the compute phase has finished for the
//! whole herd, so every evaluation in a tick observes the herd exactly as it
//! stood at the tick's start — results are independent of agent ordering.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                           |
//! |------------|--------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_agent::AgentStoreBuilder;
//! use flock_core::{SimConfig, ground};
//! use flock_rules::{FixedPredator, OpenField};
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! let (store, _rngs) = AgentStoreBuilder::new(24, 42)
//!     .scatter(ground(0.0, 0.0), 10.0)
//!     .build()?;
//! let mut sim = SimBuilder::new(config, store, OpenField, FixedPredator::new(ground(50.0, 0.0)))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
