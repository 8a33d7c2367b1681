//! `flock-core` — foundational types for the `rust_flock` herding simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It
//! intentionally has no `flock-*` dependencies and minimal external ones
//! (only `glam`, `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`                                         |
//! | [`math`]    | `Vec3` re-export, plane helpers                   |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                   |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)         |
//! | [`error`]   | `FlockError`, `FlockResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use math::{Vec3, flatten, ground};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
