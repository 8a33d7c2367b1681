//! `flock-agent` — Structure-of-Arrays herd storage for `rust_flock`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`params`]  | `AgentParams` — per-agent flocking tunables             |
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)  |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)               |
//!
//! Every `Vec` in the store has exactly `count` elements and is indexed by
//! `AgentId::index()`.  The store is the single authoritative record of herd
//! state: the rule engine reads it through an immutable per-tick snapshot and
//! the integrator writes it back during the commit phase.

pub mod builder;
pub mod params;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use params::AgentParams;
pub use store::{AgentRngs, AgentStore};
