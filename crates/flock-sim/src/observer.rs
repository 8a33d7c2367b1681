//! Simulation observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::{Tick, Vec3};
use flock_rules::RuleBreakdown;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observation is strictly a side-channel:
/// nothing the simulation computes depends on any of these hooks.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, herd: &AgentStore, _predator: Vec3) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} sheep", herd.count);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the compute phase with every agent's rule breakdown
    /// (indexed by agent), when `SimConfig::record_rules` is set.
    ///
    /// This is the visualization side-channel for the five intermediate rule
    /// vectors.
    fn on_rules(&mut self, _tick: Tick, _breakdowns: &[RuleBreakdown]) {}

    /// Called at the end of each tick, after the commit phase.
    ///
    /// `herd` is the freshly committed state; `predator` is the position the
    /// tick was evaluated against.
    fn on_tick_end(&mut self, _tick: Tick, _herd: &AgentStore, _predator: Vec3) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the committed herd state, so output
    /// writers can record positions without the sim knowing about formats.
    fn on_snapshot(&mut self, _tick: Tick, _herd: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive the sim
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
