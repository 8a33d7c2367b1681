//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FlockError` via `From` impls, or keep them separate and wrap `FlockError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    /// The predator tracker reported no predator entity.
    ///
    /// Every rule weight is a function of distance-to-predator, so a tick
    /// cannot proceed without one; the driver surfaces this before any state
    /// is committed.
    #[error("predator position unavailable")]
    MissingPredator,

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
