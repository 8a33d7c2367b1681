//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::AgentStoreBuilder;
//! use flock_core::ground;
//!
//! let (store, rngs) = AgentStoreBuilder::new(24, /*seed=*/ 42)
//!     .scatter(ground(0.0, 0.0), 10.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 24);
//! assert_eq!(rngs.len(), 24);
//! ```

use flock_core::{FlockError, FlockResult, SimRng, Vec3, ground};

use crate::{AgentParams, AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Positions default to the origin, velocities to zero, and parameters to
/// [`AgentParams::default`].  `scatter` and the explicit setters override
/// those defaults; explicit positions win over `scatter`.
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
    uniform_params: AgentParams,
    params: Option<Vec<AgentParams>>,
    positions: Option<Vec<Vec3>>,
    velocities: Option<Vec<Vec3>>,
    scatter: Option<(Vec3, f32)>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            uniform_params: AgentParams::default(),
            params: None,
            positions: None,
            velocities: None,
            scatter: None,
        }
    }

    /// Use `params` for every agent.
    pub fn uniform_params(mut self, params: AgentParams) -> Self {
        self.uniform_params = params;
        self
    }

    /// Supply per-agent parameters (must be length `count`).
    pub fn params(mut self, params: Vec<AgentParams>) -> Self {
        self.params = Some(params);
        self
    }

    /// Supply explicit initial positions (must be length `count`).
    pub fn positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply explicit initial velocities (must be length `count`).
    pub fn velocities(mut self, velocities: Vec<Vec3>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Place agents uniformly in a ground-plane square of half-extent
    /// `radius` around `center`, using the builder seed.
    pub fn scatter(mut self, center: Vec3, radius: f32) -> Self {
        self.scatter = Some((center, radius));
        self
    }

    /// Construct `AgentStore` and `AgentRngs`, validating array lengths.
    pub fn build(self) -> FlockResult<(AgentStore, AgentRngs)> {
        let check = |what: &str, len: usize| -> FlockResult<()> {
            if len != self.count {
                return Err(FlockError::Config(format!(
                    "{what} length {len} does not match agent count {}",
                    self.count
                )));
            }
            Ok(())
        };

        let positions = match self.positions {
            Some(p) => {
                check("positions", p.len())?;
                p
            }
            None => match self.scatter {
                Some((center, radius)) => {
                    let mut rng = SimRng::new(self.seed);
                    (0..self.count)
                        .map(|_| {
                            center
                                + ground(
                                    rng.gen_range(-radius..=radius),
                                    rng.gen_range(-radius..=radius),
                                )
                        })
                        .collect()
                }
                None => vec![Vec3::ZERO; self.count],
            },
        };

        let velocities = match self.velocities {
            Some(v) => {
                check("velocities", v.len())?;
                v
            }
            None => vec![Vec3::ZERO; self.count],
        };

        let params = match self.params {
            Some(p) => {
                check("params", p.len())?;
                p
            }
            None => vec![self.uniform_params; self.count],
        };

        let rngs = AgentRngs::new(self.count, self.seed);
        Ok((AgentStore::new(positions, velocities, params), rngs))
    }
}
