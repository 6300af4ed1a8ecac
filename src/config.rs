//! Configuration types for the rope solver.

use crate::error::RopeError;
use crate::float::Float;

/// Configuration for the constraint solver and simulation.
///
/// # Builder Pattern
/// ```
/// use strand::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(10)
///     .with_gravity(20.0)
///     .with_min_distance(1e-6)
///     .with_max_dt(Some(0.05));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<F: Float> {
    /// Relaxation sweeps per update. Default: 10.
    pub iterations: usize,
    /// Downward (+y) acceleration applied to free particles. Default: 20.
    pub gravity: F,
    /// Edges shorter than this are skipped by relaxation instead of dividing
    /// by their length. Default: 1e-6.
    pub min_distance: F,
    /// Upper bound on `dt` per update. Default: `None` (unclamped).
    pub max_dt: Option<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 10,
            gravity: F::from_f32(20.0),
            min_distance: F::from_f32(1e-6),
            max_dt: None,
        }
    }

    /// Set the number of relaxation sweeps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity magnitude.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the degenerate-edge threshold.
    pub fn with_min_distance(mut self, min_distance: F) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Clamp `dt` to `max_dt`, or pass `None` to leave it unclamped.
    pub fn with_max_dt(mut self, max_dt: Option<F>) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), RopeError> {
        if !self.gravity.is_finite() {
            return Err(RopeError::InvalidConfig("gravity must be finite"));
        }
        if !self.min_distance.is_finite() || self.min_distance < F::zero() {
            return Err(RopeError::InvalidConfig("min_distance must be finite and non-negative"));
        }
        if let Some(max_dt) = self.max_dt {
            if !max_dt.is_finite() || max_dt <= F::zero() {
                return Err(RopeError::InvalidConfig("max_dt must be finite and positive"));
            }
        }
        Ok(())
    }

    /// `dt` after applying `max_dt`.
    pub fn effective_dt(&self, dt: F) -> F {
        match self.max_dt {
            Some(max_dt) => dt.min(max_dt),
            None => dt,
        }
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
