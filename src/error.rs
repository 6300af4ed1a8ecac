//! Error types for rope construction and particle lookup.

use thiserror::Error;

/// Errors that can occur when building or addressing a rope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A rope needs at least one particle.
    #[error("rope needs at least one particle")]
    EmptyRope,
    /// Total length must be positive and finite.
    #[error("rope length must be positive and finite")]
    InvalidLength,
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// A solver setting is unusable.
    #[error("invalid solver config: {0}")]
    InvalidConfig(&'static str),
}
