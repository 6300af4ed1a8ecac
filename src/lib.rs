//! Verlet rope simulation with iterative distance-constraint relaxation.
//!
//! `strand` simulates a hanging rope as a chain of point masses joined by
//! distance constraints. Each frame applies gravity, advances particles with
//! position-only Verlet integration and relaxes the constraints with a fixed
//! number of Gauss–Seidel sweeps. Pointer input can grab any particle and pin
//! it under the cursor until released.
//!
//! # Features
//!
//! - **Verlet integration**: velocity inferred from the last two positions
//! - **Constraint relaxation**: Jakobsen-style sweeps, anchored particles never move
//! - **Dragging**: nearest-particle picking, pin while held, fling on release
//! - **Observable**: Monitor updates via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use strand::{Simulation, Vec2};
//!
//! let mut sim = Simulation::hanging(Vec2::new(0.0f32, 0.0), 10, 100.0).unwrap();
//! sim.frame(0.0);
//! sim.frame(16.0);
//! assert!(sim.positions()[9].y > 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod rope;
pub mod interaction;
pub mod clock;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, EdgeOutcome};
pub use solver::relax;
pub use rope::Rope;
pub use interaction::{Interaction, InteractionState, DragPhase, nearest_particle};
pub use clock::FrameClock;
pub use simulation::Simulation;
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::RopeError;
