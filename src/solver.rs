//! Iterative Gauss–Seidel relaxation of a chain's distance constraints.

use crate::float::Float;
use crate::particle::Particle;
use crate::constraint::{DistanceConstraint, EdgeOutcome};
use crate::observer::StepObserver;

/// Run `iterations` sweeps over `constraints` in order.
///
/// Each sweep corrects every edge once, front to back, so later edges see
/// the positions produced by earlier ones. Sweeps shrink the total violation
/// but only a two-particle chain is guaranteed to land exactly on its rest
/// length. Returns the number of degenerate edges skipped across all sweeps.
pub fn relax<F: Float, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    iterations: usize,
    min_distance: F,
    observer: &mut O,
) -> usize {
    let mut degenerate = 0;
    for i in 0..iterations {
        for (edge, c) in constraints.iter().enumerate() {
            if c.solve(particles, min_distance) == EdgeOutcome::Degenerate {
                log::warn!("edge {} ({} -> {}) too short to correct, skipped", edge, c.a, c.b);
                observer.on_degenerate_edge(edge);
                degenerate += 1;
            }
        }
        observer.on_constraint_iteration(i);
    }
    degenerate
}

/// Largest `|distance - rest_length|` over all constraints.
pub fn max_violation<F: Float>(particles: &[Particle<F>], constraints: &[DistanceConstraint<F>]) -> F {
    constraints.iter().fold(F::zero(), |worst, c| {
        let d = particles[c.a].pos.distance(particles[c.b].pos);
        worst.max((d - c.rest_length).abs())
    })
}
