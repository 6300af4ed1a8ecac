//! Distance constraint between two chain-adjacent particles.

use crate::float::Float;
use crate::particle::Particle;

/// What a single `solve` did to its edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// At least one endpoint was moved.
    Corrected,
    /// Both endpoints anchored; nothing to do.
    BothAnchored,
    /// Endpoints closer than the solver's minimum distance; skipped.
    Degenerate,
}

/// Keeps particles `a` and `b` `rest_length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// One Jakobsen-style correction of this edge.
    ///
    /// An anchored endpoint never moves; when exactly one endpoint is
    /// anchored the free one takes the whole correction, otherwise it is
    /// split evenly.
    pub fn solve(&self, particles: &mut [Particle<F>], min_distance: F) -> EdgeOutcome {
        let a_anchored = particles[self.a].anchored;
        let b_anchored = particles[self.b].anchored;
        if a_anchored && b_anchored {
            return EdgeOutcome::BothAnchored;
        }

        let delta = particles[self.b].pos.sub(particles[self.a].pos);
        let dist = delta.magnitude();
        if dist < min_distance || dist.is_near_zero(F::from_f32(1e-30)) {
            return EdgeOutcome::Degenerate;
        }

        let diff = (dist - self.rest_length) / dist;
        let correction = delta.scale(diff);

        match (a_anchored, b_anchored) {
            (true, _) => {
                let b = &mut particles[self.b];
                b.pos = b.pos.sub(correction);
            }
            (_, true) => {
                let a = &mut particles[self.a];
                a.pos = a.pos.add(correction);
            }
            _ => {
                let half = correction.scale(F::half());
                particles[self.a].pos = particles[self.a].pos.add(half);
                particles[self.b].pos = particles[self.b].pos.sub(half);
            }
        }
        EdgeOutcome::Corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn pair(a: Vec2<f64>, b: Vec2<f64>) -> [Particle<f64>; 2] {
        [Particle::new(a), Particle::new(b)]
    }

    #[test]
    fn free_pair_splits_correction() {
        let mut ps = pair(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
        let c = DistanceConstraint::new(0, 1, 10.0);
        assert_eq!(c.solve(&mut ps, 1e-6), EdgeOutcome::Corrected);
        assert_eq!(ps[0].pos, Vec2::new(5.0, 0.0));
        assert_eq!(ps[1].pos, Vec2::new(15.0, 0.0));
    }

    #[test]
    fn anchored_a_moves_only_b() {
        let mut ps = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0));
        ps[0].anchor();
        let c = DistanceConstraint::new(0, 1, 10.0);
        c.solve(&mut ps, 1e-6);
        assert_eq!(ps[0].pos, Vec2::new(0.0, 0.0));
        assert!((ps[1].pos.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn anchored_b_moves_only_a() {
        let mut ps = pair(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0));
        ps[1].anchor();
        let c = DistanceConstraint::new(0, 1, 10.0);
        c.solve(&mut ps, 1e-6);
        assert_eq!(ps[1].pos, Vec2::new(30.0, 0.0));
        assert!((ps[0].pos.x - 20.0).abs() < 1e-12);
    }

    #[test]
    fn both_anchored_untouched() {
        let mut ps = pair(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0));
        ps[0].anchor();
        ps[1].anchor();
        let c = DistanceConstraint::new(0, 1, 10.0);
        assert_eq!(c.solve(&mut ps, 1e-6), EdgeOutcome::BothAnchored);
        assert_eq!(ps[1].pos, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn coincident_points_skipped() {
        let mut ps = pair(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0));
        let c = DistanceConstraint::new(0, 1, 10.0);
        assert_eq!(c.solve(&mut ps, 0.0), EdgeOutcome::Degenerate);
        assert!(ps[0].pos.is_finite() && ps[1].pos.is_finite());
    }
}
