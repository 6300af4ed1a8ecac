//! Hanging rope: a fixed chain of Verlet particles held together by distance constraints.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::constraint::DistanceConstraint;
use crate::config::SolverConfig;
use crate::error::RopeError;
use crate::observer::StepObserver;
use crate::solver;
use alloc::vec::Vec as AllocVec;

/// A rope laid out from an origin, with particle 0 pinned.
#[derive(Clone, Debug)]
pub struct Rope<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    total_length: F,
    rest_distance: F,
}

impl<F: Float> Rope<F> {
    /// Lay `count` particles along +x from `origin`, `length / count` apart.
    ///
    /// Rest distance is `length / count`, so the straight rope initially
    /// spans one rest distance short of `length`.
    pub fn new(origin: Vec2<F>, count: usize, length: F) -> Result<Self, RopeError> {
        if count == 0 {
            return Err(RopeError::EmptyRope);
        }
        if !length.is_finite() || length <= F::zero() {
            return Err(RopeError::InvalidLength);
        }

        let rest_distance = length / F::from_usize(count);

        let particles = (0..count)
            .map(|i| {
                let pos = Vec2::new(origin.x + rest_distance * F::from_usize(i), origin.y);
                if i == 0 { Particle::anchored(pos) } else { Particle::new(pos) }
            })
            .collect();

        let constraints = (0..count - 1)
            .map(|i| DistanceConstraint::new(i, i + 1, rest_distance))
            .collect();

        Ok(Rope { particles, constraints, total_length: length, rest_distance })
    }

    /// Advance one frame: gravity on free particles, integrate, relax.
    pub fn update<O: StepObserver>(
        &mut self,
        dt: F,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        let dt = config.effective_dt(dt);
        log::trace!("rope update dt={:?}", dt);

        let gravity = Vec2::new(F::zero(), config.gravity);
        for p in self.particles.iter_mut().filter(|p| !p.anchored) {
            p.acceleration = gravity;
        }

        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();

        self.relax(config.iterations, config, observer);

        observer.on_step_complete();
    }

    /// Run `iterations` relaxation sweeps without integrating.
    pub fn relax<O: StepObserver>(
        &mut self,
        iterations: usize,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) -> usize {
        solver::relax(
            &mut self.particles,
            &self.constraints,
            iterations,
            config.min_distance,
            observer,
        )
    }

    pub fn anchor(&mut self, index: usize) -> Result<(), RopeError> {
        self.get_mut(index)?.anchor();
        Ok(())
    }

    pub fn release(&mut self, index: usize) -> Result<(), RopeError> {
        self.get_mut(index)?.release();
        Ok(())
    }

    /// Pin particle `index` at `pos` with no residual velocity.
    pub fn anchor_at(&mut self, index: usize, pos: Vec2<F>) -> Result<(), RopeError> {
        let p = self.get_mut(index)?;
        p.anchor();
        p.place(pos);
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Sum of edge lengths over the rest length of those edges; 1.0 is unstretched.
    pub fn stretch(&self) -> F {
        if self.constraints.is_empty() {
            return F::one();
        }
        let actual = self.constraints.iter().fold(F::zero(), |acc, c| {
            acc + self.particles[c.a].pos.distance(self.particles[c.b].pos)
        });
        actual / (self.rest_distance * F::from_usize(self.constraints.len()))
    }

    /// Largest deviation of any edge from the rest distance.
    pub fn max_violation(&self) -> F {
        solver::max_violation(&self.particles, &self.constraints)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn rest_distance(&self) -> F {
        self.rest_distance
    }

    pub fn total_length(&self) -> F {
        self.total_length
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`; use [`get`](Self::get) for a checked lookup.
    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn get(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Particle<F>, RopeError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(RopeError::ParticleOutOfBounds { index, count })
    }
}
