//! One explicit session object: rope, pointer state, frame clock and solver settings.

use crate::float::Float;
use crate::vec::Vec2;
use crate::rope::Rope;
use crate::interaction::Interaction;
use crate::clock::FrameClock;
use crate::config::SolverConfig;
use crate::error::RopeError;
use crate::observer::{StepObserver, NoOpStepObserver};
use alloc::vec::Vec as AllocVec;

/// Anchor point of the stock scene.
pub const DEMO_ORIGIN: (f32, f32) = (250.0, 100.0);
/// Particle count of the stock scene.
pub const DEMO_POINTS: usize = 23;
/// Rope length of the stock scene.
pub const DEMO_LENGTH: f32 = 200.0;

/// Drives a rope from host callbacks: animation frames and pointer events.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    rope: Rope<F>,
    interaction: Interaction<F>,
    clock: FrameClock,
    config: SolverConfig<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(rope: Rope<F>, config: SolverConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;
        Ok(Simulation {
            rope,
            interaction: Interaction::new(),
            clock: FrameClock::new(),
            config,
        })
    }

    /// Rope hanging from `origin` with default solver settings.
    pub fn hanging(origin: Vec2<F>, count: usize, length: F) -> Result<Self, RopeError> {
        Self::new(Rope::new(origin, count, length)?, SolverConfig::default())
    }

    pub fn with_interaction(mut self, interaction: Interaction<F>) -> Self {
        self.interaction = interaction;
        self
    }

    /// Animation frame at host time `now_ms`. Returns the dt simulated.
    pub fn frame(&mut self, now_ms: f64) -> F {
        self.frame_observed(now_ms, &mut NoOpStepObserver)
    }

    pub fn frame_observed<O: StepObserver>(&mut self, now_ms: f64, observer: &mut O) -> F {
        let dt = self.clock.tick_as(now_ms);
        self.rope.update(dt, &self.config, observer);
        dt
    }

    pub fn pointer_down(&mut self, point: Vec2<F>) -> Option<usize> {
        self.interaction.press(&mut self.rope, point)
    }

    pub fn pointer_move(&mut self, point: Vec2<F>) {
        self.interaction.drag(&mut self.rope, point);
    }

    pub fn pointer_up(&mut self) -> Option<usize> {
        self.interaction.release(&mut self.rope)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.rope.positions()
    }

    pub fn rope(&self) -> &Rope<F> {
        &self.rope
    }

    pub fn rope_mut(&mut self) -> &mut Rope<F> {
        &mut self.rope
    }

    pub fn interaction(&self) -> &Interaction<F> {
        &self.interaction
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }
}
