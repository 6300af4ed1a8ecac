//! Verlet particles with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A rope point: position-based dynamics with velocity inferred from the last two positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub anchored: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            anchored: false,
        }
    }

    pub fn anchored(pos: Vec2<F>) -> Self {
        Particle {
            anchored: true,
            ..Particle::new(pos)
        }
    }

    /// Störmer–Verlet step. Anchored particles are left alone.
    ///
    /// With `dt == 0` the acceleration term vanishes but the residual
    /// velocity `pos - prev_pos` still advances the particle.
    pub fn integrate(&mut self, dt: F) {
        if self.anchored {
            return;
        }
        let velocity = self.pos.sub(self.prev_pos);
        self.prev_pos = self.pos;
        self.pos = self.pos.add(velocity).add(self.acceleration.scale(dt * dt));
    }

    /// Per-frame displacement, `pos - prev_pos`.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos.sub(self.prev_pos)
    }

    pub fn anchor(&mut self) {
        self.anchored = true;
    }

    /// Return to free simulation, keeping whatever velocity the last two positions imply.
    pub fn release(&mut self) {
        self.anchored = false;
    }

    /// Teleport without velocity: both current and previous position become `pos`.
    pub fn place(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Move to `pos`, recording the old position as the previous one.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }
}
