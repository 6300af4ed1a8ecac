//! Pointer dragging: binds the nearest particle to the pointer and pins it while held.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::rope::Rope;

/// Pointer session state. `bound` indexes into the rope's particles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub pointer_down: bool,
    pub bound: Option<usize>,
}

/// Phase derived from [`InteractionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging(usize),
}

/// Index of the particle closest to `point`; the lowest index wins ties.
pub fn nearest_particle<F: Float>(particles: &[Particle<F>], point: Vec2<F>) -> Option<usize> {
    let mut best: Option<(usize, F)> = None;
    for (i, p) in particles.iter().enumerate() {
        let d = p.pos.distance(point);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Grabs, drags and drops rope particles in response to pointer events.
#[derive(Clone, Debug, Default)]
pub struct Interaction<F: Float> {
    state: InteractionState,
    pick_radius: Option<F>,
    track_pointer_velocity: bool,
}

impl<F: Float> Interaction<F> {
    pub fn new() -> Self {
        Interaction {
            state: InteractionState::default(),
            pick_radius: None,
            track_pointer_velocity: false,
        }
    }

    /// Only grab particles within `radius` of the pointer.
    pub fn with_pick_radius(mut self, radius: Option<F>) -> Self {
        self.pick_radius = radius;
        self
    }

    /// When enabled, each pointer sample also shifts the bound particle's
    /// previous position, so a release flings it with the last pointer step.
    /// Off by default: the controller only writes `pos` and `anchored`, and a
    /// released particle moves by its last position minus the previous
    /// position it had before the grab.
    pub fn with_pointer_velocity(mut self, enabled: bool) -> Self {
        self.track_pointer_velocity = enabled;
        self
    }

    fn follow(&self, p: &mut Particle<F>, point: Vec2<F>) {
        if self.track_pointer_velocity {
            p.move_to(point);
        } else {
            p.pos = point;
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn phase(&self) -> DragPhase {
        match self.state.bound {
            Some(i) => DragPhase::Dragging(i),
            None => DragPhase::Idle,
        }
    }

    pub fn bound(&self) -> Option<usize> {
        self.state.bound
    }

    /// Pointer pressed at `point`. Returns the grabbed index.
    pub fn press(&mut self, rope: &mut Rope<F>, point: Vec2<F>) -> Option<usize> {
        if let Some(index) = self.state.bound {
            log::debug!("press ignored, particle {} already grabbed", index);
            return None;
        }
        self.state.pointer_down = true;

        let index = nearest_particle(rope.particles(), point)?;
        if let Some(radius) = self.pick_radius {
            if rope.particle(index).pos.distance(point) > radius {
                log::debug!("press at {:?} outside pick radius", point);
                return None;
            }
        }

        let p = rope.get_mut(index).ok()?;
        p.anchor();
        self.follow(p, point);
        self.state.bound = Some(index);
        log::debug!("grabbed particle {}", index);
        Some(index)
    }

    /// Pointer moved. The bound particle follows on every event.
    pub fn drag(&mut self, rope: &mut Rope<F>, point: Vec2<F>) {
        if let Some(index) = self.state.bound {
            if let Ok(p) = rope.get_mut(index) {
                self.follow(p, point);
            }
        }
    }

    /// Pointer released. The bound particle goes back to free simulation.
    pub fn release(&mut self, rope: &mut Rope<F>) -> Option<usize> {
        self.state.pointer_down = false;
        let index = self.state.bound.take()?;
        if let Ok(p) = rope.get_mut(index) {
            p.release();
        }
        log::debug!("released particle {}", index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_lowest_index() {
        let particles = [
            Particle::new(Vec2::new(-1.0f32, 0.0)),
            Particle::new(Vec2::new(1.0, 0.0)),
            Particle::new(Vec2::new(0.0, 1.0)),
        ];
        assert_eq!(nearest_particle(&particles, Vec2::zero()), Some(0));
    }

    #[test]
    fn empty_slice_has_no_nearest() {
        let particles: [Particle<f32>; 0] = [];
        assert_eq!(nearest_particle(&particles, Vec2::zero()), None);
    }

    #[test]
    fn phase_follows_binding() {
        let mut rope = Rope::new(Vec2::new(0.0f32, 0.0), 3, 30.0).unwrap();
        let mut ctl = Interaction::new();
        assert_eq!(ctl.phase(), DragPhase::Idle);
        ctl.press(&mut rope, Vec2::new(21.0, 0.0));
        assert_eq!(ctl.phase(), DragPhase::Dragging(2));
        ctl.release(&mut rope);
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(!ctl.state().pointer_down);
    }
}
