//! Converts host frame timestamps into elapsed seconds.

use crate::float::Float;

/// Remembers the last frame timestamp.
///
/// Timestamps stay in `f64` milliseconds whatever the simulation's float
/// type; an `f32` stops resolving single milliseconds after about 4.7 hours.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_ms: None }
    }

    /// Seconds since the previous tick. The first tick, and any timestamp
    /// that runs backwards, yields zero.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// [`tick`](Self::tick) converted to the simulation's float type.
    pub fn tick_as<F: Float>(&mut self, now_ms: f64) -> F {
        F::from_f64(self.tick(now_ms))
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(5000.0), 0.0);
        assert_eq!(clock.tick(5016.0), 0.016);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
        assert_eq!(clock.tick(150.0), 0.1);
    }

    #[test]
    fn long_sessions_keep_millisecond_steps() {
        // Past 2^24 ms an f32 timestamp can only move in 2 ms steps.
        let mut clock = FrameClock::new();
        let start = 20_000_000.0;
        clock.tick(start);
        assert_eq!(clock.tick_as::<f32>(start + 1.0), 0.001f32);
        assert_eq!(clock.tick_as::<f32>(start + 4.0), 0.003f32);
    }

    #[test]
    fn reset_restarts_timing() {
        let mut clock = FrameClock::new();
        clock.tick(10.0);
        clock.reset();
        assert_eq!(clock.tick(5000.0), 0.0);
    }
}
