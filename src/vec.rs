//! 2D vector type for rope positions, velocities and accelerations.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector in the host's coordinate space (y grows downward on screens).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Vec2 { x: self.x + other.x, y: self.y + other.y }
    }

    /// `self + (-1 * other)`.
    pub fn sub(self, other: Self) -> Self {
        self.add(other.scale(-F::one()))
    }

    /// Scale both components by `k`.
    pub fn scale(self, k: F) -> Self {
        Vec2 { x: self.x * k, y: self.y * k }
    }

    /// Squared length (avoids sqrt).
    pub fn magnitude_sq(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude).
    pub fn magnitude(self) -> F {
        self.magnitude_sq().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        self.sub(other).magnitude()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        self.sub(other).magnitude_sq()
    }

    /// Both components finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2::add(self, rhs) }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2::sub(self, rhs) }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_magnitude() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn sub_is_add_of_negated() {
        let a = Vec2::new(1.5f32, -2.0);
        let b = Vec2::new(0.5f32, 3.0);
        assert_eq!(a.sub(b), a.add(b.scale(-1.0)));
        assert_eq!(a - b, Vec2::new(1.0, -5.0));
    }

    #[test]
    fn scale_by_zero() {
        let v = Vec2::new(7.0f64, -2.0).scale(0.0);
        assert_eq!(v.magnitude(), 0.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
        assert!(!Vec2::new(f32::INFINITY, 2.0).is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_field_names() {
        let v = Vec2::new(1.5f32, -2.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        let back: Vec2<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
