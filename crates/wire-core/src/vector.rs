//! 3D vector value type used by the wireframe engine.
//!
//! World space is right-handed with +Y up and +Z forward at zero yaw.
//! Methods never mutate their receiver; the fields stay public so hot loops
//! can update a position in place.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn up() -> Self {
        Self::UP
    }

    pub const fn forward() -> Self {
        Self::FORWARD
    }

    pub const fn right() -> Self {
        Self::RIGHT
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn subtract(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself instead of producing NaN.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            return Vec3::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Rotates about the Y axis.
    ///
    /// `x' = x·cos(a) + z·sin(a)`, `z' = -x·sin(a) + z·cos(a)`. A positive
    /// angle is a clockwise turn seen from above, i.e. turning right. The
    /// camera view transform passes its own yaw negated, so this convention
    /// must agree with [`Vec3::FORWARD`] rotating towards [`Vec3::RIGHT`].
    pub fn rotate_y(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }

    /// Rotates about the X axis (pitch).
    pub fn rotate_x(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation `self + (other - self) * t`.
    ///
    /// `t` is not clamped; segment clipping relies on evaluating the line
    /// outside `[0, 1]`.
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::add(self, other)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self.subtract(other)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1.0e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS
    }

    #[test]
    fn arithmetic_leaves_operands_untouched() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.add(b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b.subtract(a), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a.scale(-1.0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.scale(0.0), Vec3::ZERO);
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(-3.0, 4.0, 2.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 3.0, a.scale(3.0));
        assert_eq!(-a, a.scale(-1.0));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn length_of_known_vectors() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.001, 0.002, 0.0),
            Vec3::new(1200.0, -50.0, 3000.0),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vec3::ZERO.normalize();
        assert_eq!(n, Vec3::ZERO);
        assert!(n.is_finite());
    }

    #[test]
    fn rotate_y_is_invertible_and_keeps_height() {
        let v = Vec3::new(12.0, -7.5, 3.25);
        for angle in [0.0, 0.3, FRAC_PI_2, PI, -2.1, 5.9] {
            let r = v.rotate_y(angle);
            assert_eq!(r.y, v.y);
            assert!(approx(r.rotate_y(-angle), v));
        }
    }

    #[test]
    fn rotate_y_positive_turns_forward_to_the_right() {
        let r = Vec3::FORWARD.rotate_y(FRAC_PI_2);
        assert!(approx(r, Vec3::RIGHT));
        let back = Vec3::RIGHT.rotate_y(FRAC_PI_2);
        assert!(approx(back, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn rotate_x_pitches_up_into_forward() {
        let r = Vec3::UP.rotate_x(FRAC_PI_2);
        assert!(approx(r, Vec3::FORWARD));
        assert_eq!(r.x, 0.0);
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
        assert_eq!(Vec3::UP.cross(Vec3::RIGHT), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn lerp_endpoints_midpoint_and_extrapolation() {
        let a = Vec3::new(0.0, 10.0, -4.0);
        let b = Vec3::new(8.0, 20.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(4.0, 15.0, 0.0));
        assert_eq!(a.lerp(b, 2.0), Vec3::new(16.0, 30.0, 12.0));
        assert_eq!(a.lerp(b, -1.0), Vec3::new(-8.0, 0.0, -12.0));
    }

    #[test]
    fn fields_are_assignable_in_place() {
        let mut p = Vec3::new(1.0, 1.0, 1.0);
        let copy = p;
        p.y -= 0.5;
        p.x += 2.0;
        assert_eq!(p, Vec3::new(3.0, 0.5, 1.0));
        assert_eq!(copy, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn glam_conversion_keeps_components() {
        let v = Vec3::new(1.5, -2.0, 9.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
        assert_eq!(<[f32; 3]>::from(v), [1.5, -2.0, 9.0]);
    }
}
