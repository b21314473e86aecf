use serde::Deserialize;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3(pub f32, pub f32, pub f32);

/// Linear RGB; components are not clamped until the final pixel write.
pub type Color = Vec3;

impl Vec3 {
    pub const ZERO: Vec3 = Vec3(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3(1.0, 1.0, 1.0);

    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    /// Component-wise (Hadamard) product.
    pub fn mul(self, v: Self) -> Self { Self(self.0*v.0, self.1*v.1, self.2*v.2) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn cross(self, v: Self) -> Self {
        Self(self.1*v.2-self.2*v.1, self.2*v.0-self.0*v.2, self.0*v.1-self.1*v.0)
    }
    pub fn norm(self) -> f32 { self.dot(self).sqrt() }
    pub fn normalize(self) -> Self { self.scale(1.0/self.norm()) }
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self { Self(f(self.0), f(self.1), f(self.2)) }

    /// Euclidean distance between two points.
    pub fn distance(self, v: Self) -> f32 { (self - v).norm() }

    /// Linear blend: `w * self + (1 - w) * other`.
    pub fn mix(self, other: Self, w: f32) -> Self {
        self.scale(w) + other.scale(1.0 - w)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, v: Vec3) -> Vec3 { Vec3(self.0+v.0, self.1+v.1, self.2+v.2) }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, v: Vec3) { *self = *self + v; }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, v: Vec3) -> Vec3 { Vec3(self.0-v.0, self.1-v.1, self.2-v.2) }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, f: f32) -> Vec3 { self.scale(f) }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 { v.scale(self) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { Vec3(-self.0, -self.1, -self.2) }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self { [v.0, v.1, v.2] }
}

/* Custom helper so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_follows_right_hand_rule() {
        let z = Vec3(1.0, 0.0, 0.0).cross(Vec3(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn normalize_gives_unit_length() {
        let v = Vec3(3.0, -4.0, 12.0).normalize();
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn mix_weights_first_operand() {
        let a = Vec3(1.0, 1.0, 1.0);
        let b = Vec3(0.0, 2.0, 4.0);
        assert_eq!(a.mix(b, 1.0), a);
        assert_eq!(a.mix(b, 0.0), b);
        assert_eq!(a.mix(b, 0.5), Vec3(0.5, 1.5, 2.5));
    }
}
