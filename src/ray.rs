//! Rays for scene queries.
//!
//! r(t) = origin + t * direction, with `direction` kept at unit length so
//! that the distance reported by every primitive is comparable across the
//! scene.

use crate::algebra::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Always unit length; enforced by [`Ray::new`].
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    /// Point at parameter `t`: origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction.scale(t)
    }

    /// Same direction, origin pushed `eps` along it. Used to lift secondary
    /// rays off the surface they start on.
    pub fn advanced(&self, eps: f32) -> Self {
        Self { origin: self.at(eps), direction: self.direction }
    }
}
