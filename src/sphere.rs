//! src/sphere.rs
//! -------------
//! Sphere with constant radius.

use crate::{algebra::Vec3, object::Hit, ray::Ray};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center : Vec3,
    pub radius : f32,
}

impl Sphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    /// Nearest surface crossing in front of the ray origin.
    ///
    /// A tangent ray (zero discriminant) is a miss, and so is a ray whose
    /// nearer root lies behind the origin; that includes rays starting
    /// inside the sphere.
    pub fn hit(&self, ray: &Ray) -> Option<Hit> {
        // Analytic quadratic
        let oc   = ray.origin - self.center;
        let a    = ray.direction.dot(ray.direction);
        let b    = 2.0 * ray.direction.dot(oc);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*a*c;
        if disc <= 0.0 { return None; }

        let t = (-b - disc.sqrt()) / (2.0 * a);
        if t < 0.0 { return None; }

        let point = ray.at(t);
        Some(Hit {
            point,
            distance: ray.origin.distance(point),
            normal: (point - self.center).normalize(),
        })
    }
}
