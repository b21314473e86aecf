use crate::{algebra::Vec3, object::Hit, ray::Ray};

/// Infinite plane through `point` with unit `normal`.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point   : Vec3,
    pub normal  : Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal: normal.normalize() }
    }

    /// Returns the crossing in front of the ray, or `None` when the ray is
    /// parallel to the plane or the plane lies behind the origin.
    /// The reported normal is the plane's own, not oriented to the ray.
    pub(crate) fn hit(&self, ray: &Ray) -> Option<Hit> {
        let denom = ray.direction.dot(self.normal);
        if denom == 0.0 {               // ray ‖ plane
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if !(t >= 0.0) {                // behind, or NaN from a zero normal
            return None;
        }

        let point = ray.at(t);
        Some(Hit {
            point,
            distance: ray.origin.distance(point),
            normal: self.normal,
        })
    }
}
