use crate::{algebra::Vec3, object::Hit, ray::Ray};

/// Triangle with vertices `v0, v1, v2`. The face normal follows the winding.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v1).normalize()
    }

    /// Plane crossing followed by an edge-side test. Points on an edge are
    /// outside; degenerate (collinear) triangles never report a hit.
    pub fn hit(&self, ray: &Ray) -> Option<Hit> {
        let n = self.normal();
        let denom = ray.direction.dot(n);
        if denom == 0.0 { return None; }

        let t = (self.v0 - ray.origin).dot(n) / denom;
        if !(t > 0.0) { return None; }

        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        let inside = edges
            .iter()
            .all(|&(start, end)| n.dot((end - start).cross(p - start)) > 0.0);
        if !inside { return None; }

        Some(Hit { point: p, distance: ray.origin.distance(p), normal: n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tri() -> Triangle {
        Triangle::new(Vec3(0.0, 0.0, 0.0), Vec3(1.0, 0.0, 0.0), Vec3(0.0, 1.0, 0.0))
    }

    #[test]
    fn normal_follows_winding() {
        assert_eq!(unit_tri().normal(), Vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn centroid_is_hit() {
        let c = 1.0 / 3.0;
        let r = Ray::new(Vec3(c, c, 4.0), Vec3(0.0, 0.0, -1.0));
        let hit = unit_tri().hit(&r).expect("centroid lies inside");
        assert!((hit.distance - 4.0).abs() < 1e-5);
    }

    #[test]
    fn centroid_is_hit_from_behind() {
        let c = 1.0 / 3.0;
        let r = Ray::new(Vec3(c, c, -4.0), Vec3(0.0, 0.0, 1.0));
        assert!(unit_tri().hit(&r).is_some());
    }

    #[test]
    fn outside_point_misses() {
        let r = Ray::new(Vec3(2.0, 2.0, 4.0), Vec3(0.0, 0.0, -1.0));
        assert!(unit_tri().hit(&r).is_none());
    }

    #[test]
    fn edge_point_misses() {
        let r = Ray::new(Vec3(0.5, 0.0, 4.0), Vec3(0.0, 0.0, -1.0));
        assert!(unit_tri().hit(&r).is_none());
    }

    #[test]
    fn collinear_vertices_never_hit() {
        let t = Triangle::new(Vec3::ZERO, Vec3(1.0, 0.0, 0.0), Vec3(2.0, 0.0, 0.0));
        let r = Ray::new(Vec3(0.5, 1.0, 0.0), Vec3(0.0, -1.0, 0.0));
        assert!(t.hit(&r).is_none());
    }
}
