use crate::{
    light::Light,
    object::{HitRecord, Object},
    ray::Ray,
};
use log::debug;

/// Objects in insertion order plus the single light. Read-only while rendering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub light: Light,
}

impl Scene {
    pub fn new(light: Light) -> Self {
        Self { objects: Vec::new(), light }
    }

    /// Register an object; returns its index.
    pub fn add_object(&mut self, object: Object) -> usize {
        let index = self.objects.len();
        debug!(
            "[{}] {} at {:?}",
            index,
            object.shape.kind(),
            object.position()
        );
        self.objects.push(object);
        index
    }

    /// Globally nearest hit along `ray`, `None` for an empty scene or when
    /// every object misses.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.intersect(i, ray))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// True when something lies between `hit` and the light. The shadow ray
    /// starts `eps` toward the light to stay clear of the surface it leaves.
    pub fn is_occluded(&self, hit: &HitRecord<'_>, eps: f32) -> bool {
        let shadow = Ray::new(hit.point, self.light.pos - hit.point).advanced(eps);
        let light_dist = shadow.origin.distance(self.light.pos);

        self.objects.iter().any(|o| {
            o.shape
                .hit(&shadow)
                .is_some_and(|h| h.distance < light_dist)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algebra::Vec3, material::Material};
    use approx::assert_relative_eq;

    fn down() -> Ray {
        Ray::new(Vec3(0.0, 10.0, 0.0), Vec3(0.0, -1.0, 0.0))
    }

    #[test]
    fn empty_scene_has_no_hit() {
        assert!(Scene::default().closest_hit(&down()).is_none());
    }

    #[test]
    fn all_miss_has_no_hit() {
        let mut scene = Scene::default();
        scene.add_object(Object::sphere(Vec3(50.0, 0.0, 0.0), 1.0, Material::default()));
        scene.add_object(Object::plane(Vec3::ZERO, Vec3(1.0, 0.0, 0.0), Material::default()));
        assert!(scene.closest_hit(&down()).is_none());
    }

    #[test]
    fn nearest_object_wins_regardless_of_order() {
        let mut scene = Scene::default();
        let floor = scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), Material::default()));
        let ball = scene.add_object(Object::sphere(Vec3(0.0, 3.0, 0.0), 1.0, Material::default()));
        let far = scene.add_object(Object::sphere(Vec3(0.0, -5.0, 0.0), 1.0, Material::default()));

        let hit = scene.closest_hit(&down()).expect("three objects on the ray");
        assert_eq!(hit.object, ball);
        assert_relative_eq!(hit.distance, 6.0, epsilon = 1e-5);
        assert_ne!(hit.object, floor);
        assert_ne!(hit.object, far);
    }

    #[test]
    fn hit_borrows_material_of_hit_object() {
        let red = Material::matte(Vec3(1.0, 0.0, 0.0));
        let mut scene = Scene::default();
        scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), red));
        let hit = scene.closest_hit(&down()).expect("floor below");
        assert_eq!(*hit.material, red);
    }

    #[test]
    fn occluder_between_point_and_light_casts_shadow() {
        let light = Light::new(Vec3(0.0, 10.0, 0.0), Vec3::ONE);
        let mut scene = Scene::new(light);
        scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), Material::default()));

        let ray = Ray::new(Vec3(0.0, 5.0, 5.0), Vec3(0.0, -5.0, -5.0));
        let hit = scene.closest_hit(&ray).expect("floor hit");
        assert!(!scene.is_occluded(&hit, 0.01));

        scene.add_object(Object::sphere(Vec3(0.0, 5.0, 0.0), 1.0, Material::default()));
        let hit = scene.closest_hit(&ray).expect("floor hit");
        assert!(scene.is_occluded(&hit, 0.01));
    }

    #[test]
    fn object_beyond_light_casts_no_shadow() {
        let light = Light::new(Vec3(0.0, 4.0, 0.0), Vec3::ONE);
        let mut scene = Scene::new(light);
        scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), Material::default()));
        scene.add_object(Object::sphere(Vec3(0.0, 8.0, 0.0), 1.0, Material::default()));

        let ray = Ray::new(Vec3(0.0, 1.0, 1.0), Vec3(0.0, -1.0, -1.0));
        let hit = scene.closest_hit(&ray).expect("floor hit");
        assert!(!scene.is_occluded(&hit, 0.01));
    }
}
