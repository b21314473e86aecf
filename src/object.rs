use crate::{
    algebra::Vec3, material::Material, plane::Plane, ray::Ray, sphere::Sphere,
    triangle::Triangle,
};

/// Geometric part of an intersection, produced by the primitives.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub point: Vec3,
    /// Euclidean distance from the ray origin; equals `t` for unit rays.
    pub distance: f32,
    pub normal: Vec3,
}

/// A hit against a scene object. `object` is the index of the object in
/// its scene and `material` borrows that object's material.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    pub point: Vec3,
    pub distance: f32,
    /// Unit normal facing the incoming ray.
    pub normal: Vec3,
    pub object: usize,
    pub material: &'a Material,
}

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Shape {
    pub fn hit(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Self::Sphere(s) => s.hit(ray),
            Self::Plane(p) => p.hit(ray),
            Self::Triangle(t) => t.hit(ray),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Plane(_) => "plane",
            Self::Triangle(_) => "triangle",
        }
    }
}

/// Column-major 4x4 placement matrix (`m[col][row]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(pub [[f32; 4]; 4]);

impl Transform {
    pub const IDENTITY: Transform = Transform([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[3] = [v.0, v.1, v.2, 1.0];
        m
    }

    /// Translation column.
    pub fn position(&self) -> Vec3 {
        Vec3(self.0[3][0], self.0[3][1], self.0[3][2])
    }
}

impl Default for Transform {
    fn default() -> Self { Self::IDENTITY }
}

/// A shape together with the material it owns. Immutable once built.
#[derive(Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
    pub transform: Transform,
}

impl Object {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material, transform: Transform::default() }
    }

    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), material)
            .with_transform(Transform::translation(center))
    }

    pub fn plane(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self::new(Shape::Plane(Plane::new(point, normal)), material)
            .with_transform(Transform::translation(point))
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::new(Shape::Triangle(Triangle::new(v0, v1, v2)), material)
            .with_transform(Transform::translation(v0))
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// Intersect and attach this object's material. Plane and triangle
    /// normals are turned toward the ray origin.
    pub fn intersect(&self, index: usize, ray: &Ray) -> Option<HitRecord<'_>> {
        let hit = self.shape.hit(ray)?;
        let normal = if hit.normal.dot(ray.direction) > 0.0 { -hit.normal } else { hit.normal };
        Some(HitRecord {
            point: hit.point,
            distance: hit.distance,
            normal,
            object: index,
            material: &self.material,
        })
    }
}
