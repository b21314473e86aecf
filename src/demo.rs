//! Stock scene: glass-like spheres in a corner formed by a floor and two
//! mirror-ish walls, plus one triangle.

use crate::{algebra::Vec3, light::Light, material::Material, object::Object, scene::Scene};

fn glass(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Material {
    Material::new(ambient, diffuse, specular, 50.0, 0.1, 1.0, 0.6)
}

pub fn scene(light: Light) -> Scene {
    let white = glass(Vec3(0.3, 0.3, 0.3), Vec3(1.0, 1.0, 1.0), Vec3(0.6, 0.6, 0.6));
    let red   = glass(Vec3(0.3, 0.1, 0.1), Vec3(0.6, 0.3, 0.1), Vec3(0.3, 0.1, 0.1));
    let green = glass(Vec3(0.1, 0.3, 0.1), Vec3(0.1, 0.9, 0.1), Vec3(0.1, 0.3, 0.1));
    let blue  = glass(Vec3(0.1, 0.1, 0.1), Vec3(0.1, 0.6, 1.0), Vec3(0.1, 0.1, 0.1));

    let triangle = Material::new(
        Vec3(0.1, 0.1, 0.1), Vec3(0.1, 0.6, 1.0), Vec3(0.1, 0.1, 0.1), 25.0, 0.1, 0.0, 1.0,
    );
    let floor = Material::new(
        Vec3(0.09, 0.09, 0.09), Vec3::ONE, Vec3::ZERO, 25.0, 0.1, 0.0, 1.0,
    );
    let wall = Material { reflection: 0.8, ..floor };

    let mut scene = Scene::new(light);
    scene.add_object(Object::sphere(Vec3(-3.8, 0.75, 3.4), 0.75, white));
    scene.add_object(Object::sphere(Vec3(-4.5, 1.0, 1.8), 1.0, red));
    scene.add_object(Object::sphere(Vec3(-2.0, 1.5, 2.0), 1.5, green));
    scene.add_object(Object::sphere(Vec3(-2.3, 0.6, 3.9), 0.6, blue));

    scene.add_object(Object::triangle(
        Vec3(-1.0, 0.0, 5.0),
        Vec3(-1.0, 0.0, 7.0),
        Vec3(-1.0, 2.0, 6.0),
        triangle,
    ));

    scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 1.0, 0.0), floor));
    scene.add_object(Object::plane(Vec3::ZERO, Vec3(-1.0, 0.0, 0.0), wall));
    scene.add_object(Object::plane(Vec3::ZERO, Vec3(0.0, 0.0, 1.0), wall));
    scene
}
