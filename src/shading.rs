use crate::{
    algebra::{Color, Vec3},
    light::Light,
    object::HitRecord,
    ray::Ray,
};

pub fn reflect(v: Vec3, n: Vec3) -> Vec3 { v - n.scale(2.0 * v.dot(n)) }

/// Refraction direction for incident `d` through a surface with normal `n`,
/// using the bending ratio `-1 / coefficient`. `None` when the term under
/// the root is not positive (including the non-finite result of a zero
/// coefficient).
pub fn refract(d: Vec3, n: Vec3, coefficient: f32) -> Option<Vec3> {
    let ratio = -1.0 / coefficient;
    let cos_i = n.dot(-d);
    let radial = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);
    if !(radial > 0.0) {
        return None;
    }
    Some(n.scale(ratio * cos_i - radial.sqrt()) - (-d).scale(ratio))
}

/// Phong illumination at `hit` as seen from `ray.origin`. Shadowed points
/// only get the ambient term. The result is not clamped.
pub fn phong(light: &Light, ray: &Ray, hit: &HitRecord<'_>, in_shadow: bool) -> Color {
    let mat = hit.material;
    let n = hit.normal;
    let l = (light.pos - hit.point).normalize();
    let v = (ray.origin - hit.point).normalize();

    let ambient = light.intensity.mul(mat.ambient);
    if in_shadow {
        return ambient;
    }

    let n_dot_l = l.dot(n);
    let diffuse = light.intensity.mul(mat.diffuse).scale(n_dot_l.max(0.0));

    let r = (n.scale(2.0 * n_dot_l) - l).normalize();
    let spec_term = r.dot(v).max(0.0).powf(mat.shininess);
    let specular = light.intensity.mul(mat.specular).scale(spec_term);

    ambient + diffuse + specular
}
