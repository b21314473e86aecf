use crate::algebra::{Color, Vec3};

/// Phong surface description plus the two recursive-ray weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Phong exponent; larger is a tighter highlight.
    pub shininess: f32,
    /// Weight of the reflected colour, in [0, 1].
    pub reflection: f32,
    /// Refraction coefficient; the bending ratio is `-1 / refraction`.
    pub refraction: f32,
    /// Weight of the refracted colour when a refraction ray is cast.
    pub refractive_index: f32,
}

impl Material {
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        shininess: f32,
        reflection: f32,
        refraction: f32,
        refractive_index: f32,
    ) -> Self {
        Self { ambient, diffuse, specular, shininess, reflection, refraction, refractive_index }
    }

    /// Ambient/diffuse only, no highlight, no secondary rays.
    pub fn matte(color: Color) -> Self {
        Self {
            ambient: color.scale(0.1),
            diffuse: color,
            specular: Vec3::ZERO,
            ..Self::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ONE,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            shininess: 10.0,
            reflection: 0.0,
            refraction: 0.0,
            refractive_index: 0.0,
        }
    }
}
