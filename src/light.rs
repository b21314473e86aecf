use crate::algebra::{Color, Vec3};

/// Point light, fixed for the lifetime of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub pos: Vec3,
    pub intensity: Color,
}

impl Light {
    pub fn new(pos: Vec3, intensity: Color) -> Self {
        Self { pos, intensity }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self { pos: Vec3(-6.0, 6.0, 2.0), intensity: Vec3::ONE }
    }
}
