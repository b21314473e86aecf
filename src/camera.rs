//! Host-side pinhole camera that turns pixel coordinates into primary rays.

use crate::{
    algebra::Vec3,
    error::{Error, Result},
    ray::Ray,
};

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    /// tan(fov / 2)
    scale: f32,
    aspect: f32,
    width: u32,
    height: u32,
}

impl Camera {
    /// `fov` is the vertical field of view in degrees.
    pub fn look_at(
        pos: Vec3,
        look_at: Vec3,
        up: Vec3,
        fov: f32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!("image size {width}x{height}")));
        }
        if !(fov > 0.0 && fov < 180.0) {
            return Err(Error::InvalidConfig(format!("fov {fov} not in (0, 180)")));
        }
        let view = look_at - pos;
        let side = view.cross(up);
        if view.norm() == 0.0 || side.norm() == 0.0 {
            return Err(Error::InvalidConfig(
                "camera position, target and up vector are degenerate".into(),
            ));
        }

        let forward = view.normalize();
        let right   = side.normalize();
        let real_up = right.cross(forward).normalize();

        Ok(Self {
            pos,
            forward,
            right,
            up: real_up,
            scale: (fov.to_radians() * 0.5).tan(),
            aspect: width as f32 / height as f32,
            width,
            height,
        })
    }

    /// Ray through the center of pixel (x, y); y grows downward.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let u =  ((x as f32 + 0.5) / self.width as f32 - 0.5) * 2.0 * self.aspect * self.scale;
        let v = -((y as f32 + 0.5) / self.height as f32 - 0.5) * 2.0 * self.scale;
        let dir = self.right.scale(u) + self.up.scale(v) + self.forward;
        Ray::new(self.pos, dir)
    }
}
