//! Whitted-style recursive ray tracer.
//!
//! Spheres, planes and triangles are shaded with the Phong model under a
//! single point light with hard shadows; reflection and refraction rays are
//! traced recursively under a shared bounce budget.

pub mod algebra;
pub mod camera;
pub mod config;
pub mod demo;
pub mod error;
pub mod light;
pub mod material;
pub mod object;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod tonemap;
pub mod triangle;

pub use algebra::{Color, Vec3};
pub use error::{Error, Result};
pub use light::Light;
pub use material::Material;
pub use object::{HitRecord, Object, Shape};
pub use ray::Ray;
pub use renderer::{cast_ray, render_pixel, RenderState, TraceSettings};
pub use scene::Scene;
