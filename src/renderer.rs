use crate::{
    algebra::{Color, Vec3},
    camera::Camera,
    error::Result,
    object::HitRecord,
    ray::Ray,
    scene::Scene,
    shading::{phong, reflect, refract},
    tonemap::ToneMap,
};
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::trace;
use rand::Rng;
use rayon::prelude::*;
use std::{fs, path::Path};

pub const MAX_BOUNCES: u32 = 5;
/// Offset applied to secondary ray origins.
pub const SURFACE_EPSILON: f32 = 0.01;

/// Returned by [`cast_ray`] when nothing is hit.
pub const BACKGROUND: f32 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSettings {
    /// Reflection casts allowed per primary ray, and the deepest nesting
    /// level a refraction cast may start from.
    pub max_bounces: u32,
    pub epsilon: f32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self { max_bounces: MAX_BOUNCES, epsilon: SURFACE_EPSILON }
    }
}

/// Per-path accumulator, fresh for every primary ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    /// Unclamped colour of the most recent cast.
    pub color: Color,
    /// Reflection casts spent so far on this path.
    pub bounces: u32,
    pub has_refracted: bool,
    /// Deepest recursion level reached; the primary hit is level 0.
    pub deepest: u32,
}

/// Trace `ray` and store the composited colour in `state.color`.
///
/// Returns the distance to the first hit, or [`BACKGROUND`] when the ray
/// escapes (the colour is then black).
pub fn cast_ray(scene: &Scene, ray: &Ray, state: &mut RenderState, settings: &TraceSettings) -> f32 {
    trace_at(scene, ray, state, settings, 0)
}

fn trace_at(
    scene: &Scene,
    ray: &Ray,
    state: &mut RenderState,
    settings: &TraceSettings,
    depth: u32,
) -> f32 {
    let Some(hit) = scene.closest_hit(ray) else {
        state.color = Vec3::ZERO;
        return BACKGROUND;
    };
    state.deepest = state.deepest.max(depth);

    let in_shadow = scene.is_occluded(&hit, settings.epsilon);
    let local = phong(&scene.light, ray, &hit, in_shadow);
    let reflected = reflection_mix(scene, ray, &hit, state, settings, depth, local);
    state.color = refraction_mix(scene, ray, &hit, state, settings, depth, reflected);

    hit.distance
}

/// Entry point for a host: one primary ray, fresh state.
pub fn render_pixel(scene: &Scene, ray: &Ray, settings: &TraceSettings) -> (Color, f32) {
    let mut state = RenderState::default();
    let dist = cast_ray(scene, ray, &mut state, settings);
    (state.color, dist)
}

/// Mirror ray leaving `hit`, lifted off the surface by `eps`.
pub fn reflection_ray(ray: &Ray, hit: &HitRecord<'_>, eps: f32) -> Ray {
    Ray::new(hit.point, reflect(ray.direction, hit.normal)).advanced(eps)
}

/// Refracted ray leaving `hit`, or `None` when the material does not bend
/// this ray (see [`refract`]).
pub fn refraction_ray(ray: &Ray, hit: &HitRecord<'_>, eps: f32) -> Option<Ray> {
    let dir = refract(ray.direction, hit.normal, hit.material.refraction)?;
    Some(Ray::new(hit.point, dir).advanced(eps))
}

fn take_bounce(state: &mut RenderState, settings: &TraceSettings) -> bool {
    if state.bounces >= settings.max_bounces {
        trace!("reflection budget of {} exhausted", settings.max_bounces);
        return false;
    }
    state.bounces += 1;
    true
}

fn reflection_mix(
    scene: &Scene,
    ray: &Ray,
    hit: &HitRecord<'_>,
    state: &mut RenderState,
    settings: &TraceSettings,
    depth: u32,
    local: Color,
) -> Color {
    let weight = hit.material.reflection;
    if weight == 0.0 || !take_bounce(state, settings) {
        return local;
    }
    trace_at(scene, &reflection_ray(ray, hit, settings.epsilon), state, settings, depth + 1);
    state.color.mix(local, weight)
}

// `refractive_index` is the weight of the refracted colour, not an IOR.
// Refraction is bounded by nesting depth, independent of the reflection count.
fn refraction_mix(
    scene: &Scene,
    ray: &Ray,
    hit: &HitRecord<'_>,
    state: &mut RenderState,
    settings: &TraceSettings,
    depth: u32,
    reflected: Color,
) -> Color {
    let mat = hit.material;
    if mat.refraction <= 0.0 && state.has_refracted {
        return reflected;
    }
    state.has_refracted = true;

    let Some(refraction) = refraction_ray(ray, hit, settings.epsilon) else {
        return reflected;
    };
    if depth >= settings.max_bounces {
        trace!("refraction depth limit of {} reached", settings.max_bounces);
        return reflected;
    }
    trace_at(scene, &refraction, state, settings, depth + 1);
    state.color.mix(reflected, mat.refractive_index)
}

/// Host-side output options.
#[derive(Clone, Copy, Debug)]
pub struct ImageOptions {
    pub width: u32,
    pub height: u32,
    /// Colour for pixels whose primary ray hits nothing.
    pub background: Color,
    pub tonemap: ToneMap,
    pub progress: bool,
}

pub fn to_rgb8(col: Color) -> [u8; 3] {
    [
        (col.0*255.0).clamp(0.0, 255.0) as u8,
        (col.1*255.0).clamp(0.0, 255.0) as u8,
        (col.2*255.0).clamp(0.0, 255.0) as u8
    ]
}

/// Render every pixel of `camera`'s view. Rows are traced in parallel.
pub fn render_image(
    scene: &Scene,
    camera: &Camera,
    settings: &TraceSettings,
    opts: &ImageOptions,
) -> RgbImage {
    let (width, height) = (opts.width, opts.height);

    let bar = opts.progress.then(|| {
        let pb = ProgressBar::new(height as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
        {
            pb.set_style(style);
        }
        pb
    });

    let rows: Vec<_> = (0..height).into_par_iter().flat_map(|y| {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let ray = camera.primary_ray(x, y);
            let (color, dist) = render_pixel(scene, &ray, settings);
            let col = if dist > 0.0 { opts.tonemap.apply(color) } else { opts.background };
            row.push(((x, y), to_rgb8(col)));
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
        row
    }).collect();

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }

    let mut img = RgbImage::new(width, height);
    for ((x, y), rgb) in rows { img.put_pixel(x, y, Rgb(rgb)); }
    img
}

pub fn render_image_name(w: u32, h: u32, bounces: u32) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6).map(char::from).collect();
    format!("renders/render_{w}x{h}_b{bounces}_{suf}.png")
}

/// Write `img`, creating missing parent directories.
pub fn save_image(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    img.save(path)?;
    Ok(())
}
