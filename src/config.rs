//! JSON render configuration. Every field has a default, so `{}` is a
//! valid file and reproduces the stock demo view.

use crate::{
    algebra::{vec3_from_array, Color, Vec3},
    camera::Camera,
    error::{Error, Result},
    light::Light,
    renderer::{ImageOptions, TraceSettings, MAX_BOUNCES, SURFACE_EPSILON},
    tonemap::ToneMap,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CameraJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub pos: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub look_at: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraJson {
    fn default() -> Self {
        Self {
            pos: Vec3(-10.0, 10.0, 10.0),
            look_at: Vec3::ZERO,
            up: Vec3(0.0, 1.0, 0.0),
            fov: 45.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RenderJson {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderJson {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct LightJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub pos: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub intensity: Vec3,
}

impl Default for LightJson {
    fn default() -> Self {
        let l = Light::default();
        Self { pos: l.pos, intensity: l.intensity }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct TraceJson {
    pub max_bounces: u32,
    pub epsilon: f32,
}

impl Default for TraceJson {
    fn default() -> Self {
        Self { max_bounces: MAX_BOUNCES, epsilon: SURFACE_EPSILON }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub render: RenderJson,
    pub camera: CameraJson,
    pub light: LightJson,
    pub trace: TraceJson,
    #[serde(deserialize_with = "vec3_from_array")]
    pub background: Color,
    pub tonemap: ToneMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render: RenderJson::default(),
            camera: CameraJson::default(),
            light: LightJson::default(),
            trace: TraceJson::default(),
            background: Vec3(1.0, 0.0, 0.0),
            tonemap: ToneMap::default(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.trace.epsilon > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "trace.epsilon must be positive, got {}",
                self.trace.epsilon
            )));
        }
        self.camera().map(|_| ())
    }

    pub fn light(&self) -> Light {
        Light::new(self.light.pos, self.light.intensity)
    }

    pub fn camera(&self) -> Result<Camera> {
        let c = &self.camera;
        Camera::look_at(c.pos, c.look_at, c.up, c.fov, self.render.width, self.render.height)
    }

    pub fn trace_settings(&self) -> TraceSettings {
        TraceSettings { max_bounces: self.trace.max_bounces, epsilon: self.trace.epsilon }
    }

    pub fn image_options(&self, progress: bool) -> ImageOptions {
        ImageOptions {
            width: self.render.width,
            height: self.render.height,
            background: self.background,
            tonemap: self.tonemap,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = RenderConfig::from_json("{}").expect("defaults are valid");
        assert_eq!(cfg.render.width, 640);
        assert_eq!(cfg.render.height, 480);
        assert_eq!(cfg.trace_settings(), TraceSettings::default());
        assert_eq!(cfg.light(), Light::default());
        assert_eq!(cfg.background, Vec3(1.0, 0.0, 0.0));
        assert_eq!(cfg.tonemap, ToneMap::Clamp);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = RenderConfig::from_json(
            r#"{ "render": { "width": 32 }, "trace": { "max_bounces": 2 }, "tonemap": "aces" }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.render.width, 32);
        assert_eq!(cfg.render.height, 480);
        assert_eq!(cfg.trace.max_bounces, 2);
        assert_eq!(cfg.trace.epsilon, SURFACE_EPSILON);
        assert_eq!(cfg.tonemap, ToneMap::Aces);
    }

    #[test]
    fn light_vectors_parse_from_arrays() {
        let cfg = RenderConfig::from_json(
            r#"{ "light": { "pos": [1, 2, 3], "intensity": [0.5, 0.5, 0.5] } }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.light().pos, Vec3(1.0, 2.0, 3.0));
        assert_eq!(cfg.light().intensity, Vec3(0.5, 0.5, 0.5));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = RenderConfig::from_json("{ render: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn non_positive_epsilon_is_rejected() {
        let err = RenderConfig::from_json(r#"{ "trace": { "epsilon": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_height_is_rejected() {
        let err = RenderConfig::from_json(r#"{ "render": { "height": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
