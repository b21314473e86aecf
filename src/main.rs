mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::time::Instant;
use whitted::{
    config::RenderConfig,
    demo,
    renderer::{render_image, render_image_name, save_image},
};

use cli::Args;
use logger::init_logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    // ── configuration ─────────────────────────────────────────────────────
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {path}"))?,
        None => RenderConfig::default(),
    };
    if let Some(w) = args.width { cfg.render.width = w; }
    if let Some(h) = args.height { cfg.render.height = h; }
    cfg.validate().context("validating render settings")?;

    let camera   = cfg.camera()?;
    let settings = cfg.trace_settings();
    let scene    = demo::scene(cfg.light());

    // ── dump debug info ────────────────────────────────────────────────────
    debug!("camera   : {:?} -> {:?}, fov {:.1}", cfg.camera.pos, cfg.camera.look_at, cfg.camera.fov);
    debug!("light    : {:?} intensity {:?}", scene.light.pos, scene.light.intensity);
    debug!("trace    : {} bounces, epsilon {}", settings.max_bounces, settings.epsilon);
    for (i, obj) in scene.objects.iter().enumerate() {
        debug!(" [{}] {} at {:?}, diffuse {:?}", i, obj.shape.kind(), obj.position(), obj.material.diffuse);
    }

    // ── render ─────────────────────────────────────────────────────────────
    let (width, height) = (cfg.render.width, cfg.render.height);
    info!("Rendering {}x{} image, {} objects", width, height, scene.objects.len());
    let started = Instant::now();
    let img = render_image(&scene, &camera, &settings, &cfg.image_options(!args.quiet));
    info!("Rendered in {:.2?}", started.elapsed());

    let name = args
        .output
        .unwrap_or_else(|| render_image_name(width, height, settings.max_bounces));
    save_image(&img, &name).with_context(|| format!("writing {name}"))?;

    info!("Saved → {name}");
    Ok(())
}
