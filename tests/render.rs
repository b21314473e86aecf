use whitted::{config::RenderConfig, demo, renderer::render_image, Material, Object, Scene, Vec3};

#[test]
fn background_pixels_take_configured_colour() {
    let cfg = RenderConfig::from_json(
        r#"{
            "render": { "width": 9, "height": 9 },
            "camera": { "pos": [0, 0, 10], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 40 },
            "light": { "pos": [0, 0, 10], "intensity": [1, 1, 1] },
            "background": [0, 0, 1]
        }"#,
    )
    .expect("valid config");

    let mut scene = Scene::new(cfg.light());
    scene.add_object(Object::sphere(Vec3::ZERO, 1.0, Material::matte(Vec3(1.0, 1.0, 1.0))));

    let img = render_image(&scene, &cfg.camera().expect("camera"), &cfg.trace_settings(), &cfg.image_options(false));
    assert_eq!(img.dimensions(), (9, 9));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);

    let center = img.get_pixel(4, 4).0;
    assert_ne!(center, [0, 0, 255]);
    assert!(center[0] > 200, "lit head-on, got {center:?}");
}

#[test]
fn demo_scene_renders_without_background_holes_on_floor() {
    let cfg = RenderConfig::from_json(r#"{ "render": { "width": 16, "height": 12 } }"#)
        .expect("valid config");
    let scene = demo::scene(cfg.light());
    let img = render_image(&scene, &cfg.camera().expect("camera"), &cfg.trace_settings(), &cfg.image_options(false));

    // The bottom row looks down onto the floor.
    for x in 0..16 {
        assert_ne!(img.get_pixel(x, 11).0, [255, 0, 0]);
    }
}
