//! Demo renderer: builds the randomized demo scene and writes a PNG.
//!
//! Scene construction and presentation live here, outside the render
//! core; the core only ever sees the finished immutable [`Scene`].

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_core::{ImagePlane, Material, Plane, PointLight, Scene, Sphere, Surface};
use lumen_math::{Color, Vec3};
use lumen_render::{render, ImageBuffer};
use rand::Rng;

const WIDTH: u32 = 256;
const HEIGHT: u32 = 192;
const OUTPUT_PATH: &str = "render.png";

fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(
        rng.gen_range(0.5..1.0),
        rng.gen_range(0.5..1.0),
        rng.gen_range(0.5..1.0),
    )
}

fn random_position(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-70.0..70.0),
        rng.gen_range(50.0..500.0),
    )
}

fn random_radius(rng: &mut impl Rng) -> f64 {
    rng.gen_range(5.0..30.0)
}

fn build_scene(rng: &mut impl Rng) -> Result<Scene> {
    let mut geometry: Vec<Arc<dyn Surface>> = vec![
        Arc::new(Plane::checkerboard(Vec3::new(0.0, -30.0, 0.0), Vec3::Y)?),
        Arc::new(Sphere::new(
            Vec3::new(0.0, 0.0, 50.0),
            20.0,
            Material::from_color(Color::new(0.0, 1.0, 1.0)),
        )?),
    ];

    for _ in 0..100 {
        geometry.push(Arc::new(Sphere::new(
            random_position(rng),
            random_radius(rng),
            Material::from_color(random_color(rng)),
        )?));
    }

    let image_plane = ImagePlane {
        top_left: Vec3::new(1.0, 0.75, 0.0),
        top_right: Vec3::new(-1.0, 0.75, 0.0),
        bottom_left: Vec3::new(1.0, -0.75, 0.0),
        bottom_right: Vec3::new(-1.0, -0.75, 0.0),
    };

    let lights = vec![PointLight::new(
        Vec3::new(30.0, 30.0, 20.0),
        Color::splat(0.8),
        Color::splat(0.8),
    )];

    let scene = Scene::new(
        image_plane,
        Vec3::new(0.0, 0.0, -1.0),
        Color::splat(0.2),
        lights,
        geometry,
    )?;

    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let scene = build_scene(&mut rng)?;
    log::info!(
        "rendering {}x{} with {} surfaces, {} lights",
        WIDTH,
        HEIGHT,
        scene.geometry.len(),
        scene.lights.len()
    );

    let mut buffer = ImageBuffer::new(WIDTH, HEIGHT);
    render(&scene, WIDTH, HEIGHT, &mut buffer);

    let image = image::RgbImage::from_raw(WIDTH, HEIGHT, buffer.to_rgb_bytes())
        .context("render buffer has the wrong length")?;
    image
        .save(OUTPUT_PATH)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    log::info!("wrote {OUTPUT_PATH}");
    Ok(())
}
