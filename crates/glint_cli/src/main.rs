//! Command line front end for the glint path tracer.

mod scenes;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use glint_renderer::{render, write_ppm, RenderConfig};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

/// Fixed 3:2 frame, image height derived from the width.
const ASPECT_RATIO: f64 = 3.0 / 2.0;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneKind {
    /// Randomized field of small spheres with three feature spheres
    Cover,
    /// Fixed three-sphere scene with a hollow glass shell
    Demo,
}

#[derive(Parser, Debug)]
#[command(name = "glint", about = "Offline CPU path tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Samples per pixel
    #[arg(long, default_value_t = 500)]
    samples: u32,

    /// Maximum bounce depth per ray
    #[arg(long, default_value_t = 50)]
    max_depth: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Cover)]
    scene: SceneKind,

    /// RNG seed; renders with the same seed and settings are
    /// byte-identical
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PPM path
    #[arg(long, default_value = "out.ppm")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let width = args.width;
    let height = (width as f64 / ASPECT_RATIO) as u32;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (world, camera) = match args.scene {
        SceneKind::Cover => (
            scenes::cover_scene(&mut rng),
            scenes::cover_camera(ASPECT_RATIO),
        ),
        SceneKind::Demo => (scenes::demo_scene(), scenes::demo_camera(ASPECT_RATIO)),
    };

    let config = RenderConfig {
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
    };

    info!(
        "rendering {}x{} @ {} spp, depth {}, {} objects",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        world.len()
    );

    let start = Instant::now();
    let image = render(&camera, &world, width, height, &config, &mut rng);
    info!("rendered in {:.2?}", start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_ppm(&image, &mut out).context("writing PPM output")?;
    info!("wrote {}", args.output.display());

    Ok(())
}
