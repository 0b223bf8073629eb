//! Glint - render a scene description to PNG.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render, RenderConfig};
use glint_scene::{load_scene, save_png};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Ray cast a scene description to PNG", long_about = None)]
struct Args {
    /// Scene description file
    scene: PathBuf,

    /// Directory the image is written to
    #[arg(long, default_value = "images_gen")]
    output_dir: PathBuf,

    /// Output file name, overriding the scene's `output` command
    #[arg(long)]
    output: Option<String>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig {
        parallel: !args.serial,
        ..RenderConfig::default()
    };
    let image = render(&scene, &config).context("Failed to render scene")?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;
    let name = args.output.as_deref().unwrap_or(&scene.output);
    let path = args.output_dir.join(name);

    save_png(&image, &path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", path.display());

    Ok(())
}
