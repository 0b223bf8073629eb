//! Compare two images pixel by pixel and write a diff image.
//!
//! Prints `OK` when the images are identical, `KO` otherwise, followed by
//! the number of differing pixels.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glint_scene::{count_different_pixels, diff_image, load_rgb};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Pixel-exact image comparison", long_about = None)]
struct Args {
    image_a: PathBuf,
    image_b: PathBuf,

    /// Diff image path (default: diff_<A>_<B>.png in the working directory)
    #[arg(long)]
    diff: Option<PathBuf>,
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let a = load_rgb(&args.image_a)
        .with_context(|| format!("Failed to read {}", args.image_a.display()))?;
    let b = load_rgb(&args.image_b)
        .with_context(|| format!("Failed to read {}", args.image_b.display()))?;

    let differing = count_different_pixels(&a, &b).context("Cannot compare images")?;
    println!("{}", if differing == 0 { "OK" } else { "KO" });
    println!("Images differ by {differing} pixels");

    let diff_path = args.diff.unwrap_or_else(|| {
        PathBuf::from(format!(
            "diff_{}_{}.png",
            stem(&args.image_a),
            stem(&args.image_b)
        ))
    });
    diff_image(&a, &b)
        .context("Cannot compare images")?
        .save(&diff_path)
        .with_context(|| format!("Failed to write {}", diff_path.display()))?;
    log::info!("Diff image written to {}", diff_path.display());

    Ok(())
}
