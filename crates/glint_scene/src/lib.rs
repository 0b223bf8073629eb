//! Glint scene I/O - scene description parsing, PNG output and image comparison.

pub mod compare;
pub mod image_io;
pub mod loader;
pub mod parser;

pub use compare::{count_different_pixels, diff_image, load_rgb, CompareError, CompareResult};
pub use image_io::{save_png, to_rgb_image, ImageIoError, ImageIoResult};
pub use loader::{load_scene, LoadError, LoadResult};
pub use parser::{parse_scene, ParseError, ParseResult, SceneParser};
