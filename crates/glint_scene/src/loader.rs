//! Scene file loading.

use std::fs;
use std::path::Path;

use glint_renderer::Scene;
use thiserror::Error;

use crate::parser::{parse_scene, ParseError};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Read and parse a scene description file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene {}", path.display());

    let content = fs::read_to_string(path)?;
    Ok(parse_scene(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("glint_loader_{}_{name}", std::process::id()));
        fs::write(&path, content).expect("write temp scene");
        path
    }

    #[test]
    fn test_load_scene_file() {
        let path = temp_file(
            "ok.scene",
            "size 4 3\noutput tiny.png\ncamera 0 0 0 0 0 -1 0 1 0 60\nsphere 0 0 -5 1\n",
        );
        let scene = load_scene(&path).expect("valid scene file");
        fs::remove_file(&path).ok();

        assert_eq!((scene.width, scene.height), (4, 3));
        assert_eq!(scene.output, "tiny.png");
        assert_eq!(scene.shapes.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("glint_loader_does_not_exist.scene");
        assert!(matches!(load_scene(path), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_parse_error_is_forwarded() {
        let path = temp_file("bad.scene", "size 4 3\nsphere 0 0\n");
        let result = load_scene(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(LoadError::Parse(ParseError::Parse { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
