//! Scene file parser.
//!
//! A scene names a canvas size and an ordered list of shapes. Scenes are
//! YAML by default; files ending in `.json` are read as JSON.
//!
//! ```yaml
//! width: 16
//! height: 16
//! output: badge
//! shapes:
//!   - type: circle
//!     center: [8, 8]
//!     radius: 6
//!     color: orange
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RasterError, Result};
use crate::render::Canvas;
use crate::types::Shape;

/// Source syntax of a scene document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Yaml,
    Json,
}

impl SceneFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SceneFormat::Json,
            _ => SceneFormat::Yaml,
        }
    }
}

/// A canvas size plus the shapes to draw on it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: i32,
    pub height: i32,

    /// Export name (without the `.ppm` suffix).
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// A blank canvas of the scene's size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Draw every shape in order.
    ///
    /// The first failing shape aborts the render with its error.
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = self.canvas();
        for shape in &self.shapes {
            canvas.draw(shape)?;
        }
        Ok(canvas)
    }
}

/// Parse a scene document.
pub fn parse_scene(source: &str, format: SceneFormat) -> Result<Scene> {
    let scene: Scene = match format {
        SceneFormat::Yaml => serde_yaml::from_str(source).map_err(|e| RasterError::Parse {
            message: format!("Invalid YAML scene: {}", e),
            help: None,
        })?,
        SceneFormat::Json => serde_json::from_str(source).map_err(|e| RasterError::Parse {
            message: format!("Invalid JSON scene: {}", e),
            help: None,
        })?,
    };

    if scene.width <= 0 || scene.height <= 0 {
        return Err(RasterError::Parse {
            message: format!(
                "Canvas size must be positive, got {}x{}",
                scene.width, scene.height
            ),
            help: Some("Set width and height to values of 1 or more".to_string()),
        });
    }

    Ok(scene)
}

/// Read and parse a scene file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let source = fs::read_to_string(path).map_err(|e| RasterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_scene(&source, SceneFormat::from_path(path))
}
