//! Scene file parsing.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use scanfill::parser::load_scene;
//!
//! let scene = load_scene(Path::new("scenes/house.yaml"))?;
//! let canvas = scene.render()?;
//! canvas.export("house")?;
//! # Ok::<(), scanfill::RasterError>(())
//! ```

pub mod scene;

pub use scene::{load_scene, parse_scene, Scene, SceneFormat};
