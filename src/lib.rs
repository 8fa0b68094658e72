//! scanfill - Indexed-colour scanline rasterizer
//!
//! Draws filled triangles, rectangles and circles onto a fixed-size canvas
//! of palette indices and writes the result as plain-text PPM.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{RasterError, Result};
pub use parser::{load_scene, parse_scene, Scene, SceneFormat};
pub use render::{export, preview, to_ppm_string, write_ppm, Canvas};
pub use types::{Circle, Color, Draw, Palette, Point, Rectangle, Rgb, Shape, Triangle};
pub use validation::{is_out_of_bounds, is_valid_color};
