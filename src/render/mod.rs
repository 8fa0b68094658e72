//! Rendering module for scanfill.
//!
//! This module owns the canvas, the three fill algorithms and the
//! conversions of a finished canvas to PPM and text previews.

mod canvas;
mod circle;
mod ppm;
mod preview;
mod rectangle;
mod triangle;

pub use canvas::Canvas;
pub use ppm::{export, ppm_path, to_ppm_string, write_ppm, PPM_EXTENSION};
pub use preview::preview;
