//! Core value types for scanfill.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Color` - An index into the fixed palette
//! - `Palette` - The nine-entry index-to-RGB table
//! - `Point` - Integer pixel coordinates
//! - `Shape` - Triangles, rectangles and circles

mod colour;
mod palette;
mod point;
mod shape;

pub use colour::{Color, Rgb};
pub use palette::Palette;
pub use point::Point;
pub use shape::{Circle, Draw, Rectangle, Shape, Triangle};
