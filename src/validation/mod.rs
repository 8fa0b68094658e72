//! Shared colour and bounds rules.
//!
//! The canvas and every shape go through the same two predicates so that a
//! point accepted by a shape's pre-draw check is also accepted by the
//! canvas's pixel write.

use crate::error::{RasterError, Result};
use crate::types::{Color, Point};

/// True iff `color` is a palette index in `[0, 8]`.
pub fn is_valid_color(color: Color) -> bool {
    color.is_valid()
}

/// True iff `point` falls outside a `width`×`height` canvas.
///
/// The upper bound is inclusive: `x == width` and `y == height` are in
/// bounds. The canvas keeps a gutter row and column so those writes land.
pub fn is_out_of_bounds(point: Point, (width, height): (i32, i32)) -> bool {
    point.x > width || point.y > height || point.x < 0 || point.y < 0
}

/// Fail with `InvalidColor` unless `color` is in the palette.
pub fn check_color(color: Color) -> Result<()> {
    if is_valid_color(color) {
        Ok(())
    } else {
        Err(RasterError::InvalidColor(color))
    }
}

/// Fail with `OutOfBounds` on the first point outside the canvas.
pub fn check_bounds(points: &[Point], dimensions: (i32, i32)) -> Result<()> {
    match points.iter().find(|&&p| is_out_of_bounds(p, dimensions)) {
        Some(&point) => Err(RasterError::OutOfBounds {
            point,
            width: dimensions.0,
            height: dimensions.1,
        }),
        None => Ok(()),
    }
}
