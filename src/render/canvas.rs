//! The indexed-colour pixel buffer.

use crate::error::{RasterError, Result};
use crate::types::{Color, Draw, Point};
use crate::validation::{check_color, is_out_of_bounds};

/// A fixed-size grid of palette indices.
///
/// Coordinates run `x` left to right and `y` top to bottom. Storage is one
/// column and one row larger than `width`×`height`: the bounds rule treats
/// `x == width` and `y == height` as addressable, so those pixels need a
/// home. The gutter is never exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,

    /// Row-major cells, `stride` wide.
    cells: Vec<Color>,
}

impl Canvas {
    /// Create an all-white canvas. Non-positive dimensions are clamped to 0.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = (width as usize + 1) * (height as usize + 1);

        Self {
            width,
            height,
            cells: vec![Color::WHITE; len],
        }
    }

    /// Replace the whole grid with a fresh all-white one of the given size.
    pub fn initialize(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn stride(&self) -> usize {
        self.width as usize + 1
    }

    /// Cell index for a point that has already passed the bounds check.
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride() + x as usize
    }

    fn check_point(&self, x: i32, y: i32) -> Result<()> {
        let point = Point::new(x, y);
        if is_out_of_bounds(point, self.dimensions()) {
            return Err(RasterError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Set one pixel.
    ///
    /// Fails with `InvalidColor` first, then `OutOfBounds`; on failure the
    /// canvas is unchanged.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        check_color(color)?;
        self.check_point(x, y)?;

        let offset = self.offset(x, y);
        self.cells[offset] = color;
        Ok(())
    }

    /// Read one pixel.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.check_point(x, y)?;
        Ok(self.cells[self.offset(x, y)])
    }

    /// Reset every cell, gutter included, to white.
    pub fn clear(&mut self) {
        self.cells.fill(Color::WHITE);
    }

    /// Draw a shape onto this canvas.
    pub fn draw(&mut self, shape: &impl Draw) -> Result<()> {
        shape.draw(self)
    }

    /// Iterate over the exported rows, top to bottom, each exactly `width`
    /// cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        let width = self.width as usize;
        self.cells
            .chunks(self.stride())
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_white() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.dimensions(), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.read_pixel(x, y).unwrap(), Color::WHITE);
            }
        }
    }

    #[test]
    fn test_write_then_read() {
        let mut canvas = Canvas::new(5, 5);
        canvas.write_pixel(2, 3, Color::GREEN).unwrap();

        assert_eq!(canvas.read_pixel(2, 3).unwrap(), Color::GREEN);

        let greens = canvas.rows().flatten().filter(|&&c| c == Color::GREEN).count();
        assert_eq!(greens, 1);
    }

    #[test]
    fn test_invalid_colour_leaves_canvas_unchanged() {
        let mut canvas = Canvas::new(5, 5);
        let before = canvas.clone();

        let err = canvas.write_pixel(1, 1, Color::new(9)).unwrap_err();
        assert!(matches!(err, RasterError::InvalidColor(_)));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_colour_checked_before_bounds() {
        let mut canvas = Canvas::new(5, 5);
        let err = canvas.write_pixel(-1, -1, Color::new(-1)).unwrap_err();
        assert!(matches!(err, RasterError::InvalidColor(_)));
    }

    #[test]
    fn test_negative_coordinates_out_of_bounds() {
        let mut canvas = Canvas::new(5, 5);
        assert!(matches!(
            canvas.write_pixel(-1, 0, Color::RED),
            Err(RasterError::OutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.read_pixel(0, -1),
            Err(RasterError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_gutter_is_addressable_but_not_exported() {
        let mut canvas = Canvas::new(3, 2);
        canvas.write_pixel(3, 2, Color::BLACK).unwrap();
        canvas.write_pixel(3, 0, Color::BLACK).unwrap();

        assert_eq!(canvas.read_pixel(3, 2).unwrap(), Color::BLACK);
        assert!(canvas.rows().flatten().all(|&c| c == Color::WHITE));
        assert!(canvas.write_pixel(4, 0, Color::BLACK).is_err());
        assert!(canvas.write_pixel(0, 3, Color::BLACK).is_err());
    }

    #[test]
    fn test_rows_shape() {
        let canvas = Canvas::new(4, 3);
        let rows: Vec<_> = canvas.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut canvas = Canvas::new(3, 3);
        canvas.write_pixel(0, 0, Color::RED).unwrap();
        canvas.write_pixel(3, 3, Color::RED).unwrap();

        canvas.clear();

        assert_eq!(canvas, Canvas::new(3, 3));
        assert_eq!(canvas.dimensions(), (3, 3));
    }

    #[test]
    fn test_initialize_replaces_grid() {
        let mut canvas = Canvas::new(2, 2);
        canvas.write_pixel(1, 1, Color::BLUE).unwrap();

        canvas.initialize(6, 1);

        assert_eq!(canvas.dimensions(), (6, 1));
        assert_eq!(canvas.read_pixel(1, 1).unwrap(), Color::WHITE);
        assert_eq!(canvas.rows().count(), 1);
    }

    #[test]
    fn test_non_positive_dimensions_do_not_panic() {
        let mut canvas = Canvas::new(-3, 0);
        assert_eq!(canvas.dimensions(), (0, 0));
        assert_eq!(canvas.rows().count(), 0);
        assert!(canvas.write_pixel(0, 0, Color::RED).is_ok());
        assert!(canvas.write_pixel(1, 0, Color::RED).is_err());
    }
}
