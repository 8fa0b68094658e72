//! Circle fill by distance test.

use crate::error::{RasterError, Result};
use crate::types::{Circle, Draw, Point};
use crate::validation::{check_bounds, check_color};

use super::Canvas;

/// True if `tile` is within `radius` of `center` (Euclidean).
fn inside(center: Point, tile: Point, radius: i32) -> bool {
    let dx = f64::from(center.x - tile.x);
    let dy = f64::from(center.y - tile.y);
    (dx * dx + dy * dy).sqrt() <= f64::from(radius)
}

impl Circle {
    /// The four axis-extreme points: left, right, up, down.
    ///
    /// Returns `None` when an extreme does not fit in `i32`.
    pub fn extremes(&self) -> Option<[Point; 4]> {
        let Point { x, y } = self.center;
        let r = self.radius;
        Some([
            Point::new(x.checked_sub(r)?, y),
            Point::new(x.checked_add(r)?, y),
            Point::new(x, y.checked_add(r)?),
            Point::new(x, y.checked_sub(r)?),
        ])
    }
}

impl Draw for Circle {
    fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        let (width, height) = canvas.dimensions();
        let extremes = self.extremes().ok_or(RasterError::OutOfBounds {
            point: self.center,
            width,
            height,
        })?;
        check_bounds(&extremes, (width, height))?;
        check_color(self.color)?;

        // Bounding box clipped to the exported area; the extremes are known
        // to lie within [0, width] and [0, height] here.
        let r = self.radius.max(0);
        let xs = (self.center.x - r)..=(self.center.x + r).min(width - 1);
        let ys = (self.center.y - r)..=(self.center.y + r).min(height - 1);

        for y in ys {
            for x in xs.clone() {
                if inside(self.center, Point::new(x, y), self.radius) {
                    let _ = canvas.write_pixel(x, y, self.color);
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use crate::types::Color;

    /// Reference fill: test every pixel of the canvas.
    fn full_scan(circle: &Circle, width: i32, height: i32) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if inside(circle.center, Point::new(x, y), circle.radius) {
                    canvas.write_pixel(x, y, circle.color).unwrap();
                }
            }
        }
        canvas
    }

    #[test]
    fn test_centre_filled_corner_not() {
        let mut canvas = Canvas::new(5, 5);
        Circle::new(Point::new(2, 2), 2, Color::PURPLE)
            .draw(&mut canvas)
            .unwrap();

        assert_eq!(canvas.read_pixel(2, 2).unwrap(), Color::PURPLE);
        assert_eq!(canvas.read_pixel(2, 0).unwrap(), Color::PURPLE);
        assert_eq!(canvas.read_pixel(4, 2).unwrap(), Color::PURPLE);
        assert_eq!(canvas.read_pixel(1, 1).unwrap(), Color::PURPLE);
        assert_eq!(canvas.read_pixel(0, 0).unwrap(), Color::WHITE);
        assert_eq!(canvas.read_pixel(4, 4).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_matches_full_scan() {
        let circles = [
            Circle::new(Point::new(5, 5), 4, Color::RED),
            Circle::new(Point::new(0, 0), 0, Color::BLUE),
            Circle::new(Point::new(8, 7), 2, Color::GREEN),
            Circle::new(Point::new(5, 5), 5, Color::BROWN),
        ];

        for circle in circles {
            let mut canvas = Canvas::new(10, 10);
            circle.draw(&mut canvas).unwrap();
            assert_eq!(canvas, full_scan(&circle, 10, 10), "{:?}", circle);
        }
    }

    #[test]
    fn test_zero_radius_is_single_pixel() {
        let mut canvas = Canvas::new(3, 3);
        Circle::new(Point::new(1, 1), 0, Color::YELLOW)
            .draw(&mut canvas)
            .unwrap();

        let count = canvas.rows().flatten().filter(|&&c| c == Color::YELLOW).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_extreme_out_of_bounds() {
        let mut canvas = Canvas::new(5, 5);
        let err = Circle::new(Point::new(1, 2), 2, Color::RED)
            .draw(&mut canvas)
            .unwrap_err();

        assert!(matches!(
            err,
            RasterError::OutOfBounds { point, .. } if point == Point::new(-1, 2)
        ));
        assert_eq!(canvas, Canvas::new(5, 5));
    }

    #[test]
    fn test_huge_radius_is_out_of_bounds() {
        let mut canvas = Canvas::new(10, 10);
        for radius in [i32::MAX, i32::MIN, i32::MAX - 3] {
            let err = Circle::new(Point::new(5, 5), radius, Color::RED)
                .draw(&mut canvas)
                .unwrap_err();
            assert!(matches!(err, RasterError::OutOfBounds { .. }), "radius {}", radius);
        }
        assert_eq!(canvas, Canvas::new(10, 10));
    }

    #[test]
    fn test_extremes_overflow() {
        assert_eq!(Circle::new(Point::new(1, 1), i32::MAX, Color::RED).extremes(), None);
        assert_eq!(
            Circle::new(Point::new(3, 4), 2, Color::RED).extremes(),
            Some([
                Point::new(1, 4),
                Point::new(5, 4),
                Point::new(3, 6),
                Point::new(3, 2),
            ])
        );
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut canvas = Canvas::new(5, 5);
        Circle::new(Point::new(2, 2), -1, Color::RED)
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas, Canvas::new(5, 5));
    }

    #[test]
    fn test_invalid_colour() {
        let mut canvas = Canvas::new(5, 5);
        let err = Circle::new(Point::new(2, 2), 1, Color::new(100))
            .draw(&mut canvas)
            .unwrap_err();
        assert!(matches!(err, RasterError::InvalidColor(_)));
    }
}
