//! Scanline triangle fill.
//!
//! Edges are walked one row at a time by linear interpolation of x over y.
//! The two short edges (P0→P1→P2) together cover the same rows as the long
//! edge (P0→P2); comparing them halfway down decides which side is left.

use crate::error::Result;
use crate::types::{Draw, Point, Triangle};
use crate::validation::{check_bounds, check_color};

use super::Canvas;

/// One horizontal run of a filled shape, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    y: i32,
    left: i32,
    right: i32,
}

/// Sample x at every integer y from `y0` to `y1` inclusive.
///
/// The step is accumulated in floating point and each sample truncated
/// toward zero. A flat edge yields the single value `x0`.
fn interpolate(y0: i32, x0: i32, y1: i32, x1: i32) -> Vec<i32> {
    if y1 == y0 {
        return vec![x0];
    }

    let step = (f64::from(x1) - f64::from(x0)) / (f64::from(y1) - f64::from(y0));
    let mut x = f64::from(x0);
    let mut values = Vec::with_capacity((i64::from(y1) - i64::from(y0) + 1) as usize);
    for _ in y0..=y1 {
        values.push(x as i32);
        x += step;
    }
    values
}

/// Compute the per-row spans covering a triangle.
///
/// The caller's vertex order is irrelevant; a local copy is sorted by y.
fn spans(points: [Point; 3]) -> Vec<Span> {
    let mut sorted = points;
    sorted.sort_by_key(|p| p.y);
    let [p0, p1, p2] = sorted;

    let x01 = interpolate(p0.y, p0.x, p1.y, p1.x);
    let x12 = interpolate(p1.y, p1.x, p2.y, p2.x);
    let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

    // P1 appears at the end of x01 and the start of x12
    let mut x012 = x01;
    x012.pop();
    x012.extend(x12);

    let mid = x012.len() / 2;
    let (left, right) = if x02[mid] < x012[mid] {
        (&x02, &x012)
    } else {
        (&x012, &x02)
    };

    (p0.y..=p2.y)
        .zip(left.iter().zip(right))
        .map(|(y, (&left, &right))| Span { y, left, right })
        .collect()
}

impl Draw for Triangle {
    fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        check_bounds(&self.points, canvas.dimensions())?;
        check_color(self.color)?;

        for span in spans(self.points) {
            for x in span.left..=span.right {
                // Already validated above
                let _ = canvas.write_pixel(x, span.y, self.color);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}
