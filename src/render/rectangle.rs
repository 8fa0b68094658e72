//! Axis-aligned rectangle fill.

use crate::error::Result;
use crate::types::{Draw, Rectangle};
use crate::validation::{check_bounds, check_color};

use super::Canvas;

impl Draw for Rectangle {
    /// Fill `[ll.x, ur.x) × [ll.y, ur.y)`. An inverted or empty box writes
    /// nothing and is not an error.
    fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        check_bounds(&[self.ll, self.ur], canvas.dimensions())?;
        check_color(self.color)?;

        for y in self.ll.y..self.ur.y {
            for x in self.ll.x..self.ur.x {
                let _ = canvas.write_pixel(x, y, self.color);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}
