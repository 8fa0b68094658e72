//! Drawable shape definitions.
//!
//! Shapes only hold geometry and a colour. They never own a canvas; one is
//! passed to each `draw` call. The fill algorithms live in `crate::render`.
//!
//! # Example
//!
//! ```
//! use scanfill::{Canvas, Color, Draw, Point, Rectangle};
//!
//! let mut canvas = Canvas::new(5, 5);
//! let rect = Rectangle::new(Point::new(0, 0), Point::new(2, 2), Color::RED);
//! rect.draw(&mut canvas).unwrap();
//! assert_eq!(canvas.read_pixel(1, 1).unwrap(), Color::RED);
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::render::Canvas;

use super::{Color, Point};

/// Something that can be filled onto a canvas.
pub trait Draw {
    /// Fill the shape onto `canvas`.
    ///
    /// All preconditions are checked before any pixel is written, so a
    /// failed draw leaves the canvas untouched.
    fn draw(&self, canvas: &mut Canvas) -> Result<()>;

    /// Kind name, e.g. `"triangle"`.
    fn name(&self) -> &'static str;
}

/// A filled triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Triangle {
    pub points: [Point; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(p0: Point, p1: Point, p2: Point, color: Color) -> Self {
        Self {
            points: [p0, p1, p2],
            color,
        }
    }
}

/// An axis-aligned rectangle covering `[ll.x, ur.x) × [ll.y, ur.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rectangle {
    /// Lower-left corner (inclusive).
    pub ll: Point,
    /// Upper-right corner (exclusive).
    pub ur: Point,
    pub color: Color,
}

impl Rectangle {
    pub fn new(ll: Point, ur: Point, color: Color) -> Self {
        Self { ll, ur, color }
    }
}

/// A filled circle: every pixel within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub color: Color,
}

impl Circle {
    pub fn new(center: Point, radius: i32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

/// The closed set of drawable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// The shape's colour.
    pub fn color(&self) -> Color {
        match self {
            Shape::Triangle(t) => t.color,
            Shape::Rectangle(r) => r.color,
            Shape::Circle(c) => c.color,
        }
    }
}

impl Draw for Shape {
    fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        match self {
            Shape::Triangle(t) => t.draw(canvas),
            Shape::Rectangle(r) => r.draw(canvas),
            Shape::Circle(c) => c.draw(canvas),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Triangle(t) => t.name(),
            Shape::Rectangle(r) => r.name(),
            Shape::Circle(c) => c.name(),
        }
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
