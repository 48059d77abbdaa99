//! Geometric primitives for diagram layout and rendering.
//!
//! This module provides the integer value types used throughout Loom to place
//! and size diagram elements in logical (pre-backend) coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Dimension`] - Width and height of an element
//! - [`Rectangle`] - An axis-aligned box defined by its top-left corner and size
//! - [`Alignment`] - Horizontal placement of text within a box
//! - [`Direction`] - A side of a node's boundary
//!
//! # Coordinate System
//!
//! Loom uses the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are integers. Rendering backends are responsible for any
//! sub-pixel adjustments they need.

use std::fmt;

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use loom_core::geometry::Point;
/// let p = Point::new(10, 20);
/// let moved = p.translated(5, -5);
/// assert_eq!(moved, Point::new(15, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy of this point moved by `(dx, dy)`.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an element.
///
/// Both components are non-negative. [`Dimension::NULL`] is the empty dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: i32,
    height: i32,
}

impl Dimension {
    /// The empty dimension `(0, 0)`.
    pub const NULL: Dimension = Dimension {
        width: 0,
        height: 0,
    };

    /// Creates a new dimension.
    ///
    /// # Panics
    ///
    /// Panics if either component is negative.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "dimension must be non-negative, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns a new dimension with the maximum width and height of both.
    pub fn max(self, other: Dimension) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

/// An axis-aligned rectangle defined by its top-left corner, width and height.
///
/// `max_x = x + width` and `max_y = y + height`. Width and height are never
/// negative.
///
/// # Examples
///
/// ```
/// # use loom_core::geometry::{Point, Rectangle};
/// let rect = Rectangle::new(10, 20, 30, 40);
/// assert_eq!(rect.max_x(), 40);
/// assert_eq!(rect.max_y(), 60);
/// assert_eq!(rect.center(), Point::new(25, 40));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "rectangle size must be non-negative, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning two corner points, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Creates a rectangle whose top-left corner is `origin`.
    pub fn from_origin(origin: Point, dimension: Dimension) -> Self {
        Self::new(origin.x, origin.y, dimension.width, dimension.height)
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns `x + width`
    pub fn max_x(self) -> i32 {
        self.x + self.width
    }

    /// Returns `y + height`
    pub fn max_y(self) -> i32 {
        self.y + self.height
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the bottom-right corner
    pub fn max_point(self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns the center point, rounding towards the top-left corner.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Returns the width and height as a [`Dimension`].
    pub fn dimension(self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Moves the rectangle by `(dx, dy)` keeping its size.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grows the rectangle by `amount` on every side. A negative amount shrinks
    /// it, never below zero size.
    pub fn inset(self, amount: i32) -> Self {
        let width = (self.width + 2 * amount).max(0);
        let height = (self.height + 2 * amount).max(0);
        Self::new(self.x - amount, self.y - amount, width, height)
    }

    /// Returns the smallest rectangle containing this rectangle and `point`.
    pub fn add(self, point: Point) -> Self {
        let min_x = self.x.min(point.x);
        let min_y = self.y.min(point.y);
        let max_x = self.max_x().max(point.x);
        let max_y = self.max_y().max(point.y);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loom_core::geometry::Rectangle;
    /// let header = Rectangle::new(0, 0, 100, 30);
    /// let content = Rectangle::new(10, 40, 120, 80);
    ///
    /// let combined = header.add_rectangle(content);
    /// assert_eq!(combined, Rectangle::new(0, 0, 130, 120));
    /// ```
    pub fn add_rectangle(self, other: Rectangle) -> Self {
        self.add(other.origin()).add(other.max_point())
    }

    /// Returns true if `point` lies inside the rectangle or on its boundary.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, w={}, h={}]",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Horizontal placement of text within its bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A side of a node's boundary, used to request connection points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(3, 4);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), 4);
        assert_eq!(p.with_x(7), Point::new(7, 4));
        assert_eq!(p.with_y(9), Point::new(3, 9));
    }

    #[test]
    fn test_point_translated() {
        assert_eq!(Point::new(1, 2).translated(10, -3), Point::new(11, -1));
    }

    #[test]
    fn test_dimension_null() {
        assert!(Dimension::NULL.is_null());
        assert_eq!(Dimension::default(), Dimension::NULL);
        assert!(!Dimension::new(1, 0).is_null());
    }

    #[test]
    #[should_panic(expected = "dimension must be non-negative")]
    fn test_dimension_negative_panics() {
        let _ = Dimension::new(-1, 5);
    }

    #[test]
    fn test_dimension_max() {
        let d = Dimension::new(10, 2).max(Dimension::new(3, 8));
        assert_eq!(d, Dimension::new(10, 8));
    }

    #[test]
    fn test_rectangle_max_coordinates() {
        let r = Rectangle::new(5, 10, 20, 30);
        assert_eq!(r.max_x(), 25);
        assert_eq!(r.max_y(), 40);
        assert_eq!(r.origin(), Point::new(5, 10));
        assert_eq!(r.max_point(), Point::new(25, 40));
        assert_eq!(r.dimension(), Dimension::new(20, 30));
    }

    #[test]
    fn test_rectangle_zero_size_is_legal() {
        let r = Rectangle::new(7, 7, 0, 0);
        assert_eq!(r.max_x(), 7);
        assert_eq!(r.center(), Point::new(7, 7));
    }

    #[test]
    #[should_panic(expected = "rectangle size must be non-negative")]
    fn test_rectangle_negative_panics() {
        let _ = Rectangle::new(0, 0, 10, -1);
    }

    #[test]
    fn test_rectangle_from_corners_any_order() {
        let a = Rectangle::from_corners(Point::new(30, 40), Point::new(10, 20));
        assert_eq!(a, Rectangle::new(10, 20, 20, 20));
    }

    #[test]
    fn test_rectangle_inset() {
        let r = Rectangle::new(50, 50, 100, 100);
        assert_eq!(r.inset(7), Rectangle::new(43, 43, 114, 114));
        assert_eq!(r.inset(-60), Rectangle::new(110, 110, 0, 0));
    }

    #[test]
    fn test_rectangle_add_point() {
        let r = Rectangle::new(10, 10, 10, 10);
        assert_eq!(r.add(Point::new(0, 25)), Rectangle::new(0, 10, 20, 15));
        assert_eq!(r.add(Point::new(15, 15)), r);
    }

    #[test]
    fn test_rectangle_contains() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(11, 5)));
    }

    #[test]
    fn test_rectangle_display() {
        assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "[x=1, y=2, w=3, h=4]");
    }
}
