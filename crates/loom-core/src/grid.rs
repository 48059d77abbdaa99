//! Snapping of coordinates to the diagram grid.
//!
//! The grid has a fixed unit of [`GRID_SIZE`] logical units. Values are mapped
//! to the nearest grid line; a value exactly halfway between two lines goes to
//! the higher one.

use crate::geometry::{Point, Rectangle};

/// Distance between two grid lines.
pub const GRID_SIZE: i32 = 10;

/// Rounds `value` to the nearest multiple of [`GRID_SIZE`].
///
/// Midpoints round up, so `5` becomes `10` and `15` becomes `20`.
///
/// # Examples
///
/// ```
/// # use loom_core::grid::to_multiple;
/// assert_eq!(to_multiple(4), 0);
/// assert_eq!(to_multiple(5), 10);
/// assert_eq!(to_multiple(23), 20);
/// ```
pub fn to_multiple(value: i32) -> i32 {
    let remainder = value.rem_euclid(GRID_SIZE);
    let lower = value - remainder;
    if remainder * 2 >= GRID_SIZE {
        lower + GRID_SIZE
    } else {
        lower
    }
}

/// Snaps only the x-coordinate of `point`.
pub fn snapped_horizontally(point: Point) -> Point {
    point.with_x(to_multiple(point.x()))
}

/// Snaps only the y-coordinate of `point`.
pub fn snapped_vertically(point: Point) -> Point {
    point.with_y(to_multiple(point.y()))
}

/// Snaps both coordinates of `point`.
pub fn snapped(point: Point) -> Point {
    Point::new(to_multiple(point.x()), to_multiple(point.y()))
}

/// Snaps a rectangle by snapping its two corners independently.
///
/// The size of the result is the distance between the snapped corners, so it
/// can differ by one grid unit from snapping the width and height directly.
///
/// # Examples
///
/// ```
/// # use loom_core::{geometry::Rectangle, grid::snapped_rectangle};
/// let snapped = snapped_rectangle(Rectangle::new(8, 8, 18, 18));
/// assert_eq!(snapped, Rectangle::new(10, 10, 20, 20));
/// ```
pub fn snapped_rectangle(rectangle: Rectangle) -> Rectangle {
    Rectangle::from_corners(snapped(rectangle.origin()), snapped(rectangle.max_point()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_multiple_below_midpoint() {
        for value in 0..5 {
            assert_eq!(to_multiple(value), 0, "value {value}");
        }
        for value in 10..15 {
            assert_eq!(to_multiple(value), 10, "value {value}");
        }
    }

    #[test]
    fn test_to_multiple_midpoint_rounds_up() {
        assert_eq!(to_multiple(5), 10);
        assert_eq!(to_multiple(15), 20);
        assert_eq!(to_multiple(105), 110);
    }

    #[test]
    fn test_to_multiple_above_midpoint() {
        for value in 5..=10 {
            assert_eq!(to_multiple(value), 10, "value {value}");
        }
        assert_eq!(to_multiple(19), 20);
    }

    #[test]
    fn test_snapped_horizontally() {
        assert_eq!(snapped_horizontally(Point::new(0, 2)), Point::new(0, 2));
        assert_eq!(snapped_horizontally(Point::new(4, 2)), Point::new(0, 2));
        assert_eq!(snapped_horizontally(Point::new(5, 2)), Point::new(10, 2));
        assert_eq!(snapped_horizontally(Point::new(9, 2)), Point::new(10, 2));
    }

    #[test]
    fn test_snapped_vertically() {
        assert_eq!(snapped_vertically(Point::new(2, 8)), Point::new(2, 10));
        assert_eq!(snapped_vertically(Point::new(2, 14)), Point::new(2, 10));
        assert_eq!(snapped_vertically(Point::new(2, 15)), Point::new(2, 20));
    }

    #[test]
    fn test_snapped_both_coordinates() {
        assert_eq!(snapped(Point::new(4, 4)), Point::new(0, 0));
        assert_eq!(snapped(Point::new(0, 5)), Point::new(0, 10));
        assert_eq!(snapped(Point::new(5, 6)), Point::new(10, 10));
    }

    #[test]
    fn test_snapped_rectangle_uses_corners() {
        let snapped = snapped_rectangle(Rectangle::new(8, 8, 18, 18));
        assert_eq!(snapped, Rectangle::new(10, 10, 20, 20));
    }

    #[test]
    fn test_snapped_rectangle_size_drift() {
        // Component-wise snapping would give a width of 10; corners give 20.
        let snapped = snapped_rectangle(Rectangle::new(4, 0, 12, 10));
        assert_eq!(snapped, Rectangle::new(0, 0, 20, 10));
    }

    #[test]
    fn test_snapped_rectangle_degenerate() {
        let snapped = snapped_rectangle(Rectangle::new(3, 3, 0, 0));
        assert_eq!(snapped, Rectangle::new(0, 0, 0, 0));
    }
}
