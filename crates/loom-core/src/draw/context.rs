//! The drawing-command protocol shared by every rendering backend.

use crate::{
    color::Color,
    draw::{Font, FontDimension, LineStyle},
    geometry::{Alignment, Rectangle},
};

/// Default distance between a shape and its shadow copy.
const DEFAULT_SHADOW_OFFSET: i32 = 2;

/// A request to render a blurred, offset copy of a shape beneath it.
///
/// Backends that support shadows emit the shadow copy strictly before the
/// primary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropShadow {
    offset: i32,
}

impl DropShadow {
    /// Creates a shadow displaced by `offset` units to the right and down.
    pub fn new(offset: i32) -> Self {
        Self { offset }
    }

    /// Returns the horizontal and vertical displacement of the shadow.
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

impl Default for DropShadow {
    fn default() -> Self {
        Self::new(DEFAULT_SHADOW_OFFSET)
    }
}

/// One segment command of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElement {
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
    QuadCurveTo {
        control_x: i32,
        control_y: i32,
        x: i32,
        y: i32,
    },
}

/// An ordered list of path commands.
///
/// # Examples
///
/// ```
/// # use loom_core::draw::{Path, PathElement};
/// let mut path = Path::new();
/// path.move_to(0, 0).line_to(10, 0).quad_to(15, 5, 10, 10);
/// assert_eq!(path.elements().len(), 3);
/// assert_eq!(path.elements()[1], PathElement::LineTo { x: 10, y: 0 });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sub-path at `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.elements.push(PathElement::MoveTo { x, y });
        self
    }

    /// Adds a straight segment to `(x, y)`.
    pub fn line_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.elements.push(PathElement::LineTo { x, y });
        self
    }

    /// Adds a quadratic curve to `(x, y)` with the given control point.
    pub fn quad_to(&mut self, control_x: i32, control_y: i32, x: i32, y: i32) -> &mut Self {
        self.elements.push(PathElement::QuadCurveTo {
            control_x,
            control_y,
            x,
            y,
        });
        self
    }

    /// Returns the path commands in drawing order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// The primitive vocabulary every rendering backend implements.
///
/// All coordinates are logical diagram coordinates. Calls never fail for valid
/// geometry: zero-size rectangles and zero-radius arcs are drawn as zero-size
/// primitives. A backend instance belongs to a single render pass.
pub trait RenderingContext {
    /// Draws a filled and stroked rectangle.
    fn draw_rectangle(
        &mut self,
        rectangle: Rectangle,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    );

    /// Draws a rectangle with corners rounded by a radius of 10.
    fn draw_rounded_rectangle(
        &mut self,
        rectangle: Rectangle,
        stroke: Color,
        fill: Color,
        shadow: Option<&DropShadow>,
    );

    /// Draws the oval inscribed in the box `(x, y, width, height)`.
    #[allow(clippy::too_many_arguments)]
    fn draw_oval(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    );

    /// Fills and strokes a closed path.
    fn draw_closed_path(
        &mut self,
        path: &Path,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    );

    /// Strokes an open path without filling it.
    fn stroke_path(&mut self, path: &Path, color: Color, style: LineStyle);

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, style: LineStyle);

    /// Strokes a circular arc.
    ///
    /// Angles are in degrees, `0` points north and positive values sweep
    /// clockwise. The arc goes from the start angle to `start_angle - arc_length`.
    fn stroke_arc(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius: i32,
        start_angle: i32,
        arc_length: i32,
        color: Color,
    );

    /// Draws a single line of text inside `bounds`.
    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rectangle,
        alignment: Alignment,
        color: Color,
        font: &Font,
        dimension: FontDimension,
    );
}
