//! Activation boxes of sequence diagrams.
//!
//! A call is a narrow box on its lifeline spanning the vertical interval
//! computed by the layout. Nested calls on the same lifeline shift right by
//! [`NESTING_SHIFT`] per level.
//!
//! An open-bottom call is drawn without its bottom edge and with the last
//! [`CALL_YGAP`] of its sides dotted, marking an activation that has not
//! returned yet.

use loom_core::{
    color::Color,
    draw::{LineStyle, RenderingContext},
    geometry::{Direction, Point, Rectangle},
};

use crate::{diagram::Node, layout::LayoutContext, render::RenderStyle};

/// Width of an activation box.
pub const WIDTH: i32 = 16;

/// Vertical gap between consecutive calls, and the length of the dotted tail
/// of an open-bottom call.
pub const CALL_YGAP: i32 = 20;

/// Horizontal shift per nesting level.
pub const NESTING_SHIFT: i32 = 10;

#[derive(Debug, Clone)]
pub struct CallNodeRenderer {
    stroke: Color,
    fill: Color,
}

impl CallNodeRenderer {
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            stroke: style.stroke(),
            fill: style.fill(),
        }
    }

    /// Left edge of the box: centered on the lifeline, then shifted by nesting depth.
    fn x(&self, call: &Node, layout: &dyn LayoutContext) -> i32 {
        let lifeline = call
            .parent()
            .expect("call nodes are validated to have a lifeline parent");
        let center_x = layout.center_x(lifeline);
        let depth = layout.nesting_depth(call.id()) as i32;
        center_x - WIDTH / 2 + NESTING_SHIFT * depth
    }

    /// Returns the activation box of `call`.
    ///
    /// # Panics
    ///
    /// Panics if `call` has no owning lifeline.
    pub fn bounds(&self, call: &Node, layout: &dyn LayoutContext) -> Rectangle {
        let y = layout.y(call.id());
        let max_y = layout.max_y(call.id());
        Rectangle::new(self.x(call, layout), y, WIDTH, max_y - y)
    }

    pub fn draw(
        &self,
        call: &Node,
        open_bottom: bool,
        layout: &dyn LayoutContext,
        context: &mut dyn RenderingContext,
    ) {
        let bounds = self.bounds(call, layout);
        if !open_bottom {
            context.draw_rectangle(bounds, self.fill, self.stroke, None);
            return;
        }

        context.draw_rectangle(bounds, self.fill, self.fill, None);

        let (x1, x2) = (bounds.x(), bounds.max_x());
        let (y1, y3) = (bounds.y(), bounds.max_y());
        let y2 = y3 - CALL_YGAP;
        context.stroke_line(x1, y1, x2, y1, self.stroke, LineStyle::Solid);
        context.stroke_line(x1, y1, x1, y2, self.stroke, LineStyle::Solid);
        context.stroke_line(x2, y1, x2, y2, self.stroke, LineStyle::Solid);
        context.stroke_line(x1, y2, x1, y3, self.stroke, LineStyle::Dotted);
        context.stroke_line(x2, y2, x2, y3, self.stroke, LineStyle::Dotted);
    }

    /// Returns where messages attach to the call.
    ///
    /// Horizontal messages attach at the top corners; North and South are the
    /// middle of the top and bottom edges.
    pub fn connection_point(
        &self,
        call: &Node,
        direction: Direction,
        layout: &dyn LayoutContext,
    ) -> Point {
        let bounds = self.bounds(call, layout);
        match direction {
            Direction::East => Point::new(bounds.max_x(), bounds.y()),
            Direction::West => Point::new(bounds.x(), bounds.y()),
            Direction::North => Point::new(bounds.x() + WIDTH / 2, bounds.y()),
            Direction::South => Point::new(bounds.x() + WIDTH / 2, bounds.max_y()),
        }
    }
}
