//! Lifelines of sequence diagrams.
//!
//! A lifeline is a shadowed box holding the underlined object name, with a
//! dotted line running down from the box to the bottom computed by the layout.

use loom_core::{
    color::Color,
    draw::{Decoration, DropShadow, LineStyle, RenderingContext, StringRenderer},
    geometry::{Alignment, Point, Rectangle},
};

use crate::{
    diagram::Node,
    layout::LayoutContext,
    render::{RenderStyle, TEXT_PADDING},
};

/// Height of the box at the top of a lifeline.
pub const TOP_HEIGHT: i32 = 60;

/// Minimum width of the top box.
pub const DEFAULT_WIDTH: i32 = 80;

#[derive(Debug, Clone)]
pub struct LifelineRenderer {
    stroke: Color,
    fill: Color,
    name: StringRenderer,
}

impl LifelineRenderer {
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            stroke: style.stroke(),
            fill: style.fill(),
            name: style.string_renderer(Alignment::Center, Decoration::Underlined.into()),
        }
    }

    /// Returns the box at the top of the lifeline, which sizes itself to the name.
    pub fn top_box(&self, position: Point, name: &str) -> Rectangle {
        let width = DEFAULT_WIDTH.max(self.name.dimension(name).width() + 2 * TEXT_PADDING);
        Rectangle::new(position.x(), position.y(), width, TOP_HEIGHT)
    }

    /// Returns the area from the top box down to the end of the dotted line.
    pub fn bounds(&self, lifeline: &Node, name: &str, layout: &dyn LayoutContext) -> Rectangle {
        let top = self.top_box(lifeline.position(), name);
        let bottom = layout.lifeline_bottom(lifeline.id()).max(top.max_y());
        Rectangle::new(top.x(), top.y(), top.width(), bottom - top.y())
    }

    pub fn draw(
        &self,
        lifeline: &Node,
        name: &str,
        layout: &dyn LayoutContext,
        context: &mut dyn RenderingContext,
    ) {
        let top = self.top_box(lifeline.position(), name);
        context.draw_rectangle(top, self.fill, self.stroke, Some(&DropShadow::default()));

        let text_height = self.name.dimension(name).height();
        let text_box = Rectangle::new(
            top.x(),
            top.y() + (top.height() - text_height).max(0) / 2,
            top.width(),
            text_height,
        );
        self.name.draw(name, text_box, context);

        let center_x = layout.center_x(lifeline.id());
        let bottom = layout.lifeline_bottom(lifeline.id());
        if bottom > top.max_y() {
            context.stroke_line(
                center_x,
                top.max_y(),
                center_x,
                bottom,
                self.stroke,
                LineStyle::Dotted,
            );
        }
    }
}
