//! Notes: free text in a box with a folded top-right corner.

use loom_core::{
    color::Color,
    draw::{Decorations, DropShadow, LineStyle, Path, RenderingContext, StringRenderer},
    geometry::{Alignment, Dimension, Point, Rectangle},
};

use crate::render::{RenderStyle, TEXT_PADDING};

/// Size of the folded corner.
pub const FOLD: i32 = 8;

pub const DEFAULT_WIDTH: i32 = 60;
pub const DEFAULT_HEIGHT: i32 = 40;

#[derive(Debug, Clone)]
pub struct NoteNodeRenderer {
    stroke: Color,
    fill: Color,
    text: StringRenderer,
}

impl NoteNodeRenderer {
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            stroke: style.stroke(),
            fill: style.note_fill(),
            text: style.string_renderer(Alignment::Left, Decorations::empty()),
        }
    }

    pub fn bounds(&self, position: Point, text: &str) -> Rectangle {
        let text_size = self.text.dimension(text);
        let size = Dimension::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).max(Dimension::new(
            text_size.width() + 2 * TEXT_PADDING,
            text_size.height() + 2 * TEXT_PADDING,
        ));
        Rectangle::from_origin(position, size)
    }

    pub fn draw(&self, position: Point, text: &str, context: &mut dyn RenderingContext) {
        let bounds = self.bounds(position, text);
        context.draw_closed_path(
            &outline(bounds),
            self.fill,
            self.stroke,
            Some(&DropShadow::default()),
        );
        context.stroke_path(&fold(bounds), self.stroke, LineStyle::Solid);

        let text_box = Rectangle::new(
            bounds.x() + TEXT_PADDING,
            bounds.y() + TEXT_PADDING,
            bounds.width() - 2 * TEXT_PADDING,
            bounds.height() - 2 * TEXT_PADDING,
        );
        self.text.draw(text, text_box, context);
    }
}

/// The note body with its top-right corner cut off.
fn outline(bounds: Rectangle) -> Path {
    let mut path = Path::new();
    path.move_to(bounds.x(), bounds.y())
        .line_to(bounds.max_x() - FOLD, bounds.y())
        .line_to(bounds.max_x(), bounds.y() + FOLD)
        .line_to(bounds.max_x(), bounds.max_y())
        .line_to(bounds.x(), bounds.max_y())
        .line_to(bounds.x(), bounds.y());
    path
}

/// The two inner edges of the folded corner.
fn fold(bounds: Rectangle) -> Path {
    let mut path = Path::new();
    path.move_to(bounds.max_x() - FOLD, bounds.y())
        .line_to(bounds.max_x() - FOLD, bounds.y() + FOLD)
        .line_to(bounds.max_x(), bounds.y() + FOLD);
    path
}
