//! Class and interface boxes.
//!
//! A type box stacks three compartments: the name, the attributes and the
//! methods. Empty compartments collapse to zero height and lose their
//! separator line. Every line is centered; name lines are bold. Lines
//! wrapped in `/…/` or `_…_` are drawn italic or underlined with the
//! delimiters removed.

use std::borrow::Cow;

use loom_core::{
    color::Color,
    draw::{
        Decoration, Decorations, DropShadow, LineStyle, RenderingContext, StringRenderer,
        markup::parse_markup,
    },
    geometry::{Alignment, Point, Rectangle},
};

use crate::render::{RenderStyle, TEXT_PADDING};

/// Minimum width of a type box.
pub const DEFAULT_WIDTH: i32 = 100;

const INTERFACE_STEREOTYPE: &str = "\u{ab}interface\u{bb}";

/// The text of the three compartments of a type box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCompartments<'a> {
    name: Cow<'a, str>,
    attributes: &'a str,
    methods: &'a str,
}

impl<'a> TypeCompartments<'a> {
    pub fn class(name: &'a str, attributes: &'a str, methods: &'a str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            attributes,
            methods,
        }
    }

    /// Interfaces show a stereotype line above the name and have no attributes.
    pub fn interface(name: &'a str, methods: &'a str) -> Self {
        let name = if name.is_empty() {
            Cow::Borrowed(INTERFACE_STEREOTYPE)
        } else {
            Cow::Owned(format!("{INTERFACE_STEREOTYPE}\n{name}"))
        };
        Self {
            name,
            attributes: "",
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &str {
        self.attributes
    }

    pub fn methods(&self) -> &str {
        self.methods
    }
}

#[derive(Debug, Clone)]
pub struct TypeNodeRenderer {
    stroke: Color,
    fill: Color,
    name: StringRenderer,
    members: StringRenderer,
}

impl TypeNodeRenderer {
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            stroke: style.stroke(),
            fill: style.fill(),
            name: style.string_renderer(Alignment::Center, Decoration::Bold.into()),
            members: style.string_renderer(Alignment::Center, Decorations::empty()),
        }
    }

    fn block_height(&self, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        visible_lines(text).count() as i32 * self.members.line_height()
    }

    fn block_width(renderer: &StringRenderer, text: &str) -> i32 {
        text.split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let (visible, decorations) = parse_markup(line);
                renderer
                    .with_decorations(decorations)
                    .dimension(&visible)
                    .width()
            })
            .max()
            .unwrap_or_default()
    }

    pub fn bounds(&self, position: Point, compartments: &TypeCompartments<'_>) -> Rectangle {
        let text_width = Self::block_width(&self.name, compartments.name())
            .max(Self::block_width(&self.members, compartments.attributes()))
            .max(Self::block_width(&self.members, compartments.methods()));
        let width = DEFAULT_WIDTH.max(text_width + 2 * TEXT_PADDING);
        let height = self.block_height(compartments.name())
            + self.block_height(compartments.attributes())
            + self.block_height(compartments.methods());
        Rectangle::new(position.x(), position.y(), width, height)
    }

    pub fn draw(
        &self,
        position: Point,
        compartments: &TypeCompartments<'_>,
        context: &mut dyn RenderingContext,
    ) {
        let bounds = self.bounds(position, compartments);
        context.draw_rectangle(bounds, self.fill, self.stroke, Some(&DropShadow::default()));

        let name_height = self.block_height(compartments.name());
        let attributes_height = self.block_height(compartments.attributes());
        let methods_height = self.block_height(compartments.methods());

        let mut y = bounds.y();
        self.draw_block(&self.name, compartments.name(), bounds, y, context);
        y += name_height;

        if attributes_height > 0 {
            context.stroke_line(bounds.x(), y, bounds.max_x(), y, self.stroke, LineStyle::Solid);
            self.draw_block(&self.members, compartments.attributes(), bounds, y, context);
            y += attributes_height;
        }

        if methods_height > 0 {
            context.stroke_line(bounds.x(), y, bounds.max_x(), y, self.stroke, LineStyle::Solid);
            self.draw_block(&self.members, compartments.methods(), bounds, y, context);
        }
    }

    /// Draws the non-blank lines of `text` one below the other starting at `top`.
    fn draw_block(
        &self,
        renderer: &StringRenderer,
        text: &str,
        bounds: Rectangle,
        top: i32,
        context: &mut dyn RenderingContext,
    ) {
        let line_height = self.members.line_height();
        for (index, line) in visible_lines(text).enumerate() {
            let (visible, decorations) = parse_markup(line);
            let line_box = Rectangle::new(
                bounds.x(),
                top + index as i32 * line_height,
                bounds.width(),
                line_height,
            );
            renderer
                .with_decorations(decorations)
                .draw(&visible, line_box, context);
        }
    }
}

fn visible_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}
