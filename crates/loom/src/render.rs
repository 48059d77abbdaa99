//! Per-node-kind geometry and drawing.
//!
//! Each node kind has a renderer that computes the node's bounds and issues
//! primitive calls on a [`RenderingContext`]. [`NodeRenderer`] owns one
//! renderer per kind and dispatches on [`NodeKind`].
//!
//! Renderers that depend on derived sequence-diagram state (call spans,
//! lifeline centers) read it through a [`LayoutContext`].

mod call;
mod lifeline;
mod note;
mod type_node;

pub use call::{CALL_YGAP, CallNodeRenderer, NESTING_SHIFT};
pub use lifeline::LifelineRenderer;
pub use note::NoteNodeRenderer;
pub use type_node::{TypeCompartments, TypeNodeRenderer};

use std::rc::Rc;

use log::trace;

use loom_core::{
    color::Color,
    draw::{Decorations, FontMetrics, RenderingContext, StringRenderer, TextDefinition},
    geometry::{Alignment, Direction, Point, Rectangle},
};

use crate::{
    LoomError,
    config::RenderConfig,
    diagram::{Node, NodeKind},
    layout::LayoutContext,
};

/// Horizontal space between text and the border of its node.
pub const TEXT_PADDING: i32 = 5;

/// Resolved colors and text settings shared by all node renderers of a pass.
#[derive(Clone)]
pub struct RenderStyle {
    stroke: Color,
    fill: Color,
    note_fill: Color,
    text: Rc<TextDefinition>,
    metrics: Rc<dyn FontMetrics>,
}

impl std::fmt::Debug for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderStyle")
            .field("stroke", &self.stroke)
            .field("fill", &self.fill)
            .field("note_fill", &self.note_fill)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl RenderStyle {
    pub fn new(
        stroke: Color,
        fill: Color,
        note_fill: Color,
        text: TextDefinition,
        metrics: Rc<dyn FontMetrics>,
    ) -> Self {
        Self {
            stroke,
            fill,
            note_fill,
            text: Rc::new(text),
            metrics,
        }
    }

    /// Resolves every configured color.
    ///
    /// # Errors
    ///
    /// Returns [`LoomError::Config`] for the first color that cannot be parsed.
    pub fn from_config(
        config: &RenderConfig,
        metrics: Rc<dyn FontMetrics>,
    ) -> Result<Self, LoomError> {
        let style = config.style();
        Ok(Self::new(
            style.stroke().map_err(LoomError::Config)?,
            style.fill().map_err(LoomError::Config)?,
            style.note_fill().map_err(LoomError::Config)?,
            config.text_definition()?,
            metrics,
        ))
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn note_fill(&self) -> Color {
        self.note_fill
    }

    /// Creates a text renderer with this style's font and metrics.
    pub fn string_renderer(&self, alignment: Alignment, decorations: Decorations) -> StringRenderer {
        StringRenderer::new(
            Rc::clone(&self.text),
            Rc::clone(&self.metrics),
            alignment,
            decorations,
        )
    }
}

/// Selects the renderer for a node by its kind.
#[derive(Debug)]
pub struct NodeRenderer {
    lifeline: LifelineRenderer,
    call: CallNodeRenderer,
    type_node: TypeNodeRenderer,
    note: NoteNodeRenderer,
}

impl NodeRenderer {
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            lifeline: LifelineRenderer::new(style),
            call: CallNodeRenderer::new(style),
            type_node: TypeNodeRenderer::new(style),
            note: NoteNodeRenderer::new(style),
        }
    }

    pub fn lifeline(&self) -> &LifelineRenderer {
        &self.lifeline
    }

    pub fn call(&self) -> &CallNodeRenderer {
        &self.call
    }

    /// Draws `node` onto `context`.
    pub fn draw(&self, node: &Node, layout: &dyn LayoutContext, context: &mut dyn RenderingContext) {
        trace!(node = node.id().index(); "Drawing node");
        match node.kind() {
            NodeKind::Lifeline { name } => self.lifeline.draw(node, name, layout, context),
            NodeKind::Call { open_bottom } => self.call.draw(node, *open_bottom, layout, context),
            NodeKind::Class {
                name,
                attributes,
                methods,
            } => self.type_node.draw(
                node.position(),
                &TypeCompartments::class(name, attributes, methods),
                context,
            ),
            NodeKind::Interface { name, methods } => self.type_node.draw(
                node.position(),
                &TypeCompartments::interface(name, methods),
                context,
            ),
            NodeKind::Note { text } => self.note.draw(node.position(), text, context),
        }
    }

    /// Returns the area `node` occupies.
    pub fn bounds(&self, node: &Node, layout: &dyn LayoutContext) -> Rectangle {
        match node.kind() {
            NodeKind::Lifeline { name } => self.lifeline.bounds(node, name, layout),
            NodeKind::Call { .. } => self.call.bounds(node, layout),
            NodeKind::Class {
                name,
                attributes,
                methods,
            } => self.type_node.bounds(
                node.position(),
                &TypeCompartments::class(name, attributes, methods),
            ),
            NodeKind::Interface { name, methods } => self
                .type_node
                .bounds(node.position(), &TypeCompartments::interface(name, methods)),
            NodeKind::Note { text } => self.note.bounds(node.position(), text),
        }
    }

    /// Returns where an edge leaving `node` towards `direction` attaches.
    ///
    /// Calls use their activation geometry; every other node attaches at the
    /// middle of the matching side of its bounds.
    pub fn connection_point(
        &self,
        node: &Node,
        direction: Direction,
        layout: &dyn LayoutContext,
    ) -> Point {
        match node.kind() {
            NodeKind::Call { .. } => self.call.connection_point(node, direction, layout),
            _ => side_midpoint(self.bounds(node, layout), direction),
        }
    }
}

fn side_midpoint(bounds: Rectangle, direction: Direction) -> Point {
    let center = bounds.center();
    match direction {
        Direction::North => center.with_y(bounds.y()),
        Direction::South => center.with_y(bounds.max_y()),
        Direction::East => center.with_x(bounds.max_x()),
        Direction::West => center.with_x(bounds.x()),
    }
}
