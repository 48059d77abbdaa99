//! Loom - layout and rendering for UML class and sequence diagrams.
//!
//! A [`Diagram`](diagram::Diagram) is built by the caller; [`DiagramRenderer`]
//! computes its derived layout, draws it onto any
//! [`RenderingContext`](draw::RenderingContext) and exports it as SVG.
//!
//! Geometry, colors, grid snapping and the drawing protocol live in
//! `loom-core` and are re-exported here.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod render;

mod error;

pub use loom_core::{color, draw, geometry, grid};

pub use error::LoomError;

use std::rc::Rc;

use log::{debug, info};

use config::RenderConfig;
use diagram::{Diagram, DiagramKind, NodeId, NodeKind};
use draw::{FontMetrics, RenderingContext};
use export::svg::SvgRenderingContext;
use geometry::{Direction, Point, Rectangle};
use layout::{LayoutContext, SequenceLayout};
use render::{NodeRenderer, RenderStyle};

/// Lays out and draws one diagram.
///
/// The derived layout is computed once in [`new`](Self::new); build a new
/// renderer when the diagram changes.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
///
/// use loom::{
///     DiagramRenderer,
///     config::RenderConfig,
///     diagram::{Diagram, DiagramKind, NodeKind},
///     draw::ApproximateMetrics,
///     geometry::Point,
/// };
///
/// let mut diagram = Diagram::new(DiagramKind::Class);
/// diagram.add_node(NodeKind::class("Shape", "", "area()"), Point::new(0, 0));
///
/// let renderer =
///     DiagramRenderer::new(&diagram, &RenderConfig::default(), Rc::new(ApproximateMetrics))
///         .expect("valid diagram");
/// let svg = renderer.render_svg();
/// assert!(svg.contains("font-weight=\"bold\""));
/// ```
#[derive(Debug)]
pub struct DiagramRenderer<'a> {
    diagram: &'a Diagram,
    layout: SequenceLayout,
    renderer: NodeRenderer,
}

impl<'a> DiagramRenderer<'a> {
    /// Resolves the style from `config` and computes the layout of `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`LoomError::Config`] when a configured color is invalid, and
    /// [`LoomError::Layout`] when the diagram cannot be laid out (including
    /// sequence nodes in a class diagram).
    pub fn new(
        diagram: &'a Diagram,
        config: &RenderConfig,
        metrics: Rc<dyn FontMetrics>,
    ) -> Result<Self, LoomError> {
        info!(diagram_kind:? = diagram.kind(), nodes = diagram.len(); "Preparing diagram");

        let style = RenderStyle::from_config(config, metrics)?;
        let renderer = NodeRenderer::new(&style);

        let layout = match diagram.kind() {
            DiagramKind::Sequence => SequenceLayout::compute(diagram, renderer.lifeline())?,
            DiagramKind::Class => {
                if let Some(node) = diagram
                    .nodes()
                    .find(|node| node.kind().is_call() || node.kind().is_lifeline())
                {
                    return Err(LoomError::Layout(format!(
                        "class diagram contains sequence node {}",
                        node.id()
                    )));
                }
                SequenceLayout::empty()
            }
        };

        Ok(Self {
            diagram,
            layout,
            renderer,
        })
    }

    pub fn diagram(&self) -> &Diagram {
        self.diagram
    }

    pub fn layout(&self) -> &SequenceLayout {
        &self.layout
    }

    /// Draws every node onto `context`.
    ///
    /// Lifelines come first, then calls from the outermost nesting level
    /// inwards, then classes and interfaces, then notes.
    pub fn draw(&self, context: &mut dyn RenderingContext) {
        let nodes: Vec<_> = self.diagram.nodes().collect();

        for node in nodes.iter().filter(|node| node.kind().is_lifeline()) {
            self.renderer.draw(node, &self.layout, context);
        }

        let mut calls: Vec<_> = nodes.iter().filter(|node| node.kind().is_call()).collect();
        calls.sort_by_key(|node| self.layout.nesting_depth(node.id()));
        for node in calls {
            self.renderer.draw(node, &self.layout, context);
        }

        for node in nodes.iter().filter(|node| {
            matches!(
                node.kind(),
                NodeKind::Class { .. } | NodeKind::Interface { .. }
            )
        }) {
            self.renderer.draw(node, &self.layout, context);
        }

        for node in nodes
            .iter()
            .filter(|node| matches!(node.kind(), NodeKind::Note { .. }))
        {
            self.renderer.draw(node, &self.layout, context);
        }
    }

    /// Returns the smallest rectangle containing every node, or an empty
    /// rectangle at the origin for an empty diagram.
    pub fn bounds(&self) -> Rectangle {
        self.diagram
            .nodes()
            .map(|node| self.renderer.bounds(node, &self.layout))
            .reduce(Rectangle::add_rectangle)
            .unwrap_or_default()
    }

    /// Returns the area occupied by the node `id`.
    pub fn node_bounds(&self, id: NodeId) -> Rectangle {
        self.renderer.bounds(self.diagram.node(id), &self.layout)
    }

    /// Returns where an edge leaving node `id` towards `direction` attaches.
    pub fn connection_point(&self, id: NodeId, direction: Direction) -> Point {
        self.renderer
            .connection_point(self.diagram.node(id), direction, &self.layout)
    }

    /// Draws the diagram into a standalone SVG document.
    pub fn render_svg(&self) -> String {
        let bounds = self.bounds();
        info!(bounds:% = bounds; "Exporting diagram to SVG");

        let mut svg = SvgRenderingContext::new(bounds);
        self.draw(&mut svg);
        let document = svg.create();

        debug!(bytes = document.len(); "SVG export finished");
        document
    }
}
