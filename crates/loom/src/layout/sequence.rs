//! Vertical layout of sequence diagrams.
//!
//! Calls are placed by a depth-first walk of the call tree in call-edge
//! order. Each call starts [`CALL_YGAP`] below its caller's start or below its
//! previous sibling's end, and ends [`CALL_YGAP`] below its last callee. A call
//! without callees is `2 * CALL_YGAP` high. Root calls (calls nobody calls)
//! are taken lifeline by lifeline in child order and stacked under the
//! tallest lifeline box.

use indexmap::IndexMap;
use log::{debug, trace};

use loom_core::geometry::Rectangle;

use crate::{
    LoomError,
    diagram::{Diagram, NodeId, NodeKind},
    layout::LayoutContext,
    render::{CALL_YGAP, LifelineRenderer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CallSpan {
    y: i32,
    max_y: i32,
    depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LifelineSpan {
    top: Rectangle,
    bottom: i32,
}

/// Call spans, nesting depths and lifeline extents of a sequence diagram.
///
/// Calls are stored in placement order and lifelines in diagram order.
#[derive(Debug, Clone, Default)]
pub struct SequenceLayout {
    calls: IndexMap<NodeId, CallSpan>,
    lifelines: IndexMap<NodeId, LifelineSpan>,
}

impl SequenceLayout {
    /// Returns a layout with no calls or lifelines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lays out every lifeline and call of `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`LoomError::Layout`] if a call is not owned by a lifeline, a
    /// call edge touches a node that is not a call, a call has more than one
    /// caller, or the call edges contain a cycle.
    pub fn compute(diagram: &Diagram, lifelines: &LifelineRenderer) -> Result<Self, LoomError> {
        let mut layout = Self::empty();

        for node in diagram.nodes() {
            if let NodeKind::Lifeline { name } = node.kind() {
                let top = lifelines.top_box(node.position(), name);
                layout
                    .lifelines
                    .insert(node.id(), LifelineSpan { top, bottom: top.max_y() });
            }
        }

        layout.validate(diagram)?;

        let tallest = layout
            .lifelines
            .values()
            .map(|span| span.top.max_y())
            .max()
            .unwrap_or_default();

        let roots: Vec<NodeId> = layout
            .lifelines
            .keys()
            .flat_map(|lifeline| diagram.node(*lifeline).children())
            .copied()
            .filter(|child| diagram.node(*child).kind().is_call() && diagram.caller(*child).is_none())
            .collect();

        let mut cursor = tallest + CALL_YGAP;
        let mut chain = Vec::new();
        for root in roots {
            let end = layout.place_call(diagram, root, cursor, &mut chain)?;
            cursor = end + CALL_YGAP;
        }

        if let Some(unplaced) = diagram
            .nodes()
            .find(|node| node.kind().is_call() && !layout.calls.contains_key(&node.id()))
        {
            return Err(LoomError::Layout(format!(
                "call {} is part of a call cycle",
                unplaced.id()
            )));
        }

        for (lifeline, span) in layout.lifelines.iter_mut() {
            let last_call_end = diagram
                .node(*lifeline)
                .children()
                .iter()
                .filter_map(|child| layout.calls.get(child))
                .map(|call| call.max_y + CALL_YGAP)
                .max()
                .unwrap_or_default();
            span.bottom = (span.top.max_y() + 2 * CALL_YGAP).max(last_call_end);
        }

        debug!(
            calls = layout.calls.len(),
            lifelines = layout.lifelines.len(),
            bottom = cursor;
            "Computed sequence layout"
        );

        Ok(layout)
    }

    fn validate(&self, diagram: &Diagram) -> Result<(), LoomError> {
        for node in diagram.nodes().filter(|node| node.kind().is_call()) {
            let owned = node
                .parent()
                .is_some_and(|parent| self.lifelines.contains_key(&parent));
            if !owned {
                return Err(LoomError::Layout(format!(
                    "call {} is not owned by a lifeline",
                    node.id()
                )));
            }
        }

        for edge in diagram.call_edges() {
            let connects_calls = diagram.node(edge.caller()).kind().is_call()
                && diagram.node(edge.callee()).kind().is_call();
            if !connects_calls {
                return Err(LoomError::Layout(format!(
                    "call edge {} -> {} must connect two calls",
                    edge.caller(),
                    edge.callee()
                )));
            }
        }

        Ok(())
    }

    /// Places `call` at `start` and its callees below it; returns the end of `call`.
    fn place_call(
        &mut self,
        diagram: &Diagram,
        call: NodeId,
        start: i32,
        chain: &mut Vec<NodeId>,
    ) -> Result<i32, LoomError> {
        if chain.contains(&call) {
            return Err(LoomError::Layout(format!(
                "call {call} is part of a call cycle"
            )));
        }
        if self.calls.contains_key(&call) {
            return Err(LoomError::Layout(format!(
                "call {call} has more than one caller"
            )));
        }

        let lifeline = diagram.node(call).parent();
        let depth = chain
            .iter()
            .filter(|ancestor| diagram.node(**ancestor).parent() == lifeline)
            .count();
        self.calls.insert(
            call,
            CallSpan {
                y: start,
                max_y: start,
                depth,
            },
        );

        chain.push(call);
        let mut cursor = start;
        for callee in diagram.callees(call) {
            cursor = self.place_call(diagram, callee, cursor + CALL_YGAP, chain)?;
        }
        chain.pop();

        let last_callee_end = if cursor > start { cursor + CALL_YGAP } else { start };
        let end = last_callee_end.max(start + 2 * CALL_YGAP);

        if let Some(span) = self.calls.get_mut(&call) {
            span.max_y = end;
        }
        trace!(call = call.index(), y = start, max_y = end, depth = depth; "Placed call");

        Ok(end)
    }

    /// Returns the calls in placement order.
    pub fn calls(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.calls.keys().copied()
    }

    /// Returns the lifelines in diagram order.
    pub fn lifelines(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.lifelines.keys().copied()
    }

    /// Returns the box at the top of `lifeline`, if it took part in the layout.
    pub fn top_box(&self, lifeline: NodeId) -> Option<Rectangle> {
        self.lifelines.get(&lifeline).map(|span| span.top)
    }
}

impl LayoutContext for SequenceLayout {
    fn y(&self, call: NodeId) -> i32 {
        self.calls[&call].y
    }

    fn max_y(&self, call: NodeId) -> i32 {
        self.calls[&call].max_y
    }

    fn nesting_depth(&self, call: NodeId) -> usize {
        self.calls[&call].depth
    }

    fn center_x(&self, lifeline: NodeId) -> i32 {
        self.lifelines[&lifeline].top.center().x()
    }

    fn lifeline_bottom(&self, lifeline: NodeId) -> i32 {
        self.lifelines[&lifeline].bottom
    }
}
