//! The read-only diagram model consumed by the renderer.
//!
//! A [`Diagram`] is an arena of [`Node`]s addressed by [`NodeId`]. Nodes form a
//! containment tree (a lifeline owns its calls) and, in sequence diagrams,
//! call nodes are additionally linked by ordered [`CallEdge`]s.
//!
//! Editing, persistence and validation of user input live elsewhere; the
//! renderer only reads this structure.
//!
//! # Example
//!
//! ```
//! # use loom::diagram::{Diagram, DiagramKind, NodeKind};
//! # use loom_core::geometry::Point;
//! let mut diagram = Diagram::new(DiagramKind::Sequence);
//! let client = diagram.add_node(NodeKind::lifeline("client"), Point::new(0, 0));
//! let server = diagram.add_node(NodeKind::lifeline("server"), Point::new(200, 0));
//! let request = diagram.add_child(client, NodeKind::call(false), Point::new(0, 0));
//! let handle = diagram.add_child(server, NodeKind::call(false), Point::new(0, 0));
//! diagram.add_call_edge(request, handle);
//!
//! assert_eq!(diagram.callees(request), vec![handle]);
//! assert_eq!(diagram.caller(handle), Some(request));
//! assert_eq!(diagram.node(handle).parent(), Some(server));
//! ```

use std::fmt;

use loom_core::geometry::Point;

/// Handle to a node of a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The type of diagram, which selects the layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Class,
    Sequence,
}

/// The closed set of node kinds the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An object's timeline in a sequence diagram.
    Lifeline { name: String },
    /// A method activation hosted by a lifeline.
    Call { open_bottom: bool },
    Class {
        name: String,
        attributes: String,
        methods: String,
    },
    Interface { name: String, methods: String },
    Note { text: String },
}

impl NodeKind {
    pub fn lifeline(name: impl Into<String>) -> Self {
        Self::Lifeline { name: name.into() }
    }

    pub fn call(open_bottom: bool) -> Self {
        Self::Call { open_bottom }
    }

    pub fn class(
        name: impl Into<String>,
        attributes: impl Into<String>,
        methods: impl Into<String>,
    ) -> Self {
        Self::Class {
            name: name.into(),
            attributes: attributes.into(),
            methods: methods.into(),
        }
    }

    pub fn interface(name: impl Into<String>, methods: impl Into<String>) -> Self {
        Self::Interface {
            name: name.into(),
            methods: methods.into(),
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }

    pub fn is_lifeline(&self) -> bool {
        matches!(self, Self::Lifeline { .. })
    }
}

/// A node of the diagram: its kind, top-left position and place in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    position: Point,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A directed `caller -> callee` link between two call nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallEdge {
    caller: NodeId,
    callee: NodeId,
}

impl CallEdge {
    pub fn caller(self) -> NodeId {
        self.caller
    }

    pub fn callee(self) -> NodeId {
        self.callee
    }
}

/// An arena of nodes plus the call edges between them.
#[derive(Debug, Clone)]
pub struct Diagram {
    kind: DiagramKind,
    nodes: Vec<Node>,
    call_edges: Vec<CallEdge>,
}

impl Diagram {
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            call_edges: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Adds a top-level node.
    pub fn add_node(&mut self, kind: NodeKind, position: Point) -> NodeId {
        self.push_node(kind, position, None)
    }

    /// Adds a node owned by `parent`, after its existing children.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this diagram.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind, position: Point) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent node {parent}");
        let id = self.push_node(kind, position, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a call edge; edge order is call order.
    ///
    /// # Panics
    ///
    /// Panics if either node does not belong to this diagram.
    pub fn add_call_edge(&mut self, caller: NodeId, callee: NodeId) {
        assert!(caller.0 < self.nodes.len(), "unknown caller node {caller}");
        assert!(callee.0 < self.nodes.len(), "unknown callee node {callee}");
        self.call_edges.push(CallEdge { caller, callee });
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this diagram.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns every node in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns the nodes without a parent in insertion order.
    pub fn root_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.parent.is_none())
    }

    pub fn call_edges(&self) -> &[CallEdge] {
        &self.call_edges
    }

    /// Returns the nodes called by `caller`, in call order.
    pub fn callees(&self, caller: NodeId) -> Vec<NodeId> {
        self.call_edges
            .iter()
            .filter(|edge| edge.caller == caller)
            .map(|edge| edge.callee)
            .collect()
    }

    /// Returns the first node calling `callee`, if any.
    pub fn caller(&self, callee: NodeId) -> Option<NodeId> {
        self.call_edges
            .iter()
            .find(|edge| edge.callee == callee)
            .map(|edge| edge.caller)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, kind: NodeKind, position: Point, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            kind,
            position,
            parent,
            children: Vec::new(),
        });
        id
    }
}
