//! Derived layout state for diagrams.
//!
//! Node renderers that need information beyond a node's own fields read it
//! through [`LayoutContext`]. For sequence diagrams the state is computed by
//! [`SequenceLayout`]; class diagrams place every node at its own position and
//! use an empty layout.

mod sequence;

pub use sequence::SequenceLayout;

use crate::diagram::NodeId;

/// Read-only access to the derived geometry of a sequence diagram.
///
/// Every method expects an id of the matching node kind that took part in the
/// layout, and panics otherwise.
pub trait LayoutContext {
    /// Returns the top of a call's activation.
    fn y(&self, call: NodeId) -> i32;

    /// Returns the bottom of a call's activation.
    fn max_y(&self, call: NodeId) -> i32;

    /// Returns how many enclosing calls on the same lifeline contain `call`.
    fn nesting_depth(&self, call: NodeId) -> usize;

    /// Returns the x-coordinate of a lifeline's vertical axis.
    fn center_x(&self, lifeline: NodeId) -> i32;

    /// Returns the y-coordinate where a lifeline's dotted line ends.
    fn lifeline_bottom(&self, lifeline: NodeId) -> i32;
}
