//! Element state - what the context stores per node.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::reactive::{signal, Cleanup, Signal};
use crate::types::{Axis, EdgeSizes, NodeClass, StyleProp};

/// Handle to an element in a [`LayoutContext`](super::LayoutContext).
///
/// Plain index; slots are pooled and reused after detach, so a stale
/// handle held across a detach may point at a recycled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The underlying slot index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the context holds for one element.
///
/// The style map, classes and revision are the computed output surface.
/// The signals underneath are the element's published layout context:
/// children subscribe to them instead of walking the tree.
pub(crate) struct ElementState {
    /// Fixed at attach; elements do not reparent.
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: RefCell<Vec<NodeId>>,

    /// Computed style, applied with write suppression.
    pub(crate) style: RefCell<BTreeMap<StyleProp, String>>,
    /// Structural marker classes.
    pub(crate) classes: Cell<NodeClass>,
    /// Bumped on every effective style or class change.
    pub(crate) revision: Cell<u64>,

    /// Resolved axis, read by children for main/cross decisions.
    pub(crate) axis_out: Signal<Axis>,
    /// Resolved padding, read by layered children of a stack.
    pub(crate) pad_out: Signal<EdgeSizes>,
    /// Live child count, read by flow resolution.
    pub(crate) child_count: Signal<usize>,
    /// Ledger output per extent: true while any child grows on it.
    pub(crate) some_child_grows: [Signal<bool>; 2],

    /// Ledger storage per extent: how many children grow.
    pub(crate) grow_counts: [Cell<u32>; 2],
    /// This element's own growth flags, one per extent, as last
    /// reported to the parent's ledger.
    pub(crate) flags: [Cell<bool>; 2],

    /// Run on detach, before the slot is unlinked.
    pub(crate) cleanups: RefCell<Vec<Cleanup>>,
}

impl ElementState {
    pub(crate) fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: RefCell::new(Vec::new()),
            style: RefCell::new(BTreeMap::new()),
            classes: Cell::new(NodeClass::empty()),
            revision: Cell::new(0),
            axis_out: signal(Axis::default()),
            pad_out: signal(EdgeSizes::default()),
            child_count: signal(0usize),
            some_child_grows: [signal(false), signal(false)],
            grow_counts: [Cell::new(0), Cell::new(0)],
            flags: [Cell::new(false), Cell::new(false)],
            cleanups: RefCell::new(Vec::new()),
        }
    }
}
