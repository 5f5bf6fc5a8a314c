//! Layout context - element arena and computed style store.
//!
//! The context owns every element's state: the tree links, the computed
//! style map, and the published signals that children subscribe to.
//! Slots are pooled: detaching an element frees its index for reuse,
//! so long sessions with heavy churn do not grow the arena.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::reactive::Cleanup;
use crate::resolve::Metrics;
use crate::types::{NodeClass, StyleProp};

use super::node::{ElementState, NodeId};

// =============================================================================
// LayoutContext - Element arena and style store
// =============================================================================

/// Shared handle to an element arena.
///
/// Cloning is cheap and every clone refers to the same arena. The
/// context is single threaded, like the signals that drive it.
#[derive(Clone)]
pub struct LayoutContext {
    inner: Rc<ContextInner>,
}

pub(crate) struct ContextInner {
    metrics: Metrics,
    elements: RefCell<Vec<Option<Rc<ElementState>>>>,
    free: RefCell<Vec<usize>>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutContext {
    /// A context with the default metrics (16px root font).
    pub fn new() -> Self {
        Self::with_metrics(Metrics::default())
    }

    /// A context with explicit metrics.
    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                metrics,
                elements: RefCell::new(Vec::new()),
                free: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The unit metrics every size in this context resolves against.
    pub fn metrics(&self) -> Metrics {
        self.inner.metrics
    }

    pub(crate) fn downgrade(&self) -> WeakContext {
        WeakContext {
            inner: Rc::downgrade(&self.inner),
        }
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Allocate a slot and link the element under `parent`.
    ///
    /// Reuses a freed index when one is available. The parent's child
    /// count signal is bumped, so its flow resolution re-runs.
    pub(crate) fn create(&self, parent: Option<NodeId>) -> NodeId {
        let element = Rc::new(ElementState::new(parent));
        let reused = self.inner.free.borrow_mut().pop();
        let index = match reused {
            Some(index) => index,
            None => {
                let mut elements = self.inner.elements.borrow_mut();
                elements.push(None);
                elements.len() - 1
            }
        };
        self.inner.elements.borrow_mut()[index] = Some(element);
        let id = NodeId(index);
        if let Some(parent_id) = parent {
            if let Some(parent) = self.element(parent_id) {
                parent.children.borrow_mut().push(id);
                let count = parent.child_count.peek() + 1;
                parent.child_count.set(count);
            }
        }
        tracing::debug!(node = id.0, parent = ?parent.map(|p| p.0), "element attached");
        id
    }

    /// Detach an element and its whole subtree.
    ///
    /// Children go first, recursively, so every cleanup still sees its
    /// parent alive. Cleanups run before the slot is unlinked: stopping
    /// effects and retracting ledger contributions happens while the
    /// element is still reachable.
    pub(crate) fn remove(&self, id: NodeId) {
        let Some(element) = self.element(id) else {
            return;
        };

        let children: Vec<NodeId> = element.children.borrow().clone();
        for child in children {
            self.remove(child);
        }

        let cleanups: Vec<Cleanup> = element.cleanups.borrow_mut().drain(..).collect();
        for cleanup in cleanups {
            cleanup();
        }

        if let Some(parent_id) = element.parent {
            if let Some(parent) = self.element(parent_id) {
                parent.children.borrow_mut().retain(|child| *child != id);
                let count = parent.child_count.peek().saturating_sub(1);
                parent.child_count.set(count);
            }
        }

        self.inner.elements.borrow_mut()[id.0] = None;
        self.inner.free.borrow_mut().push(id.0);
        tracing::debug!(node = id.0, "element detached");
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub(crate) fn element(&self, id: NodeId) -> Option<Rc<ElementState>> {
        self.inner.elements.borrow().get(id.0).cloned().flatten()
    }

    /// Whether `id` currently refers to a live element.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Live elements in the arena.
    pub fn element_count(&self) -> usize {
        self.inner
            .elements
            .borrow()
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// The element's parent, if it has one and is attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).and_then(|element| element.parent)
    }

    /// The element's children in attach order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.element(id)
            .map(|element| element.children.borrow().clone())
            .unwrap_or_default()
    }

    /// Attached elements with no parent, in slot order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.inner
            .elements
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref()
                    .filter(|element| element.parent.is_none())
                    .map(|_| NodeId(index))
            })
            .collect()
    }

    // =========================================================================
    // Computed output
    // =========================================================================

    /// Snapshot of the element's computed style map.
    pub fn styles(&self, id: NodeId) -> BTreeMap<StyleProp, String> {
        self.element(id)
            .map(|element| element.style.borrow().clone())
            .unwrap_or_default()
    }

    /// One computed property, if set.
    pub fn style(&self, id: NodeId, prop: StyleProp) -> Option<String> {
        self.element(id)
            .and_then(|element| element.style.borrow().get(&prop).cloned())
    }

    /// The element's computed style as a declaration block.
    pub fn css_text(&self, id: NodeId) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };
        let style = element.style.borrow();
        let mut out = String::new();
        for (prop, value) in style.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(prop.name());
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }

    /// Structural marker classes.
    pub fn classes(&self, id: NodeId) -> NodeClass {
        self.element(id)
            .map(|element| element.classes.get())
            .unwrap_or_default()
    }

    /// Monotonic counter, bumped on every effective style or class
    /// change. Equal at two points in time means nothing was written
    /// in between.
    pub fn revision(&self, id: NodeId) -> u64 {
        self.element(id)
            .map(|element| element.revision.get())
            .unwrap_or(0)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Write one property, with suppression.
    ///
    /// `Some(value)` sets the property, `None` clears it. A write that
    /// matches the stored value is dropped without touching the
    /// revision. Returns whether the map actually changed.
    pub fn set_style(&self, id: NodeId, prop: StyleProp, value: Option<String>) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let mut style = element.style.borrow_mut();
        let changed = match value {
            Some(value) => match style.get(&prop) {
                Some(current) if *current == value => false,
                _ => {
                    style.insert(prop, value);
                    true
                }
            },
            None => style.remove(&prop).is_some(),
        };
        drop(style);
        if changed {
            element.revision.set(element.revision.get() + 1);
            tracing::trace!(node = id.0, prop = prop.name(), "style write");
        }
        changed
    }

    /// Toggle a marker class, bumping the revision on change.
    pub(crate) fn set_class(&self, id: NodeId, class: NodeClass, on: bool) {
        let Some(element) = self.element(id) else {
            return;
        };
        let current = element.classes.get();
        let next = if on { current | class } else { current - class };
        if next != current {
            element.classes.set(next);
            element.revision.set(element.revision.get() + 1);
            tracing::trace!(node = id.0, classes = ?next, "class change");
        }
    }

    /// Register a callback to run when the element detaches.
    pub(crate) fn on_detach(&self, id: NodeId, cleanup: Cleanup) {
        if let Some(element) = self.element(id) {
            element.cleanups.borrow_mut().push(cleanup);
        }
    }
}

// =============================================================================
// WeakContext - Non-owning handle for cleanup closures
// =============================================================================

/// Non-owning handle, held by effects so a context whose last user
/// handle is dropped can actually free its elements.
#[derive(Clone)]
pub(crate) struct WeakContext {
    inner: Weak<ContextInner>,
}

impl WeakContext {
    pub(crate) fn upgrade(&self) -> Option<LayoutContext> {
        self.inner.upgrade().map(|inner| LayoutContext { inner })
    }
}

// =============================================================================
// Tests
// =============================================================================
