//! Derived - the computed reactive cell.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::graph::{
    notify, pop_observer, push_observer, track_read, unsubscribe, Dependent, Observer,
    SubscriberList,
};

/// A reactive value computed from other reactive values.
///
/// Invalidation is eager: when a source changes, the dirty bit cascades
/// through dependent deriveds immediately. Recomputation is lazy: the
/// closure only runs again when someone reads a dirty derived. Reads of
/// a clean derived return the cached value.
///
/// Cheap to clone: clones share the same cell.
pub struct Derived<T> {
    inner: Rc<DerivedInner<T>>,
}

struct DerivedInner<T> {
    compute: Box<dyn Fn() -> T>,
    value: RefCell<Option<T>>,
    dirty: Cell<bool>,
    runs: Cell<u64>,
    subs: Rc<SubscriberList>,
    sources: RefCell<Vec<Rc<SubscriberList>>>,
}

impl<T: Clone + PartialEq + 'static> Derived<T> {
    /// Read the value, recomputing first if a source has changed.
    ///
    /// Subscribes the active computation.
    pub fn get(&self) -> T {
        track_read(&self.inner.subs);
        self.current()
    }

    /// Read the value without subscribing.
    pub fn peek(&self) -> T {
        self.current()
    }

    /// How many times the closure has run. Useful for asserting that
    /// caching actually short-circuits.
    pub fn runs(&self) -> u64 {
        self.inner.runs.get()
    }

    fn current(&self) -> T {
        if self.inner.dirty.get() {
            return self.inner.clone().recompute();
        }
        let cached = self.inner.value.borrow().clone();
        match cached {
            Some(value) => value,
            None => self.inner.clone().recompute(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> DerivedInner<T> {
    fn recompute(self: Rc<Self>) -> T {
        // Clear the bit first: a source write during compute re-dirties.
        self.dirty.set(false);
        let me: Rc<dyn Dependent> = self.clone();
        unsubscribe(&self.sources, &me);
        push_observer(Some(self.clone() as Rc<dyn Observer>));
        let value = (self.compute)();
        pop_observer();
        self.runs.set(self.runs.get() + 1);
        *self.value.borrow_mut() = Some(value.clone());
        value
    }
}

impl<T: Clone + PartialEq + 'static> Dependent for DerivedInner<T> {
    fn mark_dirty(self: Rc<Self>) {
        if self.dirty.replace(true) {
            return;
        }
        // Cascade so effects behind us land in the queue now.
        notify(&self.subs);
    }
}

impl<T: Clone + PartialEq + 'static> Observer for DerivedInner<T> {
    fn as_dependent(self: Rc<Self>) -> Rc<dyn Dependent> {
        self
    }

    fn remember_source(&self, subs: &Rc<SubscriberList>) {
        self.sources.borrow_mut().push(Rc::clone(subs));
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Create a derived value from a compute closure.
///
/// The closure does not run until the first read.
pub fn derived<T: Clone + PartialEq + 'static>(compute: impl Fn() -> T + 'static) -> Derived<T> {
    Derived {
        inner: Rc::new(DerivedInner {
            compute: Box::new(compute),
            value: RefCell::new(None),
            dirty: Cell::new(true),
            runs: Cell::new(0),
            subs: Rc::new(SubscriberList::default()),
            sources: RefCell::new(Vec::new()),
        }),
    }
}
