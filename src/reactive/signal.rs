//! Signal - the writable reactive cell.

use std::cell::RefCell;
use std::rc::Rc;

use super::graph::{flush, notify, track_read, SubscriberList};

/// A writable reactive value.
///
/// Reading inside a derived or effect subscribes that computation;
/// writing notifies subscribers. Writes of an equal value are dropped
/// without notifying anyone, which is what lets settling loops
/// terminate.
///
/// Cheap to clone: clones share the same cell.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

struct SignalInner<T> {
    value: RefCell<T>,
    subs: Rc<SubscriberList>,
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Read the current value, subscribing the active computation.
    pub fn get(&self) -> T {
        track_read(&self.inner.subs);
        self.inner.value.borrow().clone()
    }

    /// Read the current value without subscribing.
    pub fn peek(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Write a new value and notify subscribers.
    ///
    /// Equal values are suppressed: no notification, no effect runs.
    pub fn set(&self, value: T) {
        {
            let current = self.inner.value.borrow();
            if *current == value {
                return;
            }
        }
        *self.inner.value.borrow_mut() = value;
        notify(&self.inner.subs);
        flush();
    }

    /// Write a value computed from the current one.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.value.borrow());
        self.set(next);
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.inner.value.borrow()).finish()
    }
}

/// Create a new signal holding `value`.
pub fn signal<T: Clone + PartialEq>(value: T) -> Signal<T> {
    Signal {
        inner: Rc::new(SignalInner {
            value: RefCell::new(value),
            subs: Rc::new(SubscriberList::default()),
        }),
    }
}
