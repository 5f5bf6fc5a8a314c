//! Effect - the reactive side-effect runner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::graph::{
    enqueue, pop_observer, push_observer, unsubscribe, Dependent, Observer, Runnable,
    SubscriberList,
};

/// Stop function returned by [`effect`].
pub type Cleanup = Box<dyn FnOnce()>;

struct EffectInner {
    run_fn: RefCell<Option<Box<dyn FnMut()>>>,
    queued: Cell<bool>,
    disposed: Cell<bool>,
    sources: RefCell<Vec<Rc<SubscriberList>>>,
}

impl EffectInner {
    fn dispose(self: Rc<Self>) {
        if self.disposed.replace(true) {
            return;
        }
        let me: Rc<dyn Dependent> = self.clone();
        unsubscribe(&self.sources, &me);
        // Drop the closure so anything it captured is released now,
        // not whenever the last queue reference dies.
        self.run_fn.borrow_mut().take();
    }
}

impl Dependent for EffectInner {
    fn mark_dirty(self: Rc<Self>) {
        if self.disposed.get() || self.queued.replace(true) {
            return;
        }
        enqueue(self);
    }
}

impl Observer for EffectInner {
    fn as_dependent(self: Rc<Self>) -> Rc<dyn Dependent> {
        self
    }

    fn remember_source(&self, subs: &Rc<SubscriberList>) {
        self.sources.borrow_mut().push(Rc::clone(subs));
    }
}

impl Runnable for EffectInner {
    fn run(self: Rc<Self>) {
        // Cleared before running: a write made by the closure itself
        // queues another pass instead of being lost.
        self.queued.set(false);
        if self.disposed.get() {
            return;
        }
        let me: Rc<dyn Dependent> = self.clone();
        unsubscribe(&self.sources, &me);
        push_observer(Some(self.clone() as Rc<dyn Observer>));
        if let Some(f) = self.run_fn.borrow_mut().as_mut() {
            f();
        }
        pop_observer();
    }
}

/// Run `f` now and again whenever a value it read changes.
///
/// Dependencies are re-collected on every run, so branches that stop
/// being read stop triggering. Returns a stop function; call it to
/// dispose the effect. Box it as a [`Cleanup`] to store it.
pub fn effect(f: impl FnMut() + 'static) -> impl FnOnce() {
    let inner = Rc::new(EffectInner {
        run_fn: RefCell::new(Some(Box::new(f))),
        queued: Cell::new(false),
        disposed: Cell::new(false),
        sources: RefCell::new(Vec::new()),
    });
    inner.clone().run();
    move || inner.dispose()
}
