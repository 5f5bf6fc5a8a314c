//! Reactive graph internals: dependency tracking and effect scheduling.
//!
//! Sources (signals, deriveds) keep weak subscriber lists. A running
//! computation sits on top of the observer stack and is subscribed to
//! every source it reads. Invalidation is eager (dirty bits cascade
//! immediately); recomputation is lazy (deriveds recompute on read,
//! effects run from a FIFO queue).

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Subscribers of one reactive source.
pub(crate) type SubscriberList = RefCell<Vec<Weak<dyn Dependent>>>;

/// A node that reacts when one of its sources changes.
pub(crate) trait Dependent {
    /// Invalidate this node. Deriveds cascade, effects enqueue.
    fn mark_dirty(self: Rc<Self>);
}

/// A computation that tracks its reads while running.
pub(crate) trait Observer {
    fn as_dependent(self: Rc<Self>) -> Rc<dyn Dependent>;
    /// Remember a source so the subscription can be dropped on re-run.
    fn remember_source(&self, subs: &Rc<SubscriberList>);
}

/// A queued unit of work (an invalidated effect).
pub(crate) trait Runnable {
    fn run(self: Rc<Self>);
}

thread_local! {
    /// Stack of running computations; the top one receives dependency
    /// registrations. `None` frames mark untracked scopes.
    static ACTIVE: RefCell<Vec<Option<Rc<dyn Observer>>>> = RefCell::new(Vec::new());
    /// Effects waiting to run, in notification order.
    static QUEUE: RefCell<VecDeque<Rc<dyn Runnable>>> = RefCell::new(VecDeque::new());
    static BATCH_DEPTH: Cell<u32> = const { Cell::new(0) };
    static FLUSHING: Cell<bool> = const { Cell::new(false) };
}

pub(crate) fn push_observer(observer: Option<Rc<dyn Observer>>) {
    ACTIVE.with(|stack| stack.borrow_mut().push(observer));
}

pub(crate) fn pop_observer() {
    ACTIVE.with(|stack| {
        stack.borrow_mut().pop();
    });
}

/// Record a read of `subs` by the active computation, if any.
pub(crate) fn track_read(subs: &Rc<SubscriberList>) {
    let observer = ACTIVE.with(|stack| stack.borrow().last().cloned());
    let Some(Some(observer)) = observer else {
        return;
    };
    let dependent = observer.clone().as_dependent();
    let mut list = subs.borrow_mut();
    let already = list
        .iter()
        .any(|weak| weak.upgrade().is_some_and(|d| Rc::ptr_eq(&d, &dependent)));
    if !already {
        list.push(Rc::downgrade(&dependent));
        observer.remember_source(subs);
    }
}

/// Wake every live subscriber of a source. Dead entries are pruned.
pub(crate) fn notify(subs: &Rc<SubscriberList>) {
    // Snapshot: mark_dirty may resubscribe and mutate the list.
    let snapshot: Vec<Weak<dyn Dependent>> = subs.borrow().clone();
    let mut saw_dead = false;
    for weak in &snapshot {
        match weak.upgrade() {
            Some(dependent) => dependent.mark_dirty(),
            None => saw_dead = true,
        }
    }
    if saw_dead {
        subs.borrow_mut().retain(|weak| weak.upgrade().is_some());
    }
}

/// Drop `me` from every source list in `sources`, clearing `sources`.
pub(crate) fn unsubscribe(sources: &RefCell<Vec<Rc<SubscriberList>>>, me: &Rc<dyn Dependent>) {
    for subs in sources.borrow_mut().drain(..) {
        subs.borrow_mut().retain(|weak| match weak.upgrade() {
            Some(d) => !Rc::ptr_eq(&d, me),
            None => false,
        });
    }
}

pub(crate) fn enqueue(task: Rc<dyn Runnable>) {
    QUEUE.with(|queue| queue.borrow_mut().push_back(task));
}

/// Drain the effect queue until no work remains.
///
/// No-op while a batch is open or a drain is already running further
/// up the stack; the outermost caller keeps draining until settled, so
/// effects queued by effects still run in FIFO order.
pub(crate) fn flush() {
    let deferred = BATCH_DEPTH.with(Cell::get) > 0 || FLUSHING.with(Cell::get);
    if deferred {
        return;
    }
    FLUSHING.with(|flag| flag.set(true));
    loop {
        let next = QUEUE.with(|queue| queue.borrow_mut().pop_front());
        match next {
            Some(task) => task.run(),
            None => break,
        }
    }
    FLUSHING.with(|flag| flag.set(false));
}

/// Run queued effects now.
///
/// Writes outside a batch flush automatically; this is for code that
/// needs to observe settled state right after a batch, or from tests.
pub fn flush_sync() {
    flush();
}

/// Run `f` with effect execution deferred to the end of the batch.
///
/// Writes inside the batch still invalidate immediately, but effects
/// run once, after `f` returns, instead of after every write.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    BATCH_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let result = f();
    BATCH_DEPTH.with(|depth| depth.set(depth.get() - 1));
    flush();
    result
}

/// Run `f` without subscribing the active computation to its reads.
pub fn untracked<R>(f: impl FnOnce() -> R) -> R {
    push_observer(None);
    let result = f();
    pop_observer();
    result
}
