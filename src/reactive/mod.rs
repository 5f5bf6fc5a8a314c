//! Fine-grained reactivity: signals, derived values, and effects.
//!
//! Single-threaded by design. All writes happen on one thread; an
//! external write from another thread must be marshalled over before
//! touching a signal. Within the thread the model is:
//!
//! - [`signal`] holds state. Writes of equal values are dropped.
//! - [`derived`] computes from other cells, lazily, with caching.
//! - [`effect`] runs side effects. Invalidated effects queue in FIFO
//!   order and run when the outermost write (or [`batch`]) settles.
//!
//! # Example
//!
//! ```
//! use flexel::reactive::{signal, derived, effect};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let width = signal(10);
//! let label = derived({
//!     let width = width.clone();
//!     move || format!("{}px", width.get())
//! });
//!
//! let seen = Rc::new(Cell::new(0));
//! let stop = effect({
//!     let (label, seen) = (label.clone(), seen.clone());
//!     move || {
//!         label.get();
//!         seen.set(seen.get() + 1);
//!     }
//! });
//!
//! width.set(20); // effect re-ran
//! assert_eq!(seen.get(), 2);
//! stop();
//! ```

mod derived;
mod effect;
mod graph;
mod signal;

pub use derived::{derived, Derived};
pub use effect::{effect, Cleanup};
pub use graph::{batch, flush_sync, untracked};
pub use signal::{signal, Signal};
