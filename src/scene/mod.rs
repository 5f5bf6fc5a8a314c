//! Scene storage - the element arena and its computed output surface.

mod context;
mod node;

pub use context::LayoutContext;
pub(crate) use context::WeakContext;
pub use node::NodeId;
