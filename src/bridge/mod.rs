//! Layout engine bridge - turns resolved styles into rectangles.

mod taffy_bridge;

pub use taffy_bridge::{BridgeError, BridgeTree, LayoutRect};
