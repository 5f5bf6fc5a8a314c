//! # flexel
//!
//! Reactive sizing and layout resolution: grow/shrink/exact intents
//! in, flexbox property declarations out.
//!
//! ## Architecture
//!
//! Elements carry declarative size intents (`Exact`, `Grow`, `Shrink`,
//! `Stretch`) instead of finished CSS. Resolution turns each intent
//! into a rigid `width`/`min`/`max` triple or a `flex-grow` pair,
//! consults the growth ledger so hugging containers pass space through
//! to growing descendants, and writes only effective changes to each
//! element's style map.
//!
//! The pipeline is derived-based end to end:
//! ```text
//! StyleProps → resolve deriveds → apply effects → style maps → BridgeTree
//! ```
//!
//! Every prop can be a signal or getter. Change one and exactly the
//! affected resolutions re-run; equality gating at the signal, the
//! derived, and the style map keeps everything downstream quiet unless
//! an actual declaration changed.
//!
//! ## Modules
//!
//! - [`types`] - Core vocabulary (Axis, Extent, Align, StyleProp)
//! - [`reactive`] - Signals, deriveds and effects driving resolution
//! - [`style`] - Size intents, reactive props, the serde style sheet
//! - [`resolve`] - Pure resolution from intents to declarations
//! - [`scene`] - Element arena and computed style store
//! - [`runtime`] - Attach/detach lifecycle and the growth ledger
//! - [`bridge`] - Taffy layout for concrete rectangles

pub mod bridge;
pub mod reactive;
pub mod resolve;
pub mod runtime;
pub mod scene;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use reactive::{
    batch, derived, effect, flush_sync, signal, untracked, Cleanup, Derived, Signal,
};

pub use style::{
    FlexSpec, ParseIntentError, Prop, SheetAlign, SizeSpec, SizeValue, StyleProps, StyleSheet,
};

pub use resolve::{
    resolve_decor, resolve_extent, resolve_flow, resolve_interaction, resolve_text, to_fixed,
    DecorQuery, FlowQuery, InteractionQuery, Metrics, PadIntents, ResolvedAxis, ResolvedFlow,
    SizeQuery, TextQuery, PX_DECIMALS, UNIT_SCALE,
};

pub use scene::{LayoutContext, NodeId};

pub use runtime::{attach, detach};

pub use bridge::{BridgeError, BridgeTree, LayoutRect};
