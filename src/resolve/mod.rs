//! Resolvers - pure functions from intents to property values.
//!
//! Each resolver answers one question and touches nothing outside its
//! query: the unit converter turns logical units into lengths, the size
//! resolver settles one extent, the flow resolver settles a container's
//! direction/alignment/spacing, and the decor resolvers cover
//! decoration, text, and interaction. The reactive runtime in
//! [`crate::runtime`] decides when they run.

mod decor;
mod flow;
mod size;
mod unit;

pub use decor::{resolve_decor, resolve_interaction, resolve_text, DecorQuery, InteractionQuery, TextQuery};
pub use flow::{resolve_flow, FlowQuery, PadIntents, ResolvedFlow};
pub use size::{resolve_extent, ResolvedAxis, SizeQuery};
pub use unit::{to_fixed, Metrics, PX_DECIMALS, UNIT_SCALE};
