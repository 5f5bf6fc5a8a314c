//! Style surface - intents, reactive props, and sheets.
//!
//! This is the input side of the engine. Elements declare what they
//! want ([`SizeSpec`] intents, axis, alignment, spacing, decoration);
//! the resolvers in [`crate::resolve`] decide what gets written.

mod intent;
mod props;
mod sheet;

pub use intent::{FlexSpec, ParseIntentError, SizeSpec, SizeValue};
pub use props::{Prop, StyleProps};
pub use sheet::{SheetAlign, StyleSheet};
