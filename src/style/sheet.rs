//! Style sheets - deserializable static styling.
//!
//! A [`StyleSheet`] is the serialized form of [`StyleProps`]: the same
//! fields, static values only (data files cannot carry signals).
//! Unknown keys are ignored so sheets survive version skew; malformed
//! values fail deserialization rather than silently styling wrong.
//!
//! ```
//! use flexel::style::StyleSheet;
//!
//! let sheet: StyleSheet = serde_json::from_str(r#"{
//!     "axis": "row",
//!     "width": "stretch",
//!     "height": {"grow": 1, "max": 40},
//!     "pad": 1,
//!     "textAttrs": ["bold"]
//! }"#).unwrap();
//! let props = sheet.into_props();
//! assert!(props.text_attrs.is_some());
//! ```

use serde::{Deserialize, Deserializer};

use crate::style::intent::{SizeSpec, SizeValue};
use crate::style::props::{Prop, StyleProps};
use crate::types::{Align, Align2, Axis, OverflowPolicy, TextAttr};

/// Alignment as written in a sheet: one keyword for both axes, or an
/// explicit `{x, y}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SheetAlign {
    Pair(Align2),
    Single(Align),
}

impl From<SheetAlign> for Align2 {
    fn from(value: SheetAlign) -> Self {
        match value {
            SheetAlign::Pair(pair) => pair,
            SheetAlign::Single(one) => one.into(),
        }
    }
}

/// Text attribute names as written in a sheet.
///
/// Unknown names are dropped with a warning: a sheet from a newer
/// writer should still style what it can.
fn attr_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TextAttr>, D::Error> {
    let names: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(names.map(|names| {
        let mut attrs = TextAttr::NONE;
        for name in &names {
            match name.as_str() {
                "bold" => attrs |= TextAttr::BOLD,
                "italic" => attrs |= TextAttr::ITALIC,
                "underline" => attrs |= TextAttr::UNDERLINE,
                "strikethrough" => attrs |= TextAttr::STRIKETHROUGH,
                other => tracing::warn!(attr = other, "ignoring unknown text attribute"),
            }
        }
        attrs
    }))
}

/// Static styling loaded from data.
///
/// Field names are camelCase on the wire. Every field is optional;
/// [`StyleSheet::into_props`] leaves absent fields unset so resolution
/// applies the usual defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSheet {
    // Sizing
    pub width: Option<SizeSpec>,
    pub height: Option<SizeSpec>,
    pub min_width: Option<SizeValue>,
    pub max_width: Option<SizeValue>,
    pub min_height: Option<SizeValue>,
    pub max_height: Option<SizeValue>,

    // Container
    pub axis: Option<Axis>,
    pub align: Option<SheetAlign>,
    pub align_x: Option<Align>,
    pub align_y: Option<Align>,
    pub overflow: Option<OverflowPolicy>,
    pub overflow_x: Option<OverflowPolicy>,
    pub overflow_y: Option<OverflowPolicy>,

    // Spacing
    pub pad: Option<SizeValue>,
    pub pad_around: Option<SizeValue>,
    pub pad_x: Option<SizeValue>,
    pub pad_y: Option<SizeValue>,
    pub pad_top: Option<SizeValue>,
    pub pad_right: Option<SizeValue>,
    pub pad_bottom: Option<SizeValue>,
    pub pad_left: Option<SizeValue>,
    pub pad_between: Option<SizeValue>,
    pub pad_between_x: Option<SizeValue>,
    pub pad_between_y: Option<SizeValue>,

    // Decoration
    pub round: Option<SizeValue>,
    pub shadow: Option<bool>,
    pub bg: Option<String>,
    pub bg_image: Option<String>,

    // Text
    pub text_size: Option<SizeValue>,
    pub text_color: Option<String>,
    pub font: Option<String>,
    #[serde(deserialize_with = "attr_names")]
    pub text_attrs: Option<TextAttr>,
    pub text_align: Option<Align>,

    // Interaction
    pub clickable: Option<bool>,
    pub disabled: Option<bool>,
    pub selectable: Option<bool>,
}

impl StyleSheet {
    /// Convert to props, wrapping every present value as static.
    pub fn into_props(self) -> StyleProps {
        fn wrap<T: Clone + PartialEq + 'static>(value: Option<T>) -> Option<Prop<T>> {
            value.map(Prop::Static)
        }

        StyleProps {
            width: wrap(self.width),
            height: wrap(self.height),
            min_width: wrap(self.min_width),
            max_width: wrap(self.max_width),
            min_height: wrap(self.min_height),
            max_height: wrap(self.max_height),
            axis: wrap(self.axis),
            align: wrap(self.align.map(Align2::from)),
            align_x: wrap(self.align_x),
            align_y: wrap(self.align_y),
            overflow: wrap(self.overflow),
            overflow_x: wrap(self.overflow_x),
            overflow_y: wrap(self.overflow_y),
            pad: wrap(self.pad),
            pad_around: wrap(self.pad_around),
            pad_x: wrap(self.pad_x),
            pad_y: wrap(self.pad_y),
            pad_top: wrap(self.pad_top),
            pad_right: wrap(self.pad_right),
            pad_bottom: wrap(self.pad_bottom),
            pad_left: wrap(self.pad_left),
            pad_between: wrap(self.pad_between),
            pad_between_x: wrap(self.pad_between_x),
            pad_between_y: wrap(self.pad_between_y),
            round: wrap(self.round),
            shadow: wrap(self.shadow),
            bg: wrap(self.bg),
            bg_image: wrap(self.bg_image),
            text_size: wrap(self.text_size),
            text_color: wrap(self.text_color),
            font: wrap(self.font),
            text_attrs: wrap(self.text_attrs),
            text_align: wrap(self.text_align),
            clickable: wrap(self.clickable),
            disabled: wrap(self.disabled),
            selectable: wrap(self.selectable),
        }
    }
}

impl From<StyleSheet> for StyleProps {
    fn from(sheet: StyleSheet) -> Self {
        sheet.into_props()
    }
}
