//! Style props - the input surface of an element.
//!
//! Every prop can be a static value, a signal, or a getter closure.
//! Whatever form it takes, the pipeline reads it inside a derived, so
//! signal- and getter-backed props re-resolve automatically.

use std::rc::Rc;

use crate::reactive::Signal;
use crate::style::intent::{SizeSpec, SizeValue};
use crate::types::{Align, Align2, Axis, OverflowPolicy, TextAttr};

// =============================================================================
// Prop - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This is what keeps the input surface declarative: callers hand over
/// values or reactive cells, never imperative setters.
#[derive(Clone)]
pub enum Prop<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> Prop<T> {
    /// Current value. Subscribes the active computation when the prop
    /// is signal- or getter-backed.
    pub fn get(&self) -> T {
        match self {
            Prop::Static(v) => v.clone(),
            Prop::Signal(s) => s.get(),
            Prop::Getter(f) => f(),
        }
    }

    /// Wrap a closure as a getter prop.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        Prop::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Prop<T> {
    fn default() -> Self {
        Prop::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for Prop<T> {
    fn from(value: T) -> Self {
        Prop::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for Prop<T> {
    fn from(signal: Signal<T>) -> Self {
        Prop::Signal(signal)
    }
}

// SizeSpec has its own conversions, so numbers and shorthand strings
// can be handed to sizing props directly.
impl From<i32> for Prop<SizeSpec> {
    fn from(value: i32) -> Self {
        Prop::Static(SizeSpec::from(value))
    }
}

impl From<f64> for Prop<SizeSpec> {
    fn from(value: f64) -> Self {
        Prop::Static(SizeSpec::from(value))
    }
}

impl From<&str> for Prop<SizeSpec> {
    fn from(value: &str) -> Self {
        Prop::Static(SizeSpec::from(value))
    }
}

impl From<i32> for Prop<SizeValue> {
    fn from(value: i32) -> Self {
        Prop::Static(SizeValue::from(value))
    }
}

impl From<f64> for Prop<SizeValue> {
    fn from(value: f64) -> Self {
        Prop::Static(SizeValue::from(value))
    }
}

impl From<&str> for Prop<SizeValue> {
    fn from(value: &str) -> Self {
        Prop::Static(SizeValue::from(value))
    }
}

impl From<&str> for Prop<String> {
    fn from(value: &str) -> Self {
        Prop::Static(value.to_string())
    }
}

impl From<Align> for Prop<Align2> {
    fn from(value: Align) -> Self {
        Prop::Static(value.into())
    }
}

// =============================================================================
// Style Props
// =============================================================================

/// Properties accepted when attaching an element.
///
/// Unset props fall back to defaults during resolution: sizes shrink,
/// the axis is a column, alignment starts at the top left, overflow
/// lets content stretch the parent, and unspecified spacing is zero.
///
/// # Example
///
/// ```
/// use flexel::{attach, detach, signal, Axis, LayoutContext, SizeSpec, StyleProps};
///
/// let ctx = LayoutContext::new();
/// let width = signal(SizeSpec::grow_weighted(2.0));
///
/// let panel = attach(&ctx, None, StyleProps {
///     axis: Some(Axis::Row.into()),
///     width: Some(width.clone().into()),
///     height: Some(10.into()),
///     pad: Some(1.into()),
///     ..Default::default()
/// });
///
/// // Later: update reactively
/// width.set(SizeSpec::Stretch);
/// # detach(&ctx, panel);
/// ```
#[derive(Default)]
pub struct StyleProps {
    // =========================================================================
    // Sizing
    // =========================================================================
    /// Width intent (default: shrink).
    pub width: Option<Prop<SizeSpec>>,

    /// Height intent (default: shrink).
    pub height: Option<Prop<SizeSpec>>,

    /// Minimum width. Only honored by `Grow`; other intents are rigid.
    pub min_width: Option<Prop<SizeValue>>,

    /// Maximum width. Only honored by `Grow`.
    pub max_width: Option<Prop<SizeValue>>,

    /// Minimum height. Only honored by `Grow`.
    pub min_height: Option<Prop<SizeValue>>,

    /// Maximum height. Only honored by `Grow`.
    pub max_height: Option<Prop<SizeValue>>,

    // =========================================================================
    // Container
    // =========================================================================
    /// Layout axis: row, column (default), or stack.
    pub axis: Option<Prop<Axis>>,

    /// Alignment for both axes at once.
    pub align: Option<Prop<Align2>>,

    /// Horizontal alignment. Wins over `align.x`.
    pub align_x: Option<Prop<Align>>,

    /// Vertical alignment. Wins over `align.y`.
    pub align_y: Option<Prop<Align>>,

    /// Overflow policy for both axes (default: content stretches parent).
    pub overflow: Option<Prop<OverflowPolicy>>,

    /// Horizontal overflow. Wins over `overflow`.
    pub overflow_x: Option<Prop<OverflowPolicy>>,

    /// Vertical overflow. Wins over `overflow`.
    pub overflow_y: Option<Prop<OverflowPolicy>>,

    // =========================================================================
    // Spacing
    // =========================================================================
    /// Padding and gap in one: the broadest spacing prop.
    pub pad: Option<Prop<SizeValue>>,

    /// Padding on all four sides. Wins over `pad` for sides.
    pub pad_around: Option<Prop<SizeValue>>,

    /// Left and right padding. Wins over `pad_around`.
    pub pad_x: Option<Prop<SizeValue>>,

    /// Top and bottom padding. Wins over `pad_around`.
    pub pad_y: Option<Prop<SizeValue>>,

    /// Top padding. Most specific, wins over everything.
    pub pad_top: Option<Prop<SizeValue>>,

    /// Right padding.
    pub pad_right: Option<Prop<SizeValue>>,

    /// Bottom padding.
    pub pad_bottom: Option<Prop<SizeValue>>,

    /// Left padding.
    pub pad_left: Option<Prop<SizeValue>>,

    /// Gap between children on both axes. Wins over `pad` for gaps.
    pub pad_between: Option<Prop<SizeValue>>,

    /// Horizontal gap (column-gap). Wins over `pad_between`.
    pub pad_between_x: Option<Prop<SizeValue>>,

    /// Vertical gap (row-gap). Wins over `pad_between`.
    pub pad_between_y: Option<Prop<SizeValue>>,

    // =========================================================================
    // Decoration
    // =========================================================================
    /// Corner radius in logical units (or a raw length).
    pub round: Option<Prop<SizeValue>>,

    /// Drop shadow on or off.
    pub shadow: Option<Prop<bool>>,

    /// Background color or gradient, passed through verbatim.
    pub bg: Option<Prop<String>>,

    /// Background image URL.
    pub bg_image: Option<Prop<String>>,

    // =========================================================================
    // Text
    // =========================================================================
    /// Font size in logical units (or a raw length).
    pub text_size: Option<Prop<SizeValue>>,

    /// Text color, passed through verbatim.
    pub text_color: Option<Prop<String>>,

    /// Font family.
    pub font: Option<Prop<String>>,

    /// Bold / italic / underline / strikethrough flags.
    pub text_attrs: Option<Prop<TextAttr>>,

    /// Explicit text alignment. Defaults to centered text inside
    /// horizontally centered containers.
    pub text_align: Option<Prop<Align>>,

    // =========================================================================
    // Interaction
    // =========================================================================
    /// Pointer cursor on hover.
    pub clickable: Option<Prop<bool>>,

    /// Disabled: no pointer events, default cursor.
    pub disabled: Option<Prop<bool>>,

    /// Text selection allowed. `false` suppresses selection.
    pub selectable: Option<Prop<bool>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::signal;

    #[test]
    fn test_prop_static_get() {
        let p: Prop<i32> = 5.into();
        assert_eq!(p.get(), 5);
    }

    #[test]
    fn test_prop_signal_get() {
        let s = signal(3);
        let p: Prop<i32> = s.clone().into();
        assert_eq!(p.get(), 3);
        s.set(9);
        assert_eq!(p.get(), 9);
    }

    #[test]
    fn test_prop_getter_get() {
        let p: Prop<String> = Prop::getter(|| "hi".to_string());
        assert_eq!(p.get(), "hi");
    }

    #[test]
    fn test_size_spec_prop_conversions() {
        let exact: Prop<SizeSpec> = 4.into();
        assert_eq!(exact.get(), SizeSpec::exact(4));

        let grow: Prop<SizeSpec> = "2f".into();
        assert_eq!(grow.get(), SizeSpec::grow_weighted(2.0));
    }

    #[test]
    fn test_default_props_are_unset() {
        let props = StyleProps::default();
        assert!(props.width.is_none());
        assert!(props.axis.is_none());
        assert!(props.pad.is_none());
    }
}
