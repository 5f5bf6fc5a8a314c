//! Core types for flexel.
//!
//! These types define the vocabulary that everything builds on.
//! They flow through the reactive pipeline and define what the resolvers
//! produce and what the style surface understands.

use serde::{Deserialize, Serialize};

// =============================================================================
// Axis - Layout direction of a container
// =============================================================================

/// Layout axis of a container.
///
/// - `Row`: children flow left to right, width is the main extent.
/// - `Column`: children flow top to bottom, height is the main extent.
/// - `Stack`: children overlay each other in layers; there is no main
///   extent, both width and height behave as cross extents.
///
/// # Examples
///
/// ```
/// use flexel::types::{Axis, Extent};
///
/// assert_eq!(Axis::Row.main_extent(), Some(Extent::Width));
/// assert_eq!(Axis::Column.main_extent(), Some(Extent::Height));
/// assert_eq!(Axis::Stack.main_extent(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    #[default]
    Column,
    Stack,
}

impl Axis {
    /// The extent laid out along this axis, if any.
    ///
    /// `Stack` has no main extent: layered children are sized against
    /// both extents as if they were cross extents.
    pub const fn main_extent(&self) -> Option<Extent> {
        match self {
            Self::Row => Some(Extent::Width),
            Self::Column => Some(Extent::Height),
            Self::Stack => None,
        }
    }

    /// Whether `extent` is the main extent of this axis.
    pub const fn is_main(&self, extent: Extent) -> bool {
        match self.main_extent() {
            Some(main) => main as u8 == extent as u8,
            None => false,
        }
    }

    /// CSS `flex-direction` value, or None for `Stack` which has no
    /// flow direction of its own.
    pub const fn direction_css(&self) -> Option<&'static str> {
        match self {
            Self::Row => Some("row"),
            Self::Column => Some("column"),
            Self::Stack => None,
        }
    }
}

// =============================================================================
// Extent - Which dimension of a box
// =============================================================================

/// One of the two dimensions of a box.
///
/// Sizing is resolved once per extent; the growth ledger keeps one
/// counter per extent as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Extent {
    Width = 0,
    Height = 1,
}

impl Extent {
    /// Both extents, in resolution order.
    pub const ALL: [Extent; 2] = [Extent::Width, Extent::Height];

    /// Index for per-extent arrays.
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The other extent.
    pub const fn other(&self) -> Extent {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

// =============================================================================
// Align - Distribution along one axis
// =============================================================================

/// How children are distributed along one axis of their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Align {
    /// CSS keyword for this alignment.
    pub const fn css(&self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }

    /// Whether this is one of the space-distributing alignments.
    ///
    /// When a space-* alignment drives an axis, explicit gaps on that
    /// axis are suppressed so the two spacing mechanisms never compound.
    pub const fn distributes_space(&self) -> bool {
        matches!(self, Self::SpaceBetween | Self::SpaceAround | Self::SpaceEvenly)
    }
}

/// Alignment for both axes of a container.
///
/// `x` always aligns children horizontally and `y` vertically,
/// regardless of which one ends up as the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Align2 {
    pub x: Align,
    pub y: Align,
}

impl Align2 {
    pub const TOP_LEFT: Self = Self::new(Align::Start, Align::Start);
    pub const TOP_RIGHT: Self = Self::new(Align::End, Align::Start);
    pub const BOTTOM_LEFT: Self = Self::new(Align::Start, Align::End);
    pub const BOTTOM_RIGHT: Self = Self::new(Align::End, Align::End);
    pub const CENTER: Self = Self::new(Align::Center, Align::Center);

    pub const fn new(x: Align, y: Align) -> Self {
        Self { x, y }
    }

    /// Alignment along the given extent.
    pub const fn along(&self, extent: Extent) -> Align {
        match extent {
            Extent::Width => self.x,
            Extent::Height => self.y,
        }
    }
}

impl From<Align> for Align2 {
    /// A single alignment applies to both axes.
    fn from(value: Align) -> Self {
        Self::new(value, value)
    }
}

// =============================================================================
// Overflow Policy
// =============================================================================

/// What a container does when content exceeds its bounds.
///
/// The default, `ForceStretchParent`, lets content push the container:
/// nothing is written, the platform grows the box. The other three
/// clamp the container and deal with the excess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverflowPolicy {
    /// Content may push the container larger (no overflow property).
    #[default]
    ForceStretchParent,
    /// Excess content is clipped.
    Crop,
    /// Children wrap onto additional lines along the main axis.
    Wrap,
    /// Excess content scrolls.
    Scroll,
}

impl OverflowPolicy {
    /// CSS `overflow-*` value, or None when the property stays unset.
    ///
    /// `Wrap` is handled through `flex-wrap`, not `overflow`.
    pub const fn overflow_css(&self) -> Option<&'static str> {
        match self {
            Self::Crop => Some("hidden"),
            Self::Scroll => Some("auto"),
            Self::ForceStretchParent | Self::Wrap => None,
        }
    }
}

// =============================================================================
// EdgeSizes - Resolved lengths for the four sides of a box
// =============================================================================

/// Resolved padding lengths, one per side.
///
/// `None` means the side was never specified and stays at the platform
/// default of zero. Published by each element so stack parents can hand
/// their padding down to layered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeSizes {
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
}

impl EdgeSizes {
    /// The pair of sides that bound the given extent: `(near, far)`.
    ///
    /// Width is bounded by left/right, height by top/bottom.
    pub fn across(&self, extent: Extent) -> (Option<&str>, Option<&str>) {
        match extent {
            Extent::Width => (self.left.as_deref(), self.right.as_deref()),
            Extent::Height => (self.top.as_deref(), self.bottom.as_deref()),
        }
    }

    /// True when no side carries a length.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

// =============================================================================
// Node Classes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Structural marker classes as a bitfield.
    ///
    /// These are published on each element alongside its style map and
    /// let platform CSS key rules off structure: a `STACK` parent's
    /// rule is what absolutely positions layered children.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeClass: u8 {
        /// Container lays children out along a row or column.
        const FLOW = 1 << 0;
        /// Container overlays children in layers.
        const STACK = 1 << 1;
        /// Element grows horizontally (resolved weight > 0).
        const GROWS_X = 1 << 2;
        /// Element grows vertically (resolved weight > 0).
        const GROWS_Y = 1 << 3;
    }
}

impl NodeClass {
    /// The marker class for a growth flag on the given extent.
    pub const fn grows(extent: Extent) -> Self {
        match extent {
            Extent::Width => Self::GROWS_X,
            Extent::Height => Self::GROWS_Y,
        }
    }

    /// CSS class names for the set bits, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(Self::FLOW) {
            out.push("fx-flow");
        }
        if self.contains(Self::STACK) {
            out.push("fx-stack");
        }
        if self.contains(Self::GROWS_X) {
            out.push("fx-grows-x");
        }
        if self.contains(Self::GROWS_Y) {
            out.push("fx-grows-y");
        }
        out
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `TextAttr::BOLD | TextAttr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextAttr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
    }
}

// =============================================================================
// StyleProp - The computed output surface
// =============================================================================

/// A style property the resolvers may write.
///
/// This is the entire output surface: resolvers only ever produce
/// `(StyleProp, value)` pairs, applied to an element's style map with
/// write suppression. Ordered so style maps iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProp {
    Display,
    BoxSizing,
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    FlexGrow,
    FlexBasis,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    ColumnGap,
    RowGap,
    OverflowX,
    OverflowY,
    ScrollbarWidth,
    BorderRadius,
    BoxShadow,
    Background,
    BackgroundImage,
    BackgroundSize,
    BackgroundPosition,
    Color,
    FontSize,
    FontFamily,
    FontWeight,
    FontStyle,
    TextDecoration,
    TextAlign,
    Cursor,
    PointerEvents,
    UserSelect,
}

impl StyleProp {
    /// The CSS property name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::BoxSizing => "box-sizing",
            Self::Width => "width",
            Self::MinWidth => "min-width",
            Self::MaxWidth => "max-width",
            Self::Height => "height",
            Self::MinHeight => "min-height",
            Self::MaxHeight => "max-height",
            Self::FlexGrow => "flex-grow",
            Self::FlexBasis => "flex-basis",
            Self::FlexDirection => "flex-direction",
            Self::FlexWrap => "flex-wrap",
            Self::JustifyContent => "justify-content",
            Self::AlignItems => "align-items",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::ColumnGap => "column-gap",
            Self::RowGap => "row-gap",
            Self::OverflowX => "overflow-x",
            Self::OverflowY => "overflow-y",
            Self::ScrollbarWidth => "scrollbar-width",
            Self::BorderRadius => "border-radius",
            Self::BoxShadow => "box-shadow",
            Self::Background => "background",
            Self::BackgroundImage => "background-image",
            Self::BackgroundSize => "background-size",
            Self::BackgroundPosition => "background-position",
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::FontFamily => "font-family",
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::TextDecoration => "text-decoration",
            Self::TextAlign => "text-align",
            Self::Cursor => "cursor",
            Self::PointerEvents => "pointer-events",
            Self::UserSelect => "user-select",
        }
    }

    /// The sizing property triple `(exact, min, max)` for an extent.
    pub const fn size_triple(extent: Extent) -> (Self, Self, Self) {
        match extent {
            Extent::Width => (Self::Width, Self::MinWidth, Self::MaxWidth),
            Extent::Height => (Self::Height, Self::MinHeight, Self::MaxHeight),
        }
    }
}

impl std::fmt::Display for StyleProp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
