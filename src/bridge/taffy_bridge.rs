//! Taffy bridge - concrete rectangles from resolved styles.
//!
//! Snapshots a context's computed style maps into a Taffy tree, runs
//! flexbox layout, and hands back per-element rectangles. The bridge
//! reads only the published output surface (style maps and marker
//! classes), so anything that consumes the same surface lays out the
//! same way.
//!
//! Layers under a stack parent become absolutely positioned nodes:
//! the parent's padding turns into insets, and a fill length on the
//! layer pins the far inset so the layer stretches.

use std::collections::{BTreeMap, HashMap};

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, JustifyContent,
    LengthPercentage, LengthPercentageAuto, NodeId as TaffyNodeId, Overflow, Position, Rect, Size,
    Style, TaffyTree,
};
use thiserror::Error;

use crate::scene::{LayoutContext, NodeId};
use crate::types::{NodeClass, StyleProp};

// =============================================================================
// Errors
// =============================================================================

/// Failures while building or computing a layout tree.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("layout computation failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

// =============================================================================
// Output
// =============================================================================

/// One element's computed rectangle, relative to its parent's
/// content box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// =============================================================================
// Bridge tree
// =============================================================================

/// A Taffy tree built from a context snapshot.
pub struct BridgeTree {
    tree: TaffyTree,
    nodes: HashMap<NodeId, TaffyNodeId>,
    roots: Vec<TaffyNodeId>,
}

impl BridgeTree {
    /// Snapshot every attached element into a fresh tree.
    ///
    /// Children are added in attach order, so flex order matches the
    /// scene. Call again after style changes; the tree does not track
    /// the context.
    pub fn build(ctx: &LayoutContext) -> Result<Self, BridgeError> {
        let mut bridge = Self {
            tree: TaffyTree::new(),
            nodes: HashMap::new(),
            roots: Vec::new(),
        };
        for root in ctx.roots() {
            let node = bridge.add_subtree(ctx, root, None)?;
            bridge.roots.push(node);
        }
        tracing::debug!(elements = bridge.nodes.len(), "bridge tree built");
        Ok(bridge)
    }

    fn add_subtree(
        &mut self,
        ctx: &LayoutContext,
        id: NodeId,
        layer: Option<&LayerFrame>,
    ) -> Result<TaffyNodeId, BridgeError> {
        let styles = ctx.styles(id);
        let style = build_style(&styles, layer);
        let node = self.tree.new_leaf(style)?;
        self.nodes.insert(id, node);

        // A stack parent frames its children with its own padding.
        let frame = ctx
            .classes(id)
            .contains(NodeClass::STACK)
            .then(|| LayerFrame::from_styles(&styles));
        for child in ctx.children(id) {
            let child_node = self.add_subtree(ctx, child, frame.as_ref())?;
            self.tree.add_child(node, child_node)?;
        }
        Ok(node)
    }

    /// Compute layout for every root against a definite viewport.
    pub fn compute(&mut self, width: f32, height: f32) -> Result<(), BridgeError> {
        let available = Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        };
        for &root in &self.roots {
            self.tree.compute_layout(root, available)?;
        }
        Ok(())
    }

    /// The element's rectangle, relative to its parent's content box.
    pub fn rect(&self, id: NodeId) -> Option<LayoutRect> {
        let node = self.nodes.get(&id)?;
        let layout = self.tree.layout(*node).ok()?;
        Some(LayoutRect {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        })
    }

    /// How far the element's content overflows its box, per axis.
    pub fn overflow(&self, id: NodeId) -> Option<(f32, f32)> {
        let node = self.nodes.get(&id)?;
        let layout = self.tree.layout(*node).ok()?;
        Some((
            (layout.content_size.width - layout.size.width).max(0.0),
            (layout.content_size.height - layout.size.height).max(0.0),
        ))
    }

    /// Elements in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// =============================================================================
// Layer frames
// =============================================================================

/// The inset frame a stack parent imposes on its layers.
struct LayerFrame {
    top: LengthPercentageAuto,
    right: LengthPercentageAuto,
    bottom: LengthPercentageAuto,
    left: LengthPercentageAuto,
}

impl LayerFrame {
    fn from_styles(styles: &BTreeMap<StyleProp, String>) -> Self {
        let side = |prop: StyleProp| match styles.get(&prop) {
            Some(value) => parse_lpa(value),
            None => LengthPercentageAuto::Length(0.0),
        };
        Self {
            top: side(StyleProp::PaddingTop),
            right: side(StyleProp::PaddingRight),
            bottom: side(StyleProp::PaddingBottom),
            left: side(StyleProp::PaddingLeft),
        }
    }
}

// =============================================================================
// Style building
// =============================================================================

/// Build a Taffy style from an element's computed declarations.
fn build_style(styles: &BTreeMap<StyleProp, String>, layer: Option<&LayerFrame>) -> Style {
    let get = |prop: StyleProp| styles.get(&prop).map(String::as_str);

    let mut style = Style {
        display: Display::Flex,

        // Flex container properties
        flex_direction: parse_direction(get(StyleProp::FlexDirection)),
        flex_wrap: parse_wrap(get(StyleProp::FlexWrap)),
        justify_content: parse_justify(get(StyleProp::JustifyContent)),
        align_items: parse_align_items(get(StyleProp::AlignItems)),

        // Flex item properties
        flex_grow: parse_scalar(get(StyleProp::FlexGrow)),
        flex_basis: parse_dimension(get(StyleProp::FlexBasis)),

        // Dimensions
        size: Size {
            width: parse_dimension(get(StyleProp::Width)),
            height: parse_dimension(get(StyleProp::Height)),
        },
        min_size: Size {
            width: parse_dimension(get(StyleProp::MinWidth)),
            height: parse_dimension(get(StyleProp::MinHeight)),
        },
        max_size: Size {
            width: parse_dimension(get(StyleProp::MaxWidth)),
            height: parse_dimension(get(StyleProp::MaxHeight)),
        },

        // Padding and gaps (LengthPercentage, no auto)
        padding: Rect {
            top: parse_length(get(StyleProp::PaddingTop)),
            right: parse_length(get(StyleProp::PaddingRight)),
            bottom: parse_length(get(StyleProp::PaddingBottom)),
            left: parse_length(get(StyleProp::PaddingLeft)),
        },
        gap: Size {
            width: parse_length(get(StyleProp::ColumnGap)),
            height: parse_length(get(StyleProp::RowGap)),
        },

        // Overflow
        overflow: taffy::Point {
            x: parse_overflow(get(StyleProp::OverflowX)),
            y: parse_overflow(get(StyleProp::OverflowY)),
        },

        ..Default::default()
    };

    // Layers escape their stack parent's flow. The parent's padding
    // becomes insets; a fill length pins the far inset too, which is
    // how `calc(100% - pads)` comes out the other side.
    if let Some(frame) = layer {
        style.position = Position::Absolute;
        let fills_width = get(StyleProp::Width).is_some_and(is_fill);
        let fills_height = get(StyleProp::Height).is_some_and(is_fill);
        style.inset = Rect {
            top: frame.top,
            right: if fills_width {
                frame.right
            } else {
                LengthPercentageAuto::Auto
            },
            bottom: if fills_height {
                frame.bottom
            } else {
                LengthPercentageAuto::Auto
            },
            left: frame.left,
        };
        if fills_width {
            style.size.width = Dimension::Auto;
            style.min_size.width = Dimension::Auto;
            style.max_size.width = Dimension::Auto;
        }
        if fills_height {
            style.size.height = Dimension::Auto;
            style.min_size.height = Dimension::Auto;
            style.max_size.height = Dimension::Auto;
        }
    }

    style
}

/// A length that fills the parent: plain `100%` or a `calc()` fill.
fn is_fill(value: &str) -> bool {
    value == "100%" || value.starts_with("calc(")
}

// =============================================================================
// Declaration parsing
// =============================================================================

/// Parse a length into a Taffy dimension. Unknown or content-driven
/// values come back as `Auto` and let Taffy size from content.
fn parse_dimension(value: Option<&str>) -> Dimension {
    let Some(value) = value else {
        return Dimension::Auto;
    };
    if let Some(px) = value.strip_suffix("px") {
        if let Ok(px) = px.parse::<f32>() {
            return Dimension::Length(px);
        }
    }
    if let Some(percent) = value.strip_suffix('%') {
        if let Ok(percent) = percent.parse::<f32>() {
            return Dimension::Percent(percent / 100.0);
        }
    }
    if !matches!(value, "auto" | "fit-content") && !value.starts_with("calc(") {
        tracing::trace!(value, "length not representable, sizing from content");
    }
    Dimension::Auto
}

fn parse_lpa(value: &str) -> LengthPercentageAuto {
    match parse_dimension(Some(value)) {
        Dimension::Length(px) => LengthPercentageAuto::Length(px),
        Dimension::Percent(p) => LengthPercentageAuto::Percent(p),
        Dimension::Auto => LengthPercentageAuto::Auto,
    }
}

fn parse_length(value: Option<&str>) -> LengthPercentage {
    match value.map(|v| parse_dimension(Some(v))) {
        Some(Dimension::Length(px)) => LengthPercentage::Length(px),
        Some(Dimension::Percent(p)) => LengthPercentage::Percent(p),
        _ => LengthPercentage::Length(0.0),
    }
}

fn parse_scalar(value: Option<&str>) -> f32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

fn parse_direction(value: Option<&str>) -> FlexDirection {
    match value {
        Some("row") => FlexDirection::Row,
        _ => FlexDirection::Column,
    }
}

fn parse_wrap(value: Option<&str>) -> FlexWrap {
    match value {
        Some("wrap") => FlexWrap::Wrap,
        _ => FlexWrap::NoWrap,
    }
}

fn parse_justify(value: Option<&str>) -> Option<JustifyContent> {
    Some(match value? {
        "center" => JustifyContent::Center,
        "flex-end" => JustifyContent::FlexEnd,
        "space-between" => JustifyContent::SpaceBetween,
        "space-around" => JustifyContent::SpaceAround,
        "space-evenly" => JustifyContent::SpaceEvenly,
        _ => JustifyContent::FlexStart,
    })
}

fn parse_align_items(value: Option<&str>) -> Option<AlignItems> {
    Some(match value? {
        "center" => AlignItems::Center,
        "flex-end" => AlignItems::FlexEnd,
        "stretch" => AlignItems::Stretch,
        _ => AlignItems::FlexStart,
    })
}

fn parse_overflow(value: Option<&str>) -> Overflow {
    match value {
        Some("hidden") => Overflow::Hidden,
        Some("auto") | Some("scroll") => Overflow::Scroll,
        _ => Overflow::Visible,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{attach, detach};
    use crate::style::{SizeSpec, StyleProps};
    use crate::types::Axis;

    #[test]
    fn test_empty_context() {
        let ctx = LayoutContext::new();
        let mut bridge = BridgeTree::build(&ctx).unwrap();
        assert!(bridge.is_empty());
        bridge.compute(800.0, 600.0).unwrap();
    }

    #[test]
    fn test_exact_box_rect() {
        let ctx = LayoutContext::new();
        let node = attach(
            &ctx,
            None,
            StyleProps {
                width: Some(4.into()),
                height: Some(2.into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();
        let rect = bridge.rect(node).unwrap();
        assert_eq!(rect.width, 72.0);
        assert_eq!(rect.height, 36.0);

        detach(&ctx, node);
    }

    #[test]
    fn test_padding_offsets_child() {
        let ctx = LayoutContext::new();
        let parent = attach(
            &ctx,
            None,
            StyleProps {
                width: Some("200px".into()),
                height: Some("100px".into()),
                pad_around: Some(1.into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(parent),
            StyleProps {
                width: Some("50px".into()),
                height: Some("20px".into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();
        let rect = bridge.rect(child).unwrap();
        assert_eq!(rect.x, 18.0);
        assert_eq!(rect.y, 18.0);
    }

    #[test]
    fn test_centered_child() {
        let ctx = LayoutContext::new();
        let parent = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                align_x: Some(crate::types::Align::Center.into()),
                width: Some("100px".into()),
                height: Some("40px".into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(parent),
            StyleProps {
                width: Some("20px".into()),
                height: Some("20px".into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();
        assert_eq!(bridge.rect(child).unwrap().x, 40.0);
    }

    #[test]
    fn test_weighted_split_shares_row() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                width: Some("300px".into()),
                height: Some("50px".into()),
                ..Default::default()
            },
        );
        let a = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some(SizeSpec::grow().into()),
                height: Some(SizeSpec::Stretch.into()),
                ..Default::default()
            },
        );
        let b = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some(SizeSpec::grow_weighted(2.0).into()),
                height: Some(SizeSpec::Stretch.into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();

        // Weights 1:2 over 300px settle at 100 and 200 regardless of
        // the oversubscribed bases.
        assert_eq!(bridge.rect(a).unwrap().width, 100.0);
        assert_eq!(bridge.rect(b).unwrap().width, 200.0);
        assert_eq!(bridge.rect(b).unwrap().x, 100.0);
    }

    #[test]
    fn test_gap_separates_children() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                width: Some("300px".into()),
                height: Some("40px".into()),
                pad_between: Some(1.into()),
                ..Default::default()
            },
        );
        let first = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some("50px".into()),
                height: Some("20px".into()),
                ..Default::default()
            },
        );
        let second = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some("50px".into()),
                height: Some("20px".into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();
        assert_eq!(bridge.rect(first).unwrap().x, 0.0);
        assert_eq!(bridge.rect(second).unwrap().x, 68.0);
    }

    #[test]
    fn test_stack_layer_fills_minus_padding() {
        let ctx = LayoutContext::new();
        let stack = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Stack.into()),
                width: Some("200px".into()),
                height: Some("100px".into()),
                pad: Some(1.into()),
                ..Default::default()
            },
        );
        let layer = attach(
            &ctx,
            Some(stack),
            StyleProps {
                width: Some(SizeSpec::Stretch.into()),
                height: Some(SizeSpec::Stretch.into()),
                ..Default::default()
            },
        );
        let badge = attach(
            &ctx,
            Some(stack),
            StyleProps {
                width: Some("30px".into()),
                height: Some("10px".into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();

        let rect = bridge.rect(layer).unwrap();
        assert_eq!(rect.x, 18.0);
        assert_eq!(rect.y, 18.0);
        assert_eq!(rect.width, 164.0);
        assert_eq!(rect.height, 64.0);

        // Layers overlap instead of flowing: the second starts at the
        // same inset corner.
        let badge_rect = bridge.rect(badge).unwrap();
        assert_eq!(badge_rect.x, 18.0);
        assert_eq!(badge_rect.y, 18.0);
        assert_eq!(badge_rect.width, 30.0);
    }

    #[test]
    fn test_grow_chain_through_hugging_middle() {
        let ctx = LayoutContext::new();
        let root = attach(
            &ctx,
            None,
            StyleProps {
                width: Some("120px".into()),
                height: Some("90px".into()),
                ..Default::default()
            },
        );
        // The middle box declares nothing: it hugs until the leaf's
        // growth promotes it.
        let middle = attach(&ctx, Some(root), StyleProps::default());
        let leaf = attach(
            &ctx,
            Some(middle),
            StyleProps {
                height: Some(SizeSpec::grow().into()),
                width: Some("40px".into()),
                ..Default::default()
            },
        );

        let mut bridge = BridgeTree::build(&ctx).unwrap();
        bridge.compute(800.0, 600.0).unwrap();

        assert_eq!(bridge.rect(middle).unwrap().height, 90.0);
        assert_eq!(bridge.rect(leaf).unwrap().height, 90.0);
    }

    #[test]
    fn test_dimension_parsing() {
        assert!(matches!(
            parse_dimension(Some("72px")),
            Dimension::Length(px) if px == 72.0
        ));
        assert!(matches!(
            parse_dimension(Some("150%")),
            Dimension::Percent(p) if p == 1.5
        ));
        assert!(matches!(parse_dimension(Some("fit-content")), Dimension::Auto));
        assert!(matches!(
            parse_dimension(Some("calc(100% - 18px - 18px)")),
            Dimension::Auto
        ));
        assert!(matches!(parse_dimension(None), Dimension::Auto));
    }

    #[test]
    fn test_fill_detection() {
        assert!(is_fill("100%"));
        assert!(is_fill("calc(100% - 18px - 18px)"));
        assert!(!is_fill("50%"));
        assert!(!is_fill("fit-content"));
    }

    #[test]
    fn test_stale_rect_is_none() {
        let ctx = LayoutContext::new();
        let node = attach(&ctx, None, StyleProps::default());
        let bridge = BridgeTree::build(&ctx).unwrap();
        detach(&ctx, node);
        // The snapshot still knows the node; a fresh build does not.
        assert!(bridge.rect(node).is_some());
        let rebuilt = BridgeTree::build(&ctx).unwrap();
        assert!(rebuilt.rect(node).is_none());
    }
}
