//! Attach and detach - wiring elements into the reactive pipeline.
//!
//! `attach` allocates an element, writes the constant base styles, and
//! installs the derived computations and effects that keep the
//! element's style map in sync with its props, its parent's published
//! context, and its own growth ledger. `detach` tears the subtree
//! down, stopping every effect and retracting ledger contributions.
//!
//! # Example
//!
//! ```
//! use flexel::{attach, detach, LayoutContext, SizeSpec, StyleProps};
//!
//! let ctx = LayoutContext::new();
//! let root = attach(&ctx, None, StyleProps {
//!     width: Some(SizeSpec::grow().into()),
//!     ..Default::default()
//! });
//! assert!(ctx.is_attached(root));
//!
//! detach(&ctx, root);
//! assert!(!ctx.is_attached(root));
//! ```

use std::rc::Rc;

use crate::reactive::{derived, effect, Cleanup, Derived, Signal};
use crate::resolve::{
    resolve_decor, resolve_extent, resolve_flow, resolve_interaction, resolve_text, DecorQuery,
    FlowQuery, InteractionQuery, Metrics, PadIntents, ResolvedAxis, SizeQuery, TextQuery,
};
use crate::scene::{LayoutContext, NodeId, WeakContext};
use crate::style::{Prop, StyleProps};
use crate::types::{Align, Align2, Axis, EdgeSizes, Extent, NodeClass, StyleProp};

use super::ledger;

// =============================================================================
// Attach
// =============================================================================

/// Attach an element under `parent` (or as a root) and wire its props
/// into the reactive pipeline.
///
/// Signal- and getter-backed props stay live: whenever one changes,
/// only the affected resolution re-runs, and only effective style
/// changes reach the element's style map.
pub fn attach(ctx: &LayoutContext, parent: Option<NodeId>, props: StyleProps) -> NodeId {
    // 1. VALIDATE PARENT - a stale handle attaches at the root instead
    let parent = match parent {
        Some(p) if !ctx.is_attached(p) => {
            tracing::warn!(parent = p.index(), "parent not attached, attaching as root");
            None
        }
        other => other,
    };

    // 2. ALLOCATE
    let id = ctx.create(parent);
    let Some(element) = ctx.element(id) else {
        return id;
    };
    let parent_published = parent
        .and_then(|p| ctx.element(p))
        .map(|p| (p.axis_out.clone(), p.pad_out.clone()));

    // 3. BASE WRITES - constant for the element's lifetime
    ctx.set_style(id, StyleProp::Display, Some("flex".to_string()));
    ctx.set_style(id, StyleProp::BoxSizing, Some("border-box".to_string()));

    // 4. WIRE SIZING - one resolution per extent, then the flex pair
    let props = Rc::new(props);
    let metrics = ctx.metrics();
    let weak = ctx.downgrade();

    let (resolved_w, stop_w) = wire_extent(
        id,
        Extent::Width,
        metrics,
        weak.clone(),
        props.clone(),
        parent_published.clone(),
        element.some_child_grows[Extent::Width.index()].clone(),
    );
    let (resolved_h, stop_h) = wire_extent(
        id,
        Extent::Height,
        metrics,
        weak.clone(),
        props.clone(),
        parent_published.clone(),
        element.some_child_grows[Extent::Height.index()].clone(),
    );
    let stop_flex = wire_flex(
        id,
        weak.clone(),
        parent_published.map(|(axis, _)| axis),
        resolved_w,
        resolved_h,
    );

    // 5. WIRE FLOW - container direction, alignment, spacing
    let stop_flow = wire_flow(
        id,
        metrics,
        weak.clone(),
        props.clone(),
        element.child_count.clone(),
        element.axis_out.clone(),
        element.pad_out.clone(),
    );

    // 6. WIRE DECORATION, TEXT, INTERACTION
    let stop_decor = wire_decor(id, metrics, weak.clone(), props);

    // 7. REGISTER CLEANUPS - effects stop first, the ledger retract
    //    runs last so it sees the final flags
    ctx.on_detach(id, stop_w);
    ctx.on_detach(id, stop_h);
    ctx.on_detach(id, stop_flex);
    ctx.on_detach(id, stop_flow);
    ctx.on_detach(id, stop_decor);
    ctx.on_detach(
        id,
        Box::new(move || {
            if let Some(ctx) = weak.upgrade() {
                ledger::retract_growth(&ctx, id);
            }
        }),
    );

    id
}

/// Detach an element and its whole subtree.
pub fn detach(ctx: &LayoutContext, id: NodeId) {
    if !ctx.is_attached(id) {
        tracing::warn!(node = id.index(), "detach of unattached element");
        return;
    }
    ctx.remove(id);
}

// =============================================================================
// Sizing wires
// =============================================================================

/// One extent's resolution: a derived that recomputes the
/// [`ResolvedAxis`] and an effect that applies it.
///
/// The derived reads the extent's intent and bounds, the element's own
/// ledger output (for Shrink promotion), and the parent's published
/// axis and padding. The apply effect re-runs on any upstream change;
/// writes that match the stored style die at the style map, so an
/// unchanged resolution never bumps the revision.
fn wire_extent(
    id: NodeId,
    extent: Extent,
    metrics: Metrics,
    weak: WeakContext,
    props: Rc<StyleProps>,
    parent_published: Option<(Signal<Axis>, Signal<EdgeSizes>)>,
    own_grows: Signal<bool>,
) -> (Derived<ResolvedAxis>, Cleanup) {
    let resolved = derived(move || {
        let (intent_prop, min_prop, max_prop) = match extent {
            Extent::Width => (&props.width, &props.min_width, &props.max_width),
            Extent::Height => (&props.height, &props.min_height, &props.max_height),
        };
        let intent = read(intent_prop).unwrap_or_default();
        let min = read(min_prop);
        let max = read(max_prop);
        let descendant_grows = own_grows.get();
        let (main_axis, stack_pads) = match &parent_published {
            Some((axis, pads)) => {
                let axis = axis.get();
                let stack = matches!(axis, Axis::Stack).then(|| pads.get());
                (axis.is_main(extent), stack)
            }
            None => (false, None),
        };
        resolve_extent(
            SizeQuery {
                intent: &intent,
                min: min.as_ref(),
                max: max.as_ref(),
                main_axis,
                descendant_grows,
                layer_pad: stack_pads.as_ref().map(|pads| pads.across(extent)),
            },
            &metrics,
        )
    });

    let stop = {
        let resolved = resolved.clone();
        effect(move || {
            let r = resolved.get();
            let Some(ctx) = weak.upgrade() else {
                return;
            };
            let (exact, min, max) = StyleProp::size_triple(extent);
            ctx.set_style(id, exact, r.exact.clone());
            ctx.set_style(id, min, r.min.clone());
            ctx.set_style(id, max, r.max.clone());
            ledger::report_growth(&ctx, id, extent, r.grows());
        })
    };
    (resolved, Box::new(stop))
}

/// The `flex-grow` / `flex-basis` pair.
///
/// Both properties belong to whichever extent is currently the
/// parent's main extent, so a single effect owns them: it picks the
/// main extent's resolution, writes the pair when that extent grows,
/// and clears it otherwise. Elements under a stack parent (no main
/// extent) and roots never carry the pair.
fn wire_flex(
    id: NodeId,
    weak: WeakContext,
    parent_axis: Option<Signal<Axis>>,
    resolved_w: Derived<ResolvedAxis>,
    resolved_h: Derived<ResolvedAxis>,
) -> Cleanup {
    let stop = effect(move || {
        let main = parent_axis
            .as_ref()
            .map(|axis| axis.get())
            .and_then(|axis| axis.main_extent());
        let pair = main.and_then(|extent| {
            let r = match extent {
                Extent::Width => resolved_w.get(),
                Extent::Height => resolved_h.get(),
            };
            r.grows().then(|| (r.grow_css(), r.basis_css()))
        });
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        match pair {
            Some((grow, basis)) => {
                ctx.set_style(id, StyleProp::FlexGrow, grow);
                ctx.set_style(id, StyleProp::FlexBasis, basis);
            }
            None => {
                ctx.set_style(id, StyleProp::FlexGrow, None);
                ctx.set_style(id, StyleProp::FlexBasis, None);
            }
        }
    });
    Box::new(stop)
}

// =============================================================================
// Flow wire
// =============================================================================

/// Container flow: direction, alignment, padding, gaps, overflow.
///
/// Also publishes the element's resolved axis and padding for its
/// children, and keeps the `fx-flow` / `fx-stack` marker classes in
/// step with the axis.
fn wire_flow(
    id: NodeId,
    metrics: Metrics,
    weak: WeakContext,
    props: Rc<StyleProps>,
    child_count: Signal<usize>,
    axis_out: Signal<Axis>,
    pad_out: Signal<EdgeSizes>,
) -> Cleanup {
    let flow = derived(move || {
        let axis = read(&props.axis).unwrap_or_default();
        let align = read_align(&props.align, &props.align_x, &props.align_y);
        let pads = PadIntents {
            pad: read(&props.pad),
            pad_around: read(&props.pad_around),
            pad_x: read(&props.pad_x),
            pad_y: read(&props.pad_y),
            pad_top: read(&props.pad_top),
            pad_right: read(&props.pad_right),
            pad_bottom: read(&props.pad_bottom),
            pad_left: read(&props.pad_left),
            pad_between: read(&props.pad_between),
            pad_between_x: read(&props.pad_between_x),
            pad_between_y: read(&props.pad_between_y),
        };
        let overflow = read(&props.overflow).unwrap_or_default();
        let overflow_x = read(&props.overflow_x).unwrap_or(overflow);
        let overflow_y = read(&props.overflow_y).unwrap_or(overflow);
        let child_count = child_count.get();
        resolve_flow(
            FlowQuery {
                axis,
                align,
                pads: &pads,
                overflow_x,
                overflow_y,
                child_count,
            },
            &metrics,
        )
    });

    let stop = effect(move || {
        let f = flow.get();
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        ctx.set_style(id, StyleProp::FlexDirection, f.direction.clone());
        ctx.set_style(id, StyleProp::JustifyContent, Some(f.justify.clone()));
        ctx.set_style(id, StyleProp::AlignItems, Some(f.items.clone()));
        ctx.set_style(id, StyleProp::PaddingTop, f.padding.top.clone());
        ctx.set_style(id, StyleProp::PaddingRight, f.padding.right.clone());
        ctx.set_style(id, StyleProp::PaddingBottom, f.padding.bottom.clone());
        ctx.set_style(id, StyleProp::PaddingLeft, f.padding.left.clone());
        ctx.set_style(id, StyleProp::ColumnGap, f.column_gap.clone());
        ctx.set_style(id, StyleProp::RowGap, f.row_gap.clone());
        ctx.set_style(id, StyleProp::OverflowX, f.overflow_x.clone());
        ctx.set_style(id, StyleProp::OverflowY, f.overflow_y.clone());
        ctx.set_style(id, StyleProp::FlexWrap, f.wrap.clone());
        let scrollbar = f.thin_scrollbar.then(|| "thin".to_string());
        ctx.set_style(id, StyleProp::ScrollbarWidth, scrollbar);

        let stacked = matches!(f.axis, Axis::Stack);
        ctx.set_class(id, NodeClass::FLOW, !stacked);
        ctx.set_class(id, NodeClass::STACK, stacked);

        // Publish for children. Equality gating keeps subscribers
        // quiet when the axis or padding did not move.
        axis_out.set(f.axis);
        pad_out.set(f.padding.clone());
    });
    Box::new(stop)
}

// =============================================================================
// Decoration, text, interaction wire
// =============================================================================

/// Decoration, text and interaction styling in one effect.
///
/// The resolvers return patch lists rather than full coverage, so this
/// effect diffs against the previous run and clears properties that
/// dropped out (a container losing its centered alignment takes the
/// implicit `text-align` with it).
fn wire_decor(id: NodeId, metrics: Metrics, weak: WeakContext, props: Rc<StyleProps>) -> Cleanup {
    let patches = derived(move || {
        let mut out = resolve_decor(
            &DecorQuery {
                round: read(&props.round),
                shadow: read(&props.shadow),
                bg: read(&props.bg),
                bg_image: read(&props.bg_image),
            },
            &metrics,
        );
        let container_align_x = read_align(&props.align, &props.align_x, &props.align_y).x;
        out.extend(resolve_text(
            &TextQuery {
                size: read(&props.text_size),
                color: read(&props.text_color),
                font: read(&props.font),
                attrs: read(&props.text_attrs),
                align: read(&props.text_align),
                container_align_x,
            },
            &metrics,
        ));
        out.extend(resolve_interaction(&InteractionQuery {
            clickable: read(&props.clickable),
            disabled: read(&props.disabled),
            selectable: read(&props.selectable),
        }));
        out
    });

    let mut last: Vec<StyleProp> = Vec::new();
    let stop = effect(move || {
        let patches = patches.get();
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let current: Vec<StyleProp> = patches.iter().map(|(prop, _)| *prop).collect();
        for prop in &last {
            if !current.contains(prop) {
                ctx.set_style(id, *prop, None);
            }
        }
        for (prop, value) in &patches {
            ctx.set_style(id, *prop, Some(value.clone()));
        }
        last = current;
    });
    Box::new(stop)
}

// =============================================================================
// Helpers
// =============================================================================

fn read<T: Clone + PartialEq + 'static>(prop: &Option<Prop<T>>) -> Option<T> {
    prop.as_ref().map(Prop::get)
}

/// Alignment precedence: `align_x` / `align_y` win over `align`.
fn read_align(
    align: &Option<Prop<Align2>>,
    x: &Option<Prop<Align>>,
    y: &Option<Prop<Align>>,
) -> Align2 {
    let mut align2 = read(align).unwrap_or_default();
    if let Some(x) = read(x) {
        align2.x = x;
    }
    if let Some(y) = read(y) {
        align2.y = y;
    }
    align2
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::signal;
    use crate::style::{SizeSpec, SizeValue};
    use crate::types::OverflowPolicy;

    fn style(ctx: &LayoutContext, id: NodeId, prop: StyleProp) -> Option<String> {
        ctx.style(id, prop)
    }

    #[test]
    fn test_attach_writes_base_styles() {
        let ctx = LayoutContext::new();
        let node = attach(&ctx, None, StyleProps::default());

        assert_eq!(style(&ctx, node, StyleProp::Display).as_deref(), Some("flex"));
        assert_eq!(
            style(&ctx, node, StyleProp::BoxSizing).as_deref(),
            Some("border-box")
        );
    }

    #[test]
    fn test_default_sizes_shrink() {
        let ctx = LayoutContext::new();
        let node = attach(&ctx, None, StyleProps::default());

        for prop in [StyleProp::Width, StyleProp::MinWidth, StyleProp::MaxWidth] {
            assert_eq!(style(&ctx, node, prop).as_deref(), Some("fit-content"));
        }
    }

    #[test]
    fn test_exact_width_resolves_rigid_triple() {
        let ctx = LayoutContext::new();
        let node = attach(
            &ctx,
            None,
            StyleProps {
                width: Some(4.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, node, StyleProp::Width).as_deref(), Some("72px"));
        assert_eq!(style(&ctx, node, StyleProp::MinWidth).as_deref(), Some("72px"));
        assert_eq!(style(&ctx, node, StyleProp::MaxWidth).as_deref(), Some("72px"));
    }

    #[test]
    fn test_grow_on_main_axis_sets_flex_pair() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some(SizeSpec::grow_weighted(2.0).into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, child, StyleProp::FlexGrow).as_deref(), Some("2"));
        assert_eq!(style(&ctx, child, StyleProp::FlexBasis).as_deref(), Some("200%"));
        // The main extent is left to the engine, not pinned.
        assert_eq!(style(&ctx, child, StyleProp::Width), None);
        assert!(ctx.classes(child).contains(NodeClass::GROWS_X));
    }

    #[test]
    fn test_grow_on_cross_axis_fills() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(row),
            StyleProps {
                height: Some(SizeSpec::grow().into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, child, StyleProp::Height).as_deref(), Some("100%"));
        // Cross-extent growth never touches the flex pair.
        assert_eq!(style(&ctx, child, StyleProp::FlexGrow), None);
        assert!(ctx.classes(child).contains(NodeClass::GROWS_Y));
    }

    #[test]
    fn test_grow_standalone_bounds_reach_min_max() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(row),
            StyleProps {
                width: Some(SizeSpec::grow().into()),
                min_width: Some(2.into()),
                max_width: Some(10.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, child, StyleProp::MinWidth).as_deref(), Some("36px"));
        assert_eq!(style(&ctx, child, StyleProp::MaxWidth).as_deref(), Some("180px"));
    }

    #[test]
    fn test_signal_width_updates_styles() {
        let ctx = LayoutContext::new();
        let width = signal(SizeSpec::exact(4));
        let node = attach(
            &ctx,
            None,
            StyleProps {
                width: Some(width.clone().into()),
                ..Default::default()
            },
        );
        assert_eq!(style(&ctx, node, StyleProp::Width).as_deref(), Some("72px"));

        width.set(SizeSpec::exact(8));
        assert_eq!(style(&ctx, node, StyleProp::Width).as_deref(), Some("144px"));

        // An equivalent write leaves the revision alone.
        let revision = ctx.revision(node);
        width.set(SizeSpec::exact(8));
        assert_eq!(ctx.revision(node), revision);
    }

    #[test]
    fn test_shrink_promotes_and_demotes_with_descendants() {
        let ctx = LayoutContext::new();
        let grandparent = attach(
            &ctx,
            None,
            StyleProps {
                height: Some(10.into()),
                ..Default::default()
            },
        );
        let parent = attach(&ctx, Some(grandparent), StyleProps::default());
        assert_eq!(
            style(&ctx, parent, StyleProp::Height).as_deref(),
            Some("fit-content")
        );

        // A growing grandchild promotes the hugging parent.
        let child = attach(
            &ctx,
            Some(parent),
            StyleProps {
                height: Some(SizeSpec::grow().into()),
                ..Default::default()
            },
        );
        assert_eq!(style(&ctx, parent, StyleProp::Height), None);
        assert_eq!(style(&ctx, parent, StyleProp::FlexGrow).as_deref(), Some("1"));
        assert!(ctx.classes(parent).contains(NodeClass::GROWS_Y));
        // The grandparent's own intent is exact, so it never grows.
        assert!(!ctx.classes(grandparent).contains(NodeClass::GROWS_Y));

        // Detaching the grandchild demotes it again.
        detach(&ctx, child);
        assert_eq!(
            style(&ctx, parent, StyleProp::Height).as_deref(),
            Some("fit-content")
        );
        assert_eq!(style(&ctx, parent, StyleProp::FlexGrow), None);
        assert!(!ctx.classes(parent).contains(NodeClass::GROWS_Y));
    }

    #[test]
    fn test_mixed_children_promote_hugging_container() {
        let ctx = LayoutContext::new();
        let frame = attach(
            &ctx,
            None,
            StyleProps {
                height: Some(20.into()),
                ..Default::default()
            },
        );
        let container = attach(&ctx, Some(frame), StyleProps::default());
        let _label = attach(
            &ctx,
            Some(container),
            StyleProps {
                height: Some(2.into()),
                ..Default::default()
            },
        );
        let _body = attach(
            &ctx,
            Some(container),
            StyleProps {
                height: Some(SizeSpec::grow().into()),
                ..Default::default()
            },
        );

        // One rigid and one growing child: the growing one is enough
        // to stop the container hugging.
        assert_eq!(style(&ctx, container, StyleProp::Height), None);
        assert_eq!(style(&ctx, container, StyleProp::FlexGrow).as_deref(), Some("1"));
        assert!(ctx.classes(container).contains(NodeClass::GROWS_Y));
        // The width ledger never heard from either child.
        assert_eq!(
            style(&ctx, container, StyleProp::Width).as_deref(),
            Some("fit-content")
        );
    }

    #[test]
    fn test_stack_children_fill_minus_padding() {
        let ctx = LayoutContext::new();
        let stack = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Stack.into()),
                pad: Some(1.into()),
                ..Default::default()
            },
        );
        let layer = attach(
            &ctx,
            Some(stack),
            StyleProps {
                width: Some(SizeSpec::Stretch.into()),
                ..Default::default()
            },
        );

        assert!(ctx.classes(stack).contains(NodeClass::STACK));
        assert_eq!(
            style(&ctx, layer, StyleProp::Width).as_deref(),
            Some("calc(100% - 18px - 18px)")
        );
        // No main extent under a stack, so no flex pair.
        assert_eq!(style(&ctx, layer, StyleProp::FlexGrow), None);
    }

    #[test]
    fn test_axis_flip_moves_flex_pair() {
        let ctx = LayoutContext::new();
        let axis = signal(Axis::Row);
        let parent = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(axis.clone().into()),
                ..Default::default()
            },
        );
        let child = attach(
            &ctx,
            Some(parent),
            StyleProps {
                width: Some(SizeSpec::grow().into()),
                height: Some(2.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, child, StyleProp::FlexGrow).as_deref(), Some("1"));
        assert_eq!(style(&ctx, child, StyleProp::Width), None);

        axis.set(Axis::Column);
        // Width is now the cross extent: it fills, and the flex pair
        // follows the height intent, which does not grow.
        assert_eq!(style(&ctx, child, StyleProp::Width).as_deref(), Some("100%"));
        assert_eq!(style(&ctx, child, StyleProp::FlexGrow), None);
        assert_eq!(style(&ctx, child, StyleProp::Height).as_deref(), Some("36px"));
        // Growth flags are intent-based, so the ledger did not churn.
        assert!(ctx.classes(child).contains(NodeClass::GROWS_X));
    }

    #[test]
    fn test_flow_defaults_column_start() {
        let ctx = LayoutContext::new();
        let node = attach(&ctx, None, StyleProps::default());

        assert_eq!(
            style(&ctx, node, StyleProp::FlexDirection).as_deref(),
            Some("column")
        );
        assert_eq!(
            style(&ctx, node, StyleProp::JustifyContent).as_deref(),
            Some("flex-start")
        );
        assert_eq!(
            style(&ctx, node, StyleProp::AlignItems).as_deref(),
            Some("flex-start")
        );
        assert_eq!(style(&ctx, node, StyleProp::ColumnGap), None);
        assert!(ctx.classes(node).contains(NodeClass::FLOW));
    }

    #[test]
    fn test_gaps_follow_pad_between() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                pad_between: Some(1.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, row, StyleProp::ColumnGap).as_deref(), Some("18px"));
        assert_eq!(style(&ctx, row, StyleProp::RowGap).as_deref(), Some("18px"));
    }

    #[test]
    fn test_space_between_degrades_for_single_child() {
        let ctx = LayoutContext::new();
        let row = attach(
            &ctx,
            None,
            StyleProps {
                axis: Some(Axis::Row.into()),
                align_x: Some(Align::SpaceBetween.into()),
                pad_between: Some(1.into()),
                ..Default::default()
            },
        );
        let _only = attach(&ctx, Some(row), StyleProps::default());

        // One child: centered instead of pinned to the edges. The gap
        // stays suppressed because the intent distributes space.
        assert_eq!(
            style(&ctx, row, StyleProp::JustifyContent).as_deref(),
            Some("center")
        );
        assert_eq!(style(&ctx, row, StyleProp::ColumnGap), None);

        let _second = attach(&ctx, Some(row), StyleProps::default());
        assert_eq!(
            style(&ctx, row, StyleProp::JustifyContent).as_deref(),
            Some("space-between")
        );
        assert_eq!(style(&ctx, row, StyleProp::ColumnGap), None);
    }

    #[test]
    fn test_overflow_scroll_thins_scrollbar() {
        let ctx = LayoutContext::new();
        let node = attach(
            &ctx,
            None,
            StyleProps {
                overflow_y: Some(OverflowPolicy::Scroll.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, node, StyleProp::OverflowY).as_deref(), Some("auto"));
        assert_eq!(
            style(&ctx, node, StyleProp::ScrollbarWidth).as_deref(),
            Some("thin")
        );
    }

    #[test]
    fn test_implicit_text_align_clears_when_alignment_moves() {
        let ctx = LayoutContext::new();
        let align_x = signal(Align::Center);
        let node = attach(
            &ctx,
            None,
            StyleProps {
                align_x: Some(align_x.clone().into()),
                ..Default::default()
            },
        );
        assert_eq!(style(&ctx, node, StyleProp::TextAlign).as_deref(), Some("center"));

        align_x.set(Align::Start);
        assert_eq!(style(&ctx, node, StyleProp::TextAlign), None);
    }

    #[test]
    fn test_decor_and_interaction_write_through() {
        let ctx = LayoutContext::new();
        let node = attach(
            &ctx,
            None,
            StyleProps {
                round: Some(SizeValue::from(0.5).into()),
                shadow: Some(true.into()),
                bg: Some("teal".into()),
                clickable: Some(true.into()),
                ..Default::default()
            },
        );

        assert_eq!(style(&ctx, node, StyleProp::BorderRadius).as_deref(), Some("9px"));
        assert!(style(&ctx, node, StyleProp::BoxShadow).is_some());
        assert_eq!(style(&ctx, node, StyleProp::Background).as_deref(), Some("teal"));
        assert_eq!(style(&ctx, node, StyleProp::Cursor).as_deref(), Some("pointer"));
    }

    #[test]
    fn test_attach_under_stale_parent_becomes_root() {
        let ctx = LayoutContext::new();
        let parent = attach(&ctx, None, StyleProps::default());
        detach(&ctx, parent);

        let orphan = attach(&ctx, Some(parent), StyleProps::default());
        assert!(ctx.is_attached(orphan));
        assert_eq!(ctx.parent(orphan), None);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let ctx = LayoutContext::new();
        let node = attach(&ctx, None, StyleProps::default());
        detach(&ctx, node);
        detach(&ctx, node);
        assert_eq!(ctx.element_count(), 0);
    }
}
