//! Flow resolver - container direction, alignment, spacing, overflow.
//!
//! The pad chain goes from specific to broad: a per-side value wins
//! over the per-axis pair, which wins over `pad_around`, which wins
//! over the catch-all `pad`. Gaps have their own chain ending in the
//! same catch-all, so a bare `pad: 1` spaces a container inside and
//! between children at once.

use crate::resolve::unit::Metrics;
use crate::style::SizeValue;
use crate::types::{Align, Align2, Axis, EdgeSizes, OverflowPolicy};

// =============================================================================
// PadIntents - Spacing inputs
// =============================================================================

/// The spacing props as read for one resolution pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PadIntents {
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
}

impl PadIntents {
    fn top(&self) -> Option<&SizeValue> {
        self.pad_top
            .as_ref()
            .or(self.pad_y.as_ref())
            .or(self.pad_around.as_ref())
            .or(self.pad.as_ref())
    }

    fn right(&self) -> Option<&SizeValue> {
        self.pad_right
            .as_ref()
            .or(self.pad_x.as_ref())
            .or(self.pad_around.as_ref())
            .or(self.pad.as_ref())
    }

    fn bottom(&self) -> Option<&SizeValue> {
        self.pad_bottom
            .as_ref()
            .or(self.pad_y.as_ref())
            .or(self.pad_around.as_ref())
            .or(self.pad.as_ref())
    }

    fn left(&self) -> Option<&SizeValue> {
        self.pad_left
            .as_ref()
            .or(self.pad_x.as_ref())
            .or(self.pad_around.as_ref())
            .or(self.pad.as_ref())
    }

    fn gap_x(&self) -> Option<&SizeValue> {
        self.pad_between_x
            .as_ref()
            .or(self.pad_between.as_ref())
            .or(self.pad.as_ref())
    }

    fn gap_y(&self) -> Option<&SizeValue> {
        self.pad_between_y
            .as_ref()
            .or(self.pad_between.as_ref())
            .or(self.pad.as_ref())
    }
}

// =============================================================================
// FlowQuery / ResolvedFlow
// =============================================================================

/// Everything a container's flow resolution depends on.
#[derive(Debug, Clone)]
pub struct FlowQuery<'a> {
    pub axis: Axis,
    pub align: Align2,
    pub pads: &'a PadIntents,
    pub overflow_x: OverflowPolicy,
    pub overflow_y: OverflowPolicy,
    /// Live child count; space-between degrades around a single child.
    pub child_count: usize,
}

/// Resolved container flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedFlow {
    pub axis: Axis,
    /// `flex-direction`, or None for a stack (layers have no flow).
    pub direction: Option<String>,
    pub justify: String,
    pub items: String,
    pub padding: EdgeSizes,
    pub column_gap: Option<String>,
    pub row_gap: Option<String>,
    pub overflow_x: Option<String>,
    pub overflow_y: Option<String>,
    /// `flex-wrap`, present only when the main-axis policy is Wrap.
    pub wrap: Option<String>,
    /// Thin scrollbars whenever either policy scrolls.
    pub thin_scrollbar: bool,
}

/// Resolve a container's flow.
pub fn resolve_flow(query: FlowQuery<'_>, metrics: &Metrics) -> ResolvedFlow {
    let pads = query.pads;
    let padding = EdgeSizes {
        top: pads.top().map(|v| metrics.length(v)),
        right: pads.right().map(|v| metrics.length(v)),
        bottom: pads.bottom().map(|v| metrics.length(v)),
        left: pads.left().map(|v| metrics.length(v)),
    };

    // The x alignment lands in the justify slot for rows and in the
    // items slot otherwise; y takes the remaining slot. Stacks use the
    // column mapping so layers center the way column children would.
    let (justify_align, items_align) = match query.axis {
        Axis::Row => (query.align.x, query.align.y),
        Axis::Column | Axis::Stack => (query.align.y, query.align.x),
    };

    // Gap suppression keys off the intent, not the degraded keyword:
    // a space-driven axis already owns its spacing.
    let column_gap = if query.align.x.distributes_space() {
        None
    } else {
        pads.gap_x().map(|v| metrics.length(v))
    };
    let row_gap = if query.align.y.distributes_space() {
        None
    } else {
        pads.gap_y().map(|v| metrics.length(v))
    };

    let main_policy = match query.axis {
        Axis::Row => Some(query.overflow_x),
        Axis::Column => Some(query.overflow_y),
        Axis::Stack => None,
    };
    let wrap = matches!(main_policy, Some(OverflowPolicy::Wrap)).then(|| "wrap".to_string());

    let thin_scrollbar = query.overflow_x == OverflowPolicy::Scroll
        || query.overflow_y == OverflowPolicy::Scroll;

    ResolvedFlow {
        axis: query.axis,
        direction: query.axis.direction_css().map(String::from),
        justify: distribute(justify_align, query.child_count),
        items: distribute(items_align, query.child_count),
        padding,
        column_gap,
        row_gap,
        overflow_x: query.overflow_x.overflow_css().map(String::from),
        overflow_y: query.overflow_y.overflow_css().map(String::from),
        wrap,
        thin_scrollbar,
    }
}

/// Alignment keyword for a slot, degrading space-between to center
/// around a single child (there is no "between" to distribute into,
/// and an only child pinned to the start edge reads as a bug).
fn distribute(align: Align, child_count: usize) -> String {
    if align == Align::SpaceBetween && child_count == 1 {
        return Align::Center.css().to_string();
    }
    align.css().to_string()
}

// =============================================================================
// Tests
// =============================================================================
