//! Growth ledger - per-parent accounting of growing children.
//!
//! Every element carries one counter per extent: how many of its
//! children currently grow on that extent. Children report flag flips,
//! never absolute states, so sibling churn between one growing
//! configuration and another leaves the count untouched. The published
//! `some_child_grows` signal is fed from the count and equality gated,
//! so subscribers only wake on 0 -> 1 and 1 -> 0 crossings.

use crate::scene::{LayoutContext, NodeId};
use crate::types::{Extent, NodeClass};

/// Record a flip in an element's growth flag for one extent.
///
/// Updates the element's stored flag and its `fx-grows-*` marker
/// class, then moves the parent's counter and republishes the
/// parent's `some_child_grows` signal. A report that matches the
/// stored flag is dropped.
pub(crate) fn report_growth(ctx: &LayoutContext, id: NodeId, extent: Extent, grows: bool) {
    let Some(element) = ctx.element(id) else {
        return;
    };
    let slot = extent.index();
    if element.flags[slot].get() == grows {
        return;
    }
    element.flags[slot].set(grows);
    ctx.set_class(id, NodeClass::grows(extent), grows);

    let Some(parent_id) = element.parent else {
        return;
    };
    let Some(parent) = ctx.element(parent_id) else {
        return;
    };
    let count = &parent.grow_counts[slot];
    let next = if grows {
        count.get() + 1
    } else {
        count.get().saturating_sub(1)
    };
    count.set(next);
    tracing::trace!(
        node = id.index(),
        parent = parent_id.index(),
        extent = ?extent,
        grows,
        count = next,
        "growth flag"
    );
    parent.some_child_grows[slot].set(next > 0);
}

/// Retract any growth still on the ledger. Runs on detach, after the
/// element's effects have stopped, so the parent's count never leaks
/// a contribution from a gone child.
pub(crate) fn retract_growth(ctx: &LayoutContext, id: NodeId) {
    for extent in Extent::ALL {
        report_growth(ctx, id, extent, false);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LayoutContext;

    fn grows_signal(ctx: &LayoutContext, id: NodeId, extent: Extent) -> bool {
        ctx.element(id).unwrap().some_child_grows[extent.index()].peek()
    }

    #[test]
    fn test_first_grower_flips_parent_signal() {
        let ctx = LayoutContext::new();
        let parent = ctx.create(None);
        let child = ctx.create(Some(parent));

        assert!(!grows_signal(&ctx, parent, Extent::Width));
        report_growth(&ctx, child, Extent::Width, true);
        assert!(grows_signal(&ctx, parent, Extent::Width));
        assert!(ctx.classes(child).contains(NodeClass::GROWS_X));
    }

    #[test]
    fn test_second_grower_does_not_rereport() {
        let ctx = LayoutContext::new();
        let parent = ctx.create(None);
        let a = ctx.create(Some(parent));
        let b = ctx.create(Some(parent));

        report_growth(&ctx, a, Extent::Height, true);
        report_growth(&ctx, b, Extent::Height, true);
        assert!(grows_signal(&ctx, parent, Extent::Height));

        // One of two growers leaving keeps the flag up.
        report_growth(&ctx, a, Extent::Height, false);
        assert!(grows_signal(&ctx, parent, Extent::Height));
        assert!(!ctx.classes(a).contains(NodeClass::GROWS_Y));

        report_growth(&ctx, b, Extent::Height, false);
        assert!(!grows_signal(&ctx, parent, Extent::Height));
    }

    #[test]
    fn test_duplicate_report_is_dropped() {
        let ctx = LayoutContext::new();
        let parent = ctx.create(None);
        let child = ctx.create(Some(parent));

        report_growth(&ctx, child, Extent::Width, true);
        report_growth(&ctx, child, Extent::Width, true);
        let counts = &ctx.element(parent).unwrap().grow_counts;
        assert_eq!(counts[Extent::Width.index()].get(), 1);
    }

    #[test]
    fn test_extents_are_independent() {
        let ctx = LayoutContext::new();
        let parent = ctx.create(None);
        let child = ctx.create(Some(parent));

        report_growth(&ctx, child, Extent::Width, true);
        assert!(grows_signal(&ctx, parent, Extent::Width));
        assert!(!grows_signal(&ctx, parent, Extent::Height));
    }

    #[test]
    fn test_retract_clears_both_extents() {
        let ctx = LayoutContext::new();
        let parent = ctx.create(None);
        let child = ctx.create(Some(parent));

        report_growth(&ctx, child, Extent::Width, true);
        report_growth(&ctx, child, Extent::Height, true);
        retract_growth(&ctx, child);
        assert!(!grows_signal(&ctx, parent, Extent::Width));
        assert!(!grows_signal(&ctx, parent, Extent::Height));
        assert!(ctx.classes(child).is_empty());
    }
}
