//! Size resolver - one extent's intent to concrete property values.
//!
//! Resolution is per extent and pure: the same query always produces
//! the same [`ResolvedAxis`]. Everything contextual (parent axis,
//! descendant growth, stack padding) arrives in the query; the runtime
//! wires those from reactive cells so resolution re-runs by itself.

use crate::resolve::unit::{percent, scalar, Metrics};
use crate::style::{SizeSpec, SizeValue};

// =============================================================================
// ResolvedAxis - The output for one extent
// =============================================================================

/// Resolved sizing for one extent.
///
/// `None` fields mean the property must be absent from the element,
/// not left at whatever was there before: the applier removes them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedAxis {
    /// The exact length (`width`/`height`), if pinned.
    pub exact: Option<String>,
    /// Lower bound (`min-width`/`min-height`).
    pub min: Option<String>,
    /// Upper bound (`max-width`/`max-height`).
    pub max: Option<String>,
    /// Growth weight. `Some` exactly when the intent resolved as Grow.
    pub weight: Option<f64>,
}

impl ResolvedAxis {
    /// Rigid at one length: exact, min and max all pinned to it, so
    /// neither flexing nor content can move the box.
    pub fn rigid(length: String) -> Self {
        Self {
            exact: Some(length.clone()),
            min: Some(length.clone()),
            max: Some(length),
            weight: None,
        }
    }

    /// Whether this extent participates in growth distribution.
    ///
    /// This is the growth flag: true exactly when the resolved weight
    /// is positive. Feeds the ledger and the `fx-grows-*` classes.
    pub fn grows(&self) -> bool {
        self.weight.is_some_and(|w| w > 0.0)
    }

    /// `flex-grow` value for the main extent.
    pub fn grow_css(&self) -> Option<String> {
        self.weight.map(scalar)
    }

    /// `flex-basis` value for the main extent: the weight as a
    /// percentage, so taffy-style engines shrink siblings back in
    /// proportion and leftover space splits by weight ratio.
    pub fn basis_css(&self) -> Option<String> {
        self.weight.map(percent)
    }
}

// =============================================================================
// SizeQuery - The input for one extent
// =============================================================================

/// Everything one extent's resolution depends on.
#[derive(Debug, Clone, Copy)]
pub struct SizeQuery<'a> {
    /// The declared intent.
    pub intent: &'a SizeSpec,
    /// Standalone min bound. A bound inside a `Grow` descriptor wins.
    pub min: Option<&'a SizeValue>,
    /// Standalone max bound. A bound inside a `Grow` descriptor wins.
    pub max: Option<&'a SizeValue>,
    /// Whether this extent is the parent's main extent.
    pub main_axis: bool,
    /// Whether some descendant grows on this extent (from the ledger).
    pub descendant_grows: bool,
    /// `(near, far)` resolved padding of a stack parent. `Some` exactly
    /// when the parent is a stack: layered children fill the parent
    /// minus its padding, since absolute placement ignores padding.
    pub layer_pad: Option<(Option<&'a str>, Option<&'a str>)>,
}

/// Resolve one extent.
pub fn resolve_extent(query: SizeQuery<'_>, metrics: &Metrics) -> ResolvedAxis {
    // A hugging box with a growing descendant must pass space through,
    // or the descendant has nothing to take. Promote to Grow(1).
    let promoted;
    let intent = if matches!(query.intent, SizeSpec::Shrink) && query.descendant_grows {
        promoted = SizeSpec::grow();
        &promoted
    } else {
        query.intent
    };

    match intent {
        SizeSpec::Exact(value) => ResolvedAxis::rigid(metrics.length(value)),
        SizeSpec::Shrink => ResolvedAxis::rigid("fit-content".to_string()),
        SizeSpec::Stretch => ResolvedAxis::rigid(fill_length(query.layer_pad)),
        SizeSpec::Grow(flex) => {
            let min = flex.min.as_ref().or(query.min);
            let max = flex.max.as_ref().or(query.max);
            ResolvedAxis {
                // On the main extent the basis carries the share and no
                // exact length is written; off it, the element fills.
                exact: (!query.main_axis).then(|| fill_length(query.layer_pad)),
                min: min.map(|v| metrics.length(v)),
                max: max
                    .filter(|v| !v.is_unbounded())
                    .map(|v| metrics.length(v)),
                weight: Some(flex.weight),
            }
        }
    }
}

/// Full-parent length: `100%`, or `calc(100% - pads)` under a stack
/// parent whose padding would otherwise be ignored by layered children.
fn fill_length(layer_pad: Option<(Option<&str>, Option<&str>)>) -> String {
    let Some((near, far)) = layer_pad else {
        return "100%".to_string();
    };
    let sides: Vec<&str> = [near, far]
        .into_iter()
        .flatten()
        .filter(|side| *side != "0px" && *side != "0")
        .collect();
    if sides.is_empty() {
        return "100%".to_string();
    }
    let mut expr = String::from("calc(100%");
    for side in sides {
        expr.push_str(" - ");
        expr.push_str(side);
    }
    expr.push(')');
    expr
}

// =============================================================================
// Tests
// =============================================================================
