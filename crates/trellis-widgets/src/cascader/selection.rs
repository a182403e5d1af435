#![forbid(unsafe_code)]

//! Checked/indeterminate propagation under a selection cap.
//!
//! [`toggle`] is the single mutation entry point. After it returns, the
//! tree invariants hold and are immediately readable:
//!
//! - a node is indeterminate iff it is not checked and some strict
//!   descendant is checked;
//! - a checked branch has every child checked;
//! - `ctx.value.len() <= ctx.max` whenever `max != 0` in multi mode.
//!
//! Rejections are silent no-ops reported through [`ToggleOutcome`]; the
//! engine never panics and never raises.

use super::CascaderContext;
use super::node::{CascaderTree, NodeFlags, NodeId};

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The selection changed.
    Applied,
    /// Branch node in single-select mode: selection there is meaningless,
    /// the host expands the branch instead. Nothing changed.
    Ignored,
    /// The node is disabled by configuration. Nothing changed.
    RejectedDisabled,
    /// Applying the check would push the selection past a nonzero cap.
    /// Nothing changed.
    RejectedCapExceeded,
}

/// Toggle the checked state of `id`, propagating through the tree and
/// rebuilding `ctx.value`.
pub fn toggle(tree: &mut CascaderTree, id: NodeId, ctx: &mut CascaderContext) -> ToggleOutcome {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "cascader_toggle",
        node = id.index(),
        multiple = ctx.multiple,
        selected = ctx.value.len()
    )
    .entered();

    if tree.config_disabled(id) {
        return ToggleOutcome::RejectedDisabled;
    }

    if !ctx.multiple {
        return toggle_single(tree, id, ctx);
    }

    let turning_on = !tree.checked(id);
    if turning_on {
        if tree.cap_disabled(id) {
            return ToggleOutcome::RejectedCapExceeded;
        }
        if ctx.max != 0 {
            let additions = selectable_leaves(tree, id)
                .iter()
                .filter(|&&leaf| !tree.checked(leaf))
                .count();
            if ctx.value.len() + additions > ctx.max {
                return ToggleOutcome::RejectedCapExceeded;
            }
        }
    }

    // Downward: force every reachable leaf, skipping disabled subtrees.
    for leaf in selectable_leaves(tree, id) {
        tree.set_flag(leaf, NodeFlags::CHECKED, turning_on);
        tree.set_flag(leaf, NodeFlags::INDETERMINATE, false);
    }

    // Branch flags inside the toggled subtree are derived, not forced, so
    // a disabled unchecked leaf keeps its parent indeterminate.
    recompute_branches(tree, id);

    // Upward: recompute until an ancestor's flags stabilize.
    let mut cursor = tree.parent(id);
    while let Some(ancestor) = cursor {
        if !recompute_one(tree, ancestor) {
            break;
        }
        cursor = tree.parent(ancestor);
    }

    rebuild_value(tree, ctx);
    recompute_cap_disabled(tree, ctx);

    #[cfg(feature = "tracing")]
    tracing::trace!(selected = ctx.value.len(), "toggle applied");

    ToggleOutcome::Applied
}

fn toggle_single(tree: &mut CascaderTree, id: NodeId, ctx: &mut CascaderContext) -> ToggleOutcome {
    if !tree.is_leaf(id) {
        return ToggleOutcome::Ignored;
    }
    if let Some(prev) = ctx.value.first().and_then(|v| tree.find_by_value(v)) {
        tree.set_flag(prev, NodeFlags::CHECKED, false);
    }
    tree.set_flag(id, NodeFlags::CHECKED, true);
    ctx.value = vec![tree.value(id).to_owned()];
    ToggleOutcome::Applied
}

/// Leaves reachable from `id` (inclusive) without crossing a disabled
/// node. These are the leaves a toggle may change.
fn selectable_leaves(tree: &CascaderTree, id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_selectable(tree, id, &mut out);
    out
}

fn collect_selectable(tree: &CascaderTree, id: NodeId, out: &mut Vec<NodeId>) {
    if tree.config_disabled(id) {
        return;
    }
    if tree.is_leaf(id) {
        out.push(id);
        return;
    }
    for &child in tree.children(id) {
        collect_selectable(tree, child, out);
    }
}

/// Recompute derived flags for every branch in the subtree of `id`,
/// children before parents.
fn recompute_branches(tree: &mut CascaderTree, id: NodeId) {
    let children: Vec<NodeId> = tree.children(id).to_vec();
    if children.is_empty() {
        return;
    }
    for child in children {
        recompute_branches(tree, child);
    }
    recompute_one(tree, id);
}

/// Recompute `checked`/`indeterminate` for one branch from its children.
/// Returns true when either flag changed.
fn recompute_one(tree: &mut CascaderTree, id: NodeId) -> bool {
    let children = tree.children(id);
    if children.is_empty() {
        return false;
    }
    let all_checked = children.iter().all(|&c| tree.checked(c));
    let any_marked = children
        .iter()
        .any(|&c| tree.checked(c) || tree.indeterminate(c));

    let checked = all_checked;
    let indeterminate = !checked && any_marked;
    let changed = tree.checked(id) != checked || tree.indeterminate(id) != indeterminate;
    tree.set_flag(id, NodeFlags::CHECKED, checked);
    tree.set_flag(id, NodeFlags::INDETERMINATE, indeterminate);
    changed
}

/// Rebuild `ctx.value` as the tree-ordered checked leaf values, leaving
/// out configured-disabled leaves.
fn rebuild_value(tree: &CascaderTree, ctx: &mut CascaderContext) {
    ctx.value = tree
        .leaves()
        .into_iter()
        .filter(|&leaf| tree.checked(leaf) && !tree.config_disabled(leaf))
        .map(|leaf| tree.value(leaf).to_owned())
        .collect();
}

/// Derive the cap flag: every unchecked, non-configured-disabled leaf is
/// cap-disabled while the cap is full, and released when it frees up.
fn recompute_cap_disabled(tree: &mut CascaderTree, ctx: &CascaderContext) {
    if !ctx.multiple || ctx.max == 0 {
        return;
    }
    let full = ctx.value.len() >= ctx.max;
    for leaf in tree.leaves() {
        let derived = full && !tree.checked(leaf) && !tree.config_disabled(leaf);
        tree.set_flag(leaf, NodeFlags::CAP_DISABLED, derived);
    }
}
