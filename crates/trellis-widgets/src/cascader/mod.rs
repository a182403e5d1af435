#![forbid(unsafe_code)]

//! Cascading hierarchical selector state.
//!
//! The cascader holds one [`CascaderTree`](node::CascaderTree) built from
//! configuration and one [`CascaderContext`] shared by every item. User
//! interaction funnels into [`selection::toggle`]; search text changes
//! drive [`filter`]; the host's rendering layer reads the resulting flags
//! through the boundary projections in this module.

pub mod filter;
pub mod node;
pub mod selection;

use std::collections::BTreeMap;

use node::{CascaderTree, NodeId};
use trellis_core::event::PointerEvent;
use trellis_core::size::SizeClass;

/// Opaque key/value overrides forwarded verbatim to the external checkbox
/// widget. The engine never inspects these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOverrides(pub BTreeMap<String, String>);

/// Shared mutable state for one cascader instance.
///
/// Invariant: `value.len() <= max` whenever `max != 0 && multiple`; in
/// single mode `value` holds at most one entry.
#[derive(Debug, Clone, Default)]
pub struct CascaderContext {
    /// Selected leaf values in tree order.
    pub value: Vec<String>,
    /// Multi-select mode with checkbox propagation.
    pub multiple: bool,
    /// Cap on simultaneously selected leaves; 0 = unbounded.
    pub max: usize,
    /// Presentation size class, used for the label column budget.
    pub size: SizeClass,
    /// Passthrough configuration for the checkbox widget.
    pub check_props: CheckOverrides,
    /// Whether search filtering is active.
    pub filter_active: bool,
    /// Current search text.
    pub input_val: String,
}

impl CascaderContext {
    /// Context for single-select mode.
    #[must_use]
    pub fn single() -> Self {
        Self::default()
    }

    /// Context for multi-select mode with the given cap (0 = unbounded).
    #[must_use]
    pub fn multi(max: usize) -> Self {
        Self {
            multiple: true,
            max,
            ..Self::default()
        }
    }

    /// Whether the selection cap is currently full.
    #[must_use]
    pub fn at_cap(&self) -> bool {
        self.multiple && self.max != 0 && self.value.len() >= self.max
    }

    /// Update the search text, activating or deactivating filtering.
    pub fn set_filter(&mut self, input: impl Into<String>) {
        self.input_val = input.into();
        self.filter_active = !self.input_val.is_empty();
    }
}

/// Projection handed to the external checkbox widget for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxProps<'a> {
    /// Fully selected.
    pub checked: bool,
    /// Partially selected.
    pub indeterminate: bool,
    /// Not interactive: configured disable, or the cap is full.
    pub disabled: bool,
    /// The node's value key, used as the checkbox name.
    pub name: &'a str,
    /// Presentation size class.
    pub size: SizeClass,
    /// Verbatim passthrough configuration.
    pub overrides: &'a CheckOverrides,
}

/// Compute the checkbox projection for `id`.
///
/// `disabled` ORs the cap condition over the whole context, so every
/// unchecked checkbox greys out the moment the cap fills, matching the
/// item's rendered state even before the derived per-node flag lands.
#[must_use]
pub fn checkbox_props<'a>(
    tree: &'a CascaderTree,
    id: NodeId,
    ctx: &'a CascaderContext,
) -> CheckboxProps<'a> {
    CheckboxProps {
        checked: tree.checked(id),
        indeterminate: tree.indeterminate(id),
        disabled: tree.is_disabled(id) || (!tree.checked(id) && ctx.at_cap()),
        name: tree.value(id),
        size: ctx.size,
        overrides: &ctx.check_props,
    }
}

/// Trailing icon for an expandable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandIcon {
    /// Children available; the host may expand.
    Chevron,
    /// Async children fetch in flight.
    Spinner,
}

/// Icon shown after an item's label, if any. Leaves show none; branches
/// show a chevron, or a spinner while loading.
#[must_use]
pub fn expand_icon(tree: &CascaderTree, id: NodeId) -> Option<ExpandIcon> {
    if tree.is_leaf(id) && !tree.loading(id) {
        return None;
    }
    if tree.loading(id) {
        Some(ExpandIcon::Spinner)
    } else {
        Some(ExpandIcon::Chevron)
    }
}

/// The kind of interaction an item emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEventKind {
    /// The item row was clicked.
    Click,
    /// The item's checkbox changed.
    Change,
    /// The pointer entered the item row.
    MouseEnter,
}

/// An interaction emitted by a cascader item, carrying the acted-upon node
/// and the originating pointer event for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemEvent {
    /// What happened.
    pub kind: ItemEventKind,
    /// The node the interaction targeted.
    pub node: NodeId,
    /// The originating pointer event.
    pub pointer: PointerEvent,
}

impl ItemEvent {
    /// A row click.
    #[must_use]
    pub const fn click(node: NodeId, pointer: PointerEvent) -> Self {
        Self {
            kind: ItemEventKind::Click,
            node,
            pointer,
        }
    }

    /// A checkbox change.
    #[must_use]
    pub const fn change(node: NodeId, pointer: PointerEvent) -> Self {
        Self {
            kind: ItemEventKind::Change,
            node,
            pointer,
        }
    }

    /// A pointer-enter.
    #[must_use]
    pub const fn mouse_enter(node: NodeId, pointer: PointerEvent) -> Self {
        Self {
            kind: ItemEventKind::MouseEnter,
            node,
            pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::node::NodeSpec;
    use super::*;
    use trellis_core::event::{PointerButton, PointerEvent, PointerKind};

    fn small_tree() -> CascaderTree {
        CascaderTree::from_specs(vec![
            NodeSpec::new("p", "Parent")
                .child(NodeSpec::new("x", "X"))
                .child(NodeSpec::new("y", "Y")),
        ])
    }

    #[test]
    fn set_filter_toggles_active() {
        let mut ctx = CascaderContext::multi(0);
        assert!(!ctx.filter_active);
        ctx.set_filter("Shen");
        assert!(ctx.filter_active);
        assert_eq!(ctx.input_val, "Shen");
        ctx.set_filter("");
        assert!(!ctx.filter_active);
    }

    #[test]
    fn at_cap_ignores_unbounded_and_single() {
        let mut ctx = CascaderContext::multi(0);
        ctx.value = vec!["a".into(), "b".into()];
        assert!(!ctx.at_cap());

        let mut ctx = CascaderContext::single();
        ctx.value = vec!["a".into()];
        assert!(!ctx.at_cap());

        let mut ctx = CascaderContext::multi(2);
        ctx.value = vec!["a".into(), "b".into()];
        assert!(ctx.at_cap());
    }

    #[test]
    fn checkbox_props_reflect_node_state() {
        let tree = small_tree();
        let ctx = CascaderContext::multi(0);
        let x = tree.find_by_value("x").unwrap();
        let props = checkbox_props(&tree, x, &ctx);
        assert!(!props.checked);
        assert!(!props.indeterminate);
        assert!(!props.disabled);
        assert_eq!(props.name, "x");
    }

    #[test]
    fn checkbox_props_or_in_cap() {
        let tree = small_tree();
        let mut ctx = CascaderContext::multi(1);
        ctx.value = vec!["x".into()];
        let y = tree.find_by_value("y").unwrap();
        assert!(checkbox_props(&tree, y, &ctx).disabled);
    }

    #[test]
    fn checked_item_stays_interactive_at_cap() {
        let mut tree = small_tree();
        let mut ctx = CascaderContext::multi(1);
        let x = tree.find_by_value("x").unwrap();
        assert!(matches!(
            selection::toggle(&mut tree, x, &mut ctx),
            selection::ToggleOutcome::Applied
        ));
        // x itself must stay toggleable so the selection can be undone
        assert!(!checkbox_props(&tree, x, &ctx).disabled);
    }

    #[test]
    fn expand_icon_for_branch_and_leaf() {
        let mut tree = small_tree();
        let p = tree.find_by_value("p").unwrap();
        let x = tree.find_by_value("x").unwrap();
        assert_eq!(expand_icon(&tree, p), Some(ExpandIcon::Chevron));
        assert_eq!(expand_icon(&tree, x), None);

        tree.set_loading(x, true);
        assert_eq!(expand_icon(&tree, x), Some(ExpandIcon::Spinner));
    }

    #[test]
    fn item_events_carry_node_and_pointer() {
        let tree = small_tree();
        let x = tree.find_by_value("x").unwrap();
        let pointer = PointerEvent::new(PointerKind::Down(PointerButton::Left), 2, 5);
        let ev = ItemEvent::click(x, pointer);
        assert_eq!(ev.kind, ItemEventKind::Click);
        assert_eq!(ev.node, x);
        assert_eq!(ev.pointer, pointer);
        assert_eq!(ItemEvent::change(x, pointer).kind, ItemEventKind::Change);
        assert_eq!(
            ItemEvent::mouse_enter(x, pointer).kind,
            ItemEventKind::MouseEnter
        );
    }
}
