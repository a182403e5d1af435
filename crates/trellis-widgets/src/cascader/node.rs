#![forbid(unsafe_code)]

//! Arena-backed option tree for the cascader.
//!
//! Nodes own their children through the arena; each node stores a
//! non-owning back reference to its parent so selection changes can walk
//! upward without ownership cycles. [`NodeId`] handles are minted only by
//! the owning tree and stay valid for its lifetime — nodes are never
//! removed, only added (lazy expansion appends).
//!
//! # Example
//!
//! ```
//! use trellis_widgets::cascader::node::{CascaderTree, NodeSpec};
//!
//! let tree = CascaderTree::from_specs(vec![
//!     NodeSpec::new("gd", "Guangdong")
//!         .child(NodeSpec::new("sz", "Shenzhen"))
//!         .child(NodeSpec::new("gz", "Guangzhou")),
//! ]);
//!
//! let gd = tree.find_by_value("gd").unwrap();
//! assert_eq!(tree.children(gd).len(), 2);
//! assert!(!tree.is_leaf(gd));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Per-node selection flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct NodeFlags: u8 {
        /// Fully selected.
        const CHECKED       = 1 << 0;
        /// Partially selected: not checked, but some descendant is.
        const INDETERMINATE = 1 << 1;
        /// Disabled by configuration; never cleared by the engine.
        const DISABLED      = 1 << 2;
        /// Disabled because the selection cap is full; fully derived.
        const CAP_DISABLED  = 1 << 3;
        /// Async children fetch in flight; gates icon display only.
        const LOADING       = 1 << 4;
    }
}

/// Handle to a node inside a [`CascaderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index behind this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Declarative description of a node, used to build or lazily extend a tree.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    value: String,
    label: String,
    disabled: bool,
    children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Create a spec with the given unique value key and display label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Create a spec whose label doubles as its value.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label)
    }

    /// Add a child spec.
    #[must_use]
    pub fn child(mut self, node: NodeSpec) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<NodeSpec>) -> Self {
        self.children = nodes;
        self
    }

    /// Mark this node as disabled by configuration.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    value: String,
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    flags: NodeFlags,
}

/// The cascader's option tree.
#[derive(Debug, Clone, Default)]
pub struct CascaderTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl CascaderTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from root-level specs.
    #[must_use]
    pub fn from_specs(specs: Vec<NodeSpec>) -> Self {
        let mut tree = Self::new();
        for spec in specs {
            let id = tree.insert(spec, None);
            tree.roots.push(id);
        }
        tree
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut flags = NodeFlags::empty();
        flags.set(NodeFlags::DISABLED, spec.disabled);
        self.nodes.push(Node {
            value: spec.value,
            label: spec.label,
            parent,
            children: Vec::new(),
            flags,
        });
        for child in spec.children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    /// Merge lazily fetched children under an existing node and clear its
    /// loading flag. New children are appended after any existing ones.
    pub fn attach_children(&mut self, id: NodeId, specs: Vec<NodeSpec>) {
        for spec in specs {
            let child_id = self.insert(spec, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        self.nodes[id.0].flags.remove(NodeFlags::LOADING);
    }

    /// Set the async-fetch indicator. Loading gates icon display only;
    /// a loading node stays clickable and toggleable.
    pub fn set_loading(&mut self, id: NodeId, loading: bool) {
        self.nodes[id.0].flags.set(NodeFlags::LOADING, loading);
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root-level nodes in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The node's parent, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The node's children in declaration order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The node's unique value key.
    #[must_use]
    pub fn value(&self, id: NodeId) -> &str {
        &self.nodes[id.0].value
    }

    /// The node's display label.
    #[must_use]
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.is_empty()
    }

    /// Whether the node is fully selected.
    #[must_use]
    pub fn checked(&self, id: NodeId) -> bool {
        self.nodes[id.0].flags.contains(NodeFlags::CHECKED)
    }

    /// Whether the node is partially selected.
    #[must_use]
    pub fn indeterminate(&self, id: NodeId) -> bool {
        self.nodes[id.0].flags.contains(NodeFlags::INDETERMINATE)
    }

    /// Whether the node is disabled by configuration.
    #[must_use]
    pub fn config_disabled(&self, id: NodeId) -> bool {
        self.nodes[id.0].flags.contains(NodeFlags::DISABLED)
    }

    /// Whether the node is disabled because the selection cap is full.
    #[must_use]
    pub fn cap_disabled(&self, id: NodeId) -> bool {
        self.nodes[id.0].flags.contains(NodeFlags::CAP_DISABLED)
    }

    /// Whether the node is disabled for any reason.
    #[must_use]
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.nodes[id.0]
            .flags
            .intersects(NodeFlags::DISABLED | NodeFlags::CAP_DISABLED)
    }

    /// Whether an async children fetch is in flight for this node.
    #[must_use]
    pub fn loading(&self, id: NodeId) -> bool {
        self.nodes[id.0].flags.contains(NodeFlags::LOADING)
    }

    /// Find a node by its value key.
    #[must_use]
    pub fn find_by_value(&self, value: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.value == value)
            .map(NodeId)
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&a| self.parent(a))
    }

    /// Path from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        path.reverse();
        path.push(id);
        path
    }

    /// Strict descendants of `id` in preorder.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &child in self.children(id) {
            self.collect_preorder(child, &mut out);
        }
        out
    }

    /// Every node in tree order (preorder across roots).
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.collect_preorder(root, &mut out);
        }
        out
    }

    /// Every leaf in tree order.
    #[must_use]
    pub fn leaves(&self) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|&id| self.is_leaf(id))
            .collect()
    }

    fn collect_preorder(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in self.children(id) {
            self.collect_preorder(child, out);
        }
    }

    pub(crate) fn set_flag(&mut self, id: NodeId, flag: NodeFlags, on: bool) {
        self.nodes[id.0].flags.set(flag, on);
    }
}
