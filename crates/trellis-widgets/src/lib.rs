#![forbid(unsafe_code)]

//! Selection-state engines for Trellis widgets.
//!
//! Two widgets live here: the cascader (a hierarchical selector with
//! checkbox propagation, a selection cap, and search filtering) and the
//! step wizard (a linear sequence with a derived per-step status). Both
//! are pure state models: they own the tree/list data and its invariants,
//! and expose flags and label segments for a rendering layer to consume.

pub mod cascader;
pub mod steps;

pub use cascader::node::{CascaderTree, NodeId, NodeSpec};
pub use cascader::selection::{ToggleOutcome, toggle};
pub use cascader::{CascaderContext, CheckOverrides, CheckboxProps, ExpandIcon, ItemEvent};
pub use steps::{StepChange, StepIcon, StepId, StepSpec, StepStatus, StepTheme, StepValue, Steps};
