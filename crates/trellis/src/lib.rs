#![forbid(unsafe_code)]

//! Trellis public facade crate.
//!
//! Re-exports the selection-state engines and shared primitives, and
//! offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use trellis_core::event::{Modifiers, PointerButton, PointerEvent, PointerKind};
pub use trellis_core::size::SizeClass;

// --- Cascader re-exports ---------------------------------------------------

pub use trellis_widgets::cascader::filter::{
    LabelDisplay, LabelSegment, PATH_SEPARATOR, compute_display, full_path_label, matches,
    split_highlight,
};
pub use trellis_widgets::cascader::node::{CascaderTree, NodeId, NodeSpec};
pub use trellis_widgets::cascader::selection::{ToggleOutcome, toggle};
pub use trellis_widgets::cascader::{
    CascaderContext, CheckOverrides, CheckboxProps, ExpandIcon, ItemEvent, ItemEventKind,
    checkbox_props, expand_icon,
};

// --- Steps re-exports ------------------------------------------------------

pub use trellis_widgets::steps::{
    IconOverride, StepChange, StepIcon, StepId, StepSpec, StepStatus, StepTheme, StepValue, Steps,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CascaderContext, CascaderTree, NodeId, NodeSpec, PointerEvent, SizeClass, StepSpec,
        StepStatus, Steps, ToggleOutcome, toggle,
    };
}
