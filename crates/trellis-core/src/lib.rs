#![forbid(unsafe_code)]

//! Shared primitives for Trellis widget state engines.
//!
//! This crate holds the types that cross the boundary between the state
//! engines in `trellis-widgets` and whatever rendering layer hosts them:
//! canonical pointer events and the size class used for label truncation.

pub mod event;
pub mod size;

pub use event::{Modifiers, PointerButton, PointerEvent, PointerKind};
pub use size::SizeClass;
