//! Property-based invariant tests for step status derivation.
//!
//! 1. Totality: any `(index, current)` pair with no explicit override
//!    derives exactly one status, and it is `Process` iff the item's
//!    identity equals `current`.
//! 2. Every item before the current one is `Finish`, every item after it
//!    is `Default`.
//! 3. The active step never produces a change request; every other step
//!    always does, carrying the previous `current`.
//! 4. An explicit `Error` survives any `current`.

use proptest::prelude::*;
use trellis_widgets::steps::{StepSpec, StepStatus, StepValue, Steps};
use trellis_core::event::{PointerButton, PointerEvent, PointerKind};

// ── Helpers ─────────────────────────────────────────────────────────────

fn pointer() -> PointerEvent {
    PointerEvent::new(PointerKind::Down(PointerButton::Left), 0, 0)
}

fn wizard(count: usize, current: usize) -> (Steps, Vec<trellis_widgets::steps::StepId>) {
    let mut steps = Steps::new(current);
    let ids = (0..count).map(|_| steps.add_item(StepSpec::new())).collect();
    (steps, ids)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Totality and ordering of derived statuses
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn status_totality(count in 1..10usize, current in 0..12usize) {
        let (steps, ids) = wizard(count, current);
        let statuses = steps.statuses();
        prop_assert_eq!(statuses.len(), count);

        for (index, id) in ids.iter().enumerate() {
            let status = steps.status_of(*id);
            if index == current {
                prop_assert_eq!(status, StepStatus::Process);
            } else if current < count && index < current {
                prop_assert_eq!(status, StepStatus::Finish);
            } else {
                prop_assert_eq!(status, StepStatus::Default);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Click delegation fires exactly when the step is not active
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn click_fires_iff_not_active(count in 1..10usize, current in 0..12usize) {
        let (steps, ids) = wizard(count, current);
        for (index, id) in ids.iter().enumerate() {
            let change = steps.on_step_click(*id, pointer());
            if index == current {
                prop_assert!(change.is_none());
            } else {
                let change = change.expect("inactive step must produce a change");
                prop_assert_eq!(change.value, StepValue::Index(index));
                prop_assert_eq!(change.previous, StepValue::Index(current));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Explicit error is position-independent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn explicit_error_survives_any_current(
        count in 1..10usize,
        errored in any::<prop::sample::Index>(),
        current in 0..12usize,
    ) {
        let mut steps = Steps::new(current);
        let ids: Vec<_> = (0..count).map(|_| steps.add_item(StepSpec::new())).collect();
        let errored = ids[errored.index(count)];
        steps.set_status(errored, Some(StepStatus::Error));
        prop_assert_eq!(steps.status_of(errored), StepStatus::Error);
    }
}
