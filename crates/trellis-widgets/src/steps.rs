#![forbid(unsafe_code)]

//! Step wizard: registration protocol and derived step status.
//!
//! A [`Steps`] container owns an ordered list of registered items and the
//! wizard-wide `current` value. Status is never stored per item (apart
//! from an explicit override): it is derived on every read from the
//! item's registration index, its optional value key, and `current`.
//!
//! # Example
//!
//! ```
//! use trellis_widgets::steps::{StepSpec, StepStatus, Steps};
//!
//! let mut steps = Steps::new(1usize);
//! let ids: Vec<_> = (0..3).map(|_| steps.add_item(StepSpec::new())).collect();
//! assert_eq!(
//!     steps.statuses(),
//!     vec![StepStatus::Finish, StepStatus::Process, StepStatus::Default]
//! );
//! assert!(!steps.can_click(ids[1]));
//! ```

use trellis_core::event::PointerEvent;

/// Status of a single step, derived on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStatus {
    /// Not yet reached.
    #[default]
    Default,
    /// The active step.
    Process,
    /// Completed: precedes the active step.
    Finish,
    /// Explicitly failed; never overridden by position.
    Error,
}

impl StepStatus {
    /// Stable lowercase name, handy for class-name composition.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Process => "process",
            Self::Finish => "finish",
            Self::Error => "error",
        }
    }
}

/// Identity of a step: either its registration index or an explicit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    /// Positional identity.
    Index(usize),
    /// Named identity.
    Key(String),
}

impl From<usize> for StepValue {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for StepValue {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for StepValue {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Handle to a registered step item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(usize);

/// Declarative description of a step item at registration time.
#[derive(Debug, Clone, Default)]
pub struct StepSpec {
    value: Option<StepValue>,
    status: Option<StepStatus>,
}

impl StepSpec {
    /// A plain step identified by its registration index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the step an explicit value key.
    #[must_use]
    pub fn value(mut self, value: impl Into<StepValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Pin the step to an explicit status, overriding derivation.
    #[must_use]
    pub fn status(mut self, status: StepStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone)]
struct StepItem {
    id: StepId,
    /// Assigned at registration; not reassigned when siblings leave.
    index: usize,
    value: Option<StepValue>,
    explicit: Option<StepStatus>,
}

impl StepItem {
    fn effective_value(&self) -> StepValue {
        self.value.clone().unwrap_or(StepValue::Index(self.index))
    }
}

/// Theme tag for step icons; a closed variant set resolved by lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepTheme {
    /// Numbered circles with check/cross glyphs.
    #[default]
    Default,
    /// Plain dots regardless of status.
    Dot,
}

/// Icon for a step, resolved from theme, status and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    /// 1-based step number.
    Number(usize),
    /// Completed mark.
    Check,
    /// Failure mark.
    Cross,
    /// Dot-theme marker.
    Dot,
}

impl StepIcon {
    /// The glyph the default renderer would draw.
    #[must_use]
    pub fn glyph(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Check => "\u{2713}".to_owned(),
            Self::Cross => "\u{2715}".to_owned(),
            Self::Dot => "\u{2022}".to_owned(),
        }
    }
}

/// Configuration-provider hook: may supply a replacement icon for a
/// `(status, index)` pair; `None` falls through to the default lookup.
pub type IconOverride = fn(StepStatus, usize) -> Option<StepIcon>;

/// A change request produced by clicking a non-active step. The host owns
/// `current` and decides whether to honor it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepChange {
    /// The clicked step's effective value.
    pub value: StepValue,
    /// `current` at the time of the click.
    pub previous: StepValue,
    /// The originating pointer event.
    pub pointer: PointerEvent,
}

/// The step wizard container.
///
/// Sole owner of item identities and ordering. Items register on mount
/// via [`Steps::add_item`] and deregister via [`Steps::remove_item`].
#[derive(Debug, Clone)]
pub struct Steps {
    items: Vec<StepItem>,
    current: StepValue,
    theme: StepTheme,
    icon_override: Option<IconOverride>,
    next_id: usize,
}

impl Steps {
    /// Create a wizard with the given current step.
    #[must_use]
    pub fn new(current: impl Into<StepValue>) -> Self {
        Self {
            items: Vec::new(),
            current: current.into(),
            theme: StepTheme::default(),
            icon_override: None,
            next_id: 0,
        }
    }

    /// Set the icon theme.
    #[must_use]
    pub fn with_theme(mut self, theme: StepTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Install a configuration-provider icon override.
    #[must_use]
    pub fn with_icon_override(mut self, f: IconOverride) -> Self {
        self.icon_override = Some(f);
        self
    }

    /// The active step's identity.
    #[must_use]
    pub fn current(&self) -> &StepValue {
        &self.current
    }

    /// Move the wizard to another step. Called by the host, typically in
    /// response to a [`StepChange`].
    pub fn set_current(&mut self, current: impl Into<StepValue>) {
        self.current = current.into();
    }

    /// The icon theme.
    #[must_use]
    pub fn theme(&self) -> StepTheme {
        self.theme
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register an item, assigning it the next index in mount order.
    pub fn add_item(&mut self, spec: StepSpec) -> StepId {
        let id = StepId(self.next_id);
        self.next_id += 1;
        let index = self.items.len();
        self.items.push(StepItem {
            id,
            index,
            value: spec.value,
            explicit: spec.status,
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(index, "step registered");

        id
    }

    /// Deregister an item. Surviving items keep the indices they were
    /// assigned at registration. Returns false for an unknown id.
    pub fn remove_item(&mut self, id: StepId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Pin or unpin an item's explicit status.
    pub fn set_status(&mut self, id: StepId, status: Option<StepStatus>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.explicit = status;
        }
    }

    /// The registration index of an item.
    #[must_use]
    pub fn index_of(&self, id: StepId) -> Option<usize> {
        self.item(id).map(|item| item.index)
    }

    fn item(&self, id: StepId) -> Option<&StepItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Registration index of the item whose identity equals `current`.
    fn current_index(&self) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.effective_value() == self.current)
            .map(|item| item.index)
    }

    /// Derive the status of one item.
    ///
    /// Explicit status wins; else `Process` iff the item's identity equals
    /// `current`; else `Finish` iff its index precedes the current item's
    /// index; else `Default`. When nothing matches `current`, every
    /// non-explicit item derives `Default`.
    #[must_use]
    pub fn status_of(&self, id: StepId) -> StepStatus {
        let Some(item) = self.item(id) else {
            return StepStatus::Default;
        };
        if let Some(explicit) = item.explicit {
            return explicit;
        }
        if item.effective_value() == self.current {
            return StepStatus::Process;
        }
        match self.current_index() {
            Some(current_index) if item.index < current_index => StepStatus::Finish,
            _ => StepStatus::Default,
        }
    }

    /// Statuses of all registered items in list order.
    #[must_use]
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.items.iter().map(|item| self.status_of(item.id)).collect()
    }

    /// Resolve the icon for one item from theme, status and index.
    #[must_use]
    pub fn icon_for(&self, id: StepId) -> StepIcon {
        let status = self.status_of(id);
        let index = self.index_of(id).unwrap_or(0);
        if let Some(f) = self.icon_override {
            if let Some(icon) = f(status, index) {
                return icon;
            }
        }
        match self.theme {
            StepTheme::Dot => StepIcon::Dot,
            StepTheme::Default => match status {
                StepStatus::Finish => StepIcon::Check,
                StepStatus::Error => StepIcon::Cross,
                StepStatus::Default | StepStatus::Process => StepIcon::Number(index + 1),
            },
        }
    }

    /// Whether clicking the item would produce a change request. The
    /// active step is not clickable.
    #[must_use]
    pub fn can_click(&self, id: StepId) -> bool {
        self.status_of(id) != StepStatus::Process
    }

    /// Click delegation: build the change request for the host, or `None`
    /// when the item is already the active step. The wizard itself never
    /// moves `current` here.
    #[must_use]
    pub fn on_step_click(&self, id: StepId, pointer: PointerEvent) -> Option<StepChange> {
        let item = self.item(id)?;
        if !self.can_click(id) {
            return None;
        }
        Some(StepChange {
            value: item.effective_value(),
            previous: self.current.clone(),
            pointer,
        })
    }
}
