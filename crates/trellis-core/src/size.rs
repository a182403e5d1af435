#![forbid(unsafe_code)]

//! Size classes for item presentation.

/// Presentation size class for selector items.
///
/// The state engines never decide truncation themselves; they expose a
/// label's display width and the size class's column budget, and the
/// presentation layer performs the overflow test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    /// Compact rows.
    Small,
    /// Standard rows (default).
    #[default]
    Medium,
    /// Spacious rows.
    Large,
}

impl SizeClass {
    /// Columns available for an item label at this size.
    #[must_use]
    pub const fn max_label_columns(&self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 28,
            Self::Large => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(SizeClass::default(), SizeClass::Medium);
    }

    #[test]
    fn budgets_grow_with_size() {
        assert!(SizeClass::Small.max_label_columns() < SizeClass::Medium.max_label_columns());
        assert!(SizeClass::Medium.max_label_columns() < SizeClass::Large.max_label_columns());
    }
}
