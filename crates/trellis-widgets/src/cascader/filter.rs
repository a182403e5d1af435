#![forbid(unsafe_code)]

//! Search filtering: full-path labels and highlight segmentation.
//!
//! While filtering is active an item shows its full path from the root
//! (e.g. `"Guangdong/Shenzhen/Nanshan"`) instead of its own label, with
//! every literal occurrence of the search text split out as a matched
//! segment. Concatenating the segments always reproduces the original
//! label exactly.
//!
//! Truncation is a presentation concern: the engine exposes the label's
//! display width in columns and the untruncated text for tooltip
//! disclosure, and the rendering layer applies the overflow test against
//! [`SizeClass::max_label_columns`].

use super::CascaderContext;
use super::node::{CascaderTree, NodeId};
use trellis_core::size::SizeClass;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Separator between ancestor labels in a full-path label.
pub const PATH_SEPARATOR: &str = "/";

/// One piece of a label, either plain text or a search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegment {
    /// The segment text.
    pub text: String,
    /// Whether this segment is an occurrence of the search text.
    pub matched: bool,
}

impl LabelSegment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Everything the presentation layer needs to draw one item label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDisplay {
    /// Label pieces in order; concatenation reproduces `full_text`.
    pub segments: Vec<LabelSegment>,
    /// Whether the full root-to-node path is shown (filtering active).
    pub is_full_path: bool,
    /// The complete untruncated label, for tooltip disclosure.
    pub full_text: String,
    /// Display width of `full_text` in terminal columns.
    pub columns: usize,
}

impl LabelDisplay {
    /// Whether the label overflows the column budget of `size`.
    #[must_use]
    pub fn overflows(&self, size: SizeClass) -> bool {
        self.columns > size.max_label_columns()
    }
}

/// Labels of `[root ancestor, .., node]` joined with [`PATH_SEPARATOR`].
#[must_use]
pub fn full_path_label(tree: &CascaderTree, id: NodeId) -> String {
    let labels: Vec<&str> = tree
        .path_to(id)
        .into_iter()
        .map(|n| tree.label(n))
        .collect();
    labels.join(PATH_SEPARATOR)
}

/// Split `label` on every literal, case-sensitive occurrence of `input`.
///
/// Matched occurrences become their own segments; surrounding text keeps
/// its original order. Empty `input` yields the whole label as a single
/// plain segment.
#[must_use]
pub fn split_highlight(label: &str, input: &str) -> Vec<LabelSegment> {
    if input.is_empty() {
        return vec![LabelSegment::plain(label)];
    }
    let mut segments = Vec::new();
    let mut rest = label;
    while let Some(pos) = rest.find(input) {
        if pos > 0 {
            segments.push(LabelSegment::plain(&rest[..pos]));
        }
        segments.push(LabelSegment::matched(input));
        rest = &rest[pos + input.len()..];
    }
    if !rest.is_empty() || segments.is_empty() {
        segments.push(LabelSegment::plain(rest));
    }
    segments
}

/// Whether the node's active label contains the search text.
///
/// Matching runs against the full path, so "Guangdong" finds every
/// descendant of Guangdong.
#[must_use]
pub fn matches(tree: &CascaderTree, id: NodeId, ctx: &CascaderContext) -> bool {
    if !ctx.filter_active || ctx.input_val.is_empty() {
        return true;
    }
    full_path_label(tree, id).contains(&ctx.input_val)
}

/// Compute the display model for one item label.
#[must_use]
pub fn compute_display(tree: &CascaderTree, id: NodeId, ctx: &CascaderContext) -> LabelDisplay {
    let (full_text, is_full_path) = if ctx.filter_active {
        (full_path_label(tree, id), true)
    } else {
        (tree.label(id).to_owned(), false)
    };
    let segments = if ctx.filter_active {
        split_highlight(&full_text, &ctx.input_val)
    } else {
        vec![LabelSegment::plain(full_text.clone())]
    };
    let columns = display_columns(&full_text);
    LabelDisplay {
        segments,
        is_full_path,
        full_text,
        columns,
    }
}

/// Display width in terminal columns, summed per grapheme cluster the way
/// a cell-based renderer would draw it.
#[must_use]
pub fn display_columns(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}
