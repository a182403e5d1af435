//! Property-based invariant tests for label highlight segmentation.
//!
//! 1. Concatenating the segments reproduces the original label exactly,
//!    for any `(label, input)` pair.
//! 2. Every matched segment is literally the search text.
//! 3. Empty input yields exactly one plain segment equal to the label.
//! 4. If the label contains the input, at least one segment matches.

use proptest::prelude::*;
use trellis_widgets::cascader::filter::split_highlight;

// ── Helpers ─────────────────────────────────────────────────────────────

fn arb_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..max_len).prop_map(|chars| chars.into_iter().collect())
}

/// A label together with a guaranteed substring of it, cut on char
/// boundaries.
fn label_and_substring() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(any::<char>(), 1..24).prop_flat_map(|chars| {
        let n = chars.len();
        (Just(chars), 0..=n, 0..=n)
            .prop_map(|(chars, a, b)| {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let label: String = chars.iter().collect();
                let input: String = chars[lo..hi].iter().collect();
                (label, input)
            })
    })
}

fn concat(segments: &[trellis_widgets::cascader::filter::LabelSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Round trip and matched-segment fidelity for arbitrary pairs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_trip_arbitrary(label in arb_text(32), input in arb_text(6)) {
        let segments = split_highlight(&label, &input);
        prop_assert_eq!(concat(&segments), label);
        for segment in &segments {
            if segment.matched {
                prop_assert_eq!(&segment.text, &input);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Empty input is a single plain segment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_input_single_segment(label in arb_text(32)) {
        let segments = split_highlight(&label, "");
        prop_assert_eq!(segments.len(), 1);
        prop_assert!(!segments[0].matched);
        prop_assert_eq!(&segments[0].text, &label);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Substrings always produce a matched segment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn substring_is_found((label, input) in label_and_substring()) {
        let segments = split_highlight(&label, &input);
        prop_assert_eq!(concat(&segments), label.clone());
        if !input.is_empty() {
            prop_assert!(
                segments.iter().any(|s| s.matched),
                "no match found for {:?} in {:?}",
                input, label
            );
        }
    }
}
