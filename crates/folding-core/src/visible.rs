//! Visible range computation.
//!
//! Each range-bearing reference is padded with context lines, clamped to the document, and
//! the padded windows are merged into a sorted list of disjoint, non-adjacent ranges.

use crate::intervals::{LineRange, merge_ranges};
use crate::reference::Reference;

/// Default number of context lines added around each reference.
pub const DEFAULT_PADDING: usize = 3;

/// Pad a single reference and clamp it into `[1, total_lines]`.
///
/// Returns `None` for references without a range and for malformed ones (inverted, or
/// entirely outside the document even after padding).
pub fn padded_range(
    reference: &Reference,
    total_lines: usize,
    padding: usize,
) -> Option<LineRange> {
    let range = reference.range?;
    if range.start_line > range.end_line {
        tracing::trace!(id = %reference.id, ?range, "dropping inverted reference range");
        return None;
    }

    let start_line = range.start_line.saturating_sub(padding).max(1);
    let end_line = range.end_line.saturating_add(padding).min(total_lines);
    if start_line > end_line {
        tracing::trace!(id = %reference.id, ?range, total_lines, "reference lies outside the document");
        return None;
    }

    Some(LineRange::new(start_line, end_line))
}

/// Compute the visible ranges for `references` in a document of `total_lines` lines.
///
/// When no reference contributes a usable range the whole document is visible; an empty
/// document has no visible ranges at all.
pub fn calculate_visible_ranges(
    references: &[Reference],
    total_lines: usize,
    padding: usize,
) -> Vec<LineRange> {
    let padded: Vec<LineRange> = references
        .iter()
        .filter_map(|reference| padded_range(reference, total_lines, padding))
        .collect();

    if padded.is_empty() {
        return LineRange::whole_document(total_lines).into_iter().collect();
    }

    merge_ranges(padded)
}
