//! Line intervals: visible ranges and the hidden regions between them.
//!
//! All line numbers in this crate are 1-based and ranges are inclusive on both ends, which is
//! how hosts usually present line numbers to users.

use serde::{Deserialize, Serialize};

/// A visible line range (`start_line..=end_line`, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    /// First line of the range (inclusive).
    pub start_line: usize,
    /// Last line of the range (inclusive).
    pub end_line: usize,
}

impl LineRange {
    /// Create a range covering `start_line..=end_line`.
    pub const fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// The range covering a whole document of `total_lines` lines.
    ///
    /// Returns `None` for an empty document, which has no valid `[1, 0]` range.
    pub fn whole_document(total_lines: usize) -> Option<Self> {
        (total_lines > 0).then(|| Self::new(1, total_lines))
    }

    /// Number of lines covered (0 for an inverted range).
    pub fn line_count(&self) -> usize {
        (self.end_line + 1).saturating_sub(self.start_line)
    }

    /// Whether the range is well-formed and lies within `[1, total_lines]`.
    pub fn is_valid_for(&self, total_lines: usize) -> bool {
        self.start_line >= 1 && self.start_line <= self.end_line && self.end_line <= total_lines
    }

    /// Check if line number is within the range
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Whether `next` (starting at or after `self`) overlaps or directly follows this range.
    pub fn touches(&self, next: &LineRange) -> bool {
        self.end_line + 1 >= next.start_line
    }

    /// Clamp both endpoints into `[1, total_lines]`, dropping the range if nothing is left.
    pub fn clamp_to(&self, total_lines: usize) -> Option<Self> {
        let start_line = self.start_line.max(1);
        let end_line = self.end_line.min(total_lines);
        (start_line <= end_line).then(|| Self::new(start_line, end_line))
    }
}

/// A maximal run of hidden lines between visible ranges (or a document edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenRegion {
    /// First hidden line (inclusive).
    pub start_line: usize,
    /// Last hidden line (inclusive).
    pub end_line: usize,
    /// The region may reveal lines from its bottom edge, growing the visible range below it upward.
    pub can_expand_up: bool,
    /// The region may reveal lines from its top edge, growing the visible range above it downward.
    pub can_expand_down: bool,
}

impl HiddenRegion {
    /// Create a hidden region with explicit expansion flags.
    pub const fn new(
        start_line: usize,
        end_line: usize,
        can_expand_up: bool,
        can_expand_down: bool,
    ) -> Self {
        Self {
            start_line,
            end_line,
            can_expand_up,
            can_expand_down,
        }
    }

    /// Number of hidden lines.
    pub fn line_count(&self) -> usize {
        (self.end_line + 1).saturating_sub(self.start_line)
    }

    /// Check if line number is within the hidden region
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// The line span as a plain range.
    pub fn span(&self) -> LineRange {
        LineRange::new(self.start_line, self.end_line)
    }
}

/// Sort ranges by start line and merge every pair that overlaps or is adjacent.
///
/// Two ranges merge when `current.end_line >= next.start_line - 1`. The sort is stable, so
/// ranges sharing a start line keep their input order.
pub fn merge_ranges(mut ranges: Vec<LineRange>) -> Vec<LineRange> {
    ranges.sort_by_key(|r| r.start_line);

    let mut merged: Vec<LineRange> = Vec::with_capacity(ranges.len());
    for next in ranges {
        match merged.last_mut() {
            Some(current) if current.touches(&next) => {
                current.end_line = current.end_line.max(next.end_line);
            }
            _ => merged.push(next),
        }
    }
    merged
}
