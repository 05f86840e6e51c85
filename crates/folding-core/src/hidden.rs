//! Hidden region computation.
//!
//! Hidden regions are the gaps left by a sorted, merged list of visible ranges. Each gap is
//! tagged with the directions it may be expanded in:
//!
//! ```text
//! [1 ............ first.start-1]   up: yes  down: no    (leading)
//! [a.end+1 ...... b.start-1]       up: yes  down: yes   (between two visible ranges)
//! [last.end+1 ... total_lines]     up: no   down: yes   (trailing)
//! ```

use crate::intervals::{HiddenRegion, LineRange};

/// Compute the hidden regions complementing `visible_ranges` within `[1, total_lines]`.
///
/// `visible_ranges` must be sorted and merged, as produced by
/// [`calculate_visible_ranges`](crate::calculate_visible_ranges) or
/// [`merge_ranges`](crate::merge_ranges). An empty list yields no regions.
pub fn calculate_hidden_regions(
    visible_ranges: &[LineRange],
    total_lines: usize,
) -> Vec<HiddenRegion> {
    let (Some(first), Some(last)) = (visible_ranges.first(), visible_ranges.last()) else {
        return Vec::new();
    };

    let mut regions = Vec::with_capacity(visible_ranges.len() + 1);

    if first.start_line > 1 {
        regions.push(HiddenRegion::new(1, first.start_line - 1, true, false));
    }

    for pair in visible_ranges.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.end_line + 1 < next.start_line {
            regions.push(HiddenRegion::new(
                current.end_line + 1,
                next.start_line - 1,
                true,
                true,
            ));
        }
    }

    if last.end_line < total_lines {
        regions.push(HiddenRegion::new(last.end_line + 1, total_lines, false, true));
    }

    regions
}
