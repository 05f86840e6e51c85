//! The folding state value and its transitions.
//!
//! [`FoldingState`] is an immutable snapshot: every transition takes `&self` and returns the
//! next snapshot, so a host can keep the previous one around (for diffing, or to drop a stale
//! UI event) without any aliasing concerns.
//!
//! ```rust
//! use folding_core::{ExpandDirection, FoldingState, HiddenRegion, LineRange, Reference};
//!
//! let state = FoldingState::new(vec![Reference::with_lines("hit", 20, 25)], 50, 3);
//! assert_eq!(state.visible_ranges(), &[LineRange::new(17, 28)]);
//!
//! // Reveal ten lines above the visible window.
//! let state = state.expand_region(0, ExpandDirection::Up, 10);
//! assert_eq!(state.visible_ranges(), &[LineRange::new(7, 28)]);
//! assert_eq!(state.hidden_regions()[0], HiddenRegion::new(1, 6, true, false));
//! ```

use crate::commands::{ExpandDirection, FoldingCommand};
use crate::config::ResizePolicy;
use crate::hidden::calculate_hidden_regions;
use crate::intervals::{HiddenRegion, LineRange, merge_ranges};
use crate::reference::Reference;
use crate::visible::calculate_visible_ranges;
use serde::Serialize;

/// Folding state snapshot
///
/// `visible_ranges` and `hidden_regions` are always derived from the other fields (plus any
/// manual expansions) and cannot be set directly. After every transition:
///
/// - visible ranges are sorted, disjoint, and separated by at least one hidden line;
/// - hidden regions tile exactly the lines not covered by a visible range;
/// - every boundary lies within `[1, total_lines]`;
/// - without any range-bearing reference the whole document is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldingState {
    total_lines: usize,
    references: Vec<Reference>,
    padding: usize,
    visible_ranges: Vec<LineRange>,
    hidden_regions: Vec<HiddenRegion>,
}

impl FoldingState {
    /// Create the initial state for a document of `total_lines` lines.
    pub fn new(references: Vec<Reference>, total_lines: usize, padding: usize) -> Self {
        let visible_ranges = calculate_visible_ranges(&references, total_lines, padding);
        let hidden_regions = calculate_hidden_regions(&visible_ranges, total_lines);
        Self {
            total_lines,
            references,
            padding,
            visible_ranges,
            hidden_regions,
        }
    }

    /// Document line count.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// The reference snapshot this state was derived from.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Context lines added around each reference.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Visible ranges, sorted by start line.
    pub fn visible_ranges(&self) -> &[LineRange] {
        &self.visible_ranges
    }

    /// Hidden regions, sorted by start line.
    pub fn hidden_regions(&self) -> &[HiddenRegion] {
        &self.hidden_regions
    }

    /// Hidden region at `index` in this snapshot.
    pub fn hidden_region(&self, index: usize) -> Option<&HiddenRegion> {
        self.hidden_regions.get(index)
    }

    fn with_visible_ranges(&self, visible_ranges: Vec<LineRange>) -> Self {
        let hidden_regions = calculate_hidden_regions(&visible_ranges, self.total_lines);
        Self {
            total_lines: self.total_lines,
            references: self.references.clone(),
            padding: self.padding,
            visible_ranges,
            hidden_regions,
        }
    }

    /// Replace the references and recompute everything from scratch.
    ///
    /// Manual expansions belong to the previous reference set and are discarded.
    pub fn update_references(&self, references: Vec<Reference>) -> Self {
        Self::new(references, self.total_lines, self.padding)
    }

    /// Reveal up to `lines_to_expand` lines of the hidden region at `region_index`.
    ///
    /// - [`ExpandDirection::Up`] reveals the bottom of the region: `[max(start, end - n + 1), end]`.
    /// - [`ExpandDirection::Down`] reveals the top of the region: `[start, min(end, start + n - 1)]`.
    ///
    /// The revealed lines are merged with neighbouring visible ranges. A missing index, a
    /// direction the region does not allow, or `lines_to_expand == 0` returns an unchanged
    /// copy: region indices are only valid against the snapshot they were read from.
    pub fn expand_region(
        &self,
        region_index: usize,
        direction: ExpandDirection,
        lines_to_expand: usize,
    ) -> Self {
        let Some(region) = self.hidden_regions.get(region_index) else {
            tracing::trace!(region_index, regions = self.hidden_regions.len(), "expand ignored: no such region");
            return self.clone();
        };
        if lines_to_expand == 0 {
            tracing::trace!(region_index, "expand ignored: zero lines");
            return self.clone();
        }

        let revealed = match direction {
            ExpandDirection::Up if region.can_expand_up => LineRange::new(
                region
                    .start_line
                    .max((region.end_line + 1).saturating_sub(lines_to_expand)),
                region.end_line,
            ),
            ExpandDirection::Down if region.can_expand_down => LineRange::new(
                region.start_line,
                region
                    .end_line
                    .min(region.start_line.saturating_add(lines_to_expand - 1)),
            ),
            _ => {
                tracing::trace!(region_index, %direction, "expand ignored: direction not allowed");
                return self.clone();
            }
        };

        let mut ranges = self.visible_ranges.clone();
        ranges.push(revealed);
        self.with_visible_ranges(merge_ranges(ranges))
    }

    /// Adapt to a new document line count, re-deriving visible ranges from the references.
    pub fn on_document_resize(&self, total_lines: usize) -> Self {
        self.on_document_resize_with(total_lines, ResizePolicy::Rederive)
    }

    /// Adapt to a new document line count using `policy` for manual expansions.
    ///
    /// Resizing to the current line count returns an unchanged copy.
    pub fn on_document_resize_with(&self, total_lines: usize, policy: ResizePolicy) -> Self {
        if total_lines == self.total_lines {
            return self.clone();
        }

        let rederived = Self::new(self.references.clone(), total_lines, self.padding);
        match policy {
            ResizePolicy::Rederive => rederived,
            ResizePolicy::PreserveExpansions => {
                let mut ranges = rederived.visible_ranges.clone();
                ranges.extend(
                    self.visible_ranges
                        .iter()
                        .filter_map(|range| range.clamp_to(total_lines)),
                );
                rederived.with_visible_ranges(merge_ranges(ranges))
            }
        }
    }

    /// Apply a command with the default resize policy.
    pub fn apply(&self, command: &FoldingCommand) -> Self {
        self.apply_with_policy(command, ResizePolicy::default())
    }

    /// Apply a command, resolving resizes with `policy`.
    pub fn apply_with_policy(&self, command: &FoldingCommand, policy: ResizePolicy) -> Self {
        match command {
            FoldingCommand::UpdateReferences { references } => {
                self.update_references(references.clone())
            }
            FoldingCommand::ExpandRegion {
                region_index,
                direction,
                lines_to_expand,
            } => self.expand_region(*region_index, *direction, *lines_to_expand),
            FoldingCommand::Resize { total_lines } => {
                self.on_document_resize_with(*total_lines, policy)
            }
        }
    }
}

/// Create the initial folding state.
pub fn create_folding_state(
    references: Vec<Reference>,
    total_lines: usize,
    padding: usize,
) -> FoldingState {
    FoldingState::new(references, total_lines, padding)
}

/// `(state, references) -> state`; see [`FoldingState::update_references`].
pub fn update_references(state: &FoldingState, references: Vec<Reference>) -> FoldingState {
    state.update_references(references)
}

/// `(state, region, direction, lines) -> state`; see [`FoldingState::expand_region`].
pub fn expand_region(
    state: &FoldingState,
    region_index: usize,
    direction: ExpandDirection,
    lines_to_expand: usize,
) -> FoldingState {
    state.expand_region(region_index, direction, lines_to_expand)
}

/// `(state, total_lines) -> state`; see [`FoldingState::on_document_resize`].
pub fn on_document_resize(state: &FoldingState, total_lines: usize) -> FoldingState {
    state.on_document_resize(total_lines)
}
