//! Read-only projections for hosts.
//!
//! A host renders visible ranges as lines and every hidden region as a placeholder row
//! ("N hidden lines", with expand controls). [`FoldPlaceholder`] carries everything such a row
//! needs, including the command to issue when one of its controls is activated.

use crate::commands::{ExpandDirection, FoldingCommand};
use crate::folding::FoldingState;
use serde::Serialize;

/// Placeholder row for one hidden region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldPlaceholder {
    /// Index of the region in the snapshot it was read from.
    pub region_index: usize,
    /// First hidden line.
    pub start_line: usize,
    /// Last hidden line.
    pub end_line: usize,
    /// Number of hidden lines.
    pub hidden_line_count: usize,
    /// Whether an "expand up" control should be offered.
    pub can_expand_up: bool,
    /// Whether an "expand down" control should be offered.
    pub can_expand_down: bool,
}

impl FoldPlaceholder {
    /// Whether the placeholder offers a control for `direction`.
    pub fn can_expand(&self, direction: ExpandDirection) -> bool {
        match direction {
            ExpandDirection::Up => self.can_expand_up,
            ExpandDirection::Down => self.can_expand_down,
        }
    }

    /// The command a control for `direction` should issue, or `None` if the region cannot
    /// grow that way.
    ///
    /// The command is bound to this snapshot's region index; after any other transition the
    /// placeholders must be re-read.
    pub fn expand_command(
        &self,
        direction: ExpandDirection,
        lines_to_expand: usize,
    ) -> Option<FoldingCommand> {
        self.can_expand(direction).then(|| {
            FoldingCommand::expand_region_by(self.region_index, direction, lines_to_expand)
        })
    }
}

/// Where a document line ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVisibility {
    /// The line is rendered as part of the visible range at `range_index`.
    Visible {
        /// Index into [`FoldingState::visible_ranges`].
        range_index: usize,
    },
    /// The line is collapsed into the hidden region at `region_index`.
    Hidden {
        /// Index into [`FoldingState::hidden_regions`].
        region_index: usize,
    },
}

impl FoldingState {
    /// One placeholder per hidden region, in document order.
    ///
    /// Regions that do not fit the current document are skipped.
    pub fn placeholders(&self) -> Vec<FoldPlaceholder> {
        let total_lines = self.total_lines();
        self.hidden_regions()
            .iter()
            .enumerate()
            .filter(|(_, region)| region.span().is_valid_for(total_lines))
            .map(|(region_index, region)| FoldPlaceholder {
                region_index,
                start_line: region.start_line,
                end_line: region.end_line,
                hidden_line_count: region.line_count(),
                can_expand_up: region.can_expand_up,
                can_expand_down: region.can_expand_down,
            })
            .collect()
    }

    /// Locate `line` among the visible ranges and hidden regions.
    ///
    /// Returns `None` for line 0 and lines past the end of the document.
    pub fn line_visibility(&self, line: usize) -> Option<LineVisibility> {
        if line == 0 || line > self.total_lines() {
            return None;
        }

        let visible = self.visible_ranges();
        let idx = visible.partition_point(|r| r.start_line <= line);
        if idx > 0 && visible[idx - 1].contains_line(line) {
            return Some(LineVisibility::Visible {
                range_index: idx - 1,
            });
        }

        let hidden = self.hidden_regions();
        let idx = hidden.partition_point(|r| r.start_line <= line);
        if idx > 0 && hidden[idx - 1].contains_line(line) {
            return Some(LineVisibility::Hidden {
                region_index: idx - 1,
            });
        }

        None
    }

    /// Whether `line` is rendered.
    pub fn is_line_visible(&self, line: usize) -> bool {
        matches!(
            self.line_visibility(line),
            Some(LineVisibility::Visible { .. })
        )
    }

    /// Total number of rendered lines.
    pub fn visible_line_count(&self) -> usize {
        self.visible_ranges().iter().map(|r| r.line_count()).sum()
    }

    /// Total number of collapsed lines.
    pub fn hidden_line_count(&self) -> usize {
        self.hidden_regions().iter().map(|r| r.line_count()).sum()
    }
}
