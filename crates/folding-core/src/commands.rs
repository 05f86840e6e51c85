//! Folding commands.
//!
//! A [`FoldingCommand`] is a plain value describing one state transition. Hosts can build
//! commands from UI events (an "expand" button on a placeholder, a new set of references from
//! a chat message, a document edit) and feed them to [`FoldingState::apply`] or
//! [`FoldingStateManager::execute`].
//!
//! Commands serialize as tagged JSON objects:
//!
//! ```rust
//! use folding_core::{ExpandDirection, FoldingCommand};
//!
//! let command: FoldingCommand = serde_json::from_str(
//!     r#"{ "type": "expandRegion", "regionIndex": 0, "direction": "down", "linesToExpand": 15 }"#,
//! ).unwrap();
//! assert_eq!(command, FoldingCommand::ExpandRegion {
//!     region_index: 0,
//!     direction: ExpandDirection::Down,
//!     lines_to_expand: 15,
//! });
//! ```
//!
//! [`FoldingState::apply`]: crate::FoldingState::apply
//! [`FoldingStateManager::execute`]: crate::FoldingStateManager::execute

use crate::config::DEFAULT_EXPAND_STEP;
use crate::error::FoldingError;
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of an expand action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandDirection {
    /// Reveal lines at the bottom of the hidden region (toward the visible content below it).
    Up,
    /// Reveal lines at the top of the hidden region (toward the visible content above it).
    Down,
}

impl ExpandDirection {
    /// The lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for ExpandDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpandDirection {
    type Err = FoldingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(FoldingError::InvalidDirection(other.to_string())),
        }
    }
}

/// Folding state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FoldingCommand {
    /// Replace the reference set and recompute everything from scratch.
    UpdateReferences {
        /// The new references.
        references: Vec<Reference>,
    },
    /// Reveal part of a hidden region.
    #[serde(rename_all = "camelCase")]
    ExpandRegion {
        /// Index into the current state's hidden regions.
        region_index: usize,
        /// Which edge of the region to reveal.
        direction: ExpandDirection,
        /// How many lines to reveal.
        #[serde(default = "default_expand_step")]
        lines_to_expand: usize,
    },
    /// The document now has `total_lines` lines.
    #[serde(rename_all = "camelCase")]
    Resize {
        /// New line count.
        total_lines: usize,
    },
}

fn default_expand_step() -> usize {
    DEFAULT_EXPAND_STEP
}

impl FoldingCommand {
    /// Build an [`UpdateReferences`](Self::UpdateReferences) command.
    pub fn update_references(references: Vec<Reference>) -> Self {
        Self::UpdateReferences { references }
    }

    /// Build an [`ExpandRegion`](Self::ExpandRegion) command revealing the default step.
    pub fn expand_region(region_index: usize, direction: ExpandDirection) -> Self {
        Self::expand_region_by(region_index, direction, DEFAULT_EXPAND_STEP)
    }

    /// Build an [`ExpandRegion`](Self::ExpandRegion) command revealing `lines_to_expand` lines.
    pub fn expand_region_by(
        region_index: usize,
        direction: ExpandDirection,
        lines_to_expand: usize,
    ) -> Self {
        Self::ExpandRegion {
            region_index,
            direction,
            lines_to_expand,
        }
    }

    /// Build a [`Resize`](Self::Resize) command.
    pub fn resize(total_lines: usize) -> Self {
        Self::Resize { total_lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("up".parse::<ExpandDirection>().unwrap(), ExpandDirection::Up);
        assert_eq!("down".parse::<ExpandDirection>().unwrap(), ExpandDirection::Down);

        let err = "sideways".parse::<ExpandDirection>().unwrap_err();
        assert!(matches!(err, FoldingError::InvalidDirection(ref s) if s == "sideways"));
    }

    #[test]
    fn test_direction_display_round_trips() {
        for direction in [ExpandDirection::Up, ExpandDirection::Down] {
            assert_eq!(direction.to_string().parse::<ExpandDirection>().unwrap(), direction);
        }
    }

    #[test]
    fn test_expand_region_defaults_to_step() {
        assert_eq!(
            FoldingCommand::expand_region(0, ExpandDirection::Down),
            FoldingCommand::ExpandRegion {
                region_index: 0,
                direction: ExpandDirection::Down,
                lines_to_expand: 20,
            }
        );
    }

    #[test]
    fn test_command_wire_shape() {
        let json = serde_json::to_value(FoldingCommand::expand_region_by(2, ExpandDirection::Up, 15))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "expandRegion",
                "regionIndex": 2,
                "direction": "up",
                "linesToExpand": 15
            })
        );

        let json = serde_json::to_value(FoldingCommand::resize(30)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "resize", "totalLines": 30 }));
    }

    #[test]
    fn test_command_missing_lines_uses_default() {
        let command: FoldingCommand =
            serde_json::from_str(r#"{ "type": "expandRegion", "regionIndex": 1, "direction": "up" }"#)
                .unwrap();
        assert_eq!(command, FoldingCommand::expand_region(1, ExpandDirection::Up));
    }

    #[test]
    fn test_update_references_wire_shape() {
        let command: FoldingCommand = serde_json::from_str(
            r#"{ "type": "updateReferences", "references": [
                { "id": "1", "range": { "startLine": 10, "endLine": 15 } },
                { "id": "2" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            command,
            FoldingCommand::update_references(vec![
                Reference::with_lines("1", 10, 15),
                Reference::new("2", None),
            ])
        );
    }
}
