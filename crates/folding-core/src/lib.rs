#![warn(missing_docs)]
//! Folding Core - Headless Reference-Anchored Line Folding
//!
//! # Overview
//!
//! `folding-core` decides which lines of a document a reader should see. Given a set of
//! references (line ranges of interest) it pads each one with context, merges the padded
//! windows into visible ranges, and collapses everything else into hidden regions that can be
//! revealed step by step. It does not render anything: hosts map visible ranges to lines and
//! hidden regions to placeholder rows.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  State Manager (versioning + notifications) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Commands & Snapshot Projections            │  ← Host integration
//! ├─────────────────────────────────────────────┤
//! │  FoldingState reducer                       │  ← Transitions
//! ├─────────────────────────────────────────────┤
//! │  Visible ranges / Hidden regions            │  ← Interval arithmetic
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use folding_core::{ExpandDirection, FoldingState, HiddenRegion, LineRange, Reference};
//!
//! let state = FoldingState::new(
//!     vec![
//!         Reference::with_lines("a", 10, 15),
//!         Reference::with_lines("b", 25, 30),
//!     ],
//!     50,
//!     3,
//! );
//!
//! assert_eq!(state.visible_ranges(), &[LineRange::new(7, 18), LineRange::new(22, 33)]);
//! assert_eq!(state.hidden_regions()[1], HiddenRegion::new(19, 21, true, true));
//!
//! // Closing the three-line gap merges both windows.
//! let state = state.expand_region(1, ExpandDirection::Down, 20);
//! assert_eq!(state.visible_ranges(), &[LineRange::new(7, 33)]);
//! ```
//!
//! # Module Description
//!
//! - [`intervals`] - line ranges, hidden regions, merging
//! - [`reference`] - references and reference lookups
//! - [`visible`] - visible range computation
//! - [`hidden`] - hidden region computation
//! - [`folding`] - the `FoldingState` snapshot and its transitions
//! - [`commands`] - serializable transition commands
//! - [`snapshot`] - placeholder and per-line projections
//! - [`state`] - stateful manager with versioning and change notifications
//! - [`config`] - padding, expand step, resize policy

pub mod commands;
pub mod config;
mod error;
pub mod folding;
pub mod hidden;
pub mod intervals;
pub mod reference;
pub mod snapshot;
pub mod state;
pub mod visible;

pub use commands::{ExpandDirection, FoldingCommand};
pub use config::{DEFAULT_EXPAND_STEP, FoldingConfig, ResizePolicy};
pub use error::FoldingError;
pub use folding::{
    FoldingState, create_folding_state, expand_region, on_document_resize, update_references,
};
pub use hidden::calculate_hidden_regions;
pub use intervals::{HiddenRegion, LineRange, merge_ranges};
pub use reference::{Reference, ReferenceRange, reference_at_line, referenced_lines};
pub use snapshot::{FoldPlaceholder, LineVisibility};
pub use state::{FoldingChange, FoldingChangeCallback, FoldingChangeKind, FoldingStateManager};
pub use visible::{DEFAULT_PADDING, calculate_visible_ranges};
