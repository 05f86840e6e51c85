#![warn(missing_docs)]
//! `folding-core-json` - JSON host bridge for `folding-core`.
//!
//! Hosts that live outside Rust (a web view, a scripting layer) talk to the folding engine by
//! exchanging JSON: they send transactions made of serialized [`FoldingCommand`]s and receive
//! serialized [`FoldingState`] snapshots back.
//!
//! ```rust
//! use folding_core::FoldingConfig;
//! use folding_core_json::FoldingSession;
//!
//! let mut session = FoldingSession::open(
//!     r#"[{ "id": "1", "range": { "startLine": 20, "endLine": 25 } }]"#,
//!     50,
//!     FoldingConfig::default(),
//! ).unwrap();
//!
//! let snapshot = session.dispatch(
//!     r#"{ "effects": [{ "type": "expandRegion", "regionIndex": 0, "direction": "up", "linesToExpand": 10 }] }"#,
//! ).unwrap();
//! assert!(snapshot.contains(r#""visibleRanges":[{"startLine":7,"endLine":28}]"#));
//! ```
//!
//! [`FoldingCommand`]: folding_core::FoldingCommand
//! [`FoldingState`]: folding_core::FoldingState

mod error;
mod session;

pub use error::BridgeError;
pub use session::{FoldingSession, Snapshot, Transaction};
