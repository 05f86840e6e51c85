//! Folding State Management
//!
//! [`FoldingStateManager`] owns the current [`FoldingState`] for one document view and is the
//! single place where commands are applied.
//!
//! # Overview
//!
//! - **Command Execution**: every command replaces the current snapshot with the next one
//! - **Version Tracking**: the version number increases only when a command changes the snapshot
//! - **Change Notifications**: subscribers are told which kind of transition happened
//!
//! # Example
//!
//! ```rust
//! use folding_core::{ExpandDirection, FoldingCommand, FoldingConfig, FoldingStateManager, Reference};
//!
//! let mut manager = FoldingStateManager::new(
//!     vec![Reference::with_lines("hit", 20, 25)],
//!     100,
//!     FoldingConfig::default(),
//! );
//!
//! manager.subscribe(|change| {
//!     println!("{:?}: {} -> {}", change.kind, change.old_version, change.new_version);
//! });
//!
//! manager.expand(1, ExpandDirection::Down);
//! assert_eq!(manager.version(), 1);
//!
//! // Stale index: ignored, version unchanged.
//! manager.execute(FoldingCommand::expand_region(7, ExpandDirection::Up));
//! assert_eq!(manager.version(), 1);
//! ```

use crate::commands::{ExpandDirection, FoldingCommand};
use crate::config::FoldingConfig;
use crate::error::FoldingError;
use crate::folding::FoldingState;
use crate::reference::Reference;

/// Kind of folding transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldingChangeKind {
    /// A new reference set was applied.
    ReferencesUpdated,
    /// A hidden region was (partially) revealed.
    RegionExpanded,
    /// The document line count changed.
    DocumentResized,
}

impl FoldingChangeKind {
    fn for_command(command: &FoldingCommand) -> Self {
        match command {
            FoldingCommand::UpdateReferences { .. } => Self::ReferencesUpdated,
            FoldingCommand::ExpandRegion { .. } => Self::RegionExpanded,
            FoldingCommand::Resize { .. } => Self::DocumentResized,
        }
    }
}

/// Folding change record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldingChange {
    /// Change kind
    pub kind: FoldingChangeKind,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
}

/// Folding change callback function type
pub type FoldingChangeCallback = Box<dyn FnMut(&FoldingChange) + Send>;

/// Folding state manager
///
/// Wraps the current snapshot together with the [`FoldingConfig`] it was built with. Hosts
/// issue commands through [`execute()`](FoldingStateManager::execute) and read the result back
/// through [`state()`](FoldingStateManager::state) or the returned reference.
pub struct FoldingStateManager {
    /// Current snapshot
    state: FoldingState,
    /// Padding, expand step, resize policy
    config: FoldingConfig,
    /// State version number
    state_version: u64,
    /// State change callback list
    callbacks: Vec<FoldingChangeCallback>,
}

impl FoldingStateManager {
    /// Create a manager for a document of `total_lines` lines.
    ///
    /// `config` is used as is. With an `expand_step` of zero every
    /// [`expand()`](Self::expand) is a no-op; use [`try_new()`](Self::try_new) for configs
    /// that come from outside.
    pub fn new(references: Vec<Reference>, total_lines: usize, config: FoldingConfig) -> Self {
        Self {
            state: FoldingState::new(references, total_lines, config.padding),
            config,
            state_version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create a manager after checking `config` with [`FoldingConfig::validate`].
    pub fn try_new(
        references: Vec<Reference>,
        total_lines: usize,
        config: FoldingConfig,
    ) -> Result<Self, FoldingError> {
        config.validate()?;
        Ok(Self::new(references, total_lines, config))
    }

    /// Create a manager with no references (the whole document is visible).
    pub fn empty(total_lines: usize, config: FoldingConfig) -> Self {
        Self::new(Vec::new(), total_lines, config)
    }

    /// Current snapshot.
    pub fn state(&self) -> &FoldingState {
        &self.state
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> FoldingState {
        self.state.clone()
    }

    /// Configuration in use.
    pub fn config(&self) -> &FoldingConfig {
        &self.config
    }

    /// Get current version number
    pub fn version(&self) -> u64 {
        self.state_version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.state_version > version
    }

    /// Apply a command and notify subscribers if the snapshot changed.
    pub fn execute(&mut self, command: FoldingCommand) -> &FoldingState {
        let next = self
            .state
            .apply_with_policy(&command, self.config.resize_policy);

        if next == self.state {
            tracing::trace!(?command, version = self.state_version, "folding command was a no-op");
            return &self.state;
        }

        let kind = FoldingChangeKind::for_command(&command);
        self.state = next;
        let old_version = self.state_version;
        self.state_version += 1;
        tracing::debug!(
            ?kind,
            version = self.state_version,
            visible = self.state.visible_ranges().len(),
            hidden = self.state.hidden_regions().len(),
            "folding state updated"
        );

        let change = FoldingChange {
            kind,
            old_version,
            new_version: self.state_version,
        };
        self.notify_callbacks(&change);
        &self.state
    }

    /// Apply commands in order.
    pub fn execute_batch<I>(&mut self, commands: I) -> &FoldingState
    where
        I: IntoIterator<Item = FoldingCommand>,
    {
        for command in commands {
            self.execute(command);
        }
        &self.state
    }

    /// Replace the references.
    pub fn update_references(&mut self, references: Vec<Reference>) -> &FoldingState {
        self.execute(FoldingCommand::update_references(references))
    }

    /// Expand a hidden region by the configured step.
    pub fn expand(&mut self, region_index: usize, direction: ExpandDirection) -> &FoldingState {
        let step = self.config.expand_step;
        self.execute(FoldingCommand::expand_region_by(region_index, direction, step))
    }

    /// Record a new document line count.
    pub fn resize(&mut self, total_lines: usize) -> &FoldingState {
        self.execute(FoldingCommand::resize(total_lines))
    }

    /// Subscribe to state change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&FoldingChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Notify all callbacks
    fn notify_callbacks(&mut self, change: &FoldingChange) {
        for callback in &mut self.callbacks {
            callback(change);
        }
    }
}
