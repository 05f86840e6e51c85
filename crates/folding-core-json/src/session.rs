use crate::error::BridgeError;
use folding_core::{
    FoldPlaceholder, FoldingCommand, FoldingConfig, FoldingState, FoldingStateManager, Reference,
};
use serde::{Deserialize, Serialize};

/// A batch of changes delivered by the host in one go.
///
/// A line count change (if any) is applied before the effects, which then run in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// New document line count, when the document changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lines: Option<usize>,
    /// Commands to apply after the line count change.
    #[serde(default)]
    pub effects: Vec<FoldingCommand>,
}

/// Serialized view of the session state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    /// Manager version the state belongs to.
    pub version: u64,
    /// The folding state itself.
    pub state: &'a FoldingState,
}

/// One document view driven through JSON payloads.
pub struct FoldingSession {
    manager: FoldingStateManager,
}

impl FoldingSession {
    /// Create a session from already decoded references.
    ///
    /// `config` is trusted as is; [`open()`](Self::open) validates it first.
    pub fn new(references: Vec<Reference>, total_lines: usize, config: FoldingConfig) -> Self {
        Self {
            manager: FoldingStateManager::new(references, total_lines, config),
        }
    }

    /// Create a session from a JSON array of references.
    pub fn open(
        references_json: &str,
        total_lines: usize,
        config: FoldingConfig,
    ) -> Result<Self, BridgeError> {
        let references: Vec<Reference> = serde_json::from_str(references_json)?;
        let manager = FoldingStateManager::try_new(references, total_lines, config)?;
        tracing::debug!(
            references = manager.state().references().len(),
            total_lines,
            "opening folding session"
        );
        Ok(Self { manager })
    }

    /// Create a session from a JSON config object and a JSON array of references.
    pub fn from_config_json(
        config_json: &str,
        references_json: &str,
        total_lines: usize,
    ) -> Result<Self, BridgeError> {
        let config = FoldingConfig::from_json(config_json)?;
        Self::open(references_json, total_lines, config)
    }

    /// The underlying manager.
    pub fn manager(&self) -> &FoldingStateManager {
        &self.manager
    }

    /// Mutable access to the underlying manager (e.g. to subscribe to changes).
    pub fn manager_mut(&mut self) -> &mut FoldingStateManager {
        &mut self.manager
    }

    /// Current state version.
    pub fn version(&self) -> u64 {
        self.manager.version()
    }

    /// Apply a decoded transaction.
    pub fn apply_transaction(&mut self, transaction: Transaction) -> &FoldingState {
        if let Some(total_lines) = transaction.total_lines {
            self.manager.resize(total_lines);
        }
        self.manager.execute_batch(transaction.effects)
    }

    /// Decode a transaction, apply it, and return the serialized snapshot.
    ///
    /// A malformed payload is rejected as a whole: no part of it is applied.
    pub fn dispatch(&mut self, transaction_json: &str) -> Result<String, BridgeError> {
        let transaction: Transaction = serde_json::from_str(transaction_json)?;
        tracing::debug!(
            effects = transaction.effects.len(),
            resize = ?transaction.total_lines,
            "dispatching folding transaction"
        );
        self.apply_transaction(transaction);
        self.snapshot_json()
    }

    /// Serialize the current state together with its version.
    pub fn snapshot_json(&self) -> Result<String, BridgeError> {
        let snapshot = Snapshot {
            version: self.manager.version(),
            state: self.manager.state(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Serialize the placeholder rows of the current state.
    pub fn placeholders_json(&self) -> Result<String, BridgeError> {
        let placeholders: Vec<FoldPlaceholder> = self.manager.state().placeholders();
        Ok(serde_json::to_string(&placeholders)?)
    }
}
