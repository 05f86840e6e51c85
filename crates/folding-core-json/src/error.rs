use folding_core::FoldingError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while decoding host payloads or encoding snapshots.
pub enum BridgeError {
    #[error("JSON error: {0}")]
    /// A payload was not valid JSON for the expected shape.
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// The folding engine rejected a configuration value.
    Folding(#[from] FoldingError),
}
