use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced at the fallible edges of the folding engine (parsing and configuration).
///
/// State transitions themselves never fail: stale or malformed input degrades to a no-op.
pub enum FoldingError {
    #[error("invalid expand direction '{0}' (expected \"up\" or \"down\")")]
    /// An expand direction string was neither `up` nor `down`.
    InvalidDirection(String),

    #[error("invalid folding config: {0}")]
    /// A configuration value is out of range.
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    /// Configuration JSON could not be parsed.
    Config(#[from] serde_json::Error),
}
