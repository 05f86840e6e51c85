//! Folding configuration.
//!
//! Hosts usually construct a [`FoldingConfig`] once per view, either in code through the
//! `with_*` setters or from a JSON settings blob:
//!
//! ```rust
//! use folding_core::{FoldingConfig, ResizePolicy};
//!
//! let config = FoldingConfig::from_json(r#"{ "padding": 5, "resizePolicy": "preserveExpansions" }"#).unwrap();
//! assert_eq!(config.padding, 5);
//! assert_eq!(config.expand_step, 20);
//! assert_eq!(config.resize_policy, ResizePolicy::PreserveExpansions);
//! ```

use crate::error::FoldingError;
use crate::visible::DEFAULT_PADDING;
use serde::{Deserialize, Serialize};

/// Default number of lines revealed by one expand action.
pub const DEFAULT_EXPAND_STEP: usize = 20;

/// What happens to manually expanded ranges when the document line count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizePolicy {
    /// Re-derive visible ranges strictly from the references; manual expansions are dropped.
    #[default]
    Rederive,
    /// Re-derive from the references, then merge in the previous visible ranges clamped to the
    /// new line count, so manual expansions survive the edit.
    PreserveExpansions,
}

/// Folding configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoldingConfig {
    /// Context lines added above and below every reference.
    pub padding: usize,
    /// Lines revealed per expand action when the caller does not specify a count.
    pub expand_step: usize,
    /// Resize handling.
    pub resize_policy: ResizePolicy,
}

impl Default for FoldingConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            expand_step: DEFAULT_EXPAND_STEP,
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl FoldingConfig {
    /// Override the padding.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Override the expand step.
    pub fn with_expand_step(mut self, expand_step: usize) -> Self {
        self.expand_step = expand_step;
        self
    }

    /// Override the resize policy.
    pub fn with_resize_policy(mut self, resize_policy: ResizePolicy) -> Self {
        self.resize_policy = resize_policy;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), FoldingError> {
        if self.expand_step == 0 {
            return Err(FoldingError::InvalidConfig(
                "expandStep must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FoldingError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
