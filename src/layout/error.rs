//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The tree has no root
    #[error("cannot lay out an empty tree")]
    EmptyTree,

    /// The text measurer cannot produce sizes
    #[error("text measurer is unavailable: {reason}")]
    MeasurerUnavailable { reason: String },

    /// A configuration value is out of range
    #[error("invalid layout configuration '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl LayoutError {
    /// Create a measurer unavailable error
    pub fn measurer_unavailable(reason: impl Into<String>) -> Self {
        Self::MeasurerUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
