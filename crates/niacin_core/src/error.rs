//! Error types for niacin_core.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur in niacin_core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A translation resource handle failed to produce output.
    #[error("translation error: {0}")]
    Translation(String),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
