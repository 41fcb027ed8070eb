//! Error types for niacin_augment.

use thiserror::Error;

/// Result type alias using [`AugmentError`].
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Errors that can occur when configuring a sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AugmentError {
    /// The requested sample size exceeds the transform pool.
    ///
    /// No sampling strategy can draw more distinct elements than the pool
    /// holds, so this is rejected at assignment time rather than clamped.
    #[error("sample size n={n} must be <= number of transforms={pool_size}")]
    SampleSize {
        /// The requested number of transforms per draw.
        n: usize,
        /// The number of transforms in the pool.
        pool_size: usize,
    },
}
