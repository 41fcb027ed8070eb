//! The transform function contract shared by every augmentation pool.

use std::sync::Arc;

use rand::RngCore;

use crate::error::Result;

/// A pool-ready transform: a pure function from a value, a probability in
/// `[0, 1]`, and an entropy source to a new value of the same type.
///
/// Transforms hold no shared mutable state; all randomness flows through the
/// `rng` argument, so a transform applied twice with identically-seeded
/// generators produces identical output. Transforms that take additional
/// parameters (a magnitude, an injected resource) are pre-bound by closure
/// capture before entering a pool.
///
/// # Example
///
/// ```rust
/// use niacin_core::{transform, TransformFn};
///
/// let reverse: TransformFn<String> =
///     transform(|s: String, _p, _rng: &mut dyn rand::RngCore| s.chars().rev().collect());
/// ```
pub type TransformFn<T> = Arc<dyn Fn(T, f32, &mut dyn RngCore) -> T + Send + Sync>;

/// Wrap a closure or function as a pool-ready [`TransformFn`].
pub fn transform<T, F>(fun: F) -> TransformFn<T>
where
    F: Fn(T, f32, &mut dyn RngCore) -> T + Send + Sync + 'static,
{
    Arc::new(fun)
}

/// A handle to a translation resource used by backtranslation transforms.
///
/// Translation models are heavyweight, so the model's lifecycle belongs to
/// the caller: construct it once, then pass it by reference into each
/// transform invocation. Nothing in this workspace owns a process-wide
/// model instance.
pub trait Translator: Send + Sync {
    /// Translate the string into another language and back.
    fn backtranslate(&self, string: &str) -> Result<String>;
}
