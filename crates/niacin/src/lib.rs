//! # niacin
//!
//! Data augmentation for text and time series in Rust - a feature-parity
//! port of Python niacin.
//!
//! niacin-rs is a collection of independent, probabilistic transforms for
//! text strings and numeric time series, composed into repeatable pipelines
//! that synthetically diversify training data:
//!
//! - **Sampling**: [`RandAugment`] draws a random, non-repeating subset of
//!   a transform pool, each selection bound to a normalized magnitude
//! - **Text**: character, word, and sentence transforms (leetspeak, typos,
//!   synonym substitution, article removal, applause, ...)
//! - **Time series**: time-domain and frequency-domain perturbations
//!   (trends, spikes, warps, phase shifts, spectral noise)
//!
//! ## Quick Start
//!
//! ```rust
//! use niacin::prelude::*;
//!
//! // Build a pool of transforms. Each is a pure function of its inputs
//! // and the RNG handed to it.
//! let pool = vec![
//!     transform(|s: String, p, rng: &mut dyn rand::RngCore| {
//!         niacin::text::char::add_whitespace(&s, p, rng)
//!     }),
//!     transform(|s: String, p, rng: &mut dyn rand::RngCore| {
//!         niacin::text::word::remove_articles(&s, p, rng)
//!     }),
//! ];
//!
//! // Draw one transform per sample at magnitude 20.
//! let config = RandAugmentConfig { m: 20, seed: Some(42), ..Default::default() };
//! let mut sampler = RandAugment::from_config(pool, config)?;
//!
//! let mut rng = Seed::new(0).to_rng();
//! let mut text = String::from("The man has a brown dog");
//! for augmentation in sampler.sample() {
//!     text = augmentation.apply(text, &mut rng);
//! }
//! # Ok::<(), AugmentError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use niacin_augment as augment;
pub use niacin_core as core;
pub use niacin_text as text;
pub use niacin_timeseries as timeseries;

pub use niacin_augment::{Augmentation, AugmentError, RandAugment, RandAugmentConfig};
pub use niacin_core::{transform, CoreError, Seed, TransformFn, Translator};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use niacin::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use niacin_core::{transform, CoreError, Result, Seed, TransformFn, Translator};

    // Sampling
    pub use niacin_augment::{Augmentation, AugmentError, RandAugment, RandAugmentConfig};

    // The substitution engine
    pub use niacin_text::sub::{substitute_chars, substitute_words, swap_adjacent, SubstitutionTable};
}
