//! # niacin_timeseries
//!
//! Probabilistic transforms for enriching numeric time-series data.
//!
//! This crate provides:
//! - [`time`] for time-domain transforms (trends, spikes, warps, crops,
//!   flips, reversals)
//! - [`freq`] for frequency-domain transforms (phase shifts, spectral noise,
//!   component removal)
//!
//! Every transform is a pure function `(series, p, m, rng) -> series`: it
//! draws entropy only from the `rng` argument, preserves the input length,
//! and leaves the input untouched when its Bernoulli draws fail. `m` is a
//! magnitude expressed relative to the series (its standard deviation, its
//! length, or its spectral peak, depending on the transform).
//!
//! ## Example
//!
//! ```rust
//! use niacin_core::Seed;
//! use niacin_timeseries::time::add_spike;
//!
//! let x: Vec<f32> = (0..100).map(|i| (i as f32 * 0.1).sin()).collect();
//! let mut rng = Seed::new(42).to_rng();
//! let noisy = add_spike(&x, 0.1, 1.0, &mut rng);
//! assert_eq!(noisy.len(), x.len());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod freq;
pub mod time;
