//! # niacin_augment
//!
//! RandAugment-style transform sampling for niacin-rs.
//!
//! This crate provides:
//! - [`RandAugment`] for drawing a random, non-repeating subset of a
//!   transform pool, each selection bound to a normalized magnitude
//! - [`Augmentation`], a drawn transform bound to its probability
//! - [`RandAugmentConfig`] for serializable sampler configuration
//!
//! ## Example
//!
//! ```rust
//! use niacin_augment::{RandAugment, RandAugmentConfig};
//! use niacin_core::{transform, Seed};
//!
//! let pool = vec![
//!     transform(|s: String, _p, _rng: &mut dyn rand::RngCore| s.to_uppercase()),
//!     transform(|s: String, _p, _rng: &mut dyn rand::RngCore| s.chars().rev().collect()),
//! ];
//!
//! let config = RandAugmentConfig { n: 1, ..Default::default() };
//! let mut sampler = RandAugment::from_config(pool, config)?;
//! let mut rng = Seed::new(0).to_rng();
//!
//! for augmentation in sampler.sample() {
//!     let out = augmentation.apply(String::from("hello"), &mut rng);
//!     assert!(out == "HELLO" || out == "olleh");
//! }
//! # Ok::<(), niacin_augment::AugmentError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod randaugment;

pub use error::{AugmentError, Result};
pub use randaugment::{Augmentation, RandAugment, RandAugmentConfig};
