//! # niacin_core
//!
//! Core types for niacin-rs data augmentation.
//!
//! This crate provides:
//! - [`Seed`] for deterministic random number generation
//! - [`TransformFn`], the contract every pool transform satisfies
//! - [`Translator`], the injected handle for backtranslation resources
//! - Error types and common utilities
//!
//! ## Transform Contract
//!
//! A transform is a pure function `(value, p, rng) -> value` where `p` is a
//! probability in `[0, 1]` and `rng` is the caller-supplied entropy source.
//! Transforms that take extra parameters (a magnitude, a resource handle)
//! are pre-bound by closure capture before entering a pool.
//!
//! ## Example
//!
//! ```rust
//! use niacin_core::{transform, Seed};
//!
//! let seed = Seed::new(42);
//! let mut rng = seed.to_rng();
//!
//! let shout = transform(|s: String, _p, _rng: &mut dyn rand::RngCore| s.to_uppercase());
//! assert_eq!((*shout)(String::from("hi"), 1.0, &mut rng), "HI");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod seed;
mod transform;

pub use error::{CoreError, Result};
pub use seed::Seed;
pub use transform::{transform, TransformFn, Translator};
