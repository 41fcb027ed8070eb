//! # niacin_text
//!
//! Probabilistic transforms for enriching text data.
//!
//! This crate provides:
//! - [`sub`], the pattern-substitution engine every character- and
//!   word-level transform is built on
//! - [`char`](mod@char) for character-granularity transforms (leetspeak,
//!   typos, whitespace noise, adjacent swaps)
//! - [`word`] for word-granularity transforms (synonyms, misspellings,
//!   article removal)
//! - [`sentence`] for whole-sentence transforms (applause, random bytes,
//!   backtranslation via an injected [`Translator`] handle)
//! - [`lexicon`] for the packaged lookup tables driving the above
//!
//! Every transform is a pure function `(text, p, rng) -> text`: it draws
//! entropy only from the `rng` argument and touches no shared state, so two
//! invocations with identically-seeded generators agree exactly.
//!
//! ## Example
//!
//! ```rust
//! use niacin_core::Seed;
//! use niacin_text::char::add_leet;
//!
//! let mut rng = Seed::new(42).to_rng();
//! assert_eq!(add_leet("you what mate?", 1.0, &mut rng), "u w@ m8?");
//! ```
//!
//! [`Translator`]: niacin_core::Translator

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod char;
pub mod lexicon;
pub mod sentence;
pub mod sub;
pub mod word;
