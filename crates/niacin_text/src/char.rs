//! Character-granularity transforms for enriching text data.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::lexicon;
use crate::sub::{self, SubstitutionTable};

/// Visually or aurally similar character-group replacements, roughly from
/// largest to smallest so that longer groups take priority.
static LEET: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::from_pairs([
        ("anned", "&"),
        ("and", "&"),
        ("what", "wat"),
        ("are", "r"),
        ("ate", "8"),
        ("at", "@"),
        ("one", "1"),
        ("you", "u"),
        ("t", "7"),
        ("o", "0"),
        ("e", "3"),
        ("l", "1"),
    ])
});

static PUNCTUATION: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::from_pairs(
        r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##
            .chars()
            .map(|c| (c.to_string(), String::new())),
    )
});

static SPACES: LazyLock<SubstitutionTable> =
    LazyLock::new(|| SubstitutionTable::from_pairs([(" ", "")]));

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replace characters with QWERTY neighbors.
///
/// One source of typographic mistakes comes from pressing a nearby key on a
/// keyboard (or on a touchscreen). With probability `p`, replace each
/// character with one chosen at random from the set of its neighbors.
pub fn add_fat_thumbs(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    string
        .chars()
        .map(|c| match lexicon::qwerty_neighbors(c) {
            Some(neighbors) if rng.gen::<f32>() < p => {
                neighbors.choose(rng).copied().unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Insert individual characters with probability `p`.
///
/// Inserted characters are chosen at random from the ASCII alphabet (both
/// cases). The scan runs right-to-left over the existing positions so that
/// insertions never shift positions still to be visited.
pub fn add_characters(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let mut chars: Vec<char> = string.chars().collect();
    for index in (0..chars.len()).rev() {
        if rng.gen::<f32>() < p {
            let letter = *ASCII_LETTERS.choose(rng).unwrap_or(&b'a') as char;
            chars.insert(index, letter);
        }
    }
    chars.into_iter().collect()
}

/// Replace common word pairs with their contraction.
///
/// This is done even when the contraction introduces ambiguity, as this is
/// seen as preserving the semantics.
pub fn add_contractions(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_chars(string, p, lexicon::contractions(), rng)
}

/// Expand a contraction into individual tokens.
pub fn remove_contractions(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_chars(string, p, lexicon::expansions(), rng)
}

/// Replace character groups with visually or aurally similar ones.
///
/// Character groups are searched in priority (roughly from largest to
/// smallest) and replaced with probability `p`, e.g.:
///
/// | "Hello, you are banned"
/// | "Hello, you are b&"
/// | "Hello, you r b&"
/// | "Hello, u r b&"
/// | "H3110, u r b&"
pub fn add_leet(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_chars(string, p, &LEET, rng)
}

/// Add a space character with probability `p`.
///
/// Extraneous whitespace, especially in the middle of an important word,
/// can reduce the effectiveness of models which depend on word tokenizers
/// as part of the data pipeline. Every gap position, including both ends of
/// the string, gets an independent draw; the scan runs right-to-left.
pub fn add_whitespace(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let mut chars: Vec<char> = string.chars().collect();
    for index in (0..=chars.len()).rev() {
        if rng.gen::<f32>() < p {
            chars.insert(index, ' ');
        }
    }
    chars.into_iter().collect()
}

/// Remove individual characters with probability `p`.
pub fn remove_characters(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let mut chars: Vec<char> = string.chars().collect();
    for index in (0..chars.len()).rev() {
        if rng.gen::<f32>() < p {
            chars.remove(index);
        }
    }
    chars.into_iter().collect()
}

/// Remove punctuation with probability `p`.
///
/// When punctuation occurs in the middle of a word (e.g. indicating
/// possessiveness), its removal may change the semantics of the string.
pub fn remove_punctuation(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_chars(string, p, &PUNCTUATION, rng)
}

/// Remove space characters with probability `p`.
///
/// Selective removal of whitespace can reduce the effectiveness of
/// word-based models, or those which depend on word tokenizers as part of
/// the data pipeline.
pub fn remove_whitespace(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_chars(string, p, &SPACES, rng)
}

/// Swap adjacent characters.
///
/// With probability `p`, swap two adjacent characters in a string. No
/// character gets swapped more than once, so none ends up in a location
/// that is not adjacent to its starting position.
pub fn swap_chars(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let mut chars: Vec<char> = string.chars().collect();
    sub::swap_adjacent(&mut chars, p, rng);
    chars.into_iter().collect()
}
