//! Word-granularity transforms for enriching text data.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::lexicon::{self, WordList};
use crate::sub;

/// Replace whole tokens from a word list, choosing uniformly among the
/// candidate replacements.
fn replace_from_list(string: &str, p: f32, list: &WordList, rng: &mut dyn RngCore) -> String {
    let words: Vec<&str> = string
        .split_whitespace()
        .map(|word| match list.get(word) {
            Some(options) if rng.gen::<f32>() < p => options
                .choose(rng)
                .map_or(word, String::as_str),
            _ => word,
        })
        .collect();
    words.join(" ")
}

/// Replace a word with a higher-level category.
///
/// A common negative sampling technique involves replacing words in a
/// sentence with a word that has the same general meaning, but is too
/// general for the context, e.g.:
///
/// "all dogs go to heaven" -> "all quadrupeds go to place"
pub fn add_hypernyms(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    replace_from_list(string, p, lexicon::hypernyms(), rng)
}

/// Replace a word with a lower-level category.
///
/// The mirror of [`add_hypernyms`]: the replacement has the same general
/// meaning but is too specific for the context, e.g.:
///
/// "all dogs go to heaven" -> "all Australian shepherds go to heaven"
pub fn add_hyponyms(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    replace_from_list(string, p, lexicon::hyponyms(), rng)
}

/// Replace words with common misspellings.
///
/// Replaces a word with a common way that word is misspelled, given one or
/// more known misspellings taken from the Wikipedia spelling correction
/// corpus. For words with more than one common misspelling, one is chosen
/// uniformly at random.
pub fn add_misspelling(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    replace_from_list(string, p, lexicon::misspellings(), rng)
}

/// Wrap individual words in triple parentheses.
///
/// Adds parentheses before and after a word, e.g. `(((term)))`. This is a
/// common tactic for disrupting tokenizers and other kinds of word-based
/// models.
pub fn add_parens(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let words: Vec<String> = string
        .split_whitespace()
        .map(|word| {
            if rng.gen::<f32>() < p {
                format!("((({word})))")
            } else {
                word.to_owned()
            }
        })
        .collect();
    words.join(" ")
}

/// Replace a word with one that has a close meaning.
///
/// "all dogs go to heaven" -> "all domestic dog depart to heaven"
pub fn add_synonyms(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    replace_from_list(string, p, lexicon::synonyms(), rng)
}

/// Remove articles from text data.
///
/// Matches and removes the, a, an, these, those, his, hers, and their,
/// each with probability `p`.
pub fn remove_articles(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    sub::substitute_words(string, p, lexicon::article_removals(), rng)
}

/// Swap adjacent words.
///
/// With probability `p`, swap two adjacent words in a string. This
/// preserves the vocabulary of the input text while changing token order,
/// which in theory challenges recursive models more than ones that rely on
/// lexical distributions. No word is swapped more than once.
pub fn swap_words(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    let mut words: Vec<&str> = string.split_whitespace().collect();
    sub::swap_adjacent(&mut words, p, rng);
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use niacin_core::Seed;

    fn rng() -> rand_chacha::ChaCha8Rng {
        Seed::new(42).to_rng()
    }

    #[test]
    fn test_remove_articles() {
        let cases = [
            ("", 1.0, ""),
            ("The man has a brown dog", 0.0, "The man has a brown dog"),
            ("The man has a brown dog", 1.0, "man has brown dog"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(remove_articles(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_remove_articles_is_idempotent_once_empty() {
        let mut r = rng();
        let removed = remove_articles("The man has a brown dog", 1.0, &mut r);
        assert_eq!(remove_articles(&removed, 1.0, &mut r), removed);
    }

    #[test]
    fn test_add_misspelling() {
        let cases = [
            ("", 1.0, ""),
            (
                "politician persuades dramatic rhythms",
                0.0,
                "politician persuades dramatic rhythms",
            ),
            (
                "politician persuades dramatic rhythms",
                1.0,
                "politican pursuades dramtic rythyms",
            ),
        ];
        for (string, p, expected) in cases {
            assert_eq!(add_misspelling(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_add_hyponyms() {
        let cases = [
            ("", 1.0, ""),
            ("It was a feud", 0.0, "It was a feud"),
            ("It was a feud", 1.0, "It was a vendetta"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(add_hyponyms(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_add_hypernyms() {
        let cases = [
            ("", 1.0, ""),
            ("It was a sore", 0.0, "It was a sore"),
            ("It was a sore", 1.0, "It was a infection"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(add_hypernyms(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_add_synonyms() {
        let cases = [
            ("", 1.0, ""),
            ("It is computable", 0.0, "It is computable"),
            ("It is computable", 1.0, "It is estimable"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(add_synonyms(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_add_parens() {
        let cases = [
            ("", 1.0, ""),
            ("dog", 0.0, "dog"),
            ("dog", 1.0, "(((dog)))"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(add_parens(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_swap_words() {
        let cases = [
            ("", 1.0, ""),
            ("The man has a brown dog", 0.0, "The man has a brown dog"),
            ("The man has a brown dog", 1.0, "man The a has dog brown"),
        ];
        for (string, p, expected) in cases {
            assert_eq!(swap_words(string, p, &mut rng()), expected);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "Feud" is not in the table; capitalized words miss silently
        assert_eq!(add_hyponyms("Feud", 1.0, &mut rng()), "Feud");
    }
}
