//! Packaged lookup tables.
//!
//! The tables ship inside the crate (`data/*.json`) and are parsed once, on
//! first use. Parsing cannot fail at runtime for callers: the inputs are
//! fixed at compile time and covered by tests, so the initializers treat a
//! malformed table as a build defect rather than a recoverable error.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::sub::SubstitutionTable;

/// Word -> candidate replacements.
pub type WordList = HashMap<String, Vec<String>>;

static CONTRACTIONS: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/contractions.json"))
        .expect("contractions.json is malformed")
});

static EXPANSIONS: LazyLock<SubstitutionTable> = LazyLock::new(|| CONTRACTIONS.invert());

static NEIGHBORS: LazyLock<HashMap<char, Vec<char>>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/neighbors.json"))
        .expect("neighbors.json is malformed")
});

static MISSPELLINGS: LazyLock<WordList> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/misspellings.json"))
        .expect("misspellings.json is malformed")
});

static SYNONYMS: LazyLock<WordList> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/synonyms.json"))
        .expect("synonyms.json is malformed")
});

static HYPERNYMS: LazyLock<WordList> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/hypernyms.json"))
        .expect("hypernyms.json is malformed")
});

static HYPONYMS: LazyLock<WordList> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/hyponyms.json"))
        .expect("hyponyms.json is malformed")
});

/// Articles removed by `word::remove_articles`.
pub const ARTICLES: &[&str] = &[
    "the", "a", "an", "these", "those", "his", "hers", "their",
];

static ARTICLE_REMOVALS: LazyLock<SubstitutionTable> =
    LazyLock::new(|| SubstitutionTable::from_pairs(ARTICLES.iter().map(|article| (*article, ""))));

/// Common word pairs and their contractions, ordered so that longer,
/// overlapping patterns come first.
#[must_use]
pub fn contractions() -> &'static SubstitutionTable {
    &CONTRACTIONS
}

/// The inverse of [`contractions`]: contraction -> expanded form.
#[must_use]
pub fn expansions() -> &'static SubstitutionTable {
    &EXPANSIONS
}

/// QWERTY adjacency: which keys sit next to each character.
#[must_use]
pub fn qwerty_neighbors(c: char) -> Option<&'static [char]> {
    NEIGHBORS.get(&c).map(Vec::as_slice)
}

/// Common misspellings from the Wikipedia spelling-correction corpus.
#[must_use]
pub fn misspellings() -> &'static WordList {
    &MISSPELLINGS
}

/// Words with a close meaning.
#[must_use]
pub fn synonyms() -> &'static WordList {
    &SYNONYMS
}

/// Words naming a more general category.
#[must_use]
pub fn hypernyms() -> &'static WordList {
    &HYPERNYMS
}

/// Words naming a more specific category.
#[must_use]
pub fn hyponyms() -> &'static WordList {
    &HYPONYMS
}

/// The article-removal table used by `word::remove_articles`.
#[must_use]
pub fn article_removals() -> &'static SubstitutionTable {
    &ARTICLE_REMOVALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_parse() {
        assert!(!contractions().is_empty());
        assert!(!expansions().is_empty());
        assert!(!misspellings().is_empty());
        assert!(!synonyms().is_empty());
        assert!(!hypernyms().is_empty());
        assert!(!hyponyms().is_empty());
        assert_eq!(article_removals().len(), ARTICLES.len());
        assert!(qwerty_neighbors('q').is_some());
    }

    #[test]
    fn test_no_replacement_list_is_empty() {
        for table in [misspellings(), synonyms(), hypernyms(), hyponyms()] {
            for (word, options) in table {
                assert!(!options.is_empty(), "{word} has no replacements");
            }
        }
    }

    #[test]
    fn test_neighbors_do_not_contain_themselves() {
        for (c, neighbors) in NEIGHBORS.iter() {
            assert!(!neighbors.contains(c), "{c} is its own neighbor");
        }
    }

    #[test]
    fn test_contractions_are_invertible() {
        // expansion keys must be unique or the inverse table would shadow
        let mut seen = std::collections::HashSet::new();
        for (_, contraction) in contractions().iter() {
            assert!(seen.insert(contraction), "duplicate contraction {contraction}");
        }
    }
}
