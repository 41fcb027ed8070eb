//! The pattern-substitution engine.
//!
//! Character- and word-granularity transforms are all built on the same
//! scanning primitives:
//!
//! - [`substitute_chars`] for substring replacement with a left-to-right
//!   cursor that never revisits an occurrence, even when replacements
//!   change the string length
//! - [`substitute_words`] for whole-token replacement with removal semantics
//! - [`swap_adjacent`] for non-overlapping adjacent-pair swaps
//!
//! Transforms that insert or delete single characters at independently
//! sampled positions share one more invariant: the scan runs right-to-left,
//! so a length change at a higher index cannot shift positions that have
//! not been visited yet. A left-to-right scan would bias the effective
//! per-character probability.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// An ordered pattern -> replacement table.
///
/// Order is semantically significant: patterns are applied in table order,
/// so when two patterns overlap (e.g. `"anned"` and `"and"`), the earlier
/// entry wins the overlapping span: a later pattern never re-matches text
/// already consumed by an earlier replacement. The table is therefore a
/// sequence of pairs, never a hash map.
///
/// # Example
///
/// ```rust
/// use niacin_text::sub::SubstitutionTable;
///
/// let table = SubstitutionTable::from_pairs([("one", "1"), ("o", "0")]);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionTable(Vec<(String, String)>);

impl SubstitutionTable {
    /// Build a table from `(pattern, replacement)` pairs, preserving order.
    pub fn from_pairs<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(pattern, sub)| (pattern.into(), sub.into()))
                .collect(),
        )
    }

    /// The inverse table: each `(pattern, replacement)` becomes
    /// `(replacement, pattern)`, in the same order.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(pattern, sub)| (sub.clone(), pattern.clone()))
                .collect(),
        )
    }

    /// Iterate `(pattern, replacement)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Find the next ASCII-case-insensitive occurrence of `needle` at or after
/// byte position `from`. Matched spans are byte-for-byte copies of valid
/// UTF-8, so the returned position always sits on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from + needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Replace substrings with a given probability.
///
/// For each `(pattern, replacement)` in table order, scan the string left
/// to right for case-insensitive occurrences of the pattern (the
/// replacement is inserted verbatim). Each occurrence gets one independent
/// Bernoulli draw: on success the span is rewritten and the cursor jumps
/// past the replacement, on failure the cursor jumps past the unmodified
/// match. Either way no occurrence is visited twice and none is skipped,
/// regardless of how replacements change the string length. Later patterns
/// scan the already-rewritten string.
///
/// # Example
///
/// ```rust
/// use niacin_core::Seed;
/// use niacin_text::sub::{substitute_chars, SubstitutionTable};
///
/// let table = SubstitutionTable::from_pairs([("anned", "&"), ("and", "&")]);
/// let mut rng = Seed::new(0).to_rng();
/// assert_eq!(substitute_chars("banned band", 1.0, &table, &mut rng), "b& b&");
/// ```
pub fn substitute_chars(
    string: &str,
    probability: f32,
    table: &SubstitutionTable,
    rng: &mut dyn RngCore,
) -> String {
    let mut current = string.to_owned();
    for (pattern, sub) in table.iter() {
        let mut out = String::with_capacity(current.len());
        let mut cursor = 0;
        while let Some(index) = find_ignore_ascii_case(&current, pattern, cursor) {
            out.push_str(&current[cursor..index]);
            if rng.gen::<f32>() < probability {
                out.push_str(sub);
            } else {
                out.push_str(&current[index..index + pattern.len()]);
            }
            cursor = index + pattern.len();
        }
        out.push_str(&current[cursor..]);
        current = out;
    }
    current
}

/// Replace whole tokens with a given probability.
///
/// The string is split on whitespace. For each `(pattern, replacement)` in
/// table order, every token whose lowercased form equals the pattern is
/// replaced verbatim with one independent Bernoulli draw per token. Tokens
/// left empty are dropped and the result is rejoined with single spaces, so
/// mapping a pattern to `""` removes the word and collapses the gap.
pub fn substitute_words(
    string: &str,
    probability: f32,
    table: &SubstitutionTable,
    rng: &mut dyn RngCore,
) -> String {
    let mut words: Vec<String> = string.split_whitespace().map(str::to_owned).collect();
    for (pattern, sub) in table.iter() {
        for word in &mut words {
            if word.eq_ignore_ascii_case(pattern) && rng.gen::<f32>() < probability {
                *word = sub.to_owned();
            }
        }
    }
    words.retain(|word| !word.is_empty());
    words.join(" ")
}

/// Swap adjacent elements with a given probability.
///
/// The cursor scans left to right. A successful swap consumes both
/// participating positions (the cursor advances by 2), so no element is
/// swapped more than once and no element ends up farther than one position
/// from where it started. The probability is an independent per-adjacent-
/// pair trial, applied at most `len - 1` times.
pub fn swap_adjacent<T>(items: &mut [T], probability: f32, rng: &mut dyn RngCore) {
    let mut index = 0;
    while index + 1 < items.len() {
        if rng.gen::<f32>() < probability {
            items.swap(index, index + 1);
            index += 2;
        } else {
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niacin_core::Seed;

    fn rng() -> rand_chacha::ChaCha8Rng {
        Seed::new(42).to_rng()
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let table = SubstitutionTable::from_pairs([("a", "x"), (" ", "")]);
        let input = "a banana a day";
        assert_eq!(substitute_chars(input, 0.0, &table, &mut rng()), input);
        assert_eq!(substitute_words(input, 0.0, &table, &mut rng()), input);
    }

    #[test]
    fn test_earlier_pattern_wins_overlap() {
        let table = SubstitutionTable::from_pairs([("anned", "&"), ("and", "&")]);
        assert_eq!(substitute_chars("banned", 1.0, &table, &mut rng()), "b&");
        assert_eq!(substitute_chars("band", 1.0, &table, &mut rng()), "b&");
    }

    #[test]
    fn test_matching_is_case_insensitive_on_haystack_only() {
        let table = SubstitutionTable::from_pairs([("the", "Le")]);
        assert_eq!(
            substitute_chars("The theory", 1.0, &table, &mut rng()),
            "Le Leory"
        );
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        // "a" -> "aa" must double the string, not diverge
        let table = SubstitutionTable::from_pairs([("a", "aa")]);
        assert_eq!(substitute_chars("aaa", 1.0, &table, &mut rng()), "aaaaaa");
    }

    #[test]
    fn test_text_after_replacement_is_still_eligible() {
        let table = SubstitutionTable::from_pairs([("o", "0")]);
        assert_eq!(substitute_chars("ooo", 1.0, &table, &mut rng()), "000");
    }

    #[test]
    fn test_longer_replacement_does_not_shift_later_matches() {
        let table = SubstitutionTable::from_pairs([("e", "three")]);
        assert_eq!(
            substitute_chars("bee", 1.0, &table, &mut rng()),
            "bthreethree"
        );
    }

    #[test]
    fn test_substitute_chars_on_non_ascii_haystack() {
        let table = SubstitutionTable::from_pairs([("o", "0")]);
        assert_eq!(
            substitute_chars("héllo wörld", 1.0, &table, &mut rng()),
            "héll0 wörld"
        );
    }

    #[test]
    fn test_substitute_words_requires_whole_token() {
        let table = SubstitutionTable::from_pairs([("the", "a")]);
        assert_eq!(
            substitute_words("the theory", 1.0, &table, &mut rng()),
            "a theory"
        );
    }

    #[test]
    fn test_substitute_words_drops_emptied_tokens() {
        let table = SubstitutionTable::from_pairs([("a", "")]);
        assert_eq!(
            substitute_words("a man a plan", 1.0, &table, &mut rng()),
            "man plan"
        );
    }

    #[test]
    fn test_invert_round_trip() {
        let table = SubstitutionTable::from_pairs([("is not", "isn't")]);
        let inverse = table.invert();
        let mut r = rng();
        let contracted = substitute_chars("alice is not dead", 1.0, &table, &mut r);
        assert_eq!(contracted, "alice isn't dead");
        let expanded = substitute_chars(&contracted, 1.0, &inverse, &mut r);
        assert_eq!(expanded, "alice is not dead");
    }

    #[test]
    fn test_table_deserializes_from_pairs_in_order() {
        let table: SubstitutionTable =
            serde_json::from_str(r#"[["anned", "&"], ["and", "&"]]"#).unwrap();
        let patterns: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(patterns, ["anned", "and"]);
    }

    #[test]
    fn test_swap_adjacent_pairs_do_not_overlap() {
        let mut items = vec![1, 2, 3, 4, 5];
        swap_adjacent(&mut items, 1.0, &mut rng());
        assert_eq!(items, vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_swap_adjacent_zero_probability() {
        let mut items = vec![1, 2, 3];
        swap_adjacent(&mut items, 0.0, &mut rng());
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_inputs() {
        let table = SubstitutionTable::from_pairs([("a", "b")]);
        assert_eq!(substitute_chars("", 1.0, &table, &mut rng()), "");
        assert_eq!(substitute_words("", 1.0, &table, &mut rng()), "");
        swap_adjacent::<char>(&mut [], 1.0, &mut rng());
    }
}
