//! Sentence-granularity transforms for enriching text data.

use rand::{Rng, RngCore};

use niacin_core::{Result, Translator};

/// Replace whitespace with clapping emojis.
///
/// In online communities, replacing whitespace delimiters with the clapping
/// emoji (U+1F44F) is a way of indicating emphasis. This has the unintended
/// consequence of rendering word- or token-based models ineffective. The
/// whole sentence is converted with probability `p`; every whitespace run,
/// leading and trailing runs included, collapses to a single emoji.
pub fn add_applause(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    if rng.gen::<f32>() >= p {
        return string.to_owned();
    }
    let mut out = String::with_capacity(string.len());
    let mut in_whitespace = false;
    for c in string.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('\u{1F44F}');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Add random bytes to the end of a sentence.
///
/// A common spam disguising technique includes appending random byte
/// sequences to the end of text data. This can be effective against
/// character-based models, or loglinear models which include total length
/// and character distribution as features. The bytes are decoded lossily as
/// UTF-8, so the number of appended characters is typically smaller than
/// `length`.
pub fn add_bytes(string: &str, p: f32, length: usize, rng: &mut dyn RngCore) -> String {
    if rng.gen::<f32>() >= p {
        return string.to_owned();
    }
    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    let mut out = string.to_owned();
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Add love to the end of a sentence.
///
/// Appends `" love"` with probability `p`. Including a word with large
/// positive sentiment can be used to confuse sentiment-based filters for
/// input data.
pub fn add_love(string: &str, p: f32, rng: &mut dyn RngCore) -> String {
    if rng.gen::<f32>() < p {
        let mut out = string.to_owned();
        out.push_str(" love");
        out
    } else {
        string.to_owned()
    }
}

/// Translate a sentence into another language and back.
///
/// Round-tripping through another language tends to generate sequences with
/// similar semantic content but different word choices, a popular way to
/// augment small datasets in high-resource languages. The translation
/// model is a heavyweight resource, so it is injected as a [`Translator`]
/// handle whose lifecycle belongs to the caller; model failures propagate
/// as errors. Empty input is returned unchanged without consulting the
/// model.
pub fn add_backtranslation(
    string: &str,
    p: f32,
    model: &dyn Translator,
    rng: &mut dyn RngCore,
) -> Result<String> {
    if string.is_empty() {
        return Ok(String::new());
    }
    if rng.gen::<f32>() < p {
        return model.backtranslate(string);
    }
    Ok(string.to_owned())
}
