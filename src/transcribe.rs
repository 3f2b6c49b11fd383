// jd-dict Transcription
// Pinyin lookup and initial/final decomposition for input words

use crate::types::Syllable;
use pinyin::ToPinyin;

/// Recognized initials, two-letter forms first
///
/// Matching is longest-first so zh/ch/sh win over z/c/s. y and w count as
/// initials here: the decomposition is the surface one the key tables are
/// written against, not a strict phonological one.
const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Per-character phonetic transcription service
///
/// The pipeline consumes this trait rather than a concrete lookup, so the
/// reading source can be swapped (tests use fixed tables).
pub trait Transcriber {
    /// Ordered per-character syllables for a word
    ///
    /// `None` marks a character without a recognized reading; the word
    /// containing it is dropped by the pipeline.
    fn transcribe(&self, word: &str) -> Vec<Option<Syllable>>;
}

/// Transcriber backed by the `pinyin` crate
///
/// Uses the single canonical reading per character in tone-less plain
/// form, so multi-pronunciation characters never fork the encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTranscriber;

impl PinyinTranscriber {
    pub fn new() -> Self {
        Self
    }
}

impl Transcriber for PinyinTranscriber {
    fn transcribe(&self, word: &str) -> Vec<Option<Syllable>> {
        word.chars()
            .map(|ch| ch.to_pinyin().map(|p| split_syllable(p.plain())))
            .collect()
    }
}

/// Split a plain (tone-less) pinyin syllable into initial + rime
///
/// `ü` is normalized to `v` first (both spellings occur in the wild). A
/// match must leave a non-empty rime, so degenerate syllables like `n`
/// fall through to the zero-initial form.
///
/// # Example
///
/// ```
/// use jd_dict::transcribe::split_syllable;
/// use jd_dict::types::Syllable;
///
/// assert_eq!(split_syllable("zhong"), Syllable::new("zh", "ong"));
/// assert_eq!(split_syllable("er"), Syllable::new("", "er"));
/// ```
pub fn split_syllable(plain: &str) -> Syllable {
    let normalized = plain.replace('ü', "v");
    for initial in INITIALS {
        if normalized.len() > initial.len() && normalized.starts_with(initial) {
            return Syllable::new(initial, &normalized[initial.len()..]);
        }
    }
    Syllable::new("", &normalized)
}
