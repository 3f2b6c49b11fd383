// jd-dict Type Definitions
// Core types for syllable encoding, candidate entries, and dictionary merging

use thiserror::Error;

/// Flying-key (飞键) variant for the ambiguous final `uang`
///
/// Syllables with a sibilant/retroflex initial (zh, ch, sh) and the final
/// `uang` have two valid key assignments. Variant M maps `uang` to `m`,
/// variant X maps it to `x`. Every other final encodes identically under
/// both variants, so for most words the two passes produce the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Default assignment: `uang` → `m`
    M,
    /// Alternate assignment: `uang` → `x`
    X,
}

impl Variant {
    /// Both variants, in generation order (M first)
    pub const ALL: [Variant; 2] = [Variant::M, Variant::X];
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::M => write!(f, "m"),
            Variant::X => write!(f, "x"),
        }
    }
}

/// One transcribed syllable: initial (may be empty) plus final (rime)
///
/// Produced by a [`Transcriber`](crate::transcribe::Transcriber); the
/// encoder never sees raw pinyin strings, only this decomposition.
/// Example: 中 → `("zh", "ong")`, 二 → `("", "er")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Leading consonant sound; empty for zero-initial syllables
    pub initial: String,

    /// Vowel/trailing portion of the syllable
    pub rime: String,
}

impl Syllable {
    /// Create a syllable from initial + rime parts
    pub fn new(initial: &str, rime: &str) -> Self {
        Self {
            initial: initial.to_string(),
            rime: rime.to_string(),
        }
    }
}

/// A `(word, code)` pair before collision resolution
///
/// The code starts as the assembled phonetic code (3-4 keys) and is later
/// extended with shape keys to the full 6-key candidate form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Word text; identity for dedup and known-word exclusion
    pub word: String,

    /// Key code (phonetic, then phonetic + shape)
    pub code: String,
}

impl Candidate {
    /// Create a new candidate entry
    pub fn new(word: &str, code: &str) -> Self {
        Self {
            word: word.to_string(),
            code: code.to_string(),
        }
    }

    /// Shortest prefix length tried during collision resolution
    ///
    /// 3-character words may keep a bare 3-key phonetic code; every other
    /// length starts probing at 4 keys.
    pub fn min_probe_len(&self) -> usize {
        if self.word.chars().count() == 3 {
            3
        } else {
            4
        }
    }
}

/// A resolved `(word, code)` pair ready to be written to the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Word text
    pub word: String,

    /// Final code; minimal length subject to the collision rule
    pub code: String,
}

impl Entry {
    /// Create a new resolved entry
    pub fn new(word: &str, code: &str) -> Self {
        Self {
            word: word.to_string(),
            code: code.to_string(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.word, self.code)
    }
}

/// Fatal input/output errors
///
/// Per-word failures (missing reading, missing shape) are not errors; they
/// drop the word silently and show up only in the conversion statistics.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    #[error("Cannot read word list '{path}': {reason}")]
    WordList { path: String, reason: String },

    #[error("Cannot read shape table '{path}': {reason}")]
    ShapeTable { path: String, reason: String },

    #[error("Cannot scan dictionary '{path}': {reason}")]
    DictScan { path: String, reason: String },

    #[error("Cannot write '{path}': {reason}")]
    Write { path: String, reason: String },
}
