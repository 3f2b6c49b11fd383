// jd-dict Word Assembly
// Combines per-syllable codes into a word-level phonetic code

use crate::types::Candidate;
use rustc_hash::FxHashSet;

/// Assemble a word's phonetic code from its per-syllable codes
///
/// The rule depends on syllable count:
/// - 2 syllables: first two keys of each code (4 keys total)
/// - 3 syllables: first key of each (3 keys)
/// - 4 syllables: first key of each (4 keys)
/// - 5 or more: first key of codes 0, 1, 2 and the *last* code (4 keys);
///   syllables between the third and the last contribute nothing
///
/// Codes shorter than the requested cut are used as-is, without padding.
/// Fewer than two syllables is not a word; returns `None`.
pub fn word_code(codes: &[String]) -> Option<String> {
    match codes.len() {
        0 | 1 => None,
        2 => {
            let mut out = String::new();
            out.push_str(head(&codes[0], 2));
            out.push_str(head(&codes[1], 2));
            Some(out)
        }
        3 | 4 => {
            let mut out = String::new();
            for code in codes {
                out.push_str(head(code, 1));
            }
            Some(out)
        }
        _ => {
            let mut out = String::new();
            for code in &codes[..3] {
                out.push_str(head(code, 1));
            }
            out.push_str(head(codes.last()?, 1));
            Some(out)
        }
    }
}

/// First `n` characters of a code, or the whole code if shorter
#[inline]
pub(crate) fn head(code: &str, n: usize) -> &str {
    match code.char_indices().nth(n) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

/// Drop duplicate candidates, preserving first-seen order
///
/// Candidates whose phonetic code is exactly 4 keys long are deduplicated
/// by the full `(word, code)` pair, so a 2-character word keeps both
/// flying-key variants when they differ. Every other code length keeps
/// only the first candidate per word text (the M variant).
pub fn dedup_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen_pairs: FxHashSet<(String, String)> = FxHashSet::default();
    let mut seen_words: FxHashSet<String> = FxHashSet::default();
    let mut out = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let fresh = if candidate.code.len() == 4 {
            seen_pairs.insert((candidate.word.clone(), candidate.code.clone()))
        } else {
            seen_words.insert(candidate.word.clone())
        };
        if fresh {
            out.push(candidate);
        }
    }
    out
}
