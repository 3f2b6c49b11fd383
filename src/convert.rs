// jd-dict Converter
// End-to-end pipeline: words → phonetic codes → shapes → merge → resolution

use crate::assemble::{dedup_candidates, word_code};
use crate::dictionary::ExistingDictionary;
use crate::keymap::Keymap;
use crate::resolver::Resolver;
use crate::shapes::ShapeTable;
use crate::transcribe::{PinyinTranscriber, Transcriber};
use crate::types::{Candidate, ConvertError, Entry, Syllable, Variant};
use std::collections::BTreeMap;
use std::path::Path;

/// Counters for one conversion pass
///
/// Per-word failures are silent by design; these counts are the only
/// place they surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Non-blank input words processed
    pub words: usize,
    /// Words dropped because a character has no reading
    pub unreadable: usize,
    /// Words dropped because no phonetic code could be assembled
    pub unencodable: usize,
    /// Candidates generated before dedup (both variants counted)
    pub candidates: usize,
    /// Candidates removed by the dedup rules
    pub duplicates: usize,
    /// Candidates dropped for a missing shape key
    pub missing_shape: usize,
    /// Candidates excluded because the word is already in a dictionary
    pub known_words: usize,
    /// Entries emitted after collision resolution
    pub emitted: usize,
}

/// Entries plus counters produced by [`Converter::convert`]
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Resolved entries, original input order
    pub entries: Vec<Entry>,
    /// Pipeline counters
    pub stats: ConvertStats,
}

impl Conversion {
    /// Histogram of resolved code lengths (length → entry count)
    pub fn codes_by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.code.len()).or_insert(0) += 1;
        }
        counts
    }
}

/// The conversion pipeline
///
/// Owns the keymap, the shape table, and the existing-dictionary
/// snapshot. The transcriber is a type parameter so the reading source
/// can be swapped out (tests use fixed tables).
///
/// # Example
///
/// ```ignore
/// use jd_dict::convert::{read_word_list, Converter};
/// use std::path::Path;
///
/// let converter = Converter::new(
///     Path::new("jdx.csv"),
///     Path::new("."),
///     Some(Path::new("result.dict.yaml")),
/// )?;
/// let words = read_word_list(Path::new("All.txt"))?;
/// let conversion = converter.convert(&words);
/// # Ok::<(), jd_dict::types::ConvertError>(())
/// ```
pub struct Converter<T = PinyinTranscriber> {
    keymap: Keymap,
    shapes: ShapeTable,
    existing: ExistingDictionary,
    transcriber: T,
}

impl Converter<PinyinTranscriber> {
    /// Load the shape table and scan `dict_dir` for existing dictionaries
    ///
    /// `output` names the file the caller intends to write; a leftover
    /// copy from a previous run is excluded from the scan.
    pub fn new(
        shapes: &Path,
        dict_dir: &Path,
        output: Option<&Path>,
    ) -> Result<Self, ConvertError> {
        Ok(Self::with_transcriber(
            ShapeTable::load(shapes)?,
            ExistingDictionary::scan_dir(dict_dir, output)?,
            PinyinTranscriber::new(),
        ))
    }
}

impl<T: Transcriber> Converter<T> {
    /// Assemble a converter from already-loaded parts
    pub fn with_transcriber(
        shapes: ShapeTable,
        existing: ExistingDictionary,
        transcriber: T,
    ) -> Self {
        Self {
            keymap: Keymap::new(),
            shapes,
            existing,
            transcriber,
        }
    }

    /// Existing-dictionary snapshot backing this converter
    pub fn existing(&self) -> &ExistingDictionary {
        &self.existing
    }

    /// Shape table backing this converter
    pub fn shapes(&self) -> &ShapeTable {
        &self.shapes
    }

    /// Run the full pipeline over the words, in order
    pub fn convert(&self, words: &[String]) -> Conversion {
        let mut stats = ConvertStats::default();

        // Phonetic candidates, M variant first, X only when it differs
        let mut candidates = Vec::new();
        for word in words {
            stats.words += 1;

            let syllables: Option<Vec<Syllable>> =
                self.transcriber.transcribe(word).into_iter().collect();
            let syllables = match syllables {
                Some(syllables) => syllables,
                None => {
                    stats.unreadable += 1;
                    continue;
                }
            };

            let code_m = match self.phonetic_code(&syllables, Variant::M) {
                Some(code) => code,
                None => {
                    stats.unencodable += 1;
                    continue;
                }
            };
            stats.candidates += 1;
            candidates.push(Candidate::new(word, &code_m));

            if let Some(code_x) = self.phonetic_code(&syllables, Variant::X) {
                if code_x != code_m {
                    stats.candidates += 1;
                    candidates.push(Candidate::new(word, &code_x));
                }
            }
        }

        let before = candidates.len();
        let candidates = dedup_candidates(candidates);
        stats.duplicates = before - candidates.len();

        // Shape augmentation to the full 6-key candidate form
        let mut augmented = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            match self.shapes.suffix(&candidate.word) {
                Some(suffix) => {
                    candidate.code.push_str(&suffix);
                    augmented.push(candidate);
                }
                None => stats.missing_shape += 1,
            }
        }

        // Known words never get re-encoded
        let mut merged = Vec::with_capacity(augmented.len());
        for candidate in augmented {
            if self.existing.is_known(&candidate.word) {
                stats.known_words += 1;
            } else {
                merged.push(candidate);
            }
        }

        let entries = Resolver::new(&self.existing).resolve(merged);
        stats.emitted = entries.len();
        Conversion { entries, stats }
    }

    /// Phonetic code of a word under one variant
    fn phonetic_code(&self, syllables: &[Syllable], variant: Variant) -> Option<String> {
        let codes = self.keymap.syllable_codes(syllables, variant)?;
        word_code(&codes)
    }
}

/// Read the input word list
///
/// One word per line; anything after a tab is an ignored annotation;
/// blank lines are skipped; a leading BOM is tolerated.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, ConvertError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConvertError::WordList {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let content = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut words = Vec::new();
    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let word = line.split('\t').next().unwrap_or("");
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
