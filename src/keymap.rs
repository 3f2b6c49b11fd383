// jd-dict Keymap
// Fixed key tables and the syllable encoder for the Jiandao 6 layout

use crate::types::{Syllable, Variant};
use rustc_hash::FxHashMap;

/// Key taken by syllables with no consonant initial (爱, 二, 嗯, ...)
const ZERO_INITIAL_KEY: char = 'x';

/// Generic final table, ordered by final length descending
///
/// Longer finals must precede their substrings (`uang` before `ang`,
/// `iang` before `ang`, `ian` before `an`) so a scan of this table can
/// never match a final against a shorter colliding entry.
const FINALS: &[(&str, char)] = &[
    ("iong", 'y'),
    ("iang", 'x'),
    ("uang", 'm'),
    ("eng", 'r'),
    ("uan", 't'),
    ("ong", 'y'),
    ("ang", 'p'),
    ("ing", 'g'),
    ("uai", 'g'),
    ("iao", 'c'),
    ("ian", 'm'),
    ("iu", 'q'),
    ("ua", 'q'),
    ("ei", 'w'),
    ("un", 'w'),
    ("ia", 's'),
    ("ie", 'd'),
    ("ou", 'd'),
    ("an", 'f'),
    ("ai", 'h'),
    ("ue", 'h'),
    ("ve", 'h'),
    ("er", 'j'),
    ("uo", 'l'),
    ("ao", 'z'),
    ("in", 'b'),
    ("ui", 'b'),
    ("en", 'n'),
    ("e", 'e'),
    ("a", 's'),
    ("u", 'j'),
    ("i", 'k'),
    ("o", 'l'),
    ("v", 'l'),
    ("n", 'n'),
];

/// Flying-key final table, variant M
///
/// Consulted only for syllables with a sibilant initial (zh, ch, sh).
/// Identical to the generic table on its domain except `uang`.
const FLY_FINALS_M: &[(&str, char)] = &[
    ("uang", 'm'),
    ("ang", 'p'),
    ("eng", 'r'),
    ("ong", 'y'),
    ("uai", 'g'),
    ("uan", 't'),
    ("ai", 'h'),
    ("an", 'f'),
    ("ao", 'z'),
    ("ei", 'w'),
    ("en", 'n'),
    ("ou", 'd'),
    ("ua", 'q'),
    ("ui", 'b'),
    ("un", 'w'),
    ("uo", 'l'),
    ("a", 's'),
    ("e", 'e'),
    ("i", 'k'),
    ("u", 'j'),
];

/// Flying-key final table, variant X (`uang` → `x`, rest as variant M)
const FLY_FINALS_X: &[(&str, char)] = &[
    ("uang", 'x'),
    ("ang", 'p'),
    ("eng", 'r'),
    ("ong", 'y'),
    ("uai", 'g'),
    ("uan", 't'),
    ("ai", 'h'),
    ("an", 'f'),
    ("ao", 'z'),
    ("ei", 'w'),
    ("en", 'n'),
    ("ou", 'd'),
    ("ua", 'q'),
    ("ui", 'b'),
    ("un", 'w'),
    ("uo", 'l'),
    ("a", 's'),
    ("e", 'e'),
    ("i", 'k'),
    ("u", 'j'),
];

/// Syllable encoder for the Jiandao 6 (键道6) double-pinyin layout
///
/// One syllable encodes to two keys: an initial key and a final key.
/// Ordinary initials keep their own letter; zero-initial syllables take
/// `x`; the sibilant initials zh/ch/sh take a key chosen jointly from the
/// initial and the final group, and resolve their final against the
/// flying-key table of the requested [`Variant`].
///
/// # Example
///
/// ```
/// use jd_dict::keymap::Keymap;
/// use jd_dict::types::{Syllable, Variant};
///
/// let keymap = Keymap::new();
///
/// // 中 (zh, ong): sibilant initial, variant-independent final
/// let code = keymap.syllable_code(&Syllable::new("zh", "ong"), Variant::M);
/// assert_eq!(code.as_deref(), Some("fy"));
///
/// // 双 (sh, uang): the flying-key final differs across variants
/// let m = keymap.syllable_code(&Syllable::new("sh", "uang"), Variant::M);
/// let x = keymap.syllable_code(&Syllable::new("sh", "uang"), Variant::X);
/// assert_eq!(m.as_deref(), Some("em"));
/// assert_eq!(x.as_deref(), Some("ex"));
/// ```
#[derive(Debug, Clone)]
pub struct Keymap {
    finals: FxHashMap<&'static str, char>,
    fly_finals_m: FxHashMap<&'static str, char>,
    fly_finals_x: FxHashMap<&'static str, char>,
}

impl Keymap {
    /// Build the lookup maps from the fixed tables
    pub fn new() -> Self {
        Self {
            finals: FINALS.iter().copied().collect(),
            fly_finals_m: FLY_FINALS_M.iter().copied().collect(),
            fly_finals_x: FLY_FINALS_X.iter().copied().collect(),
        }
    }

    /// Key for a final in the generic table
    pub fn final_key(&self, rime: &str) -> Option<char> {
        self.finals.get(rime).copied()
    }

    /// Key for a final in the flying-key table of the given variant
    pub fn fly_final_key(&self, rime: &str, variant: Variant) -> Option<char> {
        match variant {
            Variant::M => self.fly_finals_m.get(rime).copied(),
            Variant::X => self.fly_finals_x.get(rime).copied(),
        }
    }

    /// Encode one syllable to its two-key code
    ///
    /// Returns `None` when the final has no key in the applicable table;
    /// the caller drops the whole word in that case.
    pub fn syllable_code(&self, syllable: &Syllable, variant: Variant) -> Option<String> {
        let initial = syllable.initial.as_str();
        let rime = syllable.rime.as_str();

        // Fixed whole-syllable exceptions: ü written as u after j/q/x/y
        match (initial, rime) {
            ("j", "u") => return Some("jl".to_string()),
            ("q", "u") => return Some("ql".to_string()),
            ("x", "u") => return Some("xl".to_string()),
            ("y", "u") => return Some("yl".to_string()),
            _ => {}
        }

        if is_sibilant(initial) {
            let lead = sibilant_key(initial, rime)?;
            let tail = self.fly_final_key(rime, variant)?;
            return Some(format!("{}{}", lead, tail));
        }

        let tail = self.final_key(rime)?;
        if initial.is_empty() {
            return Some(format!("{}{}", ZERO_INITIAL_KEY, tail));
        }
        Some(format!("{}{}", initial, tail))
    }

    /// Encode every syllable of a word under one variant
    ///
    /// Returns `None` as soon as any syllable fails to encode.
    pub fn syllable_codes(&self, syllables: &[Syllable], variant: Variant) -> Option<Vec<String>> {
        syllables
            .iter()
            .map(|s| self.syllable_code(s, variant))
            .collect()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an initial takes the sibilant/retroflex encoding path
#[inline]
fn is_sibilant(initial: &str) -> bool {
    matches!(initial, "zh" | "ch" | "sh")
}

/// Initial key for zh/ch/sh, chosen jointly from initial and final group
///
/// Groups: `u` alone, the open/back finals (ai ao an ang en eng un), and
/// everything else. `sh` collapses to a single key for every group.
fn sibilant_key(initial: &str, rime: &str) -> Option<char> {
    let open_back = matches!(rime, "ai" | "ao" | "an" | "ang" | "en" | "eng" | "un");
    let key = match initial {
        "sh" => 'e',
        "zh" if rime == "u" || open_back => 'q',
        "zh" => 'f',
        "ch" if rime == "u" || open_back => 'j',
        "ch" => 'w',
        _ => return None,
    };
    Some(key)
}
