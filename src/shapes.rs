// jd-dict Shape Table
// Per-character shape keys loaded from a tab-separated table (jdx.csv)

use crate::types::ConvertError;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Lookup from hanzi character to its single shape key
///
/// Rows whose character field is not exactly one character, or whose key
/// is not a single lowercase letter, are ignored; the table is read-only
/// after loading. A word containing any character absent from this table
/// is unencodable and gets dropped.
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    map: FxHashMap<char, char>,
}

impl ShapeTable {
    /// Load a `character<TAB>key` table from disk
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::ShapeTable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let content = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut map = FxHashMap::default();
        for line in content.lines() {
            let mut fields = line.trim_end().split('\t');
            let character = fields.next().and_then(single_char);
            let key = fields
                .next()
                .and_then(single_char)
                .filter(char::is_ascii_lowercase);
            if let (Some(character), Some(key)) = (character, key) {
                map.insert(character, key);
            }
        }
        Ok(Self { map })
    }

    /// Build a table directly from pairs (tests, benchmarks)
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Shape key for one character
    pub fn get(&self, character: char) -> Option<char> {
        self.map.get(&character).copied()
    }

    /// Shape-key suffix for a word: 3 keys for exactly-3-character words,
    /// otherwise the keys of the first two characters
    ///
    /// `None` if any required character is missing from the table.
    pub fn suffix(&self, word: &str) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();
        let take = if chars.len() == 3 { 3 } else { 2 };
        if chars.len() < take {
            return None;
        }
        chars[..take].iter().map(|ch| self.get(*ch)).collect()
    }

    /// Number of characters in the table
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The field's single character, if it has exactly one
fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShapeTable {
        ShapeTable::from_pairs([('中', 'k'), ('央', 'd'), ('国', 'u'), ('人', 'w')])
    }

    #[test]
    fn test_get() {
        let shapes = sample();
        assert_eq!(shapes.get('中'), Some('k'));
        assert_eq!(shapes.get('犬'), None);
        assert_eq!(shapes.len(), 4);
    }

    #[test]
    fn test_suffix_two_keys_for_two_char_words() {
        let shapes = sample();
        assert_eq!(shapes.suffix("中央").as_deref(), Some("kd"));
    }

    #[test]
    fn test_suffix_three_keys_for_three_char_words() {
        let shapes = sample();
        assert_eq!(shapes.suffix("中国人").as_deref(), Some("kuw"));
    }

    #[test]
    fn test_suffix_two_keys_for_longer_words() {
        let shapes = sample();
        // 4+ characters fall back to the 2-key form
        assert_eq!(shapes.suffix("中央国人").as_deref(), Some("kd"));
        assert_eq!(shapes.suffix("中央国人中央").as_deref(), Some("kd"));
    }

    #[test]
    fn test_suffix_missing_character() {
        let shapes = sample();
        assert_eq!(shapes.suffix("中犬"), None);
        assert_eq!(shapes.suffix("中国犬"), None, "all three keys are required");
        assert_eq!(shapes.suffix("中"), None, "single characters have no suffix");
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jdx.csv");
        std::fs::write(
            &path,
            "\u{feff}中\tk\n央\td\nbad line without tab\n多字\tz\n国\ttoolong\n人\tw\n",
        )
        .unwrap();

        let shapes = ShapeTable::load(&path).unwrap();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes.get('中'), Some('k'), "BOM on the first row is stripped");
        assert_eq!(shapes.get('人'), Some('w'));
        assert_eq!(shapes.get('国'), None, "multi-char key fields are ignored");
    }

    #[test]
    fn test_load_skips_non_letter_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jdx.csv");
        // Fullwidth ｋ, uppercase D, and digit 7 are not key letters
        std::fs::write(&path, "中\tｋ\n央\tD\n国\t7\n人\tw\n").unwrap();

        let shapes = ShapeTable::load(&path).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes.get('中'), None);
        assert_eq!(shapes.get('央'), None);
        assert_eq!(shapes.get('人'), Some('w'));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = ShapeTable::load(Path::new("/nonexistent/jdx.csv")).unwrap_err();
        assert!(err.to_string().contains("jdx.csv"));
    }
}
