// jd-dict Dictionary Files
// Scans existing RIME dictionaries and writes the merged result atomically

use crate::types::{ConvertError, Entry};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line that terminates a dictionary file's YAML header
const HEADER_END: &str = "...";

/// Region markers; a region whose opening line mentions 简 holds
/// simplified-variant spellings that must not enter the code space
const REGION_BEGIN: &str = "#region";
const REGION_END: &str = "#endregion";
const SIMPLIFIED_MARK: char = '简';

/// File-name suffix picked up by a directory scan
const DICT_SUFFIX: &str = ".dict.yaml";

/// Qualifying entry line: word, tab, lowercase code
const ENTRY_PATTERN: &str = r"^([^\t]+)\t([a-z]+)";

/// Read-only snapshot of the dictionaries already in place
///
/// Two sets drive the merge: `known_words` excludes words from
/// re-encoding entirely, `used_codes` is the collision space the resolver
/// probes against.
#[derive(Debug, Clone, Default)]
pub struct ExistingDictionary {
    known_words: FxHashSet<String>,
    used_codes: FxHashSet<String>,
}

impl ExistingDictionary {
    /// Empty snapshot (no prior dictionary state)
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every `*.dict.yaml` file in a directory
    ///
    /// `skip` names the output file of the current run; a result left
    /// over from a previous run must never merge into itself.
    pub fn scan_dir(dir: &Path, skip: Option<&Path>) -> Result<Self, ConvertError> {
        let listing = std::fs::read_dir(dir).map_err(|e| ConvertError::DictScan {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        let skip_name = skip.and_then(|p| p.file_name());

        let mut paths = Vec::new();
        for dir_entry in listing {
            let dir_entry = dir_entry.map_err(|e| ConvertError::DictScan {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let file_name = dir_entry.file_name();
            if !file_name.to_string_lossy().ends_with(DICT_SUFFIX) {
                continue;
            }
            if skip_name == Some(file_name.as_os_str()) {
                continue;
            }
            paths.push(dir_entry.path());
        }
        paths.sort();

        let mut dict = Self::default();
        for path in &paths {
            dict.scan_file(path)?;
        }
        Ok(dict)
    }

    /// Scan one dictionary file into the snapshot
    ///
    /// Only lines after the `...` header terminator count; lines inside
    /// 简-marked regions and `#` comment lines are skipped. A file without
    /// a terminator contributes nothing.
    pub fn scan_file(&mut self, path: &Path) -> Result<(), ConvertError> {
        let scan_err = |reason: String| ConvertError::DictScan {
            path: path.display().to_string(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| scan_err(e.to_string()))?;
        let content = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let entry_re = Regex::new(ENTRY_PATTERN).map_err(|e| scan_err(e.to_string()))?;

        let mut past_header = false;
        let mut skip_region = false;
        for line in content.lines() {
            let stripped = line.trim();
            if !past_header {
                if stripped == HEADER_END {
                    past_header = true;
                }
                continue;
            }
            if stripped.starts_with(REGION_BEGIN) && stripped.contains(SIMPLIFIED_MARK) {
                skip_region = true;
                continue;
            }
            if stripped.starts_with(REGION_END) {
                skip_region = false;
                continue;
            }
            if skip_region || stripped.starts_with('#') {
                continue;
            }
            if let Some(caps) = entry_re.captures(line) {
                self.known_words.insert(caps[1].to_string());
                self.used_codes.insert(caps[2].to_string());
            }
        }
        Ok(())
    }

    /// Record a word as already present
    pub fn add_word(&mut self, word: &str) {
        self.known_words.insert(word.to_string());
    }

    /// Record a code as already taken
    pub fn add_code(&mut self, code: &str) {
        self.used_codes.insert(code.to_string());
    }

    /// Whether the word already exists in a prior dictionary
    pub fn is_known(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    /// Whether the code is already taken by a prior dictionary
    pub fn is_used(&self, code: &str) -> bool {
        self.used_codes.contains(code)
    }

    pub fn known_count(&self) -> usize {
        self.known_words.len()
    }

    pub fn used_count(&self) -> usize {
        self.used_codes.len()
    }
}

/// Fixed metadata header for the output dictionary
fn dict_header(name: &str) -> String {
    format!("---\nname: {}\nversion: \"v1\"\nsort: original\n...\n", name)
}

/// Write the result dictionary: header plus `word<TAB>code` lines
///
/// The file is assembled in a temp file next to the target and renamed
/// into place, so a failed run never leaves a truncated dictionary.
pub fn write_dict(path: &Path, name: &str, entries: &[Entry]) -> Result<(), ConvertError> {
    let write_err = |reason: String| ConvertError::Write {
        path: path.display().to_string(),
        reason,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    {
        let mut writer = BufWriter::new(&temp);
        writer
            .write_all(dict_header(name).as_bytes())
            .map_err(|e| write_err(e.to_string()))?;
        for entry in entries {
            writeln!(writer, "{}", entry).map_err(|e| write_err(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_err(e.to_string()))?;
    }
    temp.persist(path).map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scan_ignores_header_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "base.dict.yaml",
            "---\nname: xkjd6\nversion: \"v1\"\n...\n中央\tfyyp\n",
        );

        let mut dict = ExistingDictionary::new();
        dict.scan_file(&path).unwrap();
        assert!(dict.is_known("中央"));
        assert!(dict.is_used("fyyp"));
        assert!(!dict.is_known("name: xkjd6"));
    }

    #[test]
    fn test_scan_without_terminator_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "raw.dict.yaml", "中央\tfyyp\n人民\twg\n");

        let mut dict = ExistingDictionary::new();
        dict.scan_file(&path).unwrap();
        assert_eq!(dict.known_count(), 0);
        assert_eq!(dict.used_count(), 0);
    }

    #[test]
    fn test_scan_skips_simplified_regions_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "chaoji.dict.yaml",
            concat!(
                "---\n...\n",
                "正常\tab\n",
                "#region 简码\n",
                "简体\tcd\n",
                "#endregion\n",
                "# plain comment\tef\n",
                "#region other block\n",
                "保留\tgh\n",
                "#endregion\n",
                "后续\tij\n",
            ),
        );

        let mut dict = ExistingDictionary::new();
        dict.scan_file(&path).unwrap();
        assert!(dict.is_known("正常"));
        assert!(!dict.is_known("简体"), "简 region content is excluded");
        assert!(!dict.is_used("cd"));
        assert!(!dict.is_used("ef"), "comment lines are excluded");
        assert!(dict.is_known("保留"), "regions without 简 are scanned");
        assert!(dict.is_known("后续"));
    }

    #[test]
    fn test_scan_entry_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "mixed.dict.yaml",
            "---\n...\n词组\tabcd\t90\nno code here\n空码\t\n词\tab\n",
        );

        let mut dict = ExistingDictionary::new();
        dict.scan_file(&path).unwrap();
        // Extra columns after the code are ignored
        assert!(dict.is_used("abcd"));
        assert!(dict.is_known("词组"));
        // Lines without a lowercase code do not qualify
        assert!(!dict.is_known("no code here"));
        assert!(!dict.is_known("空码"));
        assert!(dict.is_used("ab"));
    }

    #[test]
    fn test_scan_dir_filters_and_skips_output() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.dict.yaml", "---\n...\n甲\tab\n");
        write_file(&dir, "b.dict.yaml", "---\n...\n乙\tcd\n");
        write_file(&dir, "result.dict.yaml", "---\n...\n旧\tzz\n");
        write_file(&dir, "notes.txt", "---\n...\n丙\tef\n");

        let skip = dir.path().join("result.dict.yaml");
        let dict = ExistingDictionary::scan_dir(dir.path(), Some(&skip)).unwrap();
        assert!(dict.is_known("甲"));
        assert!(dict.is_known("乙"));
        assert!(!dict.is_known("旧"), "previous output must not merge into itself");
        assert!(!dict.is_known("丙"), "only .dict.yaml files are scanned");
        assert_eq!(dict.used_count(), 2);
    }

    #[test]
    fn test_scan_dir_missing_directory_is_fatal() {
        let err = ExistingDictionary::scan_dir(Path::new("/nonexistent/dicts"), None).unwrap_err();
        assert!(err.to_string().contains("dicts"));
    }

    #[test]
    fn test_write_dict_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.dict.yaml");
        let entries = vec![Entry::new("中央", "fyyp"), Entry::new("中国人", "fgr")];

        write_dict(&path, "xkjd6.result", &entries).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "---\nname: xkjd6.result\nversion: \"v1\"\nsort: original\n...\n中央\tfyyp\n中国人\tfgr\n"
        );

        // The produced file is itself scannable
        let mut dict = ExistingDictionary::new();
        dict.scan_file(&path).unwrap();
        assert!(dict.is_known("中央"));
        assert!(dict.is_used("fgr"));
    }

    #[test]
    fn test_write_dict_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.dict.yaml");
        std::fs::write(&path, "stale content").unwrap();

        write_dict(&path, "xkjd6.result", &[Entry::new("词", "ab")]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("词\tab\n"));
        assert!(!written.contains("stale"));
    }
}
