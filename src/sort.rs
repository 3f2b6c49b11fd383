// jd-dict Dictionary Sorting
// Re-orders the entry lines of a generated dictionary without touching the header

use crate::types::ConvertError;
use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Available orderings for dictionary entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// By code; ties keep input order
    Code,
    /// By word text; ties keep input order
    Word,
    /// By word length in characters, then by the whole line
    WordLength,
    /// By code length in characters, then by code, then by the whole line
    CodeLength,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(SortKey::Code),
            "word" => Ok(SortKey::Word),
            "word-length" => Ok(SortKey::WordLength),
            "code-length" => Ok(SortKey::CodeLength),
            other => Err(format!(
                "Unknown sort key '{other}' (expected code, word, word-length, or code-length)"
            )),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Code => "code",
            SortKey::Word => "word",
            SortKey::WordLength => "word-length",
            SortKey::CodeLength => "code-length",
        };
        write!(f, "{name}")
    }
}

/// A dictionary file split into its verbatim header and its entry lines
///
/// Header lines are kept byte-for-byte as read. Entry lines keep every
/// column (word, tab, code, anything after) with trailing whitespace
/// trimmed. Lines outside the header that carry no tab are dropped on
/// read.
#[derive(Debug, Clone, Default)]
pub struct DictFile {
    /// Header lines from `---` through `...`, unchanged
    pub header: Vec<String>,

    /// Entry lines (anything containing a tab)
    pub entries: Vec<String>,
}

/// Read a dictionary file into header and entry lines
pub fn read_dict_file(path: &Path) -> Result<DictFile, ConvertError> {
    let text = fs::read_to_string(path).map_err(|e| ConvertError::DictScan {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let content = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut dict = DictFile::default();
    let mut in_header = false;
    for raw in content.lines() {
        let line = raw.trim_end();
        if line == "---" && dict.header.is_empty() {
            in_header = true;
            dict.header.push(raw.to_string());
        } else if in_header {
            dict.header.push(raw.to_string());
            if line == "..." {
                in_header = false;
            }
        } else if line.contains('\t') {
            dict.entries.push(line.to_string());
        }
    }
    Ok(dict)
}

/// Sort entry lines in place
///
/// All orderings are stable, so ties keep their relative input order.
pub fn sort_entries(entries: &mut [String], key: SortKey) {
    match key {
        SortKey::Code => entries.sort_by(|a, b| code_of(a).cmp(code_of(b))),
        SortKey::Word => entries.sort_by(|a, b| word_of(a).cmp(word_of(b))),
        SortKey::WordLength => {
            entries.sort_by_cached_key(|e| (word_of(e).chars().count(), e.clone()))
        }
        SortKey::CodeLength => entries.sort_by_cached_key(|e| {
            (code_of(e).chars().count(), code_of(e).to_string(), e.clone())
        }),
    }
}

/// Write the dictionary back, header first, then entries
///
/// With `backup` set, the previous file is first copied to
/// [`backup_path`]. The write itself goes through a temp file in the
/// same directory, so a failed run never leaves a half-written
/// dictionary behind.
pub fn write_dict_file(path: &Path, dict: &DictFile, backup: bool) -> Result<(), ConvertError> {
    let write_err = |reason: String| ConvertError::Write {
        path: path.display().to_string(),
        reason,
    };

    if backup && path.exists() {
        fs::copy(path, backup_path(path)).map_err(|e| write_err(e.to_string()))?;
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    {
        let mut writer = BufWriter::new(&temp);
        for line in dict.header.iter().chain(dict.entries.iter()) {
            writeln!(writer, "{line}").map_err(|e| write_err(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_err(e.to_string()))?;
    }
    temp.persist(path).map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

/// Backup file name: the original path with `.backup` appended
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".backup");
    PathBuf::from(name)
}

fn word_of(entry: &str) -> &str {
    entry.split('\t').next().unwrap_or("")
}

fn code_of(entry: &str) -> &str {
    entry.split('\t').nth(1).unwrap_or("")
}
