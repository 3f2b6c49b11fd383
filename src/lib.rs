//! # jd-dict: Xingkong Jiandao 6 Dictionary Converter
//!
//! Turns a flat Chinese word list into 键道6 (xkjd6) input codes and merges
//! them into an existing RIME dictionary without code collisions.
//!
//! ## Pipeline
//!
//! 1. **Transcribe** - per-character pinyin readings, split into initial + final
//! 2. **Encode** - two keys per syllable from the 键道6 keymap, with 飞键
//!    variants for zh/ch/sh syllables
//! 3. **Assemble** - one word code from the per-syllable codes, selection
//!    depending on syllable count
//! 4. **Augment** - two or three shape keys appended from the per-character
//!    shape table
//! 5. **Merge** - drop words the existing dictionaries already carry
//! 6. **Resolve** - shortest collision-free prefix per candidate, with a
//!    3-key floor for 3-character words
//!
//! ## Example Usage
//!
//! ```ignore
//! use jd_dict::{read_word_list, write_dict, Converter};
//! use std::path::Path;
//!
//! let converter = Converter::new(
//!     Path::new("jdx.csv"),               // per-character shape table
//!     Path::new("."),                     // directory holding *.dict.yaml
//!     Some(Path::new("result.dict.yaml")),
//! )?;
//!
//! let words = read_word_list(Path::new("All.txt"))?;
//! let conversion = converter.convert(&words);
//! write_dict(Path::new("result.dict.yaml"), "xkjd6.result", &conversion.entries)?;
//! # Ok::<(), jd_dict::ConvertError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Keymap** - final and flying-key tables, per-syllable encoding
//! - **Transcriber** - character readings via the `pinyin` crate, swappable trait
//! - **Assembler** - word-code selection rules and candidate dedup
//! - **Shape Table** - per-character shape keys from a tab-separated file
//! - **Existing Dictionary** - scan of RIME `*.dict.yaml` files for known words and used codes
//! - **Resolver** - collision-free code assignment, input order preserved
//! - **Converter** - the end-to-end pipeline combining all components
//! - **Sorting** - standalone re-ordering of a generated dictionary

pub mod assemble;
pub mod convert;
pub mod dictionary;
pub mod keymap;
pub mod resolver;
pub mod shapes;
pub mod sort;
pub mod transcribe;
pub mod types;

// Re-export main types and functions for convenience
pub use assemble::{dedup_candidates, word_code};
pub use convert::{read_word_list, Conversion, ConvertStats, Converter};
pub use dictionary::{write_dict, ExistingDictionary};
pub use keymap::Keymap;
pub use resolver::Resolver;
pub use shapes::ShapeTable;
pub use sort::{read_dict_file, sort_entries, write_dict_file, DictFile, SortKey};
pub use transcribe::{split_syllable, PinyinTranscriber, Transcriber};
pub use types::{Candidate, ConvertError, Entry, Syllable, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
