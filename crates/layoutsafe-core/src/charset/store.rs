//! Loading the common character set from its JSON data source.
//!
//! The charset is pre-computed offline from the QWERTY and AZERTY layout
//! definitions and shipped as a JSON document of the form:
//!
//! ```json
//! {
//!   "common": {
//!     "lowercase": "bcdefghijklnoprstuvxy",
//!     "uppercase": "BCDEFGHIJKLNOPRSTUVXY",
//!     "special": "-_"
//!   }
//! }
//! ```
//!
//! Each category may be written either as a single string or as a sequence of
//! single-character strings (`["b", "c", ...]`); both forms appear in layout
//! data exports.  Loading performs structural validation only: all three
//! categories must be present and every sequence entry must be exactly one
//! character.  No attempt is made to verify that the characters really are
//! layout-safe — that guarantee belongs to the offline derivation step.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{Alphabet, CommonCharset};

/// Bundled QWERTY/AZERTY common set, embedded at compile time.
const QWERTY_AZERTY_JSON: &str = include_str!("../../data/qwerty_azerty.json");

/// Error type for charset loading.
#[derive(Debug, Error)]
pub enum DataFormatError {
    /// A file system I/O error occurred.
    #[error("I/O error reading charset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document could not be parsed.
    #[error("failed to parse charset document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required category key is absent under `common`.
    #[error("charset document is missing required category `common.{0}`")]
    MissingCategory(&'static str),

    /// A sequence entry is not exactly one character.
    #[error("category `common.{category}` contains entry {entry:?} which is not a single character")]
    NotSingleCharacter { category: &'static str, entry: String },
}

// ── Document schema ───────────────────────────────────────────────────────────

/// Top-level charset document.
#[derive(Debug, Deserialize)]
struct CharsetDocument {
    common: CommonSection,
}

/// The `common` object holding the three category definitions.
///
/// Categories are optional at the serde level so that an absent key surfaces
/// as the precise [`DataFormatError::MissingCategory`] rather than a generic
/// parse error.
#[derive(Debug, Deserialize)]
struct CommonSection {
    lowercase: Option<CategoryData>,
    uppercase: Option<CategoryData>,
    special: Option<CategoryData>,
}

/// A category written either as one string or as a sequence of
/// single-character strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryData {
    Compact(String),
    Sequence(Vec<String>),
}

impl CategoryData {
    /// Converts the category into an [`Alphabet`], validating that every
    /// sequence entry is exactly one character.
    fn into_alphabet(self, category: &'static str) -> Result<Alphabet, DataFormatError> {
        match self {
            CategoryData::Compact(s) => Ok(Alphabet::new(s.chars())),
            CategoryData::Sequence(entries) => {
                let mut chars = Vec::with_capacity(entries.len());
                for entry in entries {
                    let mut iter = entry.chars();
                    match (iter.next(), iter.next()) {
                        (Some(ch), None) => chars.push(ch),
                        _ => {
                            return Err(DataFormatError::NotSingleCharacter { category, entry });
                        }
                    }
                }
                Ok(Alphabet::new(chars))
            }
        }
    }
}

// ── Load operations ───────────────────────────────────────────────────────────

/// Parses a charset JSON document into a [`CommonCharset`].
///
/// # Errors
///
/// Returns [`DataFormatError::Parse`] for malformed JSON,
/// [`DataFormatError::MissingCategory`] when a category key is absent, and
/// [`DataFormatError::NotSingleCharacter`] when a sequence entry holds more
/// (or fewer) than one character.
pub fn load_from_str(json: &str) -> Result<CommonCharset, DataFormatError> {
    let doc: CharsetDocument = serde_json::from_str(json)?;

    let lowercase = doc
        .common
        .lowercase
        .ok_or(DataFormatError::MissingCategory("lowercase"))?
        .into_alphabet("lowercase")?;
    let uppercase = doc
        .common
        .uppercase
        .ok_or(DataFormatError::MissingCategory("uppercase"))?
        .into_alphabet("uppercase")?;
    let special = doc
        .common
        .special
        .ok_or(DataFormatError::MissingCategory("special"))?
        .into_alphabet("special")?;

    let charset = CommonCharset::new(lowercase, uppercase, special);
    debug!(
        lowercase = charset.lowercase().len(),
        uppercase = charset.uppercase().len(),
        special = charset.special().len(),
        "charset loaded"
    );
    Ok(charset)
}

/// Reads and parses a charset document from disk.
///
/// # Errors
///
/// Returns [`DataFormatError::Io`] when the file cannot be read, plus any
/// error [`load_from_str`] can return.
pub fn load_from_path(path: &Path) -> Result<CommonCharset, DataFormatError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content)
}

/// Loads the bundled QWERTY/AZERTY common set.
///
/// # Errors
///
/// Returns a [`DataFormatError`] only if the embedded document is malformed,
/// which would indicate a packaging defect.
pub fn load_builtin() -> Result<CommonCharset, DataFormatError> {
    load_from_str(QWERTY_AZERTY_JSON)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
