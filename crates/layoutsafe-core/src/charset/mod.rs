//! The cross-layout common character set.
//!
//! This module contains pure domain types with no infrastructure dependencies
//! beyond parsing the charset document in [`store`].
//!
//! # What is the "common character set"? (for beginners)
//!
//! Two keyboard layouts assign characters to physical keys differently.  For
//! each character we can ask: does pressing the keystroke that produces it on
//! layout A produce the *same* character on layout B?  If yes, the character
//! is **layout-safe**.  The common character set is all layout-safe
//! characters, partitioned by convention into three alphabets:
//!
//! | Category  | QWERTY/AZERTY example                  |
//! |-----------|----------------------------------------|
//! | lowercase | `bcdefghijklnoprstuvxy` (no a,m,q,w,z) |
//! | uppercase | `BCDEFGHIJKLNOPRSTUVXY`                |
//! | special   | `-_`                                   |
//!
//! Digits are absent entirely: on AZERTY they require Shift, so the same
//! physical keystroke produces a different character on each layout.
//!
//! The set is derived offline from the layout definitions and supplied to
//! this crate as a JSON document; deriving it is out of scope here.

use std::collections::HashSet;

/// Loading and structural validation of the charset document.
///
/// See [`store::load_from_str`] for the main entry point.
pub mod store;

/// An ordered, duplicate-free sequence of characters for one category.
///
/// Order matters: the password generator concatenates alphabets into a
/// candidate pool, and reproducibility under a fixed seed requires the pool
/// to be byte-for-byte identical across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from an iterator of characters.
    ///
    /// Duplicates are dropped; the first occurrence wins and order is
    /// preserved.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut seen = HashSet::new();
        let chars = chars.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { chars }
    }

    /// Returns the characters in their defined order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet contains no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The common character set shared by a pair of keyboard layouts.
///
/// Immutable once constructed.  The union of the three alphabets is computed
/// once and cached, so membership checks are O(1) even when validation runs
/// per character across thousands of passwords.  Because nothing mutates
/// after construction, a `CommonCharset` is safe to share across any number
/// of concurrent validators without locking.
#[derive(Debug, Clone)]
pub struct CommonCharset {
    lowercase: Alphabet,
    uppercase: Alphabet,
    special: Alphabet,
    /// Cached union of the three alphabets.
    all: HashSet<char>,
}

impl CommonCharset {
    /// Creates a charset from the three alphabets, caching their union.
    pub fn new(lowercase: Alphabet, uppercase: Alphabet, special: Alphabet) -> Self {
        let all = lowercase
            .as_slice()
            .iter()
            .chain(uppercase.as_slice())
            .chain(special.as_slice())
            .copied()
            .collect();
        Self {
            lowercase,
            uppercase,
            special,
            all,
        }
    }

    /// The lowercase alphabet.
    pub fn lowercase(&self) -> &Alphabet {
        &self.lowercase
    }

    /// The uppercase alphabet.
    pub fn uppercase(&self) -> &Alphabet {
        &self.uppercase
    }

    /// The special-character alphabet.
    pub fn special(&self) -> &Alphabet {
        &self.special
    }

    /// The cached union of all three alphabets.
    pub fn all_characters(&self) -> &HashSet<char> {
        &self.all
    }

    /// Returns `true` if `ch` is layout-safe (a member of any alphabet).
    pub fn contains(&self, ch: char) -> bool {
        self.all.contains(&ch)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
