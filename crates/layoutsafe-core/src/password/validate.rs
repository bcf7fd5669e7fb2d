//! Compatibility validation: check a password against the common charset.
//!
//! Validation is a pure function of its inputs.  A password with an
//! incompatible character is a normal, expected result — it is represented in
//! the returned [`ValidationResult`], never raised as an error.  The negative
//! battery in the compliance harness depends on this distinction: its
//! passwords are *supposed* to fail validation.

use std::fmt;

use crate::charset::CommonCharset;

/// One incompatible character found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatibleChar {
    /// Character index within the password (0-based, by `char`, not byte).
    pub index: usize,
    /// The offending character.
    pub ch: char,
}

impl fmt::Display for IncompatibleChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at position {}", self.ch, self.index)
    }
}

/// Result of validating one password.
///
/// Produced fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The password that was checked.
    pub password: String,
    /// Every non-member character, in password order.
    pub incompatible: Vec<IncompatibleChar>,
}

impl ValidationResult {
    /// Returns `true` when every character of the password is layout-safe.
    ///
    /// An empty password passes vacuously: there is no character to violate
    /// the set.
    pub fn passed(&self) -> bool {
        self.incompatible.is_empty()
    }

    /// Renders the incompatible characters as a human-readable list, e.g.
    /// `'a' at position 1, '@' at position 4`.
    pub fn detail(&self) -> String {
        self.incompatible
            .iter()
            .map(|ic| ic.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validates `password` against `charset`.
///
/// Scans every character by index and collects each one absent from
/// `charset.all_characters()`, preserving password order.  The scan never
/// stops at the first failure: the harness needs the complete diagnostic
/// picture when reporting.  Membership is O(1) per character via the cached
/// union set, since this runs per character across thousands of passwords in
/// a compliance run.
pub fn validate(password: &str, charset: &CommonCharset) -> ValidationResult {
    let incompatible = password
        .chars()
        .enumerate()
        .filter(|(_, ch)| !charset.contains(*ch))
        .map(|(index, ch)| IncompatibleChar { index, ch })
        .collect();

    ValidationResult {
        password: password.to_string(),
        incompatible,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
