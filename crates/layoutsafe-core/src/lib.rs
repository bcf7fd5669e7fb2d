//! # layoutsafe-core
//!
//! Shared library for LayoutSafe containing the cross-layout common character
//! set, the compatibility validator, and the safe password generator.
//!
//! This crate is used by the compliance harness and by any application that
//! wants to produce or check layout-safe passwords.  It has zero dependencies
//! on OS APIs, keyboard drivers, or process concerns.
//!
//! # Why layout safety matters (for beginners)
//!
//! A password is typed as a sequence of **physical keystrokes**, but what those
//! keystrokes produce depends on the active keyboard layout.  The letter `a`
//! on a QWERTY keyboard sits on the physical key that produces `q` on an
//! AZERTY keyboard.  A password generated on one machine and typed on a
//! machine with the other layout silently comes out as a different string and
//! locks the user out.
//!
//! The fix is to restrict passwords to the **common character set**: the
//! characters guaranteed to come out identical no matter which of the two
//! layouts is active.  That set is pre-computed from the layout definitions
//! and consumed here as data.  This crate defines:
//!
//! - **`charset`** – Loading and exposing the common character set: three
//!   alphabets (lowercase, uppercase, special) plus a cached union for O(1)
//!   membership checks.
//!
//! - **`password`** – The two operations built on the set: validating an
//!   arbitrary password with per-position diagnostics, and generating a
//!   password guaranteed to validate.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/charset/mod.rs).
pub mod charset;
pub mod password;

// Re-export the most-used types at the crate root so callers can write
// `layoutsafe_core::CommonCharset` instead of the full path.
pub use charset::store::{load_builtin, load_from_path, load_from_str, DataFormatError};
pub use charset::{Alphabet, CommonCharset};
pub use password::generate::{generate, ConfigurationError, GenerationConfig};
pub use password::validate::{validate, IncompatibleChar, ValidationResult};
