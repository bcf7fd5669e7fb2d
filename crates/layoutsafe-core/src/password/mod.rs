//! Password operations built on the common character set.
//!
//! Two operations, deliberately symmetric:
//!
//! - [`validate::validate`] checks an arbitrary password against the set and
//!   reports every incompatible character with its position.
//! - [`generate::generate`] produces a password drawn only from the set, so
//!   its output always validates.
//!
//! That generator/validator agreement is the core correctness property of the
//! whole system: any generated password failing validation indicates a bug in
//! this crate, never an expected outcome.

pub mod generate;
pub mod validate;
